use std::ops::Deref;
use std::sync::Arc;

use driver::database::{
    PostgresDatabase, PostgresInstrumentRepository, PostgresRentalRepository,
    PostgresStudentRepository, PostgresTransaction,
};
use kernel::interface::database::DependOnDatabaseConnection;
use kernel::interface::query::{DependOnInstrumentQuery, DependOnStudentQuery};
use kernel::interface::update::DependOnRentalModifier;
use kernel::KernelError;

#[derive(Clone)]
pub struct AppModule(Arc<Handler>);

impl AppModule {
    pub async fn new() -> error_stack::Result<Self, KernelError> {
        Ok(Self(Arc::new(Handler::init().await?)))
    }
}

impl Deref for AppModule {
    type Target = Handler;
    fn deref(&self) -> &Self::Target {
        Deref::deref(&self.0)
    }
}

pub struct Handler {
    database: PostgresDatabase,
    instruments: PostgresInstrumentRepository,
    students: PostgresStudentRepository,
    rentals: PostgresRentalRepository,
}

impl Handler {
    pub async fn init() -> error_stack::Result<Self, KernelError> {
        let database = PostgresDatabase::new().await?;

        Ok(Self {
            database,
            instruments: PostgresInstrumentRepository,
            students: PostgresStudentRepository,
            rentals: PostgresRentalRepository,
        })
    }
}

impl DependOnDatabaseConnection for AppModule {
    type DatabaseConnection = PostgresDatabase;
    fn database_connection(&self) -> &PostgresDatabase {
        &self.database
    }
}

impl DependOnInstrumentQuery<PostgresTransaction> for AppModule {
    type InstrumentQuery = PostgresInstrumentRepository;
    fn instrument_query(&self) -> &PostgresInstrumentRepository {
        &self.instruments
    }
}

impl DependOnStudentQuery<PostgresTransaction> for AppModule {
    type StudentQuery = PostgresStudentRepository;
    fn student_query(&self) -> &PostgresStudentRepository {
        &self.students
    }
}

impl DependOnRentalModifier<PostgresTransaction> for AppModule {
    type RentalModifier = PostgresRentalRepository;
    fn rental_modifier(&self) -> &PostgresRentalRepository {
        &self.rentals
    }
}
