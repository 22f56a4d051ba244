//! In-memory stand-in for the Postgres driver: implements the kernel
//! interfaces over shared state with begin/commit/rollback semantics, so the
//! services run unchanged against it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use error_stack::Report;
use rust_decimal::Decimal;
use time::{Date, OffsetDateTime};

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{
    DependOnInstrumentQuery, DependOnStudentQuery, InstrumentQuery, LockMode, StudentQuery,
};
use kernel::interface::update::{DependOnRentalModifier, RentalModifier};
use kernel::prelude::entity::{
    ActiveRentalCount, InstrumentCategory, InstrumentModel, InstrumentName, MonthlyPrice, Rental,
    RentalInstrument, RentalInstrumentId, RentalPeriod, Student, StudentId, TerminationDate,
};
use kernel::KernelError;

/// Catalog unit as stored, before pricing for a period.
#[derive(Debug, Clone)]
pub struct CatalogUnit {
    pub id: i32,
    pub name: String,
    pub model: String,
    pub category: String,
    pub monthly_price: Decimal,
}

impl CatalogUnit {
    pub fn new(id: i32, name: &str, model: &str, category: &str, monthly_price: Decimal) -> Self {
        Self {
            id,
            name: name.to_owned(),
            model: model.to_owned(),
            category: category.to_owned(),
            monthly_price,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct StoreState {
    pub units: Vec<CatalogUnit>,
    pub students: Vec<Student>,
    pub rentals: Vec<Rental>,
}

/// Each transaction works on a copy of the committed state; commit publishes
/// the copy, rollback drops it.
#[derive(Clone)]
pub struct MockDatabase {
    state: Arc<Mutex<StoreState>>,
    fail_inserts: Arc<AtomicBool>,
}

impl MockDatabase {
    pub fn new(state: StoreState) -> Self {
        Self {
            state: Arc::new(Mutex::new(state)),
            fail_inserts: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Makes every subsequent rental insert fail with a storage error.
    pub fn fail_inserts(&self) {
        self.fail_inserts.store(true, Ordering::SeqCst);
    }

    pub fn committed(&self) -> StoreState {
        self.state.lock().expect("store lock poisoned").clone()
    }
}

pub struct MockTransaction {
    base: Arc<Mutex<StoreState>>,
    work: StoreState,
    fail_inserts: bool,
}

#[async_trait::async_trait]
impl DatabaseConnection for MockDatabase {
    type Transaction = MockTransaction;

    async fn transact(&self) -> error_stack::Result<MockTransaction, KernelError> {
        Ok(MockTransaction {
            base: Arc::clone(&self.state),
            work: self.committed(),
            fail_inserts: self.fail_inserts.load(Ordering::SeqCst),
        })
    }
}

#[async_trait::async_trait]
impl Transaction for MockTransaction {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        *self.base.lock().expect("store lock poisoned") = self.work;
        Ok(())
    }

    async fn roll_back(self) -> error_stack::Result<(), KernelError> {
        Ok(())
    }
}

pub struct MockInstrumentRepository;

#[async_trait::async_trait]
impl InstrumentQuery<MockTransaction> for MockInstrumentRepository {
    async fn find_available(
        &self,
        con: &mut MockTransaction,
        period: &RentalPeriod,
        kind: Option<&InstrumentName>,
        _lock: LockMode,
    ) -> error_stack::Result<Vec<RentalInstrument>, KernelError> {
        let state = &con.work;
        let mut found = Vec::new();
        for unit in &state.units {
            if let Some(kind) = kind {
                if unit.name != kind.as_ref() {
                    continue;
                }
            }
            let unit_id = RentalInstrumentId::new(unit.id);
            let occupied = state
                .rentals
                .iter()
                .any(|rental| rental.instrument_id() == &unit_id && rental.occupies(period));
            if !occupied {
                found.push(RentalInstrument::priced_for(
                    unit_id,
                    InstrumentName::new(unit.name.clone()),
                    InstrumentModel::new(unit.model.clone()),
                    InstrumentCategory::new(unit.category.clone()),
                    MonthlyPrice::new(unit.monthly_price),
                    period,
                ));
            }
        }
        found.sort_by_key(|instrument| *instrument.id());
        Ok(found)
    }
}

pub struct MockStudentRepository;

#[async_trait::async_trait]
impl StudentQuery<MockTransaction> for MockStudentRepository {
    async fn active_rental_count(
        &self,
        con: &mut MockTransaction,
        student_id: &StudentId,
    ) -> error_stack::Result<ActiveRentalCount, KernelError> {
        let state = &con.work;
        let student = state
            .students
            .iter()
            .find(|student| student.id() == student_id);
        let Some(student) = student else {
            return Err(Report::new(KernelError::Lookup)
                .attach_printable(format!("no student with id {}", student_id.as_ref())));
        };
        if !student.approved() {
            return Err(Report::new(KernelError::Lookup).attach_printable(format!(
                "student {} is not approved for rentals",
                student_id.as_ref()
            )));
        }

        let today = OffsetDateTime::now_utc().date();
        let active = state
            .rentals
            .iter()
            .filter(|rental| {
                rental.student_id() == student_id
                    && !rental.terminated()
                    && *rental.period().end() >= today
            })
            .count();
        Ok(ActiveRentalCount::new(active as i64))
    }
}

pub struct MockRentalRepository;

#[async_trait::async_trait]
impl RentalModifier<MockTransaction> for MockRentalRepository {
    async fn create(
        &self,
        con: &mut MockTransaction,
        rental: &Rental,
    ) -> error_stack::Result<(), KernelError> {
        if con.fail_inserts {
            return Err(
                Report::new(KernelError::Storage).attach_printable("injected insert failure")
            );
        }
        con.work.rentals.push(rental.clone());
        Ok(())
    }

    async fn terminate(
        &self,
        con: &mut MockTransaction,
        student_id: &StudentId,
        instrument_id: &RentalInstrumentId,
        start_date: &Date,
    ) -> error_stack::Result<u64, KernelError> {
        let today = OffsetDateTime::now_utc().date();
        let mut affected = 0;
        for rental in &mut con.work.rentals {
            if rental.student_id() == student_id
                && rental.instrument_id() == instrument_id
                && rental.period().start() == start_date
                && !rental.terminated()
            {
                rental.mark_terminated(TerminationDate::new(today));
                affected += 1;
            }
        }
        Ok(affected)
    }
}

/// Test-side counterpart of the CLI's module wiring: owns the fake store and
/// hands the services their dependencies.
pub struct MockModule {
    database: MockDatabase,
    instruments: MockInstrumentRepository,
    students: MockStudentRepository,
    rentals: MockRentalRepository,
}

impl MockModule {
    pub fn new(state: StoreState) -> Self {
        Self {
            database: MockDatabase::new(state),
            instruments: MockInstrumentRepository,
            students: MockStudentRepository,
            rentals: MockRentalRepository,
        }
    }

    pub fn database(&self) -> &MockDatabase {
        &self.database
    }
}

impl DependOnDatabaseConnection for MockModule {
    type DatabaseConnection = MockDatabase;
    fn database_connection(&self) -> &MockDatabase {
        &self.database
    }
}

impl DependOnInstrumentQuery<MockTransaction> for MockModule {
    type InstrumentQuery = MockInstrumentRepository;
    fn instrument_query(&self) -> &MockInstrumentRepository {
        &self.instruments
    }
}

impl DependOnStudentQuery<MockTransaction> for MockModule {
    type StudentQuery = MockStudentRepository;
    fn student_query(&self) -> &MockStudentRepository {
        &self.students
    }
}

impl DependOnRentalModifier<MockTransaction> for MockModule {
    type RentalModifier = MockRentalRepository;
    fn rental_modifier(&self) -> &MockRentalRepository {
        &self.rentals
    }
}
