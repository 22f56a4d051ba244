use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{DependOnInstrumentQuery, InstrumentQuery, LockMode};
use kernel::prelude::entity::{InstrumentName, RentalPeriod};
use kernel::KernelError;

use crate::service::unwind;
use crate::transfer::{ListAvailableDto, RentalInstrumentDto};

/// Read-only availability listing. Intentionally optimistic: the answer may
/// be stale by booking time; correctness is enforced inside the booking
/// transaction, not here.
#[async_trait::async_trait]
pub trait InstrumentListService:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection
    + DependOnInstrumentQuery<<Self::DatabaseConnection as DatabaseConnection>::Transaction>
{
    async fn list_available(
        &self,
        dto: ListAvailableDto,
    ) -> error_stack::Result<Vec<RentalInstrumentDto>, KernelError> {
        let period = RentalPeriod::try_new(dto.start, dto.end)?;
        let kind = dto.kind.map(InstrumentName::new);

        let mut connection = self.database_connection().transact().await?;
        let found = self
            .instrument_query()
            .find_available(&mut connection, &period, kind.as_ref(), LockMode::Normal)
            .await;

        match found {
            Ok(instruments) => {
                connection.commit().await?;
                Ok(instruments
                    .into_iter()
                    .map(RentalInstrumentDto::from)
                    .collect())
            }
            Err(report) => Err(unwind(connection, report).await),
        }
    }
}

impl<T> InstrumentListService for T where
    T: DependOnDatabaseConnection
        + DependOnInstrumentQuery<<T::DatabaseConnection as DatabaseConnection>::Transaction>
{
}
