use error_stack::Report;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{
    DependOnInstrumentQuery, DependOnStudentQuery, InstrumentQuery, LockMode, StudentQuery,
};
use kernel::interface::update::{DependOnRentalModifier, RentalModifier};
use kernel::prelude::entity::{
    DeliveryTime, Rental, RentalInstrumentId, RentalNotes, RentalPeriod, StudentId,
};
use kernel::KernelError;

use crate::service::unwind;
use crate::transfer::{CreateRentalDto, RentalDto, TerminateRentalDto};

#[async_trait::async_trait]
pub trait BookingService:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection
    + DependOnStudentQuery<<Self::DatabaseConnection as DatabaseConnection>::Transaction>
    + DependOnInstrumentQuery<<Self::DatabaseConnection as DatabaseConnection>::Transaction>
    + DependOnRentalModifier<<Self::DatabaseConnection as DatabaseConnection>::Transaction>
{
    /// Books one instrument for one student over one period, entirely inside
    /// one transaction. Both reads lock rows before any decision is made, so
    /// two concurrent bookings of the same instrument serialize and the loser
    /// observes the winner's rental when it re-reads.
    async fn book_rental(
        &self,
        dto: CreateRentalDto,
    ) -> error_stack::Result<RentalDto, KernelError> {
        let period = RentalPeriod::try_new(dto.start, dto.end)?;
        let student_id = StudentId::new(dto.student_id);
        let instrument_id = RentalInstrumentId::new(dto.instrument_id);

        let mut connection = self.database_connection().transact().await?;

        let booked: error_stack::Result<Rental, KernelError> = async {
            // locking count first; a missing student fails the booking here
            let active = self
                .student_query()
                .active_rental_count(&mut connection, &student_id)
                .await?;

            // re-evaluate availability under the same transaction's locks to
            // close the window between listing and booking
            let available = self
                .instrument_query()
                .find_available(&mut connection, &period, None, LockMode::Exclusive)
                .await?;
            let unit = available
                .iter()
                .find(|found| found.id() == &instrument_id)
                .ok_or_else(|| {
                    Report::new(KernelError::InstrumentUnavailable).attach_printable(format!(
                        "instrument {} is not available between {} and {}",
                        instrument_id.as_ref(),
                        period.start(),
                        period.end()
                    ))
                })?;

            if !active.can_rent_another() {
                return Err(Report::new(KernelError::RentalLimitExceeded).attach_printable(
                    format!(
                        "student {} already holds {} active rentals",
                        student_id.as_ref(),
                        active.as_ref()
                    ),
                ));
            }

            let rental = Rental::book(
                student_id,
                instrument_id,
                period,
                dto.delivery.map(DeliveryTime::new),
                *unit.total_price(),
                dto.notes.map(RentalNotes::new),
            );
            self.rental_modifier().create(&mut connection, &rental).await?;
            Ok(rental)
        }
        .await;

        match booked {
            Ok(rental) => {
                connection.commit().await?;
                tracing::info!(
                    student = rental.student_id().as_ref(),
                    instrument = rental.instrument_id().as_ref(),
                    "rental booked"
                );
                Ok(RentalDto::from(rental))
            }
            Err(report) => Err(unwind(connection, report).await),
        }
    }
}

impl<T> BookingService for T where
    T: DependOnDatabaseConnection
        + DependOnStudentQuery<<T::DatabaseConnection as DatabaseConnection>::Transaction>
        + DependOnInstrumentQuery<<T::DatabaseConnection as DatabaseConnection>::Transaction>
        + DependOnRentalModifier<<T::DatabaseConnection as DatabaseConnection>::Transaction>
{
}

#[async_trait::async_trait]
pub trait TerminationService:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection
    + DependOnRentalModifier<<Self::DatabaseConnection as DatabaseConnection>::Transaction>
{
    /// Ends the unique rental matching (instrument, student, start date).
    /// Exactly one row must be touched: zero means there is nothing to
    /// terminate, more than one means the store lost the uniqueness the
    /// booking overlap check guarantees.
    async fn terminate_rental(
        &self,
        dto: TerminateRentalDto,
    ) -> error_stack::Result<(), KernelError> {
        let student_id = StudentId::new(dto.student_id);
        let instrument_id = RentalInstrumentId::new(dto.instrument_id);

        let mut connection = self.database_connection().transact().await?;

        let outcome: error_stack::Result<(), KernelError> = async {
            let affected = self
                .rental_modifier()
                .terminate(&mut connection, &student_id, &instrument_id, &dto.start)
                .await?;
            match affected {
                1 => Ok(()),
                0 => Err(Report::new(KernelError::NotFound).attach_printable(format!(
                    "no live rental of instrument {} by student {} starting {}",
                    instrument_id.as_ref(),
                    student_id.as_ref(),
                    dto.start
                ))),
                n => Err(Report::new(KernelError::Internal).attach_printable(format!(
                    "termination of instrument {} by student {} starting {} touched {n} rows",
                    instrument_id.as_ref(),
                    student_id.as_ref(),
                    dto.start
                ))),
            }
        }
        .await;

        match outcome {
            Ok(()) => {
                connection.commit().await?;
                tracing::info!(
                    student = student_id.as_ref(),
                    instrument = instrument_id.as_ref(),
                    "rental terminated"
                );
                Ok(())
            }
            Err(report) => Err(unwind(connection, report).await),
        }
    }
}

impl<T> TerminationService for T where
    T: DependOnDatabaseConnection
        + DependOnRentalModifier<<T::DatabaseConnection as DatabaseConnection>::Transaction>
{
}
