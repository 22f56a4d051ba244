use time::Date;

use crate::database::Transaction;
use crate::entity::{Rental, RentalInstrumentId, StudentId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait RentalModifier<Connection: Transaction>: 'static + Sync + Send {
    /// Inserts a fresh, non-terminated rental row. Exactly one row must be
    /// written.
    async fn create(
        &self,
        con: &mut Connection,
        rental: &Rental,
    ) -> error_stack::Result<(), KernelError>;

    /// Marks the non-terminated rental matching (instrument, student, start
    /// date) as terminated as of today. Returns the number of rows touched;
    /// the caller decides what zero or more than one means. A terminated row
    /// no longer matches, so repeating the call touches nothing.
    async fn terminate(
        &self,
        con: &mut Connection,
        student_id: &StudentId,
        instrument_id: &RentalInstrumentId,
        start_date: &Date,
    ) -> error_stack::Result<u64, KernelError>;
}

pub trait DependOnRentalModifier<Connection: Transaction>: 'static + Sync + Send {
    type RentalModifier: RentalModifier<Connection>;
    fn rental_modifier(&self) -> &Self::RentalModifier;
}
