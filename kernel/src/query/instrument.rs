use crate::database::Transaction;
use crate::entity::{InstrumentName, RentalInstrument, RentalPeriod};
use crate::query::LockMode;
use crate::KernelError;

#[async_trait::async_trait]
pub trait InstrumentQuery<Connection: Transaction>: Sync + Send + 'static {
    /// Catalog units with zero overlapping, non-terminated rentals inside
    /// `period`, annotated with month count and total price, ordered by unit
    /// id ascending. `kind` narrows the scan to one catalog type.
    ///
    /// This call never commits: with [`LockMode::Exclusive`] the caller owns
    /// the transaction holding the row locks, and with [`LockMode::Normal`]
    /// the caller still resolves its own read-only transaction.
    async fn find_available(
        &self,
        con: &mut Connection,
        period: &RentalPeriod,
        kind: Option<&InstrumentName>,
        lock: LockMode,
    ) -> error_stack::Result<Vec<RentalInstrument>, KernelError>;
}

pub trait DependOnInstrumentQuery<Connection: Transaction>: Sync + Send + 'static {
    type InstrumentQuery: InstrumentQuery<Connection>;
    fn instrument_query(&self) -> &Self::InstrumentQuery;
}
