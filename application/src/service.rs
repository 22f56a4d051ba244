mod instrument;
mod rental;

pub use self::{instrument::*, rental::*};

use error_stack::Report;

use kernel::interface::database::Transaction;
use kernel::KernelError;

/// Rolls the transaction back after a failed step. A rollback failure is
/// reported as an attachment on the original failure, never in its place.
pub(crate) async fn unwind<T: Transaction>(
    transaction: T,
    report: Report<KernelError>,
) -> Report<KernelError> {
    match transaction.roll_back().await {
        Ok(()) => report,
        Err(rollback) => report.attach_printable(format!(
            "transaction rollback also failed: {rollback:?}"
        )),
    }
}
