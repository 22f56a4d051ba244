use crate::database::Transaction;
use crate::entity::{ActiveRentalCount, StudentId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait StudentQuery<Connection: Transaction>: Sync + Send + 'static {
    /// Counts the student's active rentals (non-terminated, end date in the
    /// future or unset) under row locks on the student and rental relations.
    /// Always the locking variant: every booking decision reads through this.
    ///
    /// A missing or unapproved student is a [`KernelError::Lookup`] failure,
    /// never a silent zero.
    async fn active_rental_count(
        &self,
        con: &mut Connection,
        student_id: &StudentId,
    ) -> error_stack::Result<ActiveRentalCount, KernelError>;
}

pub trait DependOnStudentQuery<Connection: Transaction>: Sync + Send + 'static {
    type StudentQuery: StudentQuery<Connection>;
    fn student_query(&self) -> &Self::StudentQuery;
}
