mod instrument;
mod student;

pub use self::{instrument::*, student::*};

/// How a read participates in the enclosing transaction's locking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockMode {
    /// Plain read at the store's default isolation.
    Normal,
    /// Select-for-update read: row locks on the scanned relations, held until
    /// the enclosing transaction commits or rolls back.
    Exclusive,
}
