use std::fmt::Display;

use error_stack::Context;

/// Failure taxonomy shared by every layer. Details about the operation and
/// the entity involved travel as report attachments, not as variant payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelError {
    /// Malformed caller input, rejected before the store is touched.
    Validation,
    /// A referenced student or instrument does not exist.
    Lookup,
    /// The requested instrument is not in the re-checked available set.
    InstrumentUnavailable,
    /// The student is already at the active-rental cap.
    RentalLimitExceeded,
    /// The termination target does not exist.
    NotFound,
    Timeout,
    /// An underlying store call failed.
    Storage,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::Validation => write!(f, "Invalid request"),
            KernelError::Lookup => write!(f, "Referenced entity does not exist"),
            KernelError::InstrumentUnavailable => {
                write!(f, "Instrument is not available in the requested period")
            }
            KernelError::RentalLimitExceeded => write!(f, "Active rental limit reached"),
            KernelError::NotFound => write!(f, "No matching rental"),
            KernelError::Timeout => write!(f, "Store call timed out"),
            KernelError::Storage => write!(f, "Store call failed"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}
