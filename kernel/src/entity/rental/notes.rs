use serde::{Deserialize, Serialize};

/// Free-text notes about the instrument or its delivery.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RentalNotes(String);

impl RentalNotes {
    pub fn new(notes: impl Into<String>) -> Self {
        Self(notes.into())
    }
}

impl AsRef<str> for RentalNotes {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<RentalNotes> for String {
    fn from(notes: RentalNotes) -> Self {
        notes.0
    }
}
