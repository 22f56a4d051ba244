use serde::{Deserialize, Serialize};
use time::Date;

/// Day a rental was explicitly ended; unset while the rental is live.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct TerminationDate(Date);

impl TerminationDate {
    pub fn new(date: impl Into<Date>) -> Self {
        Self(date.into())
    }
}

impl AsRef<Date> for TerminationDate {
    fn as_ref(&self) -> &Date {
        &self.0
    }
}

impl From<TerminationDate> for Date {
    fn from(date: TerminationDate) -> Self {
        date.0
    }
}
