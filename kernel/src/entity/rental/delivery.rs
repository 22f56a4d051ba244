use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// When the instrument is handed over to the student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeliveryTime(OffsetDateTime);

impl DeliveryTime {
    pub fn new(time: impl Into<OffsetDateTime>) -> Self {
        Self(time.into())
    }
}

impl AsRef<OffsetDateTime> for DeliveryTime {
    fn as_ref(&self) -> &OffsetDateTime {
        &self.0
    }
}

impl From<DeliveryTime> for OffsetDateTime {
    fn from(time: DeliveryTime) -> Self {
        time.0
    }
}
