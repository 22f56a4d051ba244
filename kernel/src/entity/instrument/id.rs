use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct RentalInstrumentId(i32);

impl RentalInstrumentId {
    pub fn new(id: impl Into<i32>) -> Self {
        Self(id.into())
    }
}

impl AsRef<i32> for RentalInstrumentId {
    fn as_ref(&self) -> &i32 {
        &self.0
    }
}

impl From<RentalInstrumentId> for i32 {
    fn from(id: RentalInstrumentId) -> Self {
        id.0
    }
}
