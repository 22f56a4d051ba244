use serde::{Deserialize, Serialize};

/// Catalog type of an instrument ("guitar", "piano"); the `list` filter
/// matches against this.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct InstrumentName(String);

impl InstrumentName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl AsRef<str> for InstrumentName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<InstrumentName> for String {
    fn from(name: InstrumentName) -> Self {
        name.0
    }
}
