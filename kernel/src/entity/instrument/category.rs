use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct InstrumentCategory(String);

impl InstrumentCategory {
    pub fn new(category: impl Into<String>) -> Self {
        Self(category.into())
    }
}

impl AsRef<str> for InstrumentCategory {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<InstrumentCategory> for String {
    fn from(category: InstrumentCategory) -> Self {
        category.0
    }
}
