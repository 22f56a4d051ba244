use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct InstrumentModel(String);

impl InstrumentModel {
    pub fn new(model: impl Into<String>) -> Self {
        Self(model.into())
    }
}

impl AsRef<str> for InstrumentModel {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<InstrumentModel> for String {
    fn from(model: InstrumentModel) -> Self {
        model.0
    }
}
