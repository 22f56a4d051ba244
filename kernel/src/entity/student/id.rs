use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct StudentId(i32);

impl StudentId {
    pub fn new(id: impl Into<i32>) -> Self {
        Self(id.into())
    }
}

impl AsRef<i32> for StudentId {
    fn as_ref(&self) -> &i32 {
        &self.0
    }
}

impl From<StudentId> for i32 {
    fn from(id: StudentId) -> Self {
        id.0
    }
}
