mod active;
mod id;

pub use self::{active::*, id::*};

use serde::{Deserialize, Serialize};

/// Read-only projection of a student record; the core never writes students.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Student {
    id: StudentId,
    approved: bool,
}

impl Student {
    pub fn new(id: StudentId, approved: bool) -> Self {
        Self { id, approved }
    }

    pub fn id(&self) -> &StudentId {
        &self.id
    }

    pub fn approved(&self) -> bool {
        self.approved
    }
}
