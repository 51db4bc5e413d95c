use serde::{Deserialize, Serialize};

/// Result of a delete operation.
///
/// Deleting a row that does not exist is treated as a successful no-op by
/// the workflow services; callers that care can still distinguish the cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}

impl DeleteOutcome {
    pub fn from_rows(rows: usize) -> Self {
        if rows > 0 {
            DeleteOutcome::Deleted
        } else {
            DeleteOutcome::NotFound
        }
    }

    pub fn was_deleted(&self) -> bool {
        matches!(self, DeleteOutcome::Deleted)
    }
}
