//! Tasks Data

use serde::{Deserialize, Serialize};

use crate::domain::tasks::records::TaskStatus;

/// Validated task fields, used for creation and full replacement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskInput {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
}
