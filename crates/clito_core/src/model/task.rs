use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub description: String,
    pub completed: bool,
    pub created_at: String,
    /// Absent from the document until the task is completed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
}

impl Task {
    pub fn new(id: u64, description: &str, created_at: String) -> Self {
        Self {
            id,
            description: description.to_string(),
            completed: false,
            created_at,
            completed_at: None,
        }
    }

    pub fn mark_completed(&mut self, completed_at: String) {
        self.completed = true;
        self.completed_at = Some(completed_at);
    }
}
