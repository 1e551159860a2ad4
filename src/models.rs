//! Frontend Models
//!
//! Task entity as it is kept in memory and in the storage slot.

use serde::{Deserialize, Serialize};

/// A single todo entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Opaque unique id, fixed at creation
    pub id: String,
    /// Text entered by the user
    pub description: String,
    #[serde(rename = "isChecked")]
    pub is_checked: bool,
}

impl Task {
    pub fn new(id: String, description: String) -> Self {
        Self {
            id,
            description,
            is_checked: false,
        }
    }

    /// Case-insensitive substring match against an already lower-cased query
    pub fn matches(&self, lowered_query: &str) -> bool {
        self.description.to_lowercase().contains(lowered_query)
    }
}

/// Source of fresh task ids
pub trait IdSource {
    fn next_id(&mut self) -> String;
}

#[cfg(test)]
pub(crate) struct SequentialIds(pub u32);

#[cfg(test)]
impl IdSource for SequentialIds {
    fn next_id(&mut self) -> String {
        self.0 += 1;
        format!("task-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_serializes_with_camel_case_flag() {
        let task = Task::new("a1".to_string(), "Buy milk".to_string());
        let json = serde_json::to_string(&task).unwrap();
        assert_eq!(json, r#"{"id":"a1","description":"Buy milk","isChecked":false}"#);
    }

    #[test]
    fn test_task_matches_case_insensitive() {
        let task = Task::new("a1".to_string(), "Buy milk".to_string());
        assert!(task.matches("milk"));
        assert!(task.matches("buy m"));
        assert!(!task.matches("eggs"));
    }
}
