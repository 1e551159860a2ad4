//! Persistence Adapter
//!
//! Serializes the task list into a single string-keyed slot. Loading never
//! fails: missing or malformed data degrades to an empty list.

use std::collections::HashSet;
use std::fmt;

use serde_json::Value;

use crate::models::Task;

pub type StorageResult<T> = Result<T, StorageError>;

/// Storage-level errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// No storage backend reachable (no window, storage disabled)
    Unavailable(String),
    Read(String),
    Write(String),
    Encode(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable(msg) => write!(f, "Storage unavailable: {}", msg),
            StorageError::Read(msg) => write!(f, "Storage read failed: {}", msg),
            StorageError::Write(msg) => write!(f, "Storage write failed: {}", msg),
            StorageError::Encode(msg) => write!(f, "Encode failed: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

/// A single durable key-value entry owned by the widget
pub trait StorageSlot {
    fn read(&self) -> StorageResult<Option<String>>;
    fn write(&mut self, value: &str) -> StorageResult<()>;
}

/// Read the stored task list, degrading to empty on any problem
pub fn load_tasks(slot: &impl StorageSlot) -> Vec<Task> {
    match slot.read() {
        Ok(Some(raw)) => decode_tasks(&raw),
        Ok(None) => Vec::new(),
        Err(e) => {
            log::warn!("Todo items read error: {}", e);
            Vec::new()
        }
    }
}

/// Overwrite the slot with the full task list
pub fn save_tasks(slot: &mut impl StorageSlot, items: &[Task]) -> StorageResult<()> {
    let raw = serde_json::to_string(items).map_err(|e| StorageError::Encode(e.to_string()))?;
    slot.write(&raw)
}

/// Decode a stored value. Non-arrays yield nothing; bad or duplicate elements are skipped.
pub fn decode_tasks(raw: &str) -> Vec<Task> {
    if raw.is_empty() {
        return Vec::new();
    }

    let elements = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(elements)) => elements,
        Ok(other) => {
            log::warn!("Todo items are not an array (found {}), ignoring", json_kind(&other));
            return Vec::new();
        }
        Err(e) => {
            log::warn!("Todo items parse error: {}", e);
            return Vec::new();
        }
    };

    let mut seen = HashSet::new();
    let mut tasks = Vec::with_capacity(elements.len());
    for (index, element) in elements.into_iter().enumerate() {
        match serde_json::from_value::<Task>(element) {
            Ok(task) if seen.insert(task.id.clone()) => tasks.push(task),
            Ok(task) => log::warn!("Skipping duplicate todo id {} at index {}", task.id, index),
            Err(e) => log::warn!("Skipping malformed todo at index {}: {}", index, e),
        }
    }
    tasks
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Slot kept in memory; clones share the same value
#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct MemorySlot(std::rc::Rc<std::cell::RefCell<Option<String>>>);

#[cfg(test)]
impl MemorySlot {
    pub fn with_value(raw: &str) -> Self {
        Self(std::rc::Rc::new(std::cell::RefCell::new(Some(raw.to_string()))))
    }

    pub fn value(&self) -> Option<String> {
        self.0.borrow().clone()
    }
}

#[cfg(test)]
impl StorageSlot for MemorySlot {
    fn read(&self) -> StorageResult<Option<String>> {
        Ok(self.0.borrow().clone())
    }

    fn write(&mut self, value: &str) -> StorageResult<()> {
        *self.0.borrow_mut() = Some(value.to_string());
        Ok(())
    }
}
