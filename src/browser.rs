//! Browser Adapters
//!
//! Local storage slot, id generator, confirm dialog and removal timers.
//! These are the only pieces of the widget that talk to web APIs directly.

use std::cell::RefCell;
use std::collections::HashMap;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsValue;

use crate::events::ConfirmDialog;
use crate::models::IdSource;
use crate::storage::{StorageError, StorageResult, StorageSlot};

fn js_error(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// `window.localStorage` entry under a fixed key
#[derive(Debug, Clone)]
pub struct LocalStorageSlot {
    key: String,
}

impl LocalStorageSlot {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage(&self) -> StorageResult<web_sys::Storage> {
        let window = web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(js_error(e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))
    }
}

impl StorageSlot for LocalStorageSlot {
    fn read(&self) -> StorageResult<Option<String>> {
        self.storage()?
            .get_item(&self.key)
            .map_err(|e| StorageError::Read(js_error(e)))
    }

    fn write(&mut self, value: &str) -> StorageResult<()> {
        self.storage()?
            .set_item(&self.key, value)
            .map_err(|e| StorageError::Write(js_error(e)))
    }
}

/// `crypto.randomUUID()`, falling back to the current epoch millis
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserIds;

impl IdSource for BrowserIds {
    fn next_id(&mut self) -> String {
        id_or_timestamp(random_uuid(), js_sys::Date::now())
    }
}

// `randomUUID` is missing on insecure origins even though `crypto` exists
fn random_uuid() -> Option<String> {
    let crypto = web_sys::window()?.crypto().ok()?;
    let has_random_uuid = js_sys::Reflect::get(crypto.as_ref(), &JsValue::from_str("randomUUID"))
        .map(|f| f.is_function())
        .unwrap_or(false);
    has_random_uuid.then(|| crypto.random_uuid())
}

fn id_or_timestamp(uuid: Option<String>, now_ms: f64) -> String {
    uuid.unwrap_or_else(|| format!("{}", now_ms as u64))
}

/// `window.confirm`; answers no when there is no window
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowConfirm;

impl ConfirmDialog for WindowConfirm {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}

thread_local! {
    static PENDING_REMOVALS: RefCell<PendingRemovals> = RefCell::new(PendingRemovals::default());
}

/// Run `f` against the page-wide removal timers
pub fn with_pending_removals<R>(f: impl FnOnce(&mut PendingRemovals) -> R) -> R {
    PENDING_REMOVALS.with_borrow_mut(f)
}

/// Removal timers keyed by task id. Dropping a `Timeout` cancels it.
pub struct PendingRemovals<T = Timeout> {
    timers: HashMap<String, T>,
}

impl<T> Default for PendingRemovals<T> {
    fn default() -> Self {
        Self {
            timers: HashMap::new(),
        }
    }
}

impl<T> PendingRemovals<T> {
    /// Track a timer; replacing an existing one cancels it
    pub fn schedule(&mut self, id: String, timer: T) {
        self.timers.insert(id, timer);
    }

    /// Release the timer of a removal whose callback has run
    pub fn fired(&mut self, id: &str) {
        self.timers.remove(id);
    }

    /// Cancel everything, returning the ids that were pending
    pub fn cancel_all(&mut self) -> Vec<String> {
        self.timers.drain().map(|(id, _timer)| id).collect()
    }
}
