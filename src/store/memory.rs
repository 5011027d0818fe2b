use std::cell::RefCell;
use std::collections::HashMap;

use super::SessionStore;
use crate::error::{ColumnsError, Result};

/// In-memory session store.
///
/// Uses `RefCell` for interior mutability since processing is
/// single-threaded; this keeps the `SessionStore` trait on `&self`
/// without lock overhead.
#[derive(Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, Vec<String>>>,
    simulate_write_error: RefCell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Number of persisted entries. Test helper.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<String>>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, selection: &[String]) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(ColumnsError::Store("Simulated write error".to_string()));
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), selection.to_vec());
        Ok(())
    }
}
