use super::StorageBackend;
use crate::error::{PropzError, Result};
use std::cell::RefCell;

/// In-memory slot storage for testing.
///
/// Uses `RefCell` for interior mutability since propz is single-threaded.
/// This avoids the overhead of a lock while still allowing the
/// `StorageBackend` trait to use `&self` for all methods.
#[derive(Default)]
pub struct MemBackend {
    slot: RefCell<Option<String>>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Preload the slot, as if a previous session had persisted `payload`.
    pub fn seed(&self, payload: &str) {
        *self.slot.borrow_mut() = Some(payload.to_string());
    }

    /// Test helper: inspect the raw persisted payload.
    pub fn slot(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }
}

impl StorageBackend for MemBackend {
    fn read_slot(&self) -> Result<Option<String>> {
        Ok(self.slot.borrow().clone())
    }

    fn write_slot(&self, payload: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(PropzError::Store("Simulated write error".to_string()));
        }
        *self.slot.borrow_mut() = Some(payload.to_string());
        Ok(())
    }
}
