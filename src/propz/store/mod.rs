//! # Storage Layer
//!
//! This module defines the persistence abstraction for the favourites list.
//! The [`StorageBackend`] trait handles the "how" of storage (filesystem vs
//! memory), while [`crate::favourites::Favourites`] handles the "what"
//! (membership rules, snapshots, observers).
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `MemBackend` (no filesystem needed)
//! - Allow **future backends** (browser storage, database) without changing
//!   the store's semantics
//!
//! ## Implementations
//!
//! - [`fs::FsBackend`]: production file-based storage. The entire favourites
//!   list lives in one JSON slot file (`favourites.json`), overwritten
//!   wholesale on every mutation.
//! - [`memory::MemBackend`]: in-memory slot for tests, with a write-error
//!   simulation hook.
//!
//! ## Slot format
//!
//! The slot holds a JSON array of full property snapshots in insertion
//! order. The backend traffics in the raw payload string; parsing (and the
//! decision of what a corrupt payload means) stays in the store.

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract interface for the single favourites slot.
pub trait StorageBackend {
    /// Read the persisted payload.
    /// Returns `Ok(None)` when the slot has never been written.
    /// Returns `Err` only on actual I/O errors.
    fn read_slot(&self) -> Result<Option<String>>;

    /// Replace the slot with `payload`.
    /// MUST be atomic (e.g. write to tmp then rename) so a failed write
    /// never leaves a half-written slot behind.
    fn write_slot(&self, payload: &str) -> Result<()>;
}
