//! # Propz Architecture
//!
//! Propz is a **UI-agnostic property-search library**. This is not a CLI
//! application that happens to have some library code—it's a library that
//! happens to have a CLI client.
//!
//! The problem is a listings browser: a fixed, locally bundled dataset of
//! properties, a set of user-adjustable filters, and a favourites list that
//! survives restarts. Everything a UI would render is derived from two small
//! cores: the filter engine and the favourites store.
//!
//! ## The Layer Stack
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns dataset + criteria + favourites store               │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic                                      │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (filter.rs, favourites.rs) + Storage (store/)         │
//! │  - filter: pure (dataset, criteria) → matches               │
//! │  - favourites: persisted, observable snapshot set           │
//! │  - Abstract StorageBackend: FsBackend / MemBackend          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Two Cores, Two Contracts
//!
//! The **filter engine** ([`filter`]) is a pure function. It never fails: a
//! record with a malformed price, bedroom count, or date simply fails the
//! predicate that needed the value. Every search is a full recomputation over
//! the whole dataset.
//!
//! The **favourites store** ([`favourites`]) is the single shared source of
//! truth for selected properties. It persists wholesale after every
//! mutation and notifies subscribers, and its public surface never raises:
//! storage problems degrade to an empty set on read and to in-memory-only
//! operation on write.
//!
//! ## Testing Strategy
//!
//! 1. **Core + commands**: thorough unit tests in `#[cfg(test)]` modules.
//!    This is where the lion's share of testing lives.
//! 2. **API** (`api.rs`): dispatch tests over `MemBackend`.
//! 3. **Integration** (`tests/`): fs-backend round-trips with real temp
//!    files, and end-to-end CLI runs.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`criteria`]: Filter criteria value objects
//! - [`dataset`]: Dataset loading
//! - [`favourites`]: The persisted, observable favourites set
//! - [`filter`]: The filter engine and date derivation
//! - [`model`]: Core data types (`Property`, `AddedDate`)
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod criteria;
pub mod dataset;
pub mod error;
pub mod favourites;
pub mod filter;
pub mod model;
pub mod store;
