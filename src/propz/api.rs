//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer: the single
//! entry point for all propz operations, regardless of the UI driving it.
//!
//! `PropzApi<B>` owns the three pieces of application state (the loaded
//! dataset, the current criteria, and the favourites store) and dispatches
//! each operation to the matching command. It does no I/O and no
//! presentation; it returns structured `Result<CmdResult>` values for the UI
//! to render.
//!
//! Every search is a full recomputation: the criteria value is replaced
//! wholesale and the filter engine re-runs over the whole dataset. There is
//! no incremental-update contract.
//!
//! Generic over [`StorageBackend`]:
//! - Production: `PropzApi<FsBackend>`
//! - Testing: `PropzApi<MemBackend>`

use crate::commands;
use crate::criteria::Criteria;
use crate::error::Result;
use crate::favourites::Favourites;
use crate::model::Property;
use crate::store::StorageBackend;

pub struct PropzApi<B: StorageBackend> {
    properties: Vec<Property>,
    criteria: Criteria,
    favourites: Favourites<B>,
}

impl<B: StorageBackend> PropzApi<B> {
    pub fn new(properties: Vec<Property>, favourites: Favourites<B>) -> Self {
        Self {
            properties,
            criteria: Criteria::default(),
            favourites,
        }
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    /// Replace the criteria for subsequent searches.
    pub fn set_criteria(&mut self, criteria: Criteria) {
        self.criteria = criteria;
    }

    /// Drop every constraint.
    pub fn clear_criteria(&mut self) {
        self.criteria = Criteria::default();
    }

    /// Recompute the visible result set for the current criteria.
    pub fn search(&self) -> Result<commands::CmdResult> {
        commands::search::run(&self.properties, &self.criteria)
    }

    pub fn view(&self, id: &str) -> Result<commands::CmdResult> {
        commands::view::run(&self.properties, id)
    }

    pub fn favourite(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::favourite::add(&mut self.favourites, &self.properties, id)
    }

    pub fn unfavourite(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::favourite::remove(&mut self.favourites, id)
    }

    pub fn toggle_favourite(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::favourite::toggle(&mut self.favourites, &self.properties, id)
    }

    pub fn clear_favourites(&mut self) -> Result<commands::CmdResult> {
        commands::favourite::clear(&mut self.favourites)
    }

    pub fn favourites(&self) -> Result<commands::CmdResult> {
        commands::favourite::list(&self.favourites)
    }

    /// Direct access to the shared store, e.g. to register subscribers.
    pub fn favourites_store(&mut self) -> &mut Favourites<B> {
        &mut self.favourites
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
