use super::StorageBackend;
use crate::error::{PropzError, Result};
use std::fs;
use std::path::PathBuf;

pub const SLOT_FILENAME: &str = "favourites.json";

/// File-based slot storage. One JSON file, replaced atomically on write.
pub struct FsBackend {
    path: PathBuf,
}

impl FsBackend {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl StorageBackend for FsBackend {
    fn read_slot(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).map_err(PropzError::Io)?;
        Ok(Some(content))
    }

    fn write_slot(&self, payload: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(PropzError::Io)?;
            }
        }

        // Write to a sibling tmp file, then rename over the slot.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, payload).map_err(PropzError::Io)?;
        fs::rename(&tmp, &self.path).map_err(PropzError::Io)?;
        Ok(())
    }
}
