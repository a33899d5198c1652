//! Dataset loading.
//!
//! The property dataset is a single JSON document of the shape
//! `{"properties": [...]}`, bundled with the application and loaded once at
//! startup. The core never mutates it.

use crate::error::{PropzError, Result};
use crate::model::Property;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
struct Dataset {
    #[serde(default)]
    properties: Vec<Property>,
}

/// Load the dataset from `path`. A document without a `properties` key
/// yields an empty list; an unreadable or unparsable file is an error the
/// caller reports.
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<Vec<Property>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(PropzError::Api(format!(
            "Dataset not found: {}",
            path.display()
        )));
    }

    let content = fs::read_to_string(path).map_err(PropzError::Io)?;
    let dataset: Dataset = serde_json::from_str(&content).map_err(PropzError::Serialization)?;
    Ok(dataset.properties)
}
