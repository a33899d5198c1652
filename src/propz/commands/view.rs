use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Property;

pub fn run(properties: &[Property], id: &str) -> Result<CmdResult> {
    match properties.iter().find(|p| p.id == id) {
        Some(property) => Ok(CmdResult::default().with_property(property.clone())),
        None => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::warning(format!("Property not found: {}", id)));
            Ok(result)
        }
    }
}

/// Gallery image paths: the primary picture first, then the `images` list,
/// de-duplicated while preserving order.
pub fn gallery(property: &Property) -> Vec<&str> {
    let mut paths: Vec<&str> = Vec::new();
    if let Some(picture) = property.picture.as_deref() {
        paths.push(picture);
    }
    for image in &property.images {
        if !paths.contains(&image.as_str()) {
            paths.push(image);
        }
    }
    paths
}

/// Opaque map-embed URL for the detail view's map tab. No geocoding happens
/// here; the coordinates come straight from the record.
pub fn map_embed_url(property: &Property) -> Option<String> {
    let lat = property.latitude()?;
    let lng = property.longitude()?;
    Some(format!(
        "https://www.google.com/maps?q={}%2C{}&z=14&output=embed",
        lat, lng
    ))
}
