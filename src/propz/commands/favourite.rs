use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::favourites::Favourites;
use crate::model::Property;
use crate::store::StorageBackend;

pub fn add<B: StorageBackend>(
    favourites: &mut Favourites<B>,
    properties: &[Property],
    id: &str,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match properties.iter().find(|p| p.id == id) {
        Some(property) => {
            if favourites.contains(id) {
                result.add_message(CmdMessage::info(format!("{} is already a favourite", id)));
            } else {
                favourites.add(property);
                result.add_message(CmdMessage::success(format!("Added {} to favourites", id)));
            }
        }
        None => {
            result.add_message(CmdMessage::warning(format!("Property not found: {}", id)));
        }
    }

    Ok(result.with_favourites(favourites.list().to_vec()))
}

pub fn remove<B: StorageBackend>(favourites: &mut Favourites<B>, id: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if favourites.contains(id) {
        favourites.remove(id);
        result.add_message(CmdMessage::success(format!(
            "Removed {} from favourites",
            id
        )));
    } else {
        result.add_message(CmdMessage::info(format!("{} is not a favourite", id)));
    }

    Ok(result.with_favourites(favourites.list().to_vec()))
}

pub fn toggle<B: StorageBackend>(
    favourites: &mut Favourites<B>,
    properties: &[Property],
    id: &str,
) -> Result<CmdResult> {
    if favourites.contains(id) {
        remove(favourites, id)
    } else {
        add(favourites, properties, id)
    }
}

pub fn clear<B: StorageBackend>(favourites: &mut Favourites<B>) -> Result<CmdResult> {
    let count = favourites.len();
    favourites.clear();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Cleared {} favourite(s)",
        count
    )));
    Ok(result.with_favourites(Vec::new()))
}

pub fn list<B: StorageBackend>(favourites: &Favourites<B>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if favourites.is_empty() {
        result.add_message(CmdMessage::info("No favourites yet."));
    }
    Ok(result.with_favourites(favourites.list().to_vec()))
}
