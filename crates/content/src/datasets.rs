//! Embedded location datasets.
//!
//! Each dataset is a JSON file compiled into the binary and parsed into the
//! shared [`Catalog`] type on request, so every screen quizzes against the
//! same single list.

use serde::Deserialize;

use topo_core::model::{Catalog, Category, Coordinates, LocationItem};

use crate::error::ContentError;

const GERMANY_JSON: &str = include_str!("data/germany.json");
const NETHERLANDS_JSON: &str = include_str!("data/netherlands.json");

#[derive(Debug, Deserialize)]
struct RawLocation {
    name: String,
    category: Category,
    #[serde(default)]
    coordinates: Option<Coordinates>,
    #[serde(default)]
    description: Option<String>,
}

/// German topography: cities, rivers, mountains, seas, and regions.
///
/// # Errors
///
/// Returns `ContentError` if the embedded dataset fails to parse or
/// validate; with a correct build this does not happen.
pub fn germany() -> Result<Catalog, ContentError> {
    parse_catalog(GERMANY_JSON)
}

/// Dutch cities with their map marker positions.
///
/// # Errors
///
/// Returns `ContentError` if the embedded dataset fails to parse or
/// validate; with a correct build this does not happen.
pub fn netherlands() -> Result<Catalog, ContentError> {
    parse_catalog(NETHERLANDS_JSON)
}

fn parse_catalog(json: &str) -> Result<Catalog, ContentError> {
    let raw: Vec<RawLocation> = serde_json::from_str(json)?;

    let mut items = Vec::with_capacity(raw.len());
    for entry in raw {
        let mut item = LocationItem::new(entry.name, entry.category)?;
        if let Some(coordinates) = entry.coordinates {
            item = item.with_coordinates(coordinates);
        }
        if let Some(description) = entry.description {
            item = item.with_description(description);
        }
        items.push(item);
    }

    Ok(Catalog::new(items)?)
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
