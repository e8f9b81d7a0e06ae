use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LocationError {
    #[error("location name cannot be empty")]
    EmptyName,
}

//
// ─── CATEGORY ──────────────────────────────────────────────────────────────────
//

/// Closed set of location categories.
///
/// Categories support optional session filtering; they never affect scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    City,
    River,
    Mountain,
    Sea,
    Region,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 5] = [
        Category::City,
        Category::River,
        Category::Mountain,
        Category::Sea,
        Category::Region,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::City => "city",
            Category::River => "river",
            Category::Mountain => "mountain",
            Category::Sea => "sea",
            Category::Region => "region",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

//
// ─── COORDINATES ───────────────────────────────────────────────────────────────
//

/// Marker position on the map image, as percentages of its width and height.
///
/// Opaque metadata: the engine passes it through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: f64,
    pub y: f64,
}

impl Coordinates {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

//
// ─── LOCATION ITEM ─────────────────────────────────────────────────────────────
//

/// A single quiz item: a place with a unique name.
///
/// The name doubles as the canonical answer key; it is unique within a
/// catalog for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationItem {
    name: String,
    category: Category,
    coordinates: Option<Coordinates>,
    description: Option<String>,
}

impl LocationItem {
    /// Creates a new location item.
    ///
    /// # Errors
    ///
    /// Returns `LocationError::EmptyName` if the name is empty or
    /// whitespace-only.
    pub fn new(name: impl Into<String>, category: Category) -> Result<Self, LocationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(LocationError::EmptyName);
        }

        Ok(Self {
            name: name.trim().to_owned(),
            category,
            coordinates: None,
            description: None,
        })
    }

    /// Attach a map marker position.
    #[must_use]
    pub fn with_coordinates(mut self, coordinates: Coordinates) -> Self {
        self.coordinates = Some(coordinates);
        self
    }

    /// Attach a short description shown after the answer resolves.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        self.description = Some(description.trim().to_owned()).filter(|d| !d.is_empty());
        self
    }

    // Accessors
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn coordinates(&self) -> Option<Coordinates> {
        self.coordinates
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_new_rejects_empty_name() {
        let err = LocationItem::new("   ", Category::City).unwrap_err();
        assert_eq!(err, LocationError::EmptyName);
    }

    #[test]
    fn item_trims_name() {
        let item = LocationItem::new("  Keulen  ", Category::City).unwrap();
        assert_eq!(item.name(), "Keulen");
    }

    #[test]
    fn item_carries_metadata() {
        let item = LocationItem::new("Amsterdam", Category::City)
            .unwrap()
            .with_coordinates(Coordinates::new(30.0, 20.0))
            .with_description("Hoofdstad van Nederland");

        assert_eq!(item.category(), Category::City);
        assert_eq!(item.coordinates(), Some(Coordinates::new(30.0, 20.0)));
        assert_eq!(item.description(), Some("Hoofdstad van Nederland"));
    }

    #[test]
    fn item_filters_empty_description() {
        let item = LocationItem::new("Rijn", Category::River)
            .unwrap()
            .with_description("   ");
        assert_eq!(item.description(), None);
    }

    #[test]
    fn category_serde_uses_lowercase() {
        let json = serde_json::to_string(&Category::Mountain).unwrap();
        assert_eq!(json, "\"mountain\"");
        let back: Category = serde_json::from_str("\"sea\"").unwrap();
        assert_eq!(back, Category::Sea);
    }
}
