use std::collections::HashSet;
use thiserror::Error;

use crate::model::location::{Category, LocationItem};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog contains no locations")]
    Empty,

    #[error("duplicate location name in catalog: {name}")]
    DuplicateName { name: String },
}

//
// ─── CATALOG ───────────────────────────────────────────────────────────────────
//

/// Immutable ordered collection of quiz items.
///
/// Built once and shared read-only by every consumer for the lifetime of a
/// session. Names are unique within a catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    items: Vec<LocationItem>,
}

impl Catalog {
    /// Creates a catalog from a list of items.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Empty` for a zero-item list and
    /// `CatalogError::DuplicateName` when two items share a name.
    pub fn new(items: Vec<LocationItem>) -> Result<Self, CatalogError> {
        if items.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.name()) {
                return Err(CatalogError::DuplicateName {
                    name: item.name().to_owned(),
                });
            }
        }

        Ok(Self { items })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn items(&self) -> &[LocationItem] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &LocationItem> {
        self.items.iter()
    }

    /// Looks up an item by its exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&LocationItem> {
        self.items.iter().find(|item| item.name() == name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Restricts the catalog to a single category.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Empty` when no item matches the category.
    pub fn filter_category(&self, category: Category) -> Result<Catalog, CatalogError> {
        Catalog::new(
            self.items
                .iter()
                .filter(|item| item.category() == category)
                .cloned()
                .collect(),
        )
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn build_item(name: &str, category: Category) -> LocationItem {
        LocationItem::new(name, category).unwrap()
    }

    fn build_catalog() -> Catalog {
        Catalog::new(vec![
            build_item("Hamburg", Category::City),
            build_item("Bremen", Category::City),
            build_item("Rijn", Category::River),
            build_item("Zugspitze", Category::Mountain),
        ])
        .unwrap()
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let err = Catalog::new(Vec::new()).unwrap_err();
        assert_eq!(err, CatalogError::Empty);
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let err = Catalog::new(vec![
            build_item("Hamburg", Category::City),
            build_item("Hamburg", Category::Region),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            CatalogError::DuplicateName {
                name: "Hamburg".to_owned()
            }
        );
    }

    #[test]
    fn lookup_by_name() {
        let catalog = build_catalog();
        assert!(catalog.contains("Rijn"));
        assert_eq!(catalog.get("Rijn").unwrap().category(), Category::River);
        assert!(catalog.get("rijn").is_none());
    }

    #[test]
    fn filter_keeps_only_matching_category() {
        let catalog = build_catalog();
        let cities = catalog.filter_category(Category::City).unwrap();
        assert_eq!(cities.len(), 2);
        assert!(cities.iter().all(|i| i.category() == Category::City));
    }

    #[test]
    fn filter_with_no_matches_is_empty_error() {
        let catalog = build_catalog();
        let err = catalog.filter_category(Category::Sea).unwrap_err();
        assert_eq!(err, CatalogError::Empty);
    }
}
