use thiserror::Error;

use topo_core::model::{CatalogError, LocationError};

/// Errors raised while loading an embedded dataset.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ContentError {
    #[error("dataset is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Location(#[from] LocationError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
