use thiserror::Error;

use crate::model::{CatalogError, LocationError, SummaryError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Location(#[from] LocationError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Summary(#[from] SummaryError),
}
