//! Shared error types for the engine crate.

use thiserror::Error;

use topo_core::model::{CatalogError, SummaryError};

/// Errors emitted by quiz sessions.
///
/// Every variant is a usage error on the caller's side; wrong or near-miss
/// answers are normal outcomes and never surface here.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("a question is still awaiting an answer")]
    AwaitingAnswer,
    #[error("no question is awaiting an answer")]
    NoPendingQuestion,
    #[error("session is not complete yet")]
    NotComplete,
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Summary(#[from] SummaryError),
}
