mod answer;
mod catalog;
mod location;
mod summary;

pub use answer::{AnswerFeedback, AnswerRecord, PresentationMode};
pub use catalog::{Catalog, CatalogError};
pub use location::{Category, Coordinates, LocationError, LocationItem};
pub use summary::{SessionSummary, SummaryError};
