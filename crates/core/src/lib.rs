#![forbid(unsafe_code)]

pub mod error;
pub mod matcher;
pub mod model;
pub mod time;

pub use error::Error;
pub use matcher::{classify, levenshtein, normalize};
pub use model::{
    AnswerFeedback, AnswerRecord, Catalog, CatalogError, Category, Coordinates, LocationError,
    LocationItem, PresentationMode, SessionSummary, SummaryError,
};
pub use time::Clock;
