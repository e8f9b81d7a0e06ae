#![forbid(unsafe_code)]

pub mod distractors;
pub mod error;
pub mod selection;
pub mod sessions;

pub use topo_core::Clock;
pub use sessions as session;

pub use distractors::{DEFAULT_DISTRACTOR_COUNT, generate_options};
pub use error::SessionError;
pub use selection::SelectionPolicy;

pub use sessions::{
    AnswerOutcome, QuestionView, QuizLoopService, QuizSession, SessionAnswerResult,
    SessionOptions, SessionPhase, SessionProgress,
};
