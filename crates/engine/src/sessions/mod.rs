mod progress;
mod service;
mod view;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use progress::SessionProgress;
pub use service::{QuizSession, SessionOptions, SessionPhase};
pub use view::{AnswerOutcome, QuestionView};
pub use workflow::{QuizLoopService, SessionAnswerResult};
