use serde::Serialize;

use topo_core::model::{AnswerFeedback, LocationItem, PresentationMode};

/// What the caller renders for the current question.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionView {
    pub item: LocationItem,
    pub mode: PresentationMode,
    /// Option labels for multiple choice; `None` in typed mode. The correct
    /// name appears exactly once, at a random position.
    pub options: Option<Vec<String>>,
}

/// Outcome of one resolved answer, with the running counters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnswerOutcome {
    pub feedback: AnswerFeedback,
    pub correct_answer: String,
    pub correct_count: u32,
    pub incorrect_count: u32,
}
