use chrono::{DateTime, Utc};
use serde::Serialize;

//
// ─── PRESENTATION MODE ─────────────────────────────────────────────────────────
//

/// How a question is put to the player.
///
/// - `MultipleChoice`: pick one of a handful of labels; judged by exact
///   equality against the item name.
/// - `Typed`: free text; judged by the fuzzy matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PresentationMode {
    MultipleChoice,
    Typed,
}

//
// ─── ANSWER FEEDBACK ───────────────────────────────────────────────────────────
//

/// Classification of a resolved answer.
///
/// `NearMiss` counts toward the correct tally, carried over from the
/// reference behavior as a leniency for learners; callers are expected to
/// render it with different feedback text than `Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AnswerFeedback {
    Correct,
    NearMiss,
    Wrong,
}

impl AnswerFeedback {
    /// Whether this outcome scores as correct.
    #[must_use]
    pub fn is_correct(self) -> bool {
        matches!(self, AnswerFeedback::Correct | AnswerFeedback::NearMiss)
    }
}

//
// ─── ANSWER RECORD ─────────────────────────────────────────────────────────────
//

/// Record of a single resolved answer within a session.
///
/// Stores which location was asked, how it was presented, what the player
/// submitted, and how it was judged.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerRecord {
    pub location: String,
    pub mode: PresentationMode,
    pub feedback: AnswerFeedback,
    pub answer: String,
    pub answered_at: DateTime<Utc>,
}

impl AnswerRecord {
    #[must_use]
    pub fn new(
        location: impl Into<String>,
        mode: PresentationMode,
        feedback: AnswerFeedback,
        answer: impl Into<String>,
        answered_at: DateTime<Utc>,
    ) -> Self {
        Self {
            location: location.into(),
            mode,
            feedback,
            answer: answer.into(),
            answered_at,
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
