use chrono::{DateTime, Utc};
use rand::Rng;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

use topo_core::matcher;
use topo_core::model::{
    AnswerFeedback, AnswerRecord, Catalog, CatalogError, PresentationMode, SessionSummary,
};

use crate::distractors::{self, DEFAULT_DISTRACTOR_COUNT};
use crate::error::SessionError;
use crate::selection::SelectionPolicy;

use super::progress::SessionProgress;
use super::view::{AnswerOutcome, QuestionView};

//
// ─── OPTIONS ───────────────────────────────────────────────────────────────────
//

/// Per-session configuration.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    mode_override: Option<PresentationMode>,
    distractor_count: usize,
}

impl SessionOptions {
    #[must_use]
    pub fn new() -> Self {
        Self {
            mode_override: None,
            distractor_count: DEFAULT_DISTRACTOR_COUNT,
        }
    }

    /// Force every question into a single presentation mode instead of the
    /// per-question coin flip.
    #[must_use]
    pub fn with_mode_override(mut self, mode: PresentationMode) -> Self {
        self.mode_override = Some(mode);
        self
    }

    /// Wrong answers sampled per multiple-choice question. Shrinks
    /// automatically when the catalog is too small.
    #[must_use]
    pub fn with_distractor_count(mut self, count: usize) -> Self {
        self.distractor_count = count;
        self
    }

    #[must_use]
    pub fn mode_override(&self) -> Option<PresentationMode> {
        self.mode_override
    }

    #[must_use]
    pub fn distractor_count(&self) -> usize {
        self.distractor_count
    }
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self::new()
    }
}

//
// ─── PHASE ─────────────────────────────────────────────────────────────────────
//

/// Lifecycle phase of a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Session constructed, no question presented yet.
    Idle,
    /// A question is on display and awaits exactly one answer.
    Presenting,
    /// The last question resolved; ready to advance.
    Resolved,
    /// Every item in the pool has been answered.
    Complete,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One play-through over a catalog of locations.
///
/// Questions are drawn without repetition until the pool is exhausted.
/// Exactly one `submit_answer` resolves each presented question; calls that
/// do not fit the current phase are rejected without touching the counters.
pub struct QuizSession {
    catalog: Arc<Catalog>,
    policy: SelectionPolicy,
    distractor_count: usize,
    answered: HashSet<String>,
    records: Vec<AnswerRecord>,
    current: Option<QuestionView>,
    last_feedback: Option<AnswerFeedback>,
    correct_count: u32,
    incorrect_count: u32,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    /// Create a new session over the given catalog.
    ///
    /// `started_at` should come from the caller's clock to keep time
    /// deterministic.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Catalog` if the catalog holds no items.
    pub fn new(
        catalog: Arc<Catalog>,
        options: SessionOptions,
        started_at: DateTime<Utc>,
    ) -> Result<Self, SessionError> {
        if catalog.is_empty() {
            return Err(SessionError::Catalog(CatalogError::Empty));
        }

        let mut policy = SelectionPolicy::new();
        if let Some(mode) = options.mode_override() {
            policy = policy.with_mode_override(mode);
        }

        Ok(Self {
            catalog,
            policy,
            distractor_count: options.distractor_count(),
            answered: HashSet::new(),
            records: Vec::new(),
            current: None,
            last_feedback: None,
            correct_count: 0,
            incorrect_count: 0,
            started_at,
            completed_at: None,
        })
    }

    // Accessors
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn results(&self) -> &[AnswerRecord] {
        &self.records
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&QuestionView> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn last_feedback(&self) -> Option<AnswerFeedback> {
        self.last_feedback
    }

    #[must_use]
    pub fn correct_count(&self) -> u32 {
        self.correct_count
    }

    #[must_use]
    pub fn incorrect_count(&self) -> u32 {
        self.incorrect_count
    }

    /// Total number of items in this session's pool.
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.catalog.len()
    }

    /// Number of questions that have already been resolved.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answered.len()
    }

    /// Number of items not yet presented and resolved.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.catalog.len().saturating_sub(self.answered.len())
    }

    /// True between presenting a question and resolving its answer.
    #[must_use]
    pub fn awaiting_answer(&self) -> bool {
        self.phase() == SessionPhase::Presenting
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if self.completed_at.is_some() {
            SessionPhase::Complete
        } else if self.current.is_some() {
            SessionPhase::Presenting
        } else if self.last_feedback.is_some() {
            SessionPhase::Resolved
        } else {
            SessionPhase::Idle
        }
    }

    /// Fraction of answers scored as correct, 0.0 when nothing resolved yet.
    #[must_use]
    pub fn score(&self) -> f64 {
        let total = self.correct_count + self.incorrect_count;
        if total == 0 {
            return 0.0;
        }
        f64::from(self.correct_count) / f64::from(total)
    }

    /// Answered fraction of the pool, 0.0 to 1.0. Never decreases over the
    /// session lifetime.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        self.answered.len() as f64 / self.catalog.len() as f64
    }

    /// Returns a summary of the current session progress.
    #[must_use]
    pub fn progress_view(&self) -> SessionProgress {
        SessionProgress {
            total: self.total_items(),
            answered: self.answered_count(),
            remaining: self.remaining(),
            is_complete: self.is_complete(),
        }
    }

    /// Present the next question.
    ///
    /// Uses the process-wide random source and the system clock; see
    /// [`QuizSession::advance_with`] for the deterministic form.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::AwaitingAnswer` while a presented question is
    /// unresolved.
    pub fn advance(&mut self) -> Result<Option<QuestionView>, SessionError> {
        let mut rng = rand::rng();
        self.advance_with(&mut rng, Utc::now())
    }

    /// Present the next question using the given random source and time.
    ///
    /// Draws a not-yet-answered item uniformly at random, flips the
    /// presentation mode, and builds option labels for multiple choice.
    /// Returns `Ok(None)` once the pool is exhausted; in the terminal state
    /// repeated calls keep returning `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::AwaitingAnswer` while a presented question is
    /// unresolved.
    pub fn advance_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        now: DateTime<Utc>,
    ) -> Result<Option<QuestionView>, SessionError> {
        match self.phase() {
            SessionPhase::Presenting => Err(SessionError::AwaitingAnswer),
            SessionPhase::Complete => Ok(None),
            SessionPhase::Idle | SessionPhase::Resolved => {
                let Some(item) = self.policy.select_next(&self.catalog, &self.answered, rng)
                else {
                    self.completed_at = Some(now);
                    return Ok(None);
                };
                let item = item.clone();

                let mode = self.policy.choose_mode(rng);
                let options = match mode {
                    PresentationMode::MultipleChoice => Some(distractors::generate_options(
                        &item,
                        &self.catalog,
                        self.distractor_count,
                        rng,
                    )),
                    PresentationMode::Typed => None,
                };

                debug!(location = item.name(), mode = ?mode, "question presented");

                let view = QuestionView {
                    item,
                    mode,
                    options,
                };
                self.current = Some(view.clone());
                Ok(Some(view))
            }
        }
    }

    /// Resolve the current question with the player's input.
    ///
    /// Uses the system clock; see [`QuizSession::submit_answer_at`].
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoPendingQuestion` when no question awaits an
    /// answer. Counters are untouched on error.
    pub fn submit_answer(&mut self, input: &str) -> Result<AnswerOutcome, SessionError> {
        self.submit_answer_at(input, Utc::now())
    }

    /// Resolve the current question with the player's input at a given time.
    ///
    /// Multiple choice is judged by exact equality against the item name;
    /// typed answers go through the fuzzy matcher. Near misses count toward
    /// the correct tally but keep their own feedback classification. The
    /// item joins the answered set either way; answering the final item
    /// completes the session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoPendingQuestion` when no question awaits an
    /// answer. Counters are untouched on error.
    pub fn submit_answer_at(
        &mut self,
        input: &str,
        answered_at: DateTime<Utc>,
    ) -> Result<AnswerOutcome, SessionError> {
        let Some(question) = self.current.take() else {
            return Err(SessionError::NoPendingQuestion);
        };

        let feedback = match question.mode {
            PresentationMode::MultipleChoice => {
                if input == question.item.name() {
                    AnswerFeedback::Correct
                } else {
                    AnswerFeedback::Wrong
                }
            }
            PresentationMode::Typed => matcher::classify(input, question.item.name()),
        };

        if feedback.is_correct() {
            self.correct_count += 1;
        } else {
            self.incorrect_count += 1;
        }

        self.answered.insert(question.item.name().to_owned());
        self.records.push(AnswerRecord::new(
            question.item.name(),
            question.mode,
            feedback,
            input,
            answered_at,
        ));
        self.last_feedback = Some(feedback);

        if self.answered.len() >= self.catalog.len() {
            self.completed_at = Some(answered_at);
            debug!(total = self.records.len(), "quiz pool exhausted");
        }

        debug!(location = question.item.name(), feedback = ?feedback, "answer resolved");

        Ok(AnswerOutcome {
            feedback,
            correct_answer: question.item.name().to_owned(),
            correct_count: self.correct_count,
            incorrect_count: self.incorrect_count,
        })
    }

    /// Build the end-of-session summary.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotComplete` before the pool is exhausted.
    pub fn summary(&self) -> Result<SessionSummary, SessionError> {
        let Some(completed_at) = self.completed_at else {
            return Err(SessionError::NotComplete);
        };
        Ok(SessionSummary::from_records(
            self.started_at,
            completed_at,
            &self.records,
        )?)
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("catalog_len", &self.catalog.len())
            .field("answered", &self.answered.len())
            .field("phase", &self.phase())
            .field("correct_count", &self.correct_count)
            .field("incorrect_count", &self.incorrect_count)
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
