use std::sync::Arc;

use topo_core::Clock;
use topo_core::model::{Catalog, Category};

use crate::error::SessionError;

use super::service::{QuizSession, SessionOptions};
use super::view::{AnswerOutcome, QuestionView};

/// Result of answering a single question in a session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionAnswerResult {
    pub outcome: AnswerOutcome,
    pub is_complete: bool,
}

/// Starts sessions against a shared catalog and steps them through answers.
///
/// The catalog is held read-only and shared by every session this service
/// starts. Any pause between feedback and the next question is the caller's
/// timer: the service only advances a session when asked to.
#[derive(Debug, Clone)]
pub struct QuizLoopService {
    clock: Clock,
    catalog: Arc<Catalog>,
    options: SessionOptions,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(clock: Clock, catalog: Arc<Catalog>) -> Self {
        Self {
            clock,
            catalog,
            options: SessionOptions::new(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: SessionOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Start a new session over the whole catalog.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Catalog` if the catalog holds no items.
    pub fn start_session(&self) -> Result<QuizSession, SessionError> {
        QuizSession::new(
            Arc::clone(&self.catalog),
            self.options.clone(),
            self.clock.now(),
        )
    }

    /// Start a new session restricted to a single category.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Catalog` when the catalog has no items in that
    /// category.
    pub fn start_session_category(&self, category: Category) -> Result<QuizSession, SessionError> {
        let filtered = Arc::new(self.catalog.filter_category(category)?);
        QuizSession::new(filtered, self.options.clone(), self.clock.now())
    }

    /// Present the next question, stamping time from the service clock.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::AwaitingAnswer` while a presented question is
    /// unresolved.
    pub fn advance(&self, session: &mut QuizSession) -> Result<Option<QuestionView>, SessionError> {
        let mut rng = rand::rng();
        session.advance_with(&mut rng, self.clock.now())
    }

    /// Resolve the current question and report whether the pool is done.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoPendingQuestion` when no question awaits an
    /// answer.
    pub fn answer_current(
        &self,
        session: &mut QuizSession,
        input: &str,
    ) -> Result<SessionAnswerResult, SessionError> {
        let outcome = session.submit_answer_at(input, self.clock.now())?;

        Ok(SessionAnswerResult {
            outcome,
            is_complete: session.is_complete(),
        })
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use topo_core::model::{LocationItem, PresentationMode};
    use topo_core::time::fixed_clock;

    fn build_catalog() -> Arc<Catalog> {
        Arc::new(
            Catalog::new(vec![
                LocationItem::new("Hamburg", Category::City).unwrap(),
                LocationItem::new("Bremen", Category::City).unwrap(),
                LocationItem::new("Rijn", Category::River).unwrap(),
            ])
            .unwrap(),
        )
    }

    fn build_service() -> QuizLoopService {
        QuizLoopService::new(fixed_clock(), build_catalog()).with_options(
            SessionOptions::new().with_mode_override(PresentationMode::Typed),
        )
    }

    #[test]
    fn sessions_share_the_catalog() {
        let service = build_service();
        let first = service.start_session().unwrap();
        let second = service.start_session().unwrap();

        assert_eq!(first.total_items(), 3);
        assert_eq!(second.total_items(), 3);
        assert!(std::ptr::eq(first.catalog(), second.catalog()));
    }

    #[test]
    fn category_filter_narrows_the_pool() {
        let service = build_service();
        let session = service.start_session_category(Category::River).unwrap();
        assert_eq!(session.total_items(), 1);
    }

    #[test]
    fn category_without_items_fails_to_start() {
        let service = build_service();
        let err = service.start_session_category(Category::Sea).unwrap_err();
        assert!(matches!(err, SessionError::Catalog(_)));
    }

    #[test]
    fn answer_current_reports_completion() {
        let service = build_service();
        let mut session = service.start_session_category(Category::River).unwrap();

        let view = service.advance(&mut session).unwrap().unwrap();
        let result = service.answer_current(&mut session, view.item.name()).unwrap();

        assert!(result.outcome.feedback.is_correct());
        assert!(result.is_complete);
        assert!(session.is_complete());
    }
}
