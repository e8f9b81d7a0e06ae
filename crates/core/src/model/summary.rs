use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::{AnswerFeedback, AnswerRecord};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SummaryError {
    #[error("completed_at is before started_at")]
    InvalidTimeRange,

    #[error("too many records for a single session: {len}")]
    TooManyRecords { len: usize },

    #[error("total answered ({total}) does not match feedback counts ({sum})")]
    CountMismatch { total: u32, sum: u32 },
}

/// Aggregate summary for a completed quiz session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
    total_answered: u32,
    exact: u32,
    near_misses: u32,
    wrong: u32,
}

impl SessionSummary {
    /// Build a summary from raw counts.
    ///
    /// # Errors
    ///
    /// Returns `SummaryError::InvalidTimeRange` if `completed_at` is before
    /// `started_at`, and `SummaryError::CountMismatch` if the feedback
    /// counts do not sum to `total_answered`.
    pub fn from_counts(
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
        total_answered: u32,
        exact: u32,
        near_misses: u32,
        wrong: u32,
    ) -> Result<Self, SummaryError> {
        if completed_at < started_at {
            return Err(SummaryError::InvalidTimeRange);
        }
        let sum = exact + near_misses + wrong;
        if sum != total_answered {
            return Err(SummaryError::CountMismatch {
                total: total_answered,
                sum,
            });
        }

        Ok(Self {
            started_at,
            completed_at,
            total_answered,
            exact,
            near_misses,
            wrong,
        })
    }

    /// Build a summary from the session's answer records.
    ///
    /// # Errors
    ///
    /// Returns `SummaryError::InvalidTimeRange` if `completed_at` is before
    /// `started_at`, and `SummaryError::TooManyRecords` if the record count
    /// cannot fit in `u32`.
    pub fn from_records(
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
        records: &[AnswerRecord],
    ) -> Result<Self, SummaryError> {
        if completed_at < started_at {
            return Err(SummaryError::InvalidTimeRange);
        }
        let mut exact = 0_u32;
        let mut near_misses = 0_u32;
        let mut wrong = 0_u32;

        for record in records {
            match record.feedback {
                AnswerFeedback::Correct => exact = exact.saturating_add(1),
                AnswerFeedback::NearMiss => near_misses = near_misses.saturating_add(1),
                AnswerFeedback::Wrong => wrong = wrong.saturating_add(1),
            }
        }

        let total_answered = u32::try_from(records.len())
            .map_err(|_| SummaryError::TooManyRecords { len: records.len() })?;

        Self::from_counts(
            started_at,
            completed_at,
            total_answered,
            exact,
            near_misses,
            wrong,
        )
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    #[must_use]
    pub fn total_answered(&self) -> u32 {
        self.total_answered
    }

    #[must_use]
    pub fn exact(&self) -> u32 {
        self.exact
    }

    #[must_use]
    pub fn near_misses(&self) -> u32 {
        self.near_misses
    }

    #[must_use]
    pub fn wrong(&self) -> u32 {
        self.wrong
    }

    /// Fraction of answers scored as correct (exact plus near misses).
    ///
    /// Returns 0.0 for an empty session.
    #[must_use]
    pub fn score(&self) -> f64 {
        if self.total_answered == 0 {
            return 0.0;
        }
        f64::from(self.exact + self.near_misses) / f64::from(self.total_answered)
    }
}
