//! Review scheduling
//!
//! A fixed status-to-interval table, not an adaptive algorithm: unknown
//! words come back within minutes, partially known words the next day,
//! known words either retire or cycle on the longest interval depending
//! on configuration. All functions here are pure; the current instant is
//! always injected by the caller.

use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

use super::models::{Word, WordStatus};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerError {
    #[error("no review interval configured for status: {0}")]
    NoIntervalConfigured(WordStatus),

    #[error("next review time out of range")]
    TimestampOverflow,
}

pub type Result<T> = std::result::Result<T, SchedulerError>;

/// Delay before a word becomes reviewable again
///
/// `Never` is the retirement sentinel. It is never fed into timestamp
/// arithmetic; callers must branch on it instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewInterval {
    Every(Duration),
    Never,
}

/// Outcome of scheduling the next review
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextReview {
    At(DateTime<Utc>),
    /// The word is retired from review
    Never,
}

impl NextReview {
    /// The concrete timestamp, if the word is still in rotation
    pub fn at(&self) -> Option<DateTime<Utc>> {
        match self {
            NextReview::At(t) => Some(*t),
            NextReview::Never => None,
        }
    }
}

/// Per-status review interval table
///
/// `Excluded` has no entry on purpose: excluded words are filtered out
/// before scheduling, so asking for their interval is a caller bug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalConfig {
    pub unknown: ReviewInterval,
    pub partial: ReviewInterval,
    pub known: ReviewInterval,
}

impl Default for IntervalConfig {
    fn default() -> Self {
        Self {
            unknown: ReviewInterval::Every(Duration::minutes(5)),
            partial: ReviewInterval::Every(Duration::days(1)),
            known: ReviewInterval::Never,
        }
    }
}

impl IntervalConfig {
    /// Variant where known words cycle back weekly instead of retiring
    pub fn with_weekly_known() -> Self {
        Self {
            known: ReviewInterval::Every(Duration::weeks(1)),
            ..Self::default()
        }
    }

    /// Look up the interval for a status
    pub fn interval(&self, status: WordStatus) -> Result<ReviewInterval> {
        match status {
            WordStatus::Unknown => Ok(self.unknown),
            WordStatus::Partial => Ok(self.partial),
            WordStatus::Known => Ok(self.known),
            WordStatus::Excluded => Err(SchedulerError::NoIntervalConfigured(status)),
        }
    }

    /// Compute when a word with the given status becomes eligible again
    ///
    /// A word that has never been reviewed is eligible right away.
    pub fn compute_next_review(
        &self,
        status: WordStatus,
        last_reviewed_at: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> Result<NextReview> {
        let interval = self.interval(status)?;

        let last = match last_reviewed_at {
            Some(t) => t,
            None => return Ok(NextReview::At(now)),
        };

        match interval {
            ReviewInterval::Never => Ok(NextReview::Never),
            ReviewInterval::Every(delta) => last
                .checked_add_signed(delta)
                .map(NextReview::At)
                .ok_or(SchedulerError::TimestampOverflow),
        }
    }

    /// Whether a word is eligible for review at `now`
    pub fn is_due(&self, word: &Word, now: DateTime<Utc>) -> bool {
        if word.status == WordStatus::Excluded {
            return false;
        }
        // Retired statuses never come due, even with a stale timestamp
        if matches!(self.interval(word.status), Ok(ReviewInterval::Never)) {
            return false;
        }
        match word.next_review_at {
            None => true,
            Some(t) => t <= now,
        }
    }
}
