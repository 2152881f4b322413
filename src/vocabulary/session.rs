//! Review sessions
//!
//! One ordered pass over the words currently due: unknown words first,
//! everything else shuffled behind them. When the cursor runs off the end,
//! partially known words that were never answered this pass are queued up
//! once more; answering a word adds it to the session's reviewed set, so
//! the repeat pool only shrinks and the pass terminates.
//!
//! A session owns a snapshot of the due words. Every answer returns the
//! updated word for the caller to persist; the session itself never writes
//! to storage.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::models::{Language, Word, WordStatus};
use super::scheduler::{IntervalConfig, SchedulerError};

#[derive(Error, Debug, PartialEq)]
pub enum SessionError {
    #[error("no words due for review")]
    NoEntriesDue,

    #[error("answer for word {got} but the current word is {expected}")]
    WordMismatch { expected: Uuid, got: Uuid },

    #[error("session is already completed")]
    Completed,

    #[error(transparent)]
    Scheduler(#[from] SchedulerError),
}

pub type Result<T> = std::result::Result<T, SessionError>;

/// Optional language/level restriction, exact-match-or-any
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

impl SessionFilters {
    pub fn matches(&self, word: &Word) -> bool {
        self.language.map_or(true, |l| word.language == l)
            && self.level.as_deref().map_or(true, |lv| word.level == lv)
    }
}

/// Where the pass stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    InProgress,
    Completed,
}

/// One review pass over the due words
#[derive(Debug, Clone)]
pub struct ReviewSession {
    queue: Vec<Word>,
    cursor: usize,
    reviewed: HashSet<Uuid>,
}

impl ReviewSession {
    /// Build a session from the full word collection
    ///
    /// Applies the filters, keeps the due subset, and orders it with
    /// unknown words strictly first. Within each tier the order is
    /// shuffled. Signals `NoEntriesDue` instead of building an empty
    /// session.
    pub fn build(
        words: &[Word],
        now: DateTime<Utc>,
        filters: &SessionFilters,
        config: &IntervalConfig,
    ) -> Result<Self> {
        let mut due: Vec<Word> = words
            .iter()
            .filter(|w| filters.matches(w) && config.is_due(w, now))
            .cloned()
            .collect();

        if due.is_empty() {
            return Err(SessionError::NoEntriesDue);
        }

        due.shuffle(&mut rand::thread_rng());
        // Stable sort keeps the shuffled order within each tier
        due.sort_by_key(|w| w.status != WordStatus::Unknown);

        log::debug!("built review session with {} due words", due.len());

        Ok(Self {
            queue: due,
            cursor: 0,
            reviewed: HashSet::new(),
        })
    }

    /// The word under the cursor, or `None` once completed
    pub fn current(&self) -> Option<&Word> {
        self.queue.get(self.cursor)
    }

    /// Zero-based cursor position
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Queue length, including any repeated words
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn state(&self) -> SessionState {
        if self.cursor < self.queue.len() {
            SessionState::InProgress
        } else {
            SessionState::Completed
        }
    }

    /// Record the user's answer for the current word
    ///
    /// `word_id` must be the id of the word under the cursor. Stamps the
    /// review timestamps via the scheduler, bumps the review count, marks
    /// the word reviewed for this pass and advances. Returns the updated
    /// word for the caller to persist.
    pub fn record_answer(
        &mut self,
        word_id: Uuid,
        new_status: WordStatus,
        now: DateTime<Utc>,
        config: &IntervalConfig,
    ) -> Result<Word> {
        let current = match self.queue.get(self.cursor) {
            Some(w) => w,
            None => return Err(SessionError::Completed),
        };
        if current.id != word_id {
            return Err(SessionError::WordMismatch {
                expected: current.id,
                got: word_id,
            });
        }

        let next = config.compute_next_review(new_status, Some(now), now)?;

        let mut updated = current.clone();
        updated.status = new_status;
        updated.last_reviewed_at = Some(now);
        updated.next_review_at = next.at();
        updated.review_count += 1;

        // The repeat check at the end of the pass looks at the in-session
        // copy, so it has to see the status the user just answered with
        self.queue[self.cursor].status = new_status;
        self.reviewed.insert(word_id);
        self.advance();

        Ok(updated)
    }

    /// Advance past the current word without answering it
    ///
    /// A skipped partial word is not in the reviewed set, so it comes
    /// around again at the end of the pass.
    pub fn skip(&mut self) {
        if self.cursor < self.queue.len() {
            self.advance();
        }
    }

    fn advance(&mut self) {
        if self.cursor + 1 < self.queue.len() {
            self.cursor += 1;
            return;
        }

        // End of the queue: repeat the partial words not yet answered
        // this pass, preserving their relative order
        let to_repeat: Vec<Word> = self
            .queue
            .iter()
            .filter(|w| w.status == WordStatus::Partial && !self.reviewed.contains(&w.id))
            .cloned()
            .collect();

        if to_repeat.is_empty() {
            self.cursor = self.queue.len();
            return;
        }

        log::debug!("repeating {} partial words", to_repeat.len());
        self.queue.extend(to_repeat);
        self.cursor += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn word(writing: &str, status: WordStatus) -> Word {
        let mut w = Word::new(
            Language::Japanese,
            writing.into(),
            format!("{}-reading", writing),
            format!("{}-meaning", writing),
        );
        w.status = status;
        w
    }

    #[test]
    fn test_empty_pool_signals_no_entries_due() {
        let config = IntervalConfig::default();
        let result = ReviewSession::build(&[], at(0), &SessionFilters::default(), &config);
        assert_eq!(result.unwrap_err(), SessionError::NoEntriesDue);
    }

    #[test]
    fn test_all_excluded_signals_no_entries_due() {
        let config = IntervalConfig::default();
        let words = vec![
            word("一", WordStatus::Excluded),
            word("二", WordStatus::Excluded),
        ];
        let result = ReviewSession::build(&words, at(0), &SessionFilters::default(), &config);
        assert_eq!(result.unwrap_err(), SessionError::NoEntriesDue);
    }

    #[test]
    fn test_unknown_words_come_first() {
        let config = IntervalConfig::default();
        let mut words = Vec::new();
        for i in 0..8 {
            words.push(word(&format!("p{}", i), WordStatus::Partial));
            words.push(word(&format!("u{}", i), WordStatus::Unknown));
        }

        let session =
            ReviewSession::build(&words, at(0), &SessionFilters::default(), &config).unwrap();

        let statuses: Vec<WordStatus> = session.queue.iter().map(|w| w.status).collect();
        let first_non_unknown = statuses
            .iter()
            .position(|s| *s != WordStatus::Unknown)
            .unwrap();
        assert_eq!(first_non_unknown, 8);
        assert!(statuses[first_non_unknown..]
            .iter()
            .all(|s| *s != WordStatus::Unknown));
    }

    #[test]
    fn test_filters_restrict_the_pool() {
        let config = IntervalConfig::default();
        let mut ja = word("犬", WordStatus::Unknown);
        ja.level = "N5/HSK1".into();
        let mut ko = word("개", WordStatus::Unknown);
        ko.language = Language::Korean;
        ko.level = "TOPIK1".into();

        let words = vec![ja, ko.clone()];

        let filters = SessionFilters {
            language: Some(Language::Korean),
            level: None,
        };
        let session = ReviewSession::build(&words, at(0), &filters, &config).unwrap();
        assert_eq!(session.len(), 1);
        assert_eq!(session.current().unwrap().id, ko.id);

        let filters = SessionFilters {
            language: Some(Language::Korean),
            level: Some("N5/HSK1".into()),
        };
        let result = ReviewSession::build(&words, at(0), &filters, &config);
        assert_eq!(result.unwrap_err(), SessionError::NoEntriesDue);
    }

    #[test]
    fn test_answer_stamps_review_state() {
        let config = IntervalConfig::default();
        let words = vec![word("犬", WordStatus::Unknown)];
        let now = at(1_000_000);

        let mut session =
            ReviewSession::build(&words, now, &SessionFilters::default(), &config).unwrap();
        let id = session.current().unwrap().id;

        let updated = session
            .record_answer(id, WordStatus::Partial, now, &config)
            .unwrap();

        assert_eq!(updated.status, WordStatus::Partial);
        assert_eq!(updated.last_reviewed_at, Some(now));
        assert_eq!(updated.next_review_at, Some(now + Duration::days(1)));
        assert_eq!(updated.review_count, 1);

        // Not due again until the day has passed, due at the boundary
        assert!(!config.is_due(&updated, now));
        assert!(!config.is_due(&updated, now + Duration::hours(23)));
        assert!(config.is_due(&updated, now + Duration::days(1)));

        assert_eq!(session.state(), SessionState::Completed);
    }

    #[test]
    fn test_mismatched_answer_is_rejected() {
        let config = IntervalConfig::default();
        let words = vec![word("犬", WordStatus::Unknown)];
        let mut session =
            ReviewSession::build(&words, at(0), &SessionFilters::default(), &config).unwrap();

        let expected = session.current().unwrap().id;
        let got = Uuid::new_v4();
        let result = session.record_answer(got, WordStatus::Known, at(0), &config);
        assert_eq!(result.unwrap_err(), SessionError::WordMismatch { expected, got });

        // The rejected answer must not have advanced anything
        assert_eq!(session.position(), 0);
        assert_eq!(session.state(), SessionState::InProgress);
    }

    #[test]
    fn test_answer_after_completion_is_rejected() {
        let config = IntervalConfig::default();
        let words = vec![word("犬", WordStatus::Unknown)];
        let mut session =
            ReviewSession::build(&words, at(0), &SessionFilters::default(), &config).unwrap();
        let id = session.current().unwrap().id;

        session
            .record_answer(id, WordStatus::Known, at(0), &config)
            .unwrap();
        assert_eq!(session.state(), SessionState::Completed);

        let result = session.record_answer(id, WordStatus::Known, at(0), &config);
        assert_eq!(result.unwrap_err(), SessionError::Completed);
    }

    #[test]
    fn test_excluded_answer_propagates_scheduler_error() {
        let config = IntervalConfig::default();
        let words = vec![word("犬", WordStatus::Unknown)];
        let mut session =
            ReviewSession::build(&words, at(0), &SessionFilters::default(), &config).unwrap();
        let id = session.current().unwrap().id;

        let result = session.record_answer(id, WordStatus::Excluded, at(0), &config);
        assert_eq!(
            result.unwrap_err(),
            SessionError::Scheduler(SchedulerError::NoIntervalConfigured(WordStatus::Excluded))
        );
    }

    #[test]
    fn test_skipped_partial_word_repeats_once() {
        let config = IntervalConfig::default();
        let unknown = word("犬", WordStatus::Unknown);
        let partial = word("猫", WordStatus::Partial);
        let partial_id = partial.id;
        let now = at(0);

        let mut session = ReviewSession::build(
            &[unknown.clone(), partial],
            now,
            &SessionFilters::default(),
            &config,
        )
        .unwrap();

        // Unknown first, answer it
        assert_eq!(session.current().unwrap().id, unknown.id);
        session
            .record_answer(unknown.id, WordStatus::Known, now, &config)
            .unwrap();

        // Skip the partial word: end of queue, it comes around again
        assert_eq!(session.current().unwrap().id, partial_id);
        session.skip();
        assert_eq!(session.state(), SessionState::InProgress);
        assert_eq!(session.current().unwrap().id, partial_id);
        assert_eq!(session.len(), 3);

        // Answering it partial again marks it reviewed; no second repeat
        session
            .record_answer(partial_id, WordStatus::Partial, now, &config)
            .unwrap();
        assert_eq!(session.state(), SessionState::Completed);
        assert_eq!(session.len(), 3);
    }

    #[test]
    fn test_answered_partials_do_not_repeat() {
        let config = IntervalConfig::with_weekly_known();
        let now = at(2_000_000);

        let unknown = word("一", WordStatus::Unknown);
        let partial = word("二", WordStatus::Partial);
        let mut known = word("三", WordStatus::Known);
        known.last_reviewed_at = Some(now - Duration::weeks(2));
        known.next_review_at = Some(now - Duration::weeks(1));

        let words = vec![unknown.clone(), partial, known];
        let mut session =
            ReviewSession::build(&words, now, &SessionFilters::default(), &config).unwrap();
        assert_eq!(session.len(), 3);
        assert_eq!(session.current().unwrap().id, unknown.id);

        // Answer every word with its own status; partials end up in the
        // reviewed set, so the pass ends after exactly one round
        for _ in 0..3 {
            let current = session.current().unwrap().clone();
            session
                .record_answer(current.id, current.status, now, &config)
                .unwrap();
        }
        assert_eq!(session.state(), SessionState::Completed);
        assert_eq!(session.len(), 3);
    }
}
