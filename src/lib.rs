//! Tango — personal vocabulary flashcards with spaced-repetition review
//!
//! The core lives in [`vocabulary`]: word models, the fixed
//! status-to-interval scheduler, review sessions with their repeat rule,
//! and the JSON word store. The CLI binary is a thin collaborator on top.

pub mod vocabulary;

pub use vocabulary::{
    IntervalConfig, Language, NextReview, ReviewInterval, ReviewSession, SchedulerError,
    SessionError, SessionFilters, SessionState, VocabStats, Word, WordStatus, WordStorage,
    WordStorageError,
};
