//! Vocabulary and spaced repetition review for Tango
//!
//! This module provides:
//! - Word models (writing/reading/meaning plus review state)
//! - The fixed status-to-interval review scheduler
//! - Review session construction and progression
//! - JSON word storage

pub mod models;
pub mod scheduler;
pub mod session;
pub mod storage;

pub use models::*;
pub use scheduler::{IntervalConfig, NextReview, ReviewInterval, SchedulerError};
pub use session::{ReviewSession, SessionError, SessionFilters, SessionState};
pub use storage::{WordStorage, WordStorageError};
