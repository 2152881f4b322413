//! Storage for the word collection
//!
//! Layout under the data directory:
//! ```text
//! {data-dir}/
//! └── words.json   # Array of all words
//! ```
//!
//! The store is the single owner of the durable collection. Sessions and
//! the scheduler never touch it directly; they hand updated words back to
//! the caller, which persists them here.

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use super::models::{VocabStats, Word, WordStatus};
use super::scheduler::IntervalConfig;
use super::session::SessionFilters;

#[derive(Error, Debug)]
pub enum WordStorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Word not found: {0}")]
    WordNotFound(Uuid),
}

pub type Result<T> = std::result::Result<T, WordStorageError>;

/// Storage manager for the vocabulary collection
pub struct WordStorage {
    /// Base path for the collection (e.g., ~/.local/share/tango)
    data_dir: PathBuf,
}

impl WordStorage {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Platform data directory for the default store
    pub fn default_data_dir() -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join("tango"))
    }

    fn words_path(&self) -> PathBuf {
        self.data_dir.join("words.json")
    }

    /// Initialize the storage directory
    pub fn init(&self) -> Result<()> {
        fs::create_dir_all(&self.data_dir)?;

        let words_path = self.words_path();
        if !words_path.exists() {
            let empty: Vec<Word> = Vec::new();
            fs::write(&words_path, serde_json::to_string_pretty(&empty)?)?;
        }

        Ok(())
    }

    // ==================== Word Operations ====================

    /// List all words, newest first
    pub fn list_words(&self) -> Result<Vec<Word>> {
        let words_path = self.words_path();
        if !words_path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&words_path)?;
        let words: Vec<Word> = serde_json::from_str(&content)?;
        Ok(words)
    }

    fn save_words(&self, words: &[Word]) -> Result<()> {
        self.init()?;
        fs::write(self.words_path(), serde_json::to_string_pretty(words)?)?;
        Ok(())
    }

    /// Get a specific word
    pub fn get_word(&self, id: Uuid) -> Result<Word> {
        let words = self.list_words()?;
        words
            .into_iter()
            .find(|w| w.id == id)
            .ok_or(WordStorageError::WordNotFound(id))
    }

    /// Add a new word, placed at the head of the collection
    pub fn add_word(&self, word: Word) -> Result<Word> {
        let mut words = self.list_words()?;
        words.insert(0, word.clone());
        self.save_words(&words)?;
        log::debug!("added word {} ({})", word.writing, word.id);
        Ok(word)
    }

    /// Replace a word wholesale
    ///
    /// Callers edit a word obtained from the store, so `id` and
    /// `created_at` carry over unchanged.
    pub fn update_word(&self, word: &Word) -> Result<()> {
        let mut words = self.list_words()?;
        let pos = words
            .iter()
            .position(|w| w.id == word.id)
            .ok_or(WordStorageError::WordNotFound(word.id))?;

        words[pos] = word.clone();
        self.save_words(&words)?;
        Ok(())
    }

    /// Change only the status of a word, from the list view
    ///
    /// Leaves the review timestamps and count alone; those change only
    /// when an answer is recorded in a session.
    pub fn set_status(&self, id: Uuid, status: WordStatus) -> Result<Word> {
        let mut word = self.get_word(id)?;
        word.status = status;
        self.update_word(&word)?;
        Ok(word)
    }

    /// Delete a word
    pub fn delete_word(&self, id: Uuid) -> Result<()> {
        let mut words = self.list_words()?;
        let before = words.len();
        words.retain(|w| w.id != id);
        if words.len() == before {
            return Err(WordStorageError::WordNotFound(id));
        }
        self.save_words(&words)?;
        Ok(())
    }

    // ==================== Queries ====================

    /// Words matching the language/level filters
    pub fn filtered_words(&self, filters: &SessionFilters) -> Result<Vec<Word>> {
        let words = self.list_words()?;
        Ok(words.into_iter().filter(|w| filters.matches(w)).collect())
    }

    /// Words eligible for review at `now`, under the filters
    pub fn due_words(
        &self,
        now: DateTime<Utc>,
        filters: &SessionFilters,
        config: &IntervalConfig,
    ) -> Result<Vec<Word>> {
        let words = self.filtered_words(filters)?;
        Ok(words
            .into_iter()
            .filter(|w| config.is_due(w, now))
            .collect())
    }

    /// Sorted unique level labels across the collection
    pub fn levels(&self) -> Result<Vec<String>> {
        let words = self.list_words()?;
        let mut levels: Vec<String> = words
            .into_iter()
            .map(|w| w.level)
            .filter(|l| !l.is_empty())
            .collect();
        levels.sort();
        levels.dedup();
        Ok(levels)
    }

    /// Collection statistics
    pub fn stats(&self, now: DateTime<Utc>, config: &IntervalConfig) -> Result<VocabStats> {
        let words = self.list_words()?;

        let mut stats = VocabStats::default();
        stats.total_words = words.len();

        for word in &words {
            *stats.by_language.entry(word.language).or_insert(0) += 1;
            *stats.by_status.entry(word.status).or_insert(0) += 1;
            if config.is_due(word, now) {
                stats.due_words += 1;
            }
        }

        Ok(stats)
    }

    // ==================== Backup ====================

    /// The whole collection as pretty-printed JSON
    pub fn export_json(&self) -> Result<String> {
        let words = self.list_words()?;
        Ok(serde_json::to_string_pretty(&words)?)
    }

    /// Replace the collection with the words in `json`
    ///
    /// Returns the number of imported words. Nothing is written when the
    /// input fails to parse.
    pub fn import_json(&self, json: &str) -> Result<usize> {
        let words: Vec<Word> = serde_json::from_str(json)?;
        self.save_words(&words)?;
        log::info!("imported {} words", words.len());
        Ok(words.len())
    }
}
