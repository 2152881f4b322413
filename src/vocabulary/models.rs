//! Data models for the vocabulary trainer

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Language a word belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Language {
    Japanese,
    Chinese,
    Korean,
    Other,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Language::Japanese => "japanese",
            Language::Chinese => "chinese",
            Language::Korean => "korean",
            Language::Other => "other",
        };
        f.write_str(name)
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "japanese" => Ok(Language::Japanese),
            "chinese" => Ok(Language::Chinese),
            "korean" => Ok(Language::Korean),
            "other" => Ok(Language::Other),
            _ => Err(format!(
                "unknown language '{}' (expected japanese, chinese, korean or other)",
                s
            )),
        }
    }
}

/// How well the user knows a word
///
/// Governs the review interval and whether the word enters sessions at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WordStatus {
    /// Not known yet; highest review priority
    Unknown,
    /// Partially known; reviewed again the next day
    Partial,
    /// Known; retired or cycled on the longest interval, per configuration
    Known,
    /// Excluded from review entirely
    Excluded,
}

impl Default for WordStatus {
    fn default() -> Self {
        Self::Unknown
    }
}

impl fmt::Display for WordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WordStatus::Unknown => "unknown",
            WordStatus::Partial => "partial",
            WordStatus::Known => "known",
            WordStatus::Excluded => "excluded",
        };
        f.write_str(name)
    }
}

impl FromStr for WordStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unknown" => Ok(WordStatus::Unknown),
            "partial" => Ok(WordStatus::Partial),
            "known" => Ok(WordStatus::Known),
            "excluded" => Ok(WordStatus::Excluded),
            _ => Err(format!(
                "unknown status '{}' (expected unknown, partial, known or excluded)",
                s
            )),
        }
    }
}

/// A vocabulary entry: the word itself plus its review state
///
/// `next_review_at` is derived by the scheduler only. `None` together with
/// `last_reviewed_at == None` means the word has never been reviewed and is
/// immediately eligible; a retired word carries `None` as well and is kept
/// out of sessions by its status.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    pub id: Uuid,
    /// Written form (kanji/hanzi/hangul)
    pub writing: String,
    /// Reading (hiragana/pinyin/romanization)
    pub reading: String,
    pub meaning: String,
    /// Part of speech (noun, verb, ...), free-form
    #[serde(rename = "type", default)]
    pub word_type: String,
    /// Proficiency level label ("N5/HSK1", "TOPIK1", ...), free-form
    #[serde(default)]
    pub level: String,
    pub language: Language,
    #[serde(default)]
    pub status: WordStatus,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_reviewed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_review_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub review_count: u32,
}

impl Word {
    pub fn new(language: Language, writing: String, reading: String, meaning: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            writing,
            reading,
            meaning,
            word_type: String::new(),
            level: String::new(),
            language,
            status: WordStatus::default(),
            created_at: Utc::now(),
            last_reviewed_at: None,
            next_review_at: None,
            review_count: 0,
        }
    }
}

/// Collection statistics, for the list header and the stats command
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabStats {
    pub total_words: usize,
    pub due_words: usize,
    pub by_language: HashMap<Language, usize>,
    pub by_status: HashMap<WordStatus, usize>,
}
