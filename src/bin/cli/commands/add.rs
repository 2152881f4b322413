use anyhow::Result;

use tango::{Language, Word, WordStatus, WordStorage};

use crate::OutputFormat;

#[allow(clippy::too_many_arguments)]
pub fn run(
    storage: &WordStorage,
    language: Language,
    writing: String,
    reading: String,
    meaning: String,
    word_type: String,
    level: String,
    status: WordStatus,
    format: &OutputFormat,
) -> Result<()> {
    let mut word = Word::new(language, writing, reading, meaning);
    word.word_type = word_type;
    word.level = level;
    word.status = status;

    let word = storage.add_word(word)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&word)?);
        }
        OutputFormat::Plain => {
            println!("Added \"{}\" ({}) — {}", word.writing, word.reading, word.meaning);
            println!("  ID: {}", word.id);
        }
    }

    Ok(())
}
