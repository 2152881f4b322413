use anyhow::Result;
use chrono::Utc;

use tango::{IntervalConfig, SessionFilters, Word, WordStorage};

use crate::OutputFormat;

pub fn run_list(
    storage: &WordStorage,
    filters: &SessionFilters,
    config: &IntervalConfig,
    format: &OutputFormat,
) -> Result<()> {
    let words = storage.filtered_words(filters)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&words)?);
        }
        OutputFormat::Plain => {
            if words.is_empty() {
                println!("No words match these filters.");
                return Ok(());
            }
            let now = Utc::now();
            let due = words.iter().filter(|w| config.is_due(w, now)).count();
            println!("{} words · {} pending review", words.len(), due);
            for word in &words {
                print_word(word);
            }
        }
    }

    Ok(())
}

pub fn run_due(
    storage: &WordStorage,
    filters: &SessionFilters,
    config: &IntervalConfig,
    format: &OutputFormat,
) -> Result<()> {
    let words = storage.due_words(Utc::now(), filters, config)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&words)?);
        }
        OutputFormat::Plain => {
            if words.is_empty() {
                println!("Nothing pending review with these filters.");
                return Ok(());
            }
            println!("{} words pending review", words.len());
            for word in &words {
                print_word(word);
            }
        }
    }

    Ok(())
}

fn print_word(word: &Word) {
    println!();
    println!("{}  ({})", word.writing, word.reading);
    println!("  {}", word.meaning);
    println!(
        "  {} · {} · {} · {}",
        word.language, word.word_type, word.level, word.status
    );
    if word.review_count > 0 {
        let last = word
            .last_reviewed_at
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "never".into());
        println!("  reviews: {} · last: {}", word.review_count, last);
    }
    println!("  id: {}", word.id);
}
