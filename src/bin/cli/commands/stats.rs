use anyhow::Result;
use chrono::Utc;

use tango::{IntervalConfig, Language, WordStatus, WordStorage};

use crate::OutputFormat;

pub fn run(storage: &WordStorage, config: &IntervalConfig, format: &OutputFormat) -> Result<()> {
    let stats = storage.stats(Utc::now(), config)?;
    let levels = storage.levels()?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "stats": stats,
                "levels": levels,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!(
                "{} words · {} pending review",
                stats.total_words, stats.due_words
            );

            let languages = [
                Language::Japanese,
                Language::Chinese,
                Language::Korean,
                Language::Other,
            ];
            println!();
            println!("By language:");
            for language in languages {
                let count = stats.by_language.get(&language).copied().unwrap_or(0);
                println!("  {:<10} {}", language.to_string(), count);
            }

            let statuses = [
                WordStatus::Unknown,
                WordStatus::Partial,
                WordStatus::Known,
                WordStatus::Excluded,
            ];
            println!();
            println!("By status:");
            for status in statuses {
                let count = stats.by_status.get(&status).copied().unwrap_or(0);
                println!("  {:<10} {}", status.to_string(), count);
            }

            if !levels.is_empty() {
                println!();
                println!("Levels: {}", levels.join(", "));
            }
        }
    }

    Ok(())
}
