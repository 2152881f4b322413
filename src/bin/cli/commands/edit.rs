use anyhow::Result;
use uuid::Uuid;

use tango::{WordStatus, WordStorage};

use crate::OutputFormat;

pub fn run_set_status(
    storage: &WordStorage,
    id: Uuid,
    status: WordStatus,
    format: &OutputFormat,
) -> Result<()> {
    let word = storage.set_status(id, status)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&word)?);
        }
        OutputFormat::Plain => {
            println!("\"{}\" is now {}", word.writing, word.status);
        }
    }

    Ok(())
}

pub fn run_rm(storage: &WordStorage, id: Uuid) -> Result<()> {
    let word = storage.get_word(id)?;
    storage.delete_word(id)?;
    println!("Deleted \"{}\" ({})", word.writing, word.id);
    Ok(())
}
