use std::io::{self, BufRead, Write};

use anyhow::Result;
use chrono::Utc;

use tango::{
    IntervalConfig, ReviewSession, SessionError, SessionFilters, SessionState, WordStatus,
    WordStorage,
};

/// Interactive review loop on stdin
///
/// Shows the written form, reveals the reading and meaning on enter, then
/// asks for a grade. Each answer is persisted immediately, so quitting
/// mid-session loses nothing.
pub fn run(
    storage: &WordStorage,
    filters: &SessionFilters,
    config: &IntervalConfig,
) -> Result<()> {
    let words = storage.list_words()?;
    let mut session = match ReviewSession::build(&words, Utc::now(), filters, config) {
        Ok(session) => session,
        Err(SessionError::NoEntriesDue) => {
            println!("Nothing pending review with these filters. Well done!");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while let Some(word) = session.current().cloned() {
        println!();
        println!(
            "[{}/{}] {}",
            session.position() + 1,
            session.len(),
            word.writing
        );
        print!("  enter to reveal, q to quit: ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else { break };
        if line?.trim() == "q" {
            break;
        }

        println!("  {}", word.reading);
        println!("  {}", word.meaning);
        println!(
            "  {} · {} · reviews: {}",
            word.word_type, word.level, word.review_count
        );

        let answer = loop {
            print!("  1) don't know  2) somewhat  3) know it  s) skip  q) quit: ");
            io::stdout().flush()?;
            let Some(line) = lines.next() else { break None };
            match line?.trim() {
                "1" => break Some(WordStatus::Unknown),
                "2" => break Some(WordStatus::Partial),
                "3" => break Some(WordStatus::Known),
                "s" => {
                    session.skip();
                    break None;
                }
                "q" => return Ok(()),
                _ => continue,
            }
        };

        if let Some(status) = answer {
            let updated = session.record_answer(word.id, status, Utc::now(), config)?;
            storage.update_word(&updated)?;
        }
    }

    if session.state() == SessionState::Completed {
        println!();
        println!("Review session complete 🎉");
    }

    Ok(())
}
