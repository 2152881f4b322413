mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use uuid::Uuid;

use tango::{IntervalConfig, Language, SessionFilters, WordStatus, WordStorage};

#[derive(Parser)]
#[command(
    name = "tango",
    about = "Vocabulary flashcards with spaced-repetition review",
    version
)]
struct Cli {
    /// Use a specific data directory (default: platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Known words cycle back weekly instead of retiring
    #[arg(long, global = true)]
    weekly_known: bool,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Add a new word
    Add {
        /// Written form (kanji/hanzi/hangul)
        writing: String,
        /// Reading (hiragana/pinyin/romanization)
        reading: String,
        /// Meaning
        meaning: String,
        /// Language: japanese, chinese, korean or other
        #[arg(long, default_value = "japanese")]
        language: Language,
        /// Part of speech (noun, verb, ...)
        #[arg(long, default_value = "noun")]
        word_type: String,
        /// Level label (N5/HSK1, TOPIK1, ...)
        #[arg(long, default_value = "N5/HSK1")]
        level: String,
        /// Initial status: unknown, partial, known or excluded
        #[arg(long, default_value = "unknown")]
        status: WordStatus,
    },

    /// List words
    List {
        /// Filter by language
        #[arg(long)]
        language: Option<Language>,
        /// Filter by level label
        #[arg(long)]
        level: Option<String>,
    },

    /// Show words pending review
    Due {
        /// Filter by language
        #[arg(long)]
        language: Option<Language>,
        /// Filter by level label
        #[arg(long)]
        level: Option<String>,
    },

    /// Run an interactive review session
    Review {
        /// Filter by language
        #[arg(long)]
        language: Option<Language>,
        /// Filter by level label
        #[arg(long)]
        level: Option<String>,
    },

    /// Collection statistics
    Stats,

    /// Set a word's status without reviewing it
    SetStatus {
        /// Word id
        id: Uuid,
        /// New status: unknown, partial, known or excluded
        status: WordStatus,
    },

    /// Delete a word
    Rm {
        /// Word id
        id: Uuid,
    },

    /// Export the collection as JSON
    Export {
        /// Write to a file instead of stdout
        path: Option<PathBuf>,
    },

    /// Import a collection from JSON, replacing the current one
    Import {
        /// File to read
        path: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let data_dir = match cli.data_dir.clone() {
        Some(dir) => dir,
        None => WordStorage::default_data_dir().ok_or_else(|| {
            anyhow::anyhow!("could not determine a data directory; pass --data-dir")
        })?,
    };
    let storage = WordStorage::new(data_dir);
    storage.init()?;

    let config = if cli.weekly_known {
        IntervalConfig::with_weekly_known()
    } else {
        IntervalConfig::default()
    };

    match cli.command {
        Command::Add {
            writing,
            reading,
            meaning,
            language,
            word_type,
            level,
            status,
        } => {
            commands::add::run(
                &storage, language, writing, reading, meaning, word_type, level, status,
                &cli.format,
            )?;
        }
        Command::List { language, level } => {
            let filters = SessionFilters { language, level };
            commands::list::run_list(&storage, &filters, &config, &cli.format)?;
        }
        Command::Due { language, level } => {
            let filters = SessionFilters { language, level };
            commands::list::run_due(&storage, &filters, &config, &cli.format)?;
        }
        Command::Review { language, level } => {
            let filters = SessionFilters { language, level };
            commands::review::run(&storage, &filters, &config)?;
        }
        Command::Stats => {
            commands::stats::run(&storage, &config, &cli.format)?;
        }
        Command::SetStatus { id, status } => {
            commands::edit::run_set_status(&storage, id, status, &cli.format)?;
        }
        Command::Rm { id } => {
            commands::edit::run_rm(&storage, id)?;
        }
        Command::Export { path } => {
            commands::backup::run_export(&storage, path.as_deref())?;
        }
        Command::Import { path } => {
            commands::backup::run_import(&storage, &path)?;
        }
    }

    Ok(())
}
