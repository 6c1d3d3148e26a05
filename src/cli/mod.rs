//! # Command-Line Interface
//!
//! | Command | Effect |
//! |---------|--------|
//! | `add <NAME...>` | Start tracking a habit |
//! | `done <NAME...>` | Mark a habit done for today |
//! | `list` | Show habits with streaks |
//! | `stats` | Show totals and the longest streak |
//! | `remove <NAME...>` | Stop tracking a habit |
//!
//! Multi-word names may be passed unquoted; the words are joined with single
//! spaces. All commands accept `--format json` for machine-readable output.

mod output;

pub use output::{Output, OutputFormat};

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::domain::{Clock, FixedClock, SystemClock};
use crate::storage::{HabitStorage, JsonFileStorage, DEFAULT_STORE_FILE};
use crate::{HabitStore, TrackerError};

#[derive(Parser, Debug)]
#[command(name = "habit")]
#[command(author, version, about = "Track daily habits and streaks")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the habits file
    #[arg(long, global = true, env = "HABIT_FILE", default_value = DEFAULT_STORE_FILE)]
    pub file: PathBuf,

    /// Output format
    #[arg(long, short = 'f', global = true, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Treat this date (YYYY-MM-DD) as today
    #[arg(long, global = true, env = "HABIT_TODAY", hide = true)]
    pub today: Option<NaiveDate>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new habit
    Add {
        /// Name of the habit
        #[arg(required = true)]
        name: Vec<String>,
    },

    /// Mark a habit done for today
    Done {
        /// Name of the habit
        #[arg(required = true)]
        name: Vec<String>,
    },

    /// List tracked habits
    List,

    /// Show progress stats
    Stats,

    /// Remove a habit
    Remove {
        /// Name of the habit to remove
        #[arg(required = true)]
        name: Vec<String>,
    },
}

/// Run one parsed command against the configured store
pub fn run(cli: Cli, output: &Output) -> Result<(), TrackerError> {
    tracing::debug!("Using store file {}", cli.file.display());
    let storage = JsonFileStorage::new(&cli.file);

    match cli.today {
        Some(today) => {
            tracing::debug!("Clock pinned to {}", today);
            execute(HabitStore::with_parts(storage, FixedClock(today))?, cli.command, output)
        }
        None => execute(HabitStore::with_parts(storage, SystemClock)?, cli.command, output),
    }
}

fn execute<S: HabitStorage, C: Clock>(
    mut store: HabitStore<S, C>,
    command: Commands,
    output: &Output,
) -> Result<(), TrackerError> {
    match command {
        Commands::Add { name } => {
            let habit = store.add(&join_name(&name))?;
            output.added(habit);
        }
        Commands::Done { name } => {
            let report = store.done(&join_name(&name))?;
            output.done(&report);
        }
        Commands::List => output.list(&store.list()),
        Commands::Stats => output.stats(&store.stats()),
        Commands::Remove { name } => {
            let habit = store.remove(&join_name(&name))?;
            output.removed(&habit);
        }
    }

    Ok(())
}

fn join_name(words: &[String]) -> String {
    words.join(" ").trim().to_string()
}
