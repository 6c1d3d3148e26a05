//! Habit tracker library
//!
//! Habits are kept in a JSON file. [`HabitStore`] loads that file, applies
//! one operation (add, done, list, stats, remove) and writes changes back.
//! Streaks count consecutive calendar days and are advanced by
//! [`domain::advance`].

use thiserror::Error;

// Internal modules
pub mod domain;
pub mod storage;
pub mod cli;
mod store;

// Re-export public modules and types
pub use domain::*;
pub use storage::{HabitStorage, JsonFileStorage, StorageError, DEFAULT_STORE_FILE};
pub use store::{DoneReport, HabitStore, HabitSummary, Stats, TopStreak};

/// Errors returned by store operations
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Habit '{name}' already exists")]
    DuplicateHabit { name: String },

    #[error("Habit '{name}' not found. Use 'add' to create it")]
    HabitNotFound { name: String },

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl TrackerError {
    /// Process exit code reported for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            TrackerError::Domain(_) => 2,
            TrackerError::DuplicateHabit { .. } => 3,
            TrackerError::HabitNotFound { .. } => 4,
            TrackerError::Storage(StorageError::Persistence { .. }) => 5,
            TrackerError::Storage(StorageError::CorruptStore { .. }) => 6,
        }
    }
}
