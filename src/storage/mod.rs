//! Storage layer for persisting habit data
//!
//! The store is small enough to be read and written as a whole, so the
//! storage interface is just `load` and `save` of the full habit list.

pub mod json;

// Re-export the main storage types
pub use json::*;

use std::path::PathBuf;
use thiserror::Error;
use crate::domain::Habit;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to {action} store file {}: {source}", path.display())]
    Persistence {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Store file {} is corrupt: {source}", path.display())]
    CorruptStore {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Trait defining the storage interface for habits
///
/// Implementations must preserve the order of the habits they are given.
pub trait HabitStorage {
    /// Read every habit; a store that was never saved is empty
    fn load(&self) -> Result<Vec<Habit>, StorageError>;

    /// Replace the persisted habits with `habits`
    ///
    /// Either the new content is fully written or the previous content is
    /// left in place.
    fn save(&self, habits: &[Habit]) -> Result<(), StorageError>;
}

impl<S: HabitStorage + ?Sized> HabitStorage for &S {
    fn load(&self) -> Result<Vec<Habit>, StorageError> {
        (**self).load()
    }

    fn save(&self, habits: &[Habit]) -> Result<(), StorageError> {
        (**self).save(habits)
    }
}
