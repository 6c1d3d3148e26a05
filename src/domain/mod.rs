//! Domain module containing core business logic and data types
//!
//! This module defines the Habit record, the streak transition rule, and the
//! clock abstraction that decides what "today" is.

pub mod habit;
pub mod streak;
pub mod clock;

// Re-export public types for easy access
pub use habit::*;
pub use streak::*;
pub use clock::*;

use thiserror::Error;

/// Errors that can occur during domain operations
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid habit name: {0}")]
    InvalidHabitName(String),
}
