//! Habit entity and related functionality
//!
//! This module defines the Habit record that the store keeps for each
//! tracked behavior, along with name validation.

use serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use crate::domain::{advance, DomainError, StreakOutcome};

/// Longest name a habit may have, counted in characters after trimming
pub const MAX_NAME_LEN: usize = 100;

/// A habit represents something the user wants to do every day
///
/// The name is the habit's identity inside the store. The remaining fields
/// are updated only by [`Habit::mark_done`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    /// Display name and unique key (e.g., "Read 10 pages")
    pub name: String,
    /// Most recent day the habit was marked done (None if never)
    pub last_done: Option<NaiveDate>,
    /// Consecutive days done, ending at `last_done`
    pub streak: u32,
    /// Lifetime number of days the habit was marked done
    pub total_completions: u32,
}

impl Habit {
    /// Create a new, never-completed habit with a validated name
    ///
    /// Surrounding whitespace is trimmed before validation and the trimmed
    /// form becomes the stored name.
    pub fn new(name: &str) -> Result<Self, DomainError> {
        let name = Self::normalize_name(name)?;

        Ok(Self {
            name,
            last_done: None,
            streak: 0,
            total_completions: 0,
        })
    }

    /// Create a habit from existing data (used when loading the store file)
    pub fn from_existing(
        name: String,
        last_done: Option<NaiveDate>,
        streak: u32,
        total_completions: u32,
    ) -> Self {
        Self {
            name,
            last_done,
            streak,
            total_completions,
        }
    }

    /// Record a completion for `today`
    ///
    /// Returns what happened to the streak. When the habit was already done
    /// today nothing is modified.
    pub fn mark_done(&mut self, today: NaiveDate) -> StreakOutcome {
        let outcome = advance(self.last_done, self.streak, today);

        if let Some(streak) = outcome.new_streak() {
            self.streak = streak;
            self.last_done = Some(today);
            self.total_completions = self.total_completions.saturating_add(1);
        }

        outcome
    }

    /// Whether the habit has been marked done on `today`
    pub fn is_done_on(&self, today: NaiveDate) -> bool {
        self.last_done == Some(today)
    }

    /// Trim and validate a habit name according to business rules
    pub fn normalize_name(name: &str) -> Result<String, DomainError> {
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(DomainError::InvalidHabitName(
                "Habit name cannot be empty".to_string()
            ));
        }

        if trimmed.chars().count() > MAX_NAME_LEN {
            return Err(DomainError::InvalidHabitName(format!(
                "Habit name cannot be longer than {} characters",
                MAX_NAME_LEN
            )));
        }

        Ok(trimmed.to_string())
    }
}
