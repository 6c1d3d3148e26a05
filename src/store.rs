//! The habit store
//!
//! `HabitStore` owns the in-memory habit list for one run. It is built over
//! an explicit storage backend and clock, loads on construction, and writes
//! the whole list back after every operation that changes it.

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{Clock, Habit, StreakOutcome, SystemClock};
use crate::storage::{HabitStorage, JsonFileStorage};
use crate::TrackerError;

/// One row of `list`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HabitSummary {
    pub name: String,
    pub streak: u32,
    /// None when the habit was never done
    pub last_done: Option<NaiveDate>,
    pub done_today: bool,
}

/// The habit with the longest current streak
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopStreak {
    pub name: String,
    pub streak: u32,
}

/// Aggregate figures returned by `stats`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total_habits: usize,
    pub total_completions: u64,
    pub done_today: usize,
    /// None only when there are no habits
    pub top_streak: Option<TopStreak>,
}

/// Result of `done`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DoneReport {
    pub outcome: StreakOutcome,
    pub habit: Habit,
}

/// Habit collection bound to a storage backend and a clock
pub struct HabitStore<S = JsonFileStorage, C = SystemClock> {
    storage: S,
    clock: C,
    habits: Vec<Habit>,
}

impl HabitStore {
    /// Open the JSON store at `path`, using the local calendar for "today"
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, TrackerError> {
        Self::with_parts(JsonFileStorage::new(path), SystemClock)
    }
}

impl<S: HabitStorage, C: Clock> HabitStore<S, C> {
    /// Build a store over any backend and clock, loading current state
    pub fn with_parts(storage: S, clock: C) -> Result<Self, TrackerError> {
        let habits = storage.load()?;

        Ok(Self {
            storage,
            clock,
            habits,
        })
    }

    /// Habits in insertion order
    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    /// Look up a habit by exact name
    pub fn get(&self, name: &str) -> Option<&Habit> {
        self.habits.iter().find(|h| h.name == name)
    }

    fn position(&self, name: &str) -> Result<usize, TrackerError> {
        self.habits
            .iter()
            .position(|h| h.name == name)
            .ok_or_else(|| TrackerError::HabitNotFound {
                name: name.to_string(),
            })
    }

    /// Start tracking a new habit
    pub fn add(&mut self, name: &str) -> Result<&Habit, TrackerError> {
        let habit = Habit::new(name)?;

        if self.get(&habit.name).is_some() {
            return Err(TrackerError::DuplicateHabit { name: habit.name });
        }

        self.habits.push(habit);
        if let Err(e) = self.save() {
            self.habits.pop();
            return Err(e);
        }

        let added = &self.habits[self.habits.len() - 1];
        tracing::info!("Added habit '{}'", added.name);
        Ok(added)
    }

    /// Mark a habit done for today
    ///
    /// Marking the same habit twice on one day is reported as
    /// [`StreakOutcome::AlreadyDone`] and does not touch the file.
    pub fn done(&mut self, name: &str) -> Result<DoneReport, TrackerError> {
        let index = self.position(name.trim())?;
        let today = self.clock.today();

        let previous = self.habits[index].clone();
        let outcome = self.habits[index].mark_done(today);

        if outcome.is_change() {
            if let Err(e) = self.save() {
                self.habits[index] = previous;
                return Err(e);
            }
            tracing::info!(
                "Marked '{}' done on {}: {:?}",
                self.habits[index].name,
                today,
                outcome
            );
        } else {
            tracing::debug!("'{}' already done on {}", self.habits[index].name, today);
        }

        Ok(DoneReport {
            outcome,
            habit: self.habits[index].clone(),
        })
    }

    /// Every habit with its streak and last completion, in insertion order
    pub fn list(&self) -> Vec<HabitSummary> {
        let today = self.clock.today();

        self.habits
            .iter()
            .map(|habit| HabitSummary {
                name: habit.name.clone(),
                streak: habit.streak,
                last_done: habit.last_done,
                done_today: habit.is_done_on(today),
            })
            .collect()
    }

    /// Totals across the whole store
    pub fn stats(&self) -> Stats {
        let today = self.clock.today();

        // Keep the first habit on ties so insertion order decides
        let top_streak = self
            .habits
            .iter()
            .fold(None::<&Habit>, |best, habit| match best {
                Some(b) if b.streak >= habit.streak => Some(b),
                _ => Some(habit),
            })
            .map(|habit| TopStreak {
                name: habit.name.clone(),
                streak: habit.streak,
            });

        Stats {
            total_habits: self.habits.len(),
            total_completions: self
                .habits
                .iter()
                .map(|h| u64::from(h.total_completions))
                .sum(),
            done_today: self.habits.iter().filter(|h| h.is_done_on(today)).count(),
            top_streak,
        }
    }

    /// Stop tracking a habit and forget its history
    pub fn remove(&mut self, name: &str) -> Result<Habit, TrackerError> {
        let index = self.position(name.trim())?;
        let removed = self.habits.remove(index);

        if let Err(e) = self.save() {
            self.habits.insert(index, removed);
            return Err(e);
        }

        tracing::info!("Removed habit '{}'", removed.name);
        Ok(removed)
    }

    /// Write the current habits to storage
    pub fn save(&self) -> Result<(), TrackerError> {
        self.storage.save(&self.habits)?;
        Ok(())
    }
}
