//! Output formatting for CLI commands

use serde::Serialize;

use crate::domain::{motivational_message, Habit, StreakOutcome};
use crate::store::{DoneReport, HabitSummary, Stats};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Output helper for consistent formatting
pub struct Output {
    format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Returns true if using JSON format
    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Prints an error message to stderr
    pub fn error(&self, message: &str) {
        match self.format {
            OutputFormat::Text => eprintln!("Error: {}", message),
            OutputFormat::Json => {
                eprintln!(
                    "{}",
                    serde_json::json!({
                        "success": false,
                        "error": message
                    })
                );
            }
        }
    }

    /// Prints structured data as a single JSON line
    fn data<T: Serialize>(&self, data: &T) {
        match serde_json::to_string(data) {
            Ok(json) => println!("{}", json),
            Err(e) => tracing::error!("Failed to serialize output: {}", e),
        }
    }

    pub fn added(&self, habit: &Habit) {
        if self.is_json() {
            self.data(habit);
        } else {
            println!("Added habit: {}", habit.name);
        }
    }

    pub fn done(&self, report: &DoneReport) {
        if self.is_json() {
            self.data(report);
            return;
        }

        let habit = &report.habit;
        match report.outcome {
            StreakOutcome::AlreadyDone => {
                println!("Already marked '{}' as done today.", habit.name);
            }
            _ => {
                println!("Marked '{}' as done. Streak: {}", habit.name, habit.streak);
                println!("{}", motivational_message(habit.streak));
            }
        }
    }

    pub fn list(&self, habits: &[HabitSummary]) {
        if self.is_json() {
            self.data(&habits);
            return;
        }

        if habits.is_empty() {
            println!("No habits found. Use 'add' to create one.");
            return;
        }

        println!("Your Habits:");
        for habit in habits {
            let last_done = habit
                .last_done
                .map(|d| d.to_string())
                .unwrap_or_else(|| "never".to_string());
            let today = if habit.done_today { "Done" } else { "Not done" };

            println!(
                "- {} | Streak: {} | Last done: {} | Today: {}",
                habit.name, habit.streak, last_done, today
            );
        }
    }

    pub fn stats(&self, stats: &Stats) {
        if self.is_json() {
            self.data(stats);
            return;
        }

        if stats.total_habits == 0 {
            println!("No habits tracked yet.");
            return;
        }

        println!("{}/{} habits done today.", stats.done_today, stats.total_habits);
        println!("Total completions: {}", stats.total_completions);
        if let Some(top) = &stats.top_streak {
            println!(
                "Longest streak: {} ({} day{})",
                top.name,
                top.streak,
                if top.streak == 1 { "" } else { "s" }
            );
        }
    }

    pub fn removed(&self, habit: &Habit) {
        if self.is_json() {
            self.data(&serde_json::json!({
                "success": true,
                "removed": habit.name,
            }));
        } else {
            println!("Removed habit: {}", habit.name);
        }
    }
}
