//! Streak calculation
//!
//! A habit's streak is kept incrementally: every `done` either extends it by
//! one day, restarts it at one, or leaves it alone when the habit has already
//! been done today. This module holds that transition rule and the
//! encouragement text shown alongside the result.

use serde::Serialize;
use chrono::NaiveDate;

/// What a `done` mark did to a habit's streak
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StreakOutcome {
    /// The habit was already marked done today; nothing changed
    AlreadyDone,
    /// First completion ever, streak is now 1
    Started,
    /// Done yesterday as well, streak grew to the given length
    Extended { streak: u32 },
    /// A gap broke the previous streak, streak is back to 1
    Reset { previous_streak: u32 },
}

impl StreakOutcome {
    /// The streak after this outcome, or None when nothing changed
    pub fn new_streak(&self) -> Option<u32> {
        match self {
            StreakOutcome::AlreadyDone => None,
            StreakOutcome::Started | StreakOutcome::Reset { .. } => Some(1),
            StreakOutcome::Extended { streak } => Some(*streak),
        }
    }

    /// Whether the habit needs to be written back
    pub fn is_change(&self) -> bool {
        !matches!(self, StreakOutcome::AlreadyDone)
    }
}

/// Decide how a completion on `today` affects a streak
///
/// `last_done` and `streak` are the habit's current values. A `last_done`
/// after `today` (clock moved backwards, or a hand-edited file) is treated
/// like a gap.
pub fn advance(last_done: Option<NaiveDate>, streak: u32, today: NaiveDate) -> StreakOutcome {
    let Some(last) = last_done else {
        return StreakOutcome::Started;
    };

    if last == today {
        return StreakOutcome::AlreadyDone;
    }

    if today.pred_opt() == Some(last) {
        return StreakOutcome::Extended {
            streak: streak.saturating_add(1),
        };
    }

    if last > today {
        tracing::warn!(
            "Last completion {} is after today ({}), restarting streak",
            last,
            today
        );
    }

    StreakOutcome::Reset {
        previous_streak: streak,
    }
}

/// Get a motivational message for a streak length
pub fn motivational_message(streak: u32) -> String {
    match streak {
        0 => "Ready to start your streak! Every journey begins with a single step.".to_string(),
        1 => "Great start! One day down, keep the momentum going.".to_string(),
        2..=6 => format!("Nice work! {} days in a row. You're building a strong habit.", streak),
        7..=13 => format!("Excellent! {} days strong. You're in the groove now!", streak),
        14..=29 => format!("Amazing! {} days straight. This is becoming second nature.", streak),
        30..=99 => format!("Incredible! {} days of consistency. You're a habit master!", streak),
        _ => format!("Legendary! {} days of unwavering commitment. You're an inspiration!", streak),
    }
}
