//! Source of "today"
//!
//! Streak rules only care about calendar days, so the clock hands out a
//! `NaiveDate` in the user's local calendar.

use chrono::{Local, NaiveDate};

/// Anything that can tell the store what day it is
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// The machine's local calendar date
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock pinned to one date (tests, and the `--today` override)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
