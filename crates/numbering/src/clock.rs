//! Calendar date source for document numbers.

use chrono::{Local, NaiveDate};

/// Source of "today" in the user's local time zone.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// System clock in the local time zone.
#[derive(Debug, Default, Copy, Clone)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to one date. Used in tests and for back-dated documents.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
