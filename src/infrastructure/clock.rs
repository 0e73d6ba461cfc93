//! Clock sources for timestamps and "today"

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveTime, Utc};
use std::cell::Cell;

pub trait Clock {
    /// Current instant, used for `createdAt`/`updatedAt`
    fn now(&self) -> DateTime<Utc>;

    /// Current calendar date, used as the default entry date
    fn today(&self) -> NaiveDate;
}

/// Wall clock; "today" follows the local timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Hand-driven clock for tests. "today" is the UTC date of `now`.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Cell<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        ManualClock {
            now: Cell::new(now),
        }
    }

    /// Clock set to noon UTC on `date`
    pub fn on_date(date: NaiveDate) -> Self {
        let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap_or_default();
        Self::new(date.and_time(noon).and_utc())
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn set(&self, now: DateTime<Utc>) {
        self.now.set(now);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }

    fn today(&self) -> NaiveDate {
        self.now.get().date_naive()
    }
}
