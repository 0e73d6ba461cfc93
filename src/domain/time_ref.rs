//! Day and month reference parsing and resolution

use crate::error::{MoodlogError, Result};
use chrono::{Datelike, Duration, Months, NaiveDate, Weekday};

/// A day reference that resolves to a date on or before the base date
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeReference {
    /// Current day
    Today,
    /// Previous day
    Yesterday,
    /// Current/most recent occurrence of a weekday
    Weekday(Weekday),
    /// Previous occurrence of a weekday (strictly before today)
    LastWeekday(Weekday),
    /// Specific date
    SpecificDate(NaiveDate),
}

impl TimeReference {
    /// Parse a time reference string
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();

        if let Some(day) = normalized.strip_prefix("last ") {
            return parse_weekday(day)
                .map(TimeReference::LastWeekday)
                .ok_or_else(|| MoodlogError::InvalidTimeReference(input.to_string()));
        }

        match normalized.as_str() {
            "today" | "now" => Ok(TimeReference::Today),
            "yesterday" => Ok(TimeReference::Yesterday),
            other => {
                if let Some(weekday) = parse_weekday(other) {
                    return Ok(TimeReference::Weekday(weekday));
                }
                NaiveDate::parse_from_str(other, "%Y-%m-%d")
                    .map(TimeReference::SpecificDate)
                    .map_err(|_| MoodlogError::InvalidTimeReference(input.to_string()))
            }
        }
    }

    /// Resolve this time reference to an actual date
    pub fn resolve(&self, base_date: NaiveDate) -> NaiveDate {
        match self {
            TimeReference::Today => base_date,
            TimeReference::Yesterday => base_date - Duration::days(1),
            TimeReference::Weekday(target) => {
                base_date - Duration::days(days_back(base_date.weekday(), *target) as i64)
            }
            TimeReference::LastWeekday(target) => {
                let days = match days_back(base_date.weekday(), *target) {
                    0 => 7,
                    n => n,
                };
                base_date - Duration::days(days as i64)
            }
            TimeReference::SpecificDate(date) => *date,
        }
    }
}

/// Days from the most recent `target` (inclusive of today) back to `current`
fn days_back(current: Weekday, target: Weekday) -> u32 {
    (current.num_days_from_monday() + 7 - target.num_days_from_monday()) % 7
}

fn parse_weekday(s: &str) -> Option<Weekday> {
    match s {
        "monday" => Some(Weekday::Mon),
        "tuesday" => Some(Weekday::Tue),
        "wednesday" => Some(Weekday::Wed),
        "thursday" => Some(Weekday::Thu),
        "friday" => Some(Weekday::Fri),
        "saturday" => Some(Weekday::Sat),
        "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

/// A month reference for calendar views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthReference {
    /// Month containing the base date
    This,
    /// Month before the base date's month
    Last,
    /// Specific year and 1-based month
    Specific { year: i32, month: u32 },
}

impl MonthReference {
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();

        match normalized.as_str() {
            "this" | "this month" | "current" => Ok(MonthReference::This),
            "last" | "last month" | "previous" => Ok(MonthReference::Last),
            other => {
                // Parse YYYY-MM by borrowing a day so chrono validates the month
                NaiveDate::parse_from_str(&format!("{}-01", other), "%Y-%m-%d")
                    .map(|d| MonthReference::Specific {
                        year: d.year(),
                        month: d.month(),
                    })
                    .map_err(|_| MoodlogError::InvalidTimeReference(input.to_string()))
            }
        }
    }

    /// Resolve to `(year, zero-based month)`
    pub fn resolve(&self, base_date: NaiveDate) -> (i32, u32) {
        match self {
            MonthReference::This => (base_date.year(), base_date.month0()),
            MonthReference::Last => {
                let first = base_date.with_day(1).unwrap_or(base_date);
                let prev = first
                    .checked_sub_months(Months::new(1))
                    .unwrap_or(first);
                (prev.year(), prev.month0())
            }
            MonthReference::Specific { year, month } => (*year, month - 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_simple_refs() {
        assert_eq!(TimeReference::parse("today").unwrap(), TimeReference::Today);
        assert_eq!(TimeReference::parse("now").unwrap(), TimeReference::Today);
        assert_eq!(
            TimeReference::parse("Yesterday").unwrap(),
            TimeReference::Yesterday
        );
    }

    #[test]
    fn test_parse_weekdays() {
        assert_eq!(
            TimeReference::parse("monday").unwrap(),
            TimeReference::Weekday(Weekday::Mon)
        );
        assert_eq!(
            TimeReference::parse("last friday").unwrap(),
            TimeReference::LastWeekday(Weekday::Fri)
        );
    }

    #[test]
    fn test_parse_specific_date() {
        assert_eq!(
            TimeReference::parse("2025-03-15").unwrap(),
            TimeReference::SpecificDate(date(2025, 3, 15))
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert!(TimeReference::parse("invalid").is_err());
        assert!(TimeReference::parse("tomorrow").is_err());
        assert!(TimeReference::parse("2025-02-30").is_err());
        assert!(TimeReference::parse("15-03-2025").is_err());
        assert!(TimeReference::parse("last invalidday").is_err());
    }

    #[test]
    fn test_resolve_yesterday() {
        assert_eq!(
            TimeReference::Yesterday.resolve(date(2025, 3, 1)),
            date(2025, 2, 28)
        );
    }

    #[test]
    fn test_resolve_weekday() {
        // Friday, Jan 17, 2025
        let base = date(2025, 1, 17);
        assert_eq!(TimeReference::Weekday(Weekday::Fri).resolve(base), base);
        assert_eq!(
            TimeReference::Weekday(Weekday::Mon).resolve(base),
            date(2025, 1, 13)
        );
    }

    #[test]
    fn test_resolve_last_weekday() {
        let base = date(2025, 1, 17);
        assert_eq!(
            TimeReference::LastWeekday(Weekday::Fri).resolve(base),
            date(2025, 1, 10)
        );
        assert_eq!(
            TimeReference::LastWeekday(Weekday::Wed).resolve(base),
            date(2025, 1, 15)
        );
    }

    #[test]
    fn test_month_parse() {
        assert_eq!(MonthReference::parse("this").unwrap(), MonthReference::This);
        assert_eq!(MonthReference::parse("last").unwrap(), MonthReference::Last);
        assert_eq!(
            MonthReference::parse("2025-03").unwrap(),
            MonthReference::Specific {
                year: 2025,
                month: 3
            }
        );
        assert!(MonthReference::parse("2025-13").is_err());
        assert!(MonthReference::parse("march").is_err());
    }

    #[test]
    fn test_month_resolve_is_zero_based() {
        let base = date(2025, 1, 17);
        assert_eq!(MonthReference::This.resolve(base), (2025, 0));
        assert_eq!(MonthReference::Last.resolve(base), (2024, 11));
        assert_eq!(
            MonthReference::Specific {
                year: 2025,
                month: 3
            }
            .resolve(base),
            (2025, 2)
        );
    }
}
