//! Period boundaries
//!
//! Every period is an inclusive `[start, end]` range of calendar dates
//! derived from a reference date ("now").

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Canonical analysis periods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Period {
    /// First day of the month through now
    CurrentMonth,
    /// The whole calendar month before the current one
    PreviousMonth,
    /// now - 7 days through now
    Last7Days,
    /// now - 30 days through now
    Last30Days,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CurrentMonth => "current-month",
            Self::PreviousMonth => "previous-month",
            Self::Last7Days => "last-7-days",
            Self::Last30Days => "last-30-days",
        }
    }

    /// Human-readable label used on insights
    pub fn label(&self) -> &'static str {
        match self {
            Self::CurrentMonth => "This month",
            Self::PreviousMonth => "Last month",
            Self::Last7Days => "Last 7 days",
            Self::Last30Days => "Last 30 days",
        }
    }

    pub fn all() -> &'static [Period] {
        &[
            Self::CurrentMonth,
            Self::PreviousMonth,
            Self::Last7Days,
            Self::Last30Days,
        ]
    }

    /// Resolve this period against a reference date
    pub fn range(&self, now: NaiveDate) -> DateRange {
        match self {
            Self::CurrentMonth => DateRange::new(first_day_of_month(now), now),
            Self::PreviousMonth => {
                let last_day = first_day_of_month(now) - Duration::days(1);
                DateRange::new(first_day_of_month(last_day), last_day)
            }
            Self::Last7Days => DateRange::new(now - Duration::days(7), now),
            Self::Last30Days => DateRange::new(now - Duration::days(30), now),
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "current-month" | "this-month" => Ok(Self::CurrentMonth),
            "previous-month" | "last-month" => Ok(Self::PreviousMonth),
            "last-7-days" => Ok(Self::Last7Days),
            "last-30-days" => Ok(Self::Last30Days),
            _ => Err(format!(
                "Unknown period: {}. Available: current-month, previous-month, last-7-days, last-30-days",
                s
            )),
        }
    }
}

/// Inclusive range of calendar dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Every calendar day in the range, in order
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }

    /// Number of (weekday, weekend) calendar days in the range.
    ///
    /// Counts days, not transactions, so quiet days still weigh on averages.
    pub fn day_counts(&self) -> (u32, u32) {
        self.days().fold((0, 0), |(weekday, weekend), day| {
            if is_weekend(day) {
                (weekday, weekend + 1)
            } else {
                (weekday + 1, weekend)
            }
        })
    }
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

pub fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn days_in_month(date: NaiveDate) -> u32 {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|next| (next - first_day_of_month(date)).num_days() as u32)
        .unwrap_or(30)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_current_month_range() {
        let range = Period::CurrentMonth.range(date(2024, 3, 15));
        assert_eq!(range, DateRange::new(date(2024, 3, 1), date(2024, 3, 15)));
    }

    #[test]
    fn test_previous_month_range_wraps_year() {
        let range = Period::PreviousMonth.range(date(2024, 1, 10));
        assert_eq!(range, DateRange::new(date(2023, 12, 1), date(2023, 12, 31)));

        let range = Period::PreviousMonth.range(date(2024, 3, 31));
        assert_eq!(range, DateRange::new(date(2024, 2, 1), date(2024, 2, 29)));
    }

    #[test]
    fn test_lookback_ranges() {
        let now = date(2024, 3, 5);
        assert_eq!(
            Period::Last7Days.range(now),
            DateRange::new(date(2024, 2, 27), now)
        );
        assert_eq!(
            Period::Last30Days.range(now),
            DateRange::new(date(2024, 2, 4), now)
        );
    }

    #[test]
    fn test_contains_is_inclusive() {
        let now = date(2024, 3, 5);
        let range = Period::Last7Days.range(now);
        assert!(range.contains(now));
        assert!(range.contains(date(2024, 2, 27)));
        assert!(!range.contains(date(2024, 2, 26)));
        assert!(!range.contains(date(2024, 3, 6)));
        assert!(Period::CurrentMonth.range(now).contains(now));
    }

    #[test]
    fn test_day_counts() {
        // 2024-03-04 is a Monday; Mon..Sun
        let week = DateRange::new(date(2024, 3, 4), date(2024, 3, 10));
        assert_eq!(week.days().count(), 7);
        assert_eq!(week.day_counts(), (5, 2));

        let saturday = DateRange::new(date(2024, 3, 9), date(2024, 3, 9));
        assert_eq!(saturday.day_counts(), (0, 1));

        // 31 days inclusive
        let month = Period::Last30Days.range(date(2024, 3, 31));
        let (weekday, weekend) = month.day_counts();
        assert_eq!(weekday + weekend, 31);
    }

    #[test]
    fn test_empty_range_has_no_days() {
        let range = DateRange::new(date(2024, 3, 10), date(2024, 3, 9));
        assert_eq!(range.days().count(), 0);
        assert_eq!(range.day_counts(), (0, 0));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(date(2024, 2, 10)), 29);
        assert_eq!(days_in_month(date(2023, 2, 10)), 28);
        assert_eq!(days_in_month(date(2024, 12, 31)), 31);
        assert_eq!(days_in_month(date(2024, 4, 1)), 30);
    }

    #[test]
    fn test_period_from_str() {
        assert_eq!("current-month".parse::<Period>(), Ok(Period::CurrentMonth));
        assert_eq!("this-month".parse::<Period>(), Ok(Period::CurrentMonth));
        assert_eq!("Last-7-Days".parse::<Period>(), Ok(Period::Last7Days));
        assert!("forever".parse::<Period>().is_err());
        for period in Period::all() {
            assert_eq!(period.as_str().parse::<Period>(), Ok(*period));
        }
    }
}
