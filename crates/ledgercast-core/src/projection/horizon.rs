//! Projection horizon construction and validation

use chrono::{Datelike, NaiveDate};

use crate::error::{Error, Result};

/// Longest supported projection in years
pub const MAX_PROJECTION_YEARS: i32 = 5;

/// A validated projection length.
///
/// Zero or negative requests are rejected outright. Requests beyond
/// [`MAX_PROJECTION_YEARS`] are shortened, and the clamp is reported on
/// the returned value so callers can warn the user instead of silently
/// projecting less than was asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectionYears {
    years: i32,
    clamped: bool,
}

impl ProjectionYears {
    pub fn new(requested: i32) -> Result<Self> {
        if requested <= 0 {
            return Err(Error::InvalidHorizon(requested));
        }
        if requested > MAX_PROJECTION_YEARS {
            Ok(Self {
                years: MAX_PROJECTION_YEARS,
                clamped: true,
            })
        } else {
            Ok(Self {
                years: requested,
                clamped: false,
            })
        }
    }

    pub fn years(&self) -> i32 {
        self.years
    }

    /// True when the request exceeded the maximum and was shortened
    pub fn clamped(&self) -> bool {
        self.clamped
    }
}

/// The closed date interval a projection covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Horizon {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Horizon {
    /// Build a horizon spanning `years` from `start`, inclusive on both
    /// ends. A Feb 29 start whose target year is not a leap year ends on
    /// Feb 28 of that year.
    pub fn from_years(start: NaiveDate, years: ProjectionYears) -> Self {
        let target_year = start.year() + years.years();
        let end = NaiveDate::from_ymd_opt(target_year, start.month(), start.day())
            .unwrap_or_else(|| {
                // Only reachable for a Feb 29 start in a non-leap target year
                NaiveDate::from_ymd_opt(target_year, 2, 28).unwrap()
            });
        Self { start, end }
    }

    /// Number of calendar days covered, both endpoints included
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_years_rejects_zero_and_negative() {
        assert!(ProjectionYears::new(0).is_err());
        assert!(ProjectionYears::new(-3).is_err());
    }

    #[test]
    fn test_years_clamps_above_maximum() {
        let years = ProjectionYears::new(8).unwrap();
        assert_eq!(years.years(), MAX_PROJECTION_YEARS);
        assert!(years.clamped());

        let years = ProjectionYears::new(5).unwrap();
        assert_eq!(years.years(), 5);
        assert!(!years.clamped());
    }

    #[test]
    fn test_horizon_same_day_next_year() {
        let horizon = Horizon::from_years(ymd(2024, 3, 15), ProjectionYears::new(2).unwrap());
        assert_eq!(horizon.start, ymd(2024, 3, 15));
        assert_eq!(horizon.end, ymd(2026, 3, 15));
    }

    #[test]
    fn test_horizon_leap_day_start_clamps_end() {
        let horizon = Horizon::from_years(ymd(2024, 2, 29), ProjectionYears::new(3).unwrap());
        assert_eq!(horizon.end, ymd(2027, 2, 28));

        // A leap-to-leap span keeps Feb 29
        let horizon = Horizon::from_years(ymd(2024, 2, 29), ProjectionYears::new(4).unwrap());
        assert_eq!(horizon.end, ymd(2028, 2, 29));
    }

    #[test]
    fn test_horizon_num_days_counts_both_endpoints() {
        let horizon = Horizon {
            start: ymd(2024, 1, 1),
            end: ymd(2024, 1, 1),
        };
        assert_eq!(horizon.num_days(), 1);

        let horizon = Horizon::from_years(ymd(2024, 1, 1), ProjectionYears::new(1).unwrap());
        // 2024 is a leap year: Jan 1 2024 through Jan 1 2025 inclusive
        assert_eq!(horizon.num_days(), 367);
    }

    #[test]
    fn test_horizon_contains() {
        let horizon = Horizon {
            start: ymd(2024, 1, 1),
            end: ymd(2024, 12, 31),
        };
        assert!(horizon.contains(ymd(2024, 1, 1)));
        assert!(horizon.contains(ymd(2024, 12, 31)));
        assert!(!horizon.contains(ymd(2023, 12, 31)));
        assert!(!horizon.contains(ymd(2025, 1, 1)));
    }
}
