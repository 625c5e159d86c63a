//! Cadence expansion
//!
//! Turns one ledger entry into the dated occurrences it produces inside
//! a horizon. The walk starts at the entry's anchor date and steps by
//! the cadence; dates before the horizon are stepped past without being
//! emitted, so an anchor far in the past still produces correctly
//! phased occurrences. The anchor is never reset to the horizon start.

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::{classify_subcategory, Cadence, FlowKind, LedgerEntry};

use super::Horizon;

/// One concrete (date, amount) instance produced by expansion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Occurrence {
    pub date: NaiveDate,
    pub kind: FlowKind,
    /// Positive magnitude; the sign comes from `kind`
    pub amount: f64,
}

/// Expand a ledger entry into its occurrences within the horizon.
///
/// The returned iterator is finite and owns all of its state, so it can
/// be re-created from the same entry at any time.
pub fn expand(entry: &LedgerEntry, horizon: &Horizon) -> Occurrences {
    Occurrences {
        cursor: Some(entry.date),
        cadence: entry.cadence,
        kind: classify_subcategory(entry.subcategory_id),
        amount: entry.amount,
        horizon: *horizon,
    }
}

/// Iterator over the occurrences of a single entry.
///
/// Monthly and yearly steps reassign the walk date in place, so a
/// calendar fallback (day 31 -> day 28, Feb 29 -> Feb 28) carries into
/// every later step instead of being recomputed from the anchor. A
/// schedule that falls back once stays on the fallback day; this drift
/// is the intended behavior, not an artifact.
#[derive(Debug, Clone)]
pub struct Occurrences {
    /// Next candidate date; None once the walk has passed the horizon
    cursor: Option<NaiveDate>,
    cadence: Cadence,
    kind: FlowKind,
    amount: f64,
    horizon: Horizon,
}

impl Iterator for Occurrences {
    type Item = Occurrence;

    fn next(&mut self) -> Option<Occurrence> {
        loop {
            let candidate = self.cursor?;
            if candidate > self.horizon.end {
                self.cursor = None;
                return None;
            }

            // Yearly walks land on Feb 28 whenever the schedule reaches a
            // Feb 29. The clamp applies before emission, so the clamped
            // date is both what gets emitted and what the next step is
            // taken from.
            let current = if self.cadence == Cadence::Yearly
                && candidate.month() == 2
                && candidate.day() == 29
            {
                NaiveDate::from_ymd_opt(candidate.year(), 2, 28).unwrap()
            } else {
                candidate
            };

            self.cursor = match self.cadence {
                Cadence::OneTime => None,
                Cadence::Weekly => Some(current + Duration::days(7)),
                Cadence::Fortnightly => Some(current + Duration::days(14)),
                Cadence::Monthly => Some(next_month(current)),
                Cadence::Yearly => Some(next_year(current)),
            };

            if current >= self.horizon.start {
                return Some(Occurrence {
                    date: current,
                    kind: self.kind,
                    amount: self.amount,
                });
            }
            // Before the horizon: keep walking without emitting.
        }
    }
}

/// Step one calendar month, falling back to day 28 when the current
/// day-of-month does not exist in the target month. 28 is valid in every
/// month, so the walk always advances.
fn next_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, date.day())
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 28).unwrap())
}

/// Step one calendar year. The Feb 29 case is clamped before this is
/// called, so the fallback is only a guard.
fn next_year(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year() + 1, date.month(), date.day())
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(date.year() + 1, 2, 28).unwrap())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(date: NaiveDate, subcategory_id: i64, amount: f64, cadence: Cadence) -> LedgerEntry {
        LedgerEntry {
            id: 1,
            date,
            subcategory_id,
            amount,
            cadence,
        }
    }

    fn horizon(start: NaiveDate, end: NaiveDate) -> Horizon {
        Horizon { start, end }
    }

    fn dates(entry: &LedgerEntry, horizon: &Horizon) -> Vec<NaiveDate> {
        expand(entry, horizon).map(|o| o.date).collect()
    }

    #[test]
    fn test_one_time_inside_horizon() {
        let e = entry(ymd(2024, 3, 10), 1, 50.0, Cadence::OneTime);
        let h = horizon(ymd(2024, 1, 1), ymd(2024, 12, 31));
        assert_eq!(dates(&e, &h), vec![ymd(2024, 3, 10)]);
    }

    #[test]
    fn test_one_time_outside_horizon() {
        let e = entry(ymd(2023, 3, 10), 1, 50.0, Cadence::OneTime);
        let h = horizon(ymd(2024, 1, 1), ymd(2024, 12, 31));
        assert!(dates(&e, &h).is_empty());

        let e = entry(ymd(2025, 1, 1), 1, 50.0, Cadence::OneTime);
        assert!(dates(&e, &h).is_empty());
    }

    #[test]
    fn test_weekly_exact_arithmetic() {
        let e = entry(ymd(2024, 1, 3), 1, 20.0, Cadence::Weekly);
        let h = horizon(ymd(2024, 1, 1), ymd(2024, 1, 31));
        assert_eq!(
            dates(&e, &h),
            vec![
                ymd(2024, 1, 3),
                ymd(2024, 1, 10),
                ymd(2024, 1, 17),
                ymd(2024, 1, 24),
                ymd(2024, 1, 31),
            ]
        );
    }

    #[test]
    fn test_weekly_includes_horizon_end_but_nothing_beyond() {
        // Anchor such that an occurrence lands exactly on horizon.end
        let e = entry(ymd(2024, 1, 1), 1, 20.0, Cadence::Weekly);
        let h = horizon(ymd(2024, 1, 1), ymd(2024, 1, 15));
        let ds = dates(&e, &h);
        assert_eq!(*ds.last().unwrap(), ymd(2024, 1, 15));
        assert_eq!(ds.len(), 3);
    }

    #[test]
    fn test_fortnightly_exact_arithmetic() {
        let e = entry(ymd(2024, 1, 5), 1, 20.0, Cadence::Fortnightly);
        let h = horizon(ymd(2024, 1, 1), ymd(2024, 2, 29));
        assert_eq!(
            dates(&e, &h),
            vec![
                ymd(2024, 1, 5),
                ymd(2024, 1, 19),
                ymd(2024, 2, 2),
                ymd(2024, 2, 16),
            ]
        );
    }

    #[test]
    fn test_monthly_day_31_falls_back_to_28_and_sticks() {
        let e = entry(ymd(2024, 1, 31), 1, 100.0, Cadence::Monthly);
        let h = horizon(ymd(2024, 1, 1), ymd(2024, 5, 31));
        // After the February fallback the schedule stays on the 28th
        assert_eq!(
            dates(&e, &h),
            vec![
                ymd(2024, 1, 31),
                ymd(2024, 2, 28),
                ymd(2024, 3, 28),
                ymd(2024, 4, 28),
                ymd(2024, 5, 28),
            ]
        );
    }

    #[test]
    fn test_monthly_day_29_survives_leap_february() {
        let e = entry(ymd(2024, 1, 29), 1, 100.0, Cadence::Monthly);
        let h = horizon(ymd(2024, 1, 1), ymd(2024, 4, 30));
        assert_eq!(
            dates(&e, &h),
            vec![
                ymd(2024, 1, 29),
                ymd(2024, 2, 29),
                ymd(2024, 3, 29),
                ymd(2024, 4, 29),
            ]
        );
    }

    #[test]
    fn test_monthly_december_wraps_year() {
        let e = entry(ymd(2023, 12, 15), 1, 100.0, Cadence::Monthly);
        let h = horizon(ymd(2023, 12, 1), ymd(2024, 2, 28));
        assert_eq!(
            dates(&e, &h),
            vec![ymd(2023, 12, 15), ymd(2024, 1, 15), ymd(2024, 2, 15)]
        );
    }

    #[test]
    fn test_yearly_leap_anchor_clamps_and_sticks() {
        let e = entry(ymd(2024, 2, 29), 1, 300.0, Cadence::Yearly);
        let h = horizon(ymd(2024, 1, 1), ymd(2028, 12, 31));
        // The clamp applies to the anchor itself, then the schedule stays
        // on Feb 28 through the next leap year
        assert_eq!(
            dates(&e, &h),
            vec![
                ymd(2024, 2, 28),
                ymd(2025, 2, 28),
                ymd(2026, 2, 28),
                ymd(2027, 2, 28),
                ymd(2028, 2, 28),
            ]
        );
    }

    #[test]
    fn test_yearly_plain_anchor() {
        let e = entry(ymd(2024, 6, 1), 1, 300.0, Cadence::Yearly);
        let h = horizon(ymd(2024, 1, 1), ymd(2026, 12, 31));
        assert_eq!(
            dates(&e, &h),
            vec![ymd(2024, 6, 1), ymd(2025, 6, 1), ymd(2026, 6, 1)]
        );
    }

    #[test]
    fn test_pre_horizon_anchor_keeps_phase() {
        // Anchored long before the horizon: occurrences inside the
        // horizon stay phased to the anchor, not to the horizon start
        let e = entry(ymd(2023, 1, 4), 1, 20.0, Cadence::Weekly);
        let h = horizon(ymd(2024, 1, 1), ymd(2024, 1, 31));
        assert_eq!(
            dates(&e, &h),
            vec![
                ymd(2024, 1, 3),
                ymd(2024, 1, 10),
                ymd(2024, 1, 17),
                ymd(2024, 1, 24),
                ymd(2024, 1, 31),
            ]
        );
    }

    #[test]
    fn test_pre_horizon_monthly_carries_fallback_drift() {
        // Anchor on the 31st before the horizon: the February fallback
        // happens during the skipped walk and the drift is visible inside
        // the horizon
        let e = entry(ymd(2024, 1, 31), 1, 100.0, Cadence::Monthly);
        let h = horizon(ymd(2024, 3, 1), ymd(2024, 4, 30));
        assert_eq!(dates(&e, &h), vec![ymd(2024, 3, 28), ymd(2024, 4, 28)]);
    }

    #[test]
    fn test_expansion_is_restartable() {
        let e = entry(ymd(2024, 1, 1), 1, 10.0, Cadence::Weekly);
        let h = horizon(ymd(2024, 1, 1), ymd(2024, 2, 1));
        let first: Vec<_> = expand(&e, &h).collect();
        let second: Vec<_> = expand(&e, &h).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_occurrences_carry_classification() {
        let income = entry(ymd(2024, 1, 1), 101, 2500.0, Cadence::OneTime);
        let expense = entry(ymd(2024, 1, 1), 12, 40.0, Cadence::OneTime);
        let h = horizon(ymd(2024, 1, 1), ymd(2024, 1, 31));

        let occ: Vec<_> = expand(&income, &h).collect();
        assert_eq!(occ[0].kind, FlowKind::Income);
        assert_eq!(occ[0].amount, 2500.0);

        let occ: Vec<_> = expand(&expense, &h).collect();
        assert_eq!(occ[0].kind, FlowKind::Expense);
    }
}
