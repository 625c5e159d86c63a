//! Day-axis accumulation and the running balance pass

use chrono::Duration;

use crate::models::{DailyPoint, FlowKind, LedgerEntry};

use super::expand::expand;
use super::Horizon;

/// Materialize the daily balance series for `horizon`.
///
/// Builds the complete day axis first, folds every occurrence of every
/// entry additively into its day (no deduplication; repeated hits on the
/// same day accumulate), then computes the running balance in one
/// forward pass.
///
/// `opening_balance` is the balance *before* the first day's flows; day
/// zero applies its own income and expenses like every other day:
/// `balance[0] = opening_balance + income[0] - expenses[0]`.
pub fn project(entries: &[LedgerEntry], opening_balance: f64, horizon: &Horizon) -> Vec<DailyPoint> {
    // A horizon with end before start cannot come out of Horizon
    // construction; hitting this is a caller bug, not a runtime condition.
    assert!(
        horizon.end >= horizon.start,
        "horizon end {} precedes start {}",
        horizon.end,
        horizon.start
    );

    // Full axis first: one point per calendar day, no gaps. The axis must
    // exist before any occurrence is folded in.
    let mut points: Vec<DailyPoint> = (0..horizon.num_days())
        .map(|offset| DailyPoint {
            date: horizon.start + Duration::days(offset),
            income: 0.0,
            expenses: 0.0,
            balance: 0.0,
        })
        .collect();

    for entry in entries {
        for occurrence in expand(entry, horizon) {
            let index = (occurrence.date - horizon.start).num_days() as usize;
            match occurrence.kind {
                FlowKind::Income => points[index].income += occurrence.amount,
                FlowKind::Expense => points[index].expenses += occurrence.amount,
            }
        }
    }

    let mut balance = opening_balance;
    for point in &mut points {
        balance += point.income - point.expenses;
        point.balance = balance;
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Cadence;
    use crate::projection::ProjectionYears;
    use chrono::NaiveDate;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(date: NaiveDate, subcategory_id: i64, amount: f64, cadence: Cadence) -> LedgerEntry {
        LedgerEntry {
            id: 0,
            date,
            subcategory_id,
            amount,
            cadence,
        }
    }

    fn assert_balance_invariant(series: &[DailyPoint], opening_balance: f64) {
        let mut previous = opening_balance;
        for point in series {
            let expected = previous + point.income - point.expenses;
            assert!(
                (point.balance - expected).abs() < 1e-9,
                "balance invariant broken on {}: {} != {}",
                point.date,
                point.balance,
                expected
            );
            previous = point.balance;
        }
    }

    #[test]
    fn test_empty_ledger_is_flat() {
        let horizon = Horizon {
            start: ymd(2024, 1, 1),
            end: ymd(2024, 1, 31),
        };
        let series = project(&[], 500.0, &horizon);
        assert_eq!(series.len(), 31);
        assert!(series.iter().all(|p| p.balance == 500.0));
    }

    #[test]
    fn test_horizon_completeness() {
        let horizon = Horizon::from_years(ymd(2024, 2, 29), ProjectionYears::new(5).unwrap());
        let series = project(&[], 0.0, &horizon);

        assert_eq!(series.len() as i64, horizon.num_days());
        assert_eq!(series[0].date, horizon.start);
        assert_eq!(series.last().unwrap().date, horizon.end);
        for window in series.windows(2) {
            assert_eq!(window[1].date - window[0].date, Duration::days(1));
        }
    }

    #[test]
    fn test_day_zero_applies_its_own_flows() {
        let horizon = Horizon {
            start: ymd(2024, 1, 1),
            end: ymd(2024, 1, 3),
        };
        let entries = vec![entry(ymd(2024, 1, 1), 101, 200.0, Cadence::OneTime)];
        let series = project(&entries, 1000.0, &horizon);

        assert_eq!(series[0].income, 200.0);
        assert_eq!(series[0].balance, 1200.0);
        assert_eq!(series[2].balance, 1200.0);
    }

    #[test]
    fn test_same_day_income_and_expense_accumulate() {
        let horizon = Horizon {
            start: ymd(2024, 1, 1),
            end: ymd(2024, 1, 10),
        };
        let entries = vec![
            entry(ymd(2024, 1, 5), 101, 50.0, Cadence::OneTime),
            entry(ymd(2024, 1, 5), 7, 30.0, Cadence::OneTime),
        ];
        let series = project(&entries, 100.0, &horizon);

        let day = &series[4];
        assert_eq!(day.date, ymd(2024, 1, 5));
        assert_eq!(day.income, 50.0);
        assert_eq!(day.expenses, 30.0);
        assert_eq!(day.balance, 120.0);
        assert_eq!(series[3].balance, 100.0);
        assert_balance_invariant(&series, 100.0);
    }

    #[test]
    fn test_monthly_expense_scenario() {
        // Monthly expense anchored on Jan 31: occurrences on 01-31,
        // 02-28, 03-28, 04-28; balance steps down 100 at each and is
        // flat everywhere else.
        let horizon = Horizon {
            start: ymd(2024, 1, 1),
            end: ymd(2024, 4, 30),
        };
        let entries = vec![entry(ymd(2024, 1, 31), 1, 100.0, Cadence::Monthly)];
        let series = project(&entries, 1000.0, &horizon);

        assert_balance_invariant(&series, 1000.0);

        let charged: Vec<NaiveDate> = series
            .iter()
            .filter(|p| p.expenses > 0.0)
            .map(|p| p.date)
            .collect();
        assert_eq!(
            charged,
            vec![
                ymd(2024, 1, 31),
                ymd(2024, 2, 28),
                ymd(2024, 3, 28),
                ymd(2024, 4, 28),
            ]
        );

        let by_date = |d: NaiveDate| series[(d - horizon.start).num_days() as usize].balance;
        assert_eq!(by_date(ymd(2024, 1, 30)), 1000.0);
        assert_eq!(by_date(ymd(2024, 1, 31)), 900.0);
        assert_eq!(by_date(ymd(2024, 2, 28)), 800.0);
        assert_eq!(by_date(ymd(2024, 3, 28)), 700.0);
        assert_eq!(by_date(ymd(2024, 4, 28)), 600.0);
        assert_eq!(series.last().unwrap().balance, 600.0);
    }

    #[test]
    fn test_repeated_cadence_accumulates_on_shared_days() {
        // Two weekly entries in phase hit the same days; their amounts add
        let horizon = Horizon {
            start: ymd(2024, 1, 1),
            end: ymd(2024, 1, 14),
        };
        let entries = vec![
            entry(ymd(2024, 1, 1), 1, 10.0, Cadence::Weekly),
            entry(ymd(2024, 1, 1), 2, 5.0, Cadence::Weekly),
        ];
        let series = project(&entries, 0.0, &horizon);
        assert_eq!(series[0].expenses, 15.0);
        assert_eq!(series[7].expenses, 15.0);
        assert_eq!(series.last().unwrap().balance, -30.0);
    }

    #[test]
    fn test_expansion_order_does_not_matter() {
        let horizon = Horizon {
            start: ymd(2024, 1, 1),
            end: ymd(2024, 6, 30),
        };
        let a = entry(ymd(2024, 1, 15), 101, 2000.0, Cadence::Monthly);
        let b = entry(ymd(2024, 1, 3), 12, 80.0, Cadence::Weekly);
        let c = entry(ymd(2024, 2, 1), 30, 950.0, Cadence::Monthly);

        let forward = project(&[a.clone(), b.clone(), c.clone()], 100.0, &horizon);
        let backward = project(&[c, b, a], 100.0, &horizon);
        assert_eq!(forward, backward);
    }
}
