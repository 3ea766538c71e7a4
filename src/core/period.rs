use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::Periodicity;
use crate::errors::{EngineError, EngineResult};

/// Inclusive date window for one budgeting cycle, plus the whole days left
/// until it closes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Period {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub days_remaining: i64,
}

impl Period {
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Resolves the budgeting cycle that contains a reference date.
pub struct PeriodCalculator;

impl PeriodCalculator {
    /// Monthly periods align to the calendar month containing `now`, so the
    /// remaining-days figure matches the user-facing "days left in month".
    /// Weekly (7-day) and biweekly (15-day) periods roll forward from the
    /// anchor in fixed-length windows until one contains `now`.
    pub fn current_period(
        periodicity: Periodicity,
        anchor: NaiveDate,
        now: NaiveDate,
    ) -> EngineResult<Period> {
        let (start, end) = match periodicity {
            Periodicity::Monthly => month_bounds(now),
            Periodicity::Biweekly => rolling_bounds(anchor, now, 15)?,
            Periodicity::Weekly => rolling_bounds(anchor, now, 7)?,
        };
        let days_remaining = (end - now).num_days().max(0);
        Ok(Period {
            start,
            end,
            days_remaining,
        })
    }
}

fn month_bounds(now: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = now.with_day(1).unwrap();
    let end = start + Duration::days(i64::from(days_in_month(now.year(), now.month())) - 1);
    (start, end)
}

fn rolling_bounds(
    anchor: NaiveDate,
    now: NaiveDate,
    interval_days: i64,
) -> EngineResult<(NaiveDate, NaiveDate)> {
    if anchor > now {
        return Err(EngineError::invalid(
            "budget",
            "?",
            "created_at",
            format!("anchor {anchor} lies after the reference date {now}"),
        ));
    }
    let steps = (now - anchor).num_days().div_euclid(interval_days);
    let start = anchor + Duration::days(steps * interval_days);
    let end = start + Duration::days(interval_days - 1);
    Ok((start, end))
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 28).unwrap());
    (first_next - Duration::days(1)).day()
}
