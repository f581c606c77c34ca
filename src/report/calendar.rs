use chrono::{Datelike, Months, NaiveDate};

/// Splits `[start, end]` into calendar-month buckets, clipped to the outer
/// range: one bucket per distinct (year, month) the range touches, each
/// starting at `max(first_of_month, start)` and ending at
/// `min(last_of_month, end)`, ascending by start date.
pub fn month_buckets(start: NaiveDate, end: NaiveDate) -> Vec<(NaiveDate, NaiveDate)> {
    if start > end {
        return Vec::new();
    }
    let mut buckets = Vec::new();
    let mut month_start = first_day_of_month(start.year(), start.month());
    while month_start <= end {
        let month_end = last_day_of_month(month_start.year(), month_start.month());
        buckets.push((month_start.max(start), month_end.min(end)));
        month_start = match month_start.checked_add_months(Months::new(1)) {
            Some(next) => next,
            None => break,
        };
    }
    buckets
}

fn first_day_of_month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).expect("first day of month is a valid date")
}

fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    first_day_of_month(next_year, next_month)
        .pred_opt()
        .expect("month has a last day")
}
