use aquamind_schemas::reminder::{Frequency, Reminder};
use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

/// The first time `reminder` fires strictly after `after`, or `None` for a
/// one-off reminder that has already passed.
pub fn next_occurrence(reminder: &Reminder, after: DateTime<Utc>) -> Option<DateTime<Utc>> {
    if reminder.due > after {
        return Some(reminder.due);
    }
    match reminder.frequency {
        Frequency::Once => None,
        Frequency::Daily => Some(step_past(reminder.due, Duration::days(1), after)),
        Frequency::Weekly => Some(step_past(reminder.due, Duration::weeks(1), after)),
        Frequency::Monthly => next_monthly(reminder.due, after),
    }
}

fn step_past(anchor: DateTime<Utc>, step: Duration, after: DateTime<Utc>) -> DateTime<Utc> {
    let periods = (after - anchor).num_seconds() / step.num_seconds() + 1;
    anchor + Duration::seconds(step.num_seconds() * periods)
}

fn next_monthly(anchor: DateTime<Utc>, after: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let mut months = (after.year() - anchor.year()) * 12 + after.month() as i32 - anchor.month() as i32;
    loop {
        let candidate = add_months(anchor, months)?;
        if candidate > after {
            return Some(candidate);
        }
        months += 1;
    }
}

/// Moves `anchor` by whole months, clamping the day to the target month's length.
fn add_months(anchor: DateTime<Utc>, months: i32) -> Option<DateTime<Utc>> {
    let total = anchor.year() * 12 + anchor.month0() as i32 + months;
    let year = total.div_euclid(12);
    let month = total.rem_euclid(12) as u32 + 1;
    let day = anchor.day().min(days_in_month(year, month)?);
    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    Some(date.and_time(anchor.time()).and_utc())
}

fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?
        .pred_opt()
        .map(|d| d.day())
}
