use chrono::prelude::*;
use chrono::Days;
use std::cmp::{max, min};

use crate::scheduling::{zar_cal, DateRoll};

/// Opening time-of-day of the daily business window (inclusive).
pub fn business_open() -> NaiveTime {
    NaiveTime::from_hms_opt(8, 0, 0).unwrap()
}

/// Closing time-of-day of the daily business window (exclusive).
pub fn business_close() -> NaiveTime {
    NaiveTime::from_hms_opt(17, 0, 0).unwrap()
}

/// Returns whether an instant is a business second.
///
/// An instant qualifies when its date is a business day of `cal` and its
/// time-of-day lies inside the business window. The predicate depends only on
/// the instant's date, weekday and time-of-day.
pub fn is_business_second(cal: &impl DateRoll, instant: &NaiveDateTime) -> bool {
    cal.is_bus_day(&instant.date())
        && instant.time() >= business_open()
        && instant.time() < business_close()
}

/// Count the business seconds in the half-open range `[start, end)`.
///
/// The count equals a second-by-second enumeration of [`is_business_second`]
/// over the instants `start + k` whole seconds, `k = 0, 1, 2, ..`, computed
/// day-by-day: each business day contributes the number of enumerated
/// instants landing in the overlap of `[start, end)` with that day's
/// business window. Enumerated instants carry the sub-second phase of
/// `start`, so fractional bounds are honoured. The holiday calendar is
/// re-resolved whenever the walk crosses into a new year.
///
/// An empty or inverted range (`end <= start`) counts zero; it is not an error.
pub fn count_business_seconds(start: &NaiveDateTime, end: &NaiveDateTime) -> i64 {
    if *end <= *start {
        return 0;
    }
    let mut cal_year = start.date().year();
    let mut cal = zar_cal(cal_year);
    let mut total: i64 = 0;
    let mut day = start.date();
    while day <= end.date() {
        if day.year() != cal_year {
            cal_year = day.year();
            cal = zar_cal(cal_year);
        }
        if cal.is_bus_day(&day) {
            let lower = max(day.and_time(business_open()), *start);
            let upper = min(day.and_time(business_close()), *end);
            if upper > lower {
                total += steps_until(start, &upper) - steps_until(start, &lower);
            }
        }
        day = day + Days::new(1);
    }
    total
}

// Smallest number of whole-second steps from `start` reaching `target` or later.
// `target` is never earlier than `start` here.
fn steps_until(start: &NaiveDateTime, target: &NaiveDateTime) -> i64 {
    let delta = *target - *start;
    delta.num_seconds() + i64::from(delta.subsec_nanos() > 0)
}
