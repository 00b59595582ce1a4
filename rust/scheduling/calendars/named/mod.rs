//! Static data and per-year resolution for the named holiday calendar rule set.
//!

pub mod zar;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use indexmap::set::IndexSet;

use crate::scheduling::calendars::{ndate, Cal};

/// A single public holiday rule, resolved to a calendar date per year.
#[derive(Debug, Clone, Copy)]
pub enum HolidayRule {
    /// A holiday gazetted for the same month and day in every year.
    Fixed { month: u32, day: u32 },
    /// A movable holiday resolved by a per-year function.
    Resolved(fn(i32) -> NaiveDate),
}

impl HolidayRule {
    pub(crate) fn resolve(&self, year: i32) -> NaiveDate {
        match self {
            HolidayRule::Fixed { month, day } => ndate(year, *month, *day),
            HolidayRule::Resolved(resolver) => resolver(year),
        }
    }
}

/// Resolve the set of observed public holiday dates for a year.
///
/// Every base holiday falling on a Sunday contributes the following Monday as an
/// additional observed entry. Set semantics dedupe a shifted Monday that collides
/// with another base holiday.
pub fn holidays_for_year(year: i32) -> IndexSet<NaiveDate> {
    let base: IndexSet<NaiveDate> = zar::RULES.iter().map(|rule| rule.resolve(year)).collect();
    let shifted: Vec<NaiveDate> = base
        .iter()
        .filter(|date| date.weekday() == Weekday::Sun)
        .map(|date| *date + Days::new(1))
        .collect();
    base.into_iter().chain(shifted).collect()
}

/// Build the South African business day calendar for a year.
pub fn zar_cal(year: i32) -> Cal {
    Cal::new(
        holidays_for_year(year).into_iter().collect(),
        zar::WEEKMASK.to_vec(),
    )
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduling::DateRoll;

    #[test]
    fn test_holidays_2025() {
        // Freedom Day (27th April 2025) is a Sunday: 13 observed dates.
        let hols = holidays_for_year(2025);
        assert_eq!(13, hols.len());
        assert!(hols.contains(&ndate(2025, 4, 27)));
        assert!(hols.contains(&ndate(2025, 4, 28)));
    }

    #[test]
    fn test_holidays_no_sunday_shift() {
        // National Women's Day (9th August 2025) is a Saturday and does not shift.
        let hols = holidays_for_year(2025);
        assert!(hols.contains(&ndate(2025, 8, 9)));
        assert!(!hols.contains(&ndate(2025, 8, 11)));
    }

    #[test]
    fn test_holidays_shift_collision_dedupes() {
        // Christmas Day 2022 is a Sunday; its shifted Monday is Day of Goodwill,
        // already a base holiday. Workers' Day 2022 is also a Sunday.
        let hols = holidays_for_year(2022);
        assert_eq!(13, hols.len());
        assert!(hols.contains(&ndate(2022, 5, 2)));
        assert!(hols.contains(&ndate(2022, 12, 26)));
    }

    #[test]
    fn test_movable_rules_pinned() {
        // The movable feasts resolve to the 2025 month/day in any year.
        let hols = holidays_for_year(2031);
        assert!(hols.contains(&ndate(2031, 4, 18)));
        assert!(hols.contains(&ndate(2031, 4, 21)));
    }

    #[test]
    fn test_zar_cal() {
        let cal = zar_cal(2025);
        assert!(!cal.is_bus_day(&ndate(2025, 4, 28))); // observed Freedom Day
        assert!(!cal.is_bus_day(&ndate(2025, 7, 19))); // Saturday
        assert!(cal.is_bus_day(&ndate(2025, 7, 21))); // plain Monday
    }
}
