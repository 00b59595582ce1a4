//! Create a business day [`Cal`] and count the business seconds in a datetime range.
//!
//! # Calendars
//!
//! A [`Cal`] is based on simple holiday and weekend specification. The South African
//! public holiday calendar is implemented directly by [`zar_cal`], which resolves the
//! statutory holiday rules for a given year, including the rule that a holiday falling
//! on a Sunday is observed on the following Monday.
//!
//! Calendars implement the [`DateRoll`] trait which provides the date classification
//! predicates, distinguishing **weekdays**, **holidays** and **business days**.
//!
//! ### Example
//! This example resolves the 2025 calendar and tests Freedom Day (Sunday 27th April
//! 2025), whose observance shifts to the Monday.
//! ```rust
//! # use bizseconds::scheduling::{ndate, zar_cal, DateRoll};
//! let cal = zar_cal(2025);
//! assert!(cal.is_holiday(&ndate(2025, 4, 27)));
//! assert!(cal.is_holiday(&ndate(2025, 4, 28)));
//! assert!(!cal.is_bus_day(&ndate(2025, 4, 28)));
//! ```
//!
//! # Business seconds
//!
//! A **business second** is a whole second on a business day whose time-of-day lies
//! inside the fixed window `08:00:00` (inclusive) to `17:00:00` (exclusive).
//! [`count_business_seconds`] counts them over a half-open range `[start, end)`,
//! consulting the holiday calendar of every year the range touches.
//!
//! ### Example
//! ```rust
//! # use bizseconds::scheduling::{count_business_seconds, ndt};
//! // Monday 21st July 2025, midnight to midnight: one full business window.
//! assert_eq!(32400, count_business_seconds(&ndt(2025, 7, 21), &ndt(2025, 7, 22)));
//! ```

mod calendars;
mod seconds;

pub use crate::scheduling::{
    calendars::{holidays_for_year, ndate, ndt, zar_cal, Cal, DateRoll, HolidayRule},
    seconds::{business_close, business_open, count_business_seconds, is_business_second},
};
