mod cal;
mod calendar;
mod dateroll;
mod named;

pub use crate::scheduling::calendars::{
    cal::Cal,
    calendar::{ndate, ndt},
    dateroll::DateRoll,
    named::{holidays_for_year, zar_cal, HolidayRule},
};
