use chrono::prelude::*;

/// Create a `NaiveDate`.
///
/// Panics if date values are invalid.
pub fn ndate(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("`year`, `month` `day` are invalid.")
}

/// Create a `NaiveDateTime` with default null time.
///
/// Panics if date values are invalid.
pub fn ndt(year: i32, month: u32, day: u32) -> NaiveDateTime {
    ndate(year, month, day).and_hms_opt(0, 0, 0).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ndt_is_null_time() {
        let dt = ndt(2025, 7, 21);
        assert_eq!(dt.date(), ndate(2025, 7, 21));
        assert_eq!(dt.time(), NaiveTime::from_hms_opt(0, 0, 0).unwrap());
    }
}
