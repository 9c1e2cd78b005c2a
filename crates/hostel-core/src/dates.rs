//! Calendar-date helpers.
//!
//! The backend exchanges dates as ISO calendar dates (`YYYY-MM-DD`), which is
//! exactly how [`chrono::NaiveDate`] serializes, so no custom format is needed.

use chrono::{Local, NaiveDate};

/// Source of "today" for workflow transitions.
///
/// Screens hold one of these so tests can pin the date.
pub type Clock = fn() -> NaiveDate;

/// Today's date on the local clock.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dates_serialize_as_iso() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(date.to_string(), "2024-03-07");
    }

    #[test]
    fn test_today_matches_local_clock() {
        let before = Local::now().date_naive();
        let value = today();
        let after = Local::now().date_naive();
        assert!(value >= before && value <= after);
    }
}
