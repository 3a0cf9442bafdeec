// file: src/models/date_option.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One chip in the date pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateOption {
    pub date: NaiveDate,
    pub iso_date: String,      // YYYY-MM-DD
    pub display_label: String, // e.g. "Tue, Jan 2"
}

impl DateOption {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            iso_date: date.format("%Y-%m-%d").to_string(),
            display_label: date.format("%a, %b %-d").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_follow_short_us_format() {
        let option = DateOption::new(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert_eq!(option.iso_date, "2024-01-02");
        assert_eq!(option.display_label, "Tue, Jan 2");
    }

    #[test]
    fn test_two_digit_day_is_not_padded_in_label() {
        let option = DateOption::new(NaiveDate::from_ymd_opt(2024, 11, 23).unwrap());
        assert_eq!(option.iso_date, "2024-11-23");
        assert_eq!(option.display_label, "Sat, Nov 23");
    }
}
