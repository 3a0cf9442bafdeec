// Calendar module
// Builds the rolling pool of bookable dates shown as chips under the doctor list

use crate::models::DateOption;
use chrono::{Local, NaiveDate};
use log::debug;

/// Number of selectable days offered, starting tomorrow.
pub const DATE_WINDOW_DAYS: usize = 10;

/// The date pool, computed once when the form is mounted.
#[derive(Debug, Clone, PartialEq)]
pub struct DateWindow {
    generated_for: NaiveDate,
    options: Vec<DateOption>,
}

impl DateWindow {
    /// Builds the window relative to `today`; today itself is never offered.
    pub fn starting_after(today: NaiveDate) -> Self {
        let options: Vec<DateOption> = today
            .iter_days()
            .skip(1)
            .take(DATE_WINDOW_DAYS)
            .map(DateOption::new)
            .collect();

        debug!(
            "Generated {} date options after {} ({} .. {})",
            options.len(),
            today,
            options.first().map(|o| o.iso_date.as_str()).unwrap_or("-"),
            options.last().map(|o| o.iso_date.as_str()).unwrap_or("-"),
        );

        Self {
            generated_for: today,
            options,
        }
    }

    /// Builds the window against the local wall clock.
    pub fn from_local_now() -> Self {
        Self::starting_after(Local::now().date_naive())
    }

    pub fn generated_for(&self) -> NaiveDate {
        self.generated_for
    }

    pub fn options(&self) -> &[DateOption] {
        &self.options
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.options.iter().any(|option| option.date == date)
    }

    pub fn find_iso(&self, iso_date: &str) -> Option<&DateOption> {
        self.options.iter().find(|option| option.iso_date == iso_date)
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_year_window() {
        let window = DateWindow::starting_after(ymd(2024, 1, 1));
        assert_eq!(window.len(), DATE_WINDOW_DAYS);
        assert_eq!(window.options()[0].iso_date, "2024-01-02");
        assert_eq!(window.options()[9].iso_date, "2024-01-11");
        assert_eq!(window.options()[0].display_label, "Tue, Jan 2");
    }

    #[test]
    fn test_window_shape_for_every_day_of_a_leap_year() {
        let mut today = ymd(2023, 12, 25);
        let end = ymd(2025, 1, 5);

        while today <= end {
            let window = DateWindow::starting_after(today);
            assert_eq!(window.len(), 10, "wrong length for {}", today);
            assert!(!window.contains(today), "window for {} offers today", today);

            for (k, option) in window.options().iter().enumerate() {
                assert_eq!(option.date, today + Duration::days(k as i64 + 1));
            }
            for pair in window.options().windows(2) {
                assert!(pair[0].date < pair[1].date);
            }

            today = today + Duration::days(1);
        }
    }

    #[test]
    fn test_window_crosses_month_and_leap_day() {
        let window = DateWindow::starting_after(ymd(2024, 2, 25));
        let isos: Vec<&str> = window.options().iter().map(|o| o.iso_date.as_str()).collect();
        assert_eq!(isos[3], "2024-02-29");
        assert_eq!(isos[4], "2024-03-01");
        assert_eq!(isos[9], "2024-03-06");
    }

    #[test]
    fn test_find_iso() {
        let window = DateWindow::starting_after(ymd(2024, 12, 28));
        assert_eq!(window.find_iso("2025-01-01").map(|o| o.display_label.as_str()), Some("Wed, Jan 1"));
        assert!(window.find_iso("2024-12-28").is_none());
        assert_eq!(window.generated_for(), ymd(2024, 12, 28));
    }
}
