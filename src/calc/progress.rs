use crate::data::holiday::Holiday;
use chrono::{Datelike, NaiveDate};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct YearProgress {
    pub completed: usize,
    pub total: usize,
    /// Whole percent of `year` elapsed as of today, 0..=100.
    pub percent_of_year: u32,
}

pub fn year_progress(holidays: &[Holiday], year: i32, today: NaiveDate) -> YearProgress {
    YearProgress {
        completed: holidays.iter().filter(|h| h.passed()).count(),
        total: holidays.len(),
        percent_of_year: percent_of_year(year, today),
    }
}

pub(crate) fn days_in_year(year: i32) -> u32 {
    if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
        366
    } else {
        365
    }
}

pub(crate) fn percent_of_year(year: i32, today: NaiveDate) -> u32 {
    if today.year() > year {
        100
    } else if today.year() < year {
        0
    } else {
        today.ordinal() * 100 / days_in_year(year)
    }
}

/// The first holiday that is today or still ahead, in calendar order.
pub fn next_upcoming(holidays: &[Holiday]) -> Option<&Holiday> {
    holidays
        .iter()
        .filter(|h| !h.passed())
        .min_by_key(|h| h.calendar_date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::holiday_calc::{create_holiday_object, get_holidays_for_year};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_days_in_year() {
        assert_eq!(days_in_year(2024), 366);
        assert_eq!(days_in_year(2025), 365);
        assert_eq!(days_in_year(1900), 365);
        assert_eq!(days_in_year(2000), 366);
    }

    #[test]
    fn test_percent_of_year_current_year() {
        // 2025-06-01 is day 152 of 365.
        assert_eq!(percent_of_year(2025, d(2025, 6, 1)), 41);
        assert_eq!(percent_of_year(2025, d(2025, 12, 31)), 100);
        assert_eq!(percent_of_year(2025, d(2025, 1, 1)), 0);
    }

    #[test]
    fn test_percent_of_year_other_years() {
        assert_eq!(percent_of_year(2024, d(2025, 6, 1)), 100);
        assert_eq!(percent_of_year(2026, d(2025, 6, 1)), 0);
    }

    #[test]
    fn test_year_progress_counts_passed() {
        let today = d(2025, 6, 1);
        let holidays = get_holidays_for_year(2025, today).unwrap();
        let p = year_progress(&holidays, 2025, today);
        assert_eq!(p.completed, 12);
        assert_eq!(p.total, 25);
        assert_eq!(p.percent_of_year, 41);
    }

    #[test]
    fn test_year_progress_empty() {
        let p = year_progress(&[], 2025, d(2025, 6, 1));
        assert_eq!(p.completed, 0);
        assert_eq!(p.total, 0);
    }

    #[test]
    fn test_next_upcoming_uses_calendar_order() {
        let today = d(2025, 6, 1);
        let holidays = vec![
            create_holiday_object(1, "Later", "Dec 25", 2025, today).unwrap(),
            create_holiday_object(2, "Sooner", "Jul 1", 2025, today).unwrap(),
            create_holiday_object(3, "Gone", "Jan 1", 2025, today).unwrap(),
        ];
        assert_eq!(next_upcoming(&holidays).unwrap().name, "Sooner");
    }

    #[test]
    fn test_next_upcoming_none_when_all_passed() {
        let today = d(2026, 1, 1);
        let holidays = get_holidays_for_year(2025, today).unwrap();
        assert!(next_upcoming(&holidays).is_none());
    }
}
