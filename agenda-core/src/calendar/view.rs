//! Which month the calendar is showing.

use std::fmt;

use chrono::{Datelike, Local, NaiveDate};

use crate::error::{AgendaError, AgendaResult};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// The displayed month. Owned by the caller and passed through navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarView {
    month0: u32,
    year: i32,
}

impl CalendarView {
    /// `month0` is zero-based (0 = January).
    pub fn new(month0: u32, year: i32) -> AgendaResult<Self> {
        if month0 > 11 {
            return Err(AgendaError::InvalidMonth(month0 + 1));
        }
        Ok(CalendarView { month0, year })
    }

    /// Build from a one-based month number as typed by a user.
    pub fn from_month_number(month: u32, year: i32) -> AgendaResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(AgendaError::InvalidMonth(month));
        }
        Self::new(month - 1, year)
    }

    /// The month containing today's local date.
    pub fn current() -> Self {
        Self::containing(Local::now().date_naive())
    }

    pub fn containing(date: NaiveDate) -> Self {
        CalendarView {
            month0: date.month0(),
            year: date.year(),
        }
    }

    pub fn month0(&self) -> u32 {
        self.month0
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// The following month. Stays put past the last year chrono can represent.
    pub fn next(self) -> Self {
        if self.month0 == 11 {
            match representable(self.year.checked_add(1)) {
                Some(year) => CalendarView { month0: 0, year },
                None => self,
            }
        } else {
            CalendarView { month0: self.month0 + 1, ..self }
        }
    }

    /// The preceding month. Stays put before the first year chrono can represent.
    pub fn prev(self) -> Self {
        if self.month0 == 0 {
            match representable(self.year.checked_sub(1)) {
                Some(year) => CalendarView { month0: 11, year },
                None => self,
            }
        } else {
            CalendarView { month0: self.month0 - 1, ..self }
        }
    }

    /// First day of the month. `None` only for years chrono can't represent.
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month0 + 1, 1)
    }

    /// Number of days in the month: day 0 of the following month.
    pub fn days_in_month(&self) -> u32 {
        if self.month0 == 11 {
            return if self.first_day().is_some() { 31 } else { 0 };
        }

        NaiveDate::from_ymd_opt(self.year, self.month0 + 2, 1)
            .and_then(|d| d.pred_opt())
            .map(|d| d.day())
            .unwrap_or(0)
    }

    /// Weekday of the first day, 0 = Sunday.
    pub fn first_weekday(&self) -> u32 {
        self.first_day()
            .map(|d| d.weekday().num_days_from_sunday())
            .unwrap_or(0)
    }

    /// Canonical `YYYY-MM-DD` key of a day in this month.
    pub fn date_key(&self, day: u32) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month0 + 1, day)
    }

    pub fn title(&self) -> String {
        format!("{} {}", MONTH_NAMES[self.month0 as usize], self.year)
    }
}

fn representable(year: Option<i32>) -> Option<i32> {
    year.filter(|&y| NaiveDate::from_ymd_opt(y, 1, 1).is_some())
}

impl fmt::Display for CalendarView {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.title())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn view(month0: u32, year: i32) -> CalendarView {
        CalendarView::new(month0, year).unwrap()
    }

    #[test]
    fn test_next_wraps_december() {
        assert_eq!(view(11, 2025).next(), view(0, 2026));
        assert_eq!(view(4, 2025).next(), view(5, 2025));
    }

    #[test]
    fn test_prev_wraps_january() {
        assert_eq!(view(0, 2026).prev(), view(11, 2025));
        assert_eq!(view(5, 2025).prev(), view(4, 2025));
    }

    #[test]
    fn test_navigation_stops_at_representable_years() {
        let last = view(11, NaiveDate::MAX.year());
        assert_eq!(last.next(), last);
        assert_eq!(last.prev(), view(10, NaiveDate::MAX.year()));

        let first = view(0, NaiveDate::MIN.year());
        assert_eq!(first.prev(), first);
        assert_eq!(first.next(), view(1, NaiveDate::MIN.year()));

        let far = view(11, i32::MAX);
        assert_eq!(far.next(), far);
        assert_eq!(view(0, i32::MIN).prev(), view(0, i32::MIN));
    }

    #[test]
    fn test_rejects_out_of_range_month() {
        assert!(matches!(CalendarView::new(12, 2025), Err(AgendaError::InvalidMonth(13))));
        assert!(matches!(
            CalendarView::from_month_number(0, 2025),
            Err(AgendaError::InvalidMonth(0))
        ));
        assert_eq!(CalendarView::from_month_number(11, 2025).unwrap(), view(10, 2025));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(view(10, 2025).days_in_month(), 30);
        assert_eq!(view(11, 2025).days_in_month(), 31);
        assert_eq!(view(1, 2024).days_in_month(), 29);
        assert_eq!(view(1, 2025).days_in_month(), 28);
        assert_eq!(view(1, 1900).days_in_month(), 28);
        assert_eq!(view(1, 2000).days_in_month(), 29);
        assert_eq!(view(11, NaiveDate::MAX.year()).days_in_month(), 31);
    }

    #[test]
    fn test_first_weekday() {
        // 2025-11-01 is a Saturday, 2026-02-01 a Sunday
        assert_eq!(view(10, 2025).first_weekday(), 6);
        assert_eq!(view(1, 2026).first_weekday(), 0);
    }

    #[test]
    fn test_date_key_is_zero_padded() {
        assert_eq!(view(2, 2025).date_key(7), "2025-03-07");
        assert_eq!(view(10, 2025).date_key(25), "2025-11-25");
    }

    #[test]
    fn test_title() {
        assert_eq!(view(10, 2025).title(), "November 2025");
        assert_eq!(view(0, 2026).to_string(), "January 2026");
    }

    #[test]
    fn test_containing() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 15).unwrap();
        assert_eq!(CalendarView::containing(date), view(9, 2026));
    }
}
