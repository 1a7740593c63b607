//! Month grid with day markers.

use super::{CalendarView, DayGroups};
use crate::mirror::MirroredEvent;

/// One cell of the month grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayCell {
    /// Padding before the first or after the last day.
    Blank,
    Day {
        day: u32,
        /// Canonical `YYYY-MM-DD` key
        date: String,
        events: Vec<MirroredEvent>,
    },
}

impl DayCell {
    /// Whether this is a day with at least one appointment.
    pub fn has_appointment(&self) -> bool {
        matches!(self, DayCell::Day { events, .. } if !events.is_empty())
    }
}

/// A month laid out as weeks of 7 cells, Sunday first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub view: CalendarView,
    pub weeks: Vec<[DayCell; 7]>,
}

impl MonthGrid {
    /// Lay out `view`'s month, attaching the events grouped under each day's key.
    pub fn build(view: CalendarView, groups: &DayGroups) -> Self {
        let mut cells: Vec<DayCell> = Vec::new();

        for _ in 0..view.first_weekday() {
            cells.push(DayCell::Blank);
        }

        for day in 1..=view.days_in_month() {
            let date = view.date_key(day);
            let events = groups.get(&date).cloned().unwrap_or_default();
            cells.push(DayCell::Day { day, date, events });
        }

        while cells.len() % 7 != 0 {
            cells.push(DayCell::Blank);
        }

        let weeks = cells
            .chunks(7)
            .map(|week| std::array::from_fn(|i| week[i].clone()))
            .collect();

        MonthGrid { view, weeks }
    }

    pub fn cells(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks.iter().flatten()
    }

    /// The cell for day number `day`, if the month has it.
    pub fn day(&self, day: u32) -> Option<&DayCell> {
        self.cells()
            .find(|cell| matches!(cell, DayCell::Day { day: d, .. } if *d == day))
    }

    /// Day numbers that have at least one appointment.
    pub fn marked_days(&self) -> Vec<u32> {
        self.cells()
            .filter_map(|cell| match cell {
                DayCell::Day { day, events, .. } if !events.is_empty() => Some(*day),
                _ => None,
            })
            .collect()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::group_by_date;

    fn event(date: &str) -> MirroredEvent {
        MirroredEvent {
            name: "Ana".to_string(),
            group: "G1".to_string(),
            contact: "555".to_string(),
            date: date.to_string(),
            time: String::new(),
        }
    }

    #[test]
    fn test_november_2025_layout() {
        let view = CalendarView::new(10, 2025).unwrap();
        let grid = MonthGrid::build(view, &DayGroups::new());

        // Saturday start, 30 days: 6 blanks + 30 days = 36, padded to 42
        assert_eq!(grid.weeks.len(), 6);
        assert!(grid.weeks[0][..6].iter().all(|c| *c == DayCell::Blank));
        assert!(matches!(&grid.weeks[0][6], DayCell::Day { day: 1, .. }));
        assert!(matches!(&grid.weeks[5][0], DayCell::Day { day: 30, .. }));
        assert!(grid.weeks[5][1..].iter().all(|c| *c == DayCell::Blank));
    }

    #[test]
    fn test_february_2026_fits_four_weeks() {
        // Starts on Sunday with 28 days
        let view = CalendarView::new(1, 2026).unwrap();
        let grid = MonthGrid::build(view, &DayGroups::new());

        assert_eq!(grid.weeks.len(), 4);
        assert!(grid.cells().all(|c| *c != DayCell::Blank));
    }

    #[test]
    fn test_marks_days_with_events() {
        let groups = group_by_date(&[event("2025-11-25 às 14:00"), event("2025-11-03")]);
        let view = CalendarView::new(10, 2025).unwrap();
        let grid = MonthGrid::build(view, &groups);

        assert_eq!(grid.marked_days(), vec![3, 25]);
        assert!(grid.day(25).is_some_and(DayCell::has_appointment));
        assert!(grid.day(24).is_some_and(|c| !c.has_appointment()));
        assert_eq!(grid.day(31), None);
    }

    #[test]
    fn test_no_cross_month_leakage() {
        let groups = group_by_date(&[
            event("2025-10-25"),
            event("2025-12-25"),
            event("2024-11-25"),
            event("2025-11-31"),
        ]);
        let view = CalendarView::new(10, 2025).unwrap();
        let grid = MonthGrid::build(view, &groups);

        assert!(grid.marked_days().is_empty());
    }
}
