//! TUI rendering traits for agenda types.
//!
//! This module provides extension traits that add colored terminal rendering
//! to agenda-core types using owo_colors.

use agenda_core::Appointment;
use agenda_core::calendar::{DayCell, MonthGrid};
use agenda_core::detail::DayDetail;
use chrono::{Local, NaiveDate};
use owo_colors::OwoColorize;

const WEEKDAY_HEADER: &str = " Su  Mo  Tu  We  Th  Fr  Sa";

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Appointment {
    fn render(&self) -> String {
        let check = if self.completed { "✓".green().to_string() } else { " ".to_string() };
        let text = self.to_string();
        let text = if self.completed {
            text.dimmed().strikethrough().to_string()
        } else {
            text
        };

        format!("[{}] {}", check, text)
    }
}

impl Render for DayDetail {
    fn render(&self) -> String {
        let mut lines = vec![self.title().bold().to_string()];

        if self.events.is_empty() {
            lines.extend(self.lines().into_iter().map(|l| format!("  {}", l.dimmed())));
        } else {
            lines.extend(self.lines().into_iter().map(|l| format!("  • {}", l)));
        }

        lines.join("\n")
    }
}

impl Render for MonthGrid {
    fn render(&self) -> String {
        render_grid(self, Local::now().date_naive())
    }
}

/// Draw the grid. Days with appointments get a blue dot, `today` is bold.
fn render_grid(grid: &MonthGrid, today: NaiveDate) -> String {
    let today_key = today.format("%Y-%m-%d").to_string();

    let mut lines = Vec::new();
    let title = grid.view.title();
    lines.push(format!("{:^28}", title).bold().to_string());
    lines.push(WEEKDAY_HEADER.dimmed().to_string());

    for week in &grid.weeks {
        let row: String = week
            .iter()
            .map(|cell| render_cell(cell, &today_key))
            .collect();
        lines.push(row.trim_end().to_string());
    }

    lines.join("\n")
}

fn render_cell(cell: &DayCell, today_key: &str) -> String {
    let DayCell::Day { day, date, events } = cell else {
        return "    ".to_string();
    };

    let number = format!("{:>3}", day);
    let number = if date == today_key {
        number.bold().underline().to_string()
    } else {
        number
    };

    if events.is_empty() {
        format!("{} ", number)
    } else {
        format!("{}{}", number.blue(), "•".blue())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agenda_core::calendar::{CalendarView, DayGroups, group_by_date};
    use agenda_core::mirror::MirroredEvent;

    fn plain(s: &str) -> String {
        console::strip_ansi_codes(s).into_owned()
    }

    #[test]
    fn test_grid_marks_appointment_days() {
        let events = vec![MirroredEvent {
            name: "Ana".to_string(),
            group: "G1".to_string(),
            contact: "555".to_string(),
            date: "2025-11-25 às 14:00".to_string(),
            time: "14:00".to_string(),
        }];
        let grid = MonthGrid::build(CalendarView::new(10, 2025).unwrap(), &group_by_date(&events));
        let today = NaiveDate::from_ymd_opt(2026, 10, 15).unwrap();

        let text = plain(&render_grid(&grid, today));

        assert!(text.contains("November 2025"));
        assert!(text.contains(" 25•"));
        assert!(!text.contains(" 24•"));
    }

    #[test]
    fn test_grid_first_row_padding() {
        let grid = MonthGrid::build(CalendarView::new(10, 2025).unwrap(), &DayGroups::new());
        let today = NaiveDate::from_ymd_opt(2026, 10, 15).unwrap();

        let text = plain(&render_grid(&grid, today));
        let first_week = text.lines().nth(2).unwrap();

        // Saturday is the seventh column
        assert_eq!(first_week, format!("{}  1", " ".repeat(24)));
    }
}
