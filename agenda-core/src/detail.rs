//! Detail view for a single calendar day.

use crate::mirror::MirroredEvent;

pub const EMPTY_DAY_MESSAGE: &str = "No interviews scheduled for this day.";

/// The appointments of one day, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayDetail {
    /// Canonical `YYYY-MM-DD` date
    pub date: String,
    pub events: Vec<MirroredEvent>,
}

impl DayDetail {
    pub fn new(date: &str, events: &[MirroredEvent]) -> Self {
        DayDetail {
            date: date.to_string(),
            events: events.to_vec(),
        }
    }

    /// e.g. "Interviews on 25/11/2025"
    pub fn title(&self) -> String {
        let reversed: Vec<&str> = self.date.split('-').rev().collect();
        format!("Interviews on {}", reversed.join("/"))
    }

    /// One line per event, or the placeholder message when the day is empty.
    pub fn lines(&self) -> Vec<String> {
        if self.events.is_empty() {
            return vec![EMPTY_DAY_MESSAGE.to_string()];
        }

        self.events.iter().map(describe).collect()
    }
}

fn describe(event: &MirroredEvent) -> String {
    let mut line = format!("{} ({}) — Contact: {}", event.name, event.group, event.contact);
    if !event.time.is_empty() {
        line.push_str(" - ");
        line.push_str(&event.time);
    }
    line
}
