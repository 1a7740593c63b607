//! Calendar day-grouping and month layout.

mod grid;
mod view;

pub use grid::{DayCell, MonthGrid};
pub use view::CalendarView;

use std::collections::BTreeMap;

use crate::mirror::{self, MirroredEvent};
use crate::storage::Storage;

/// Events bucketed by canonical date, in the order they were encountered.
pub type DayGroups = BTreeMap<String, Vec<MirroredEvent>>;

/// Bucket events by the date part of their composite date.
pub fn group_by_date(events: &[MirroredEvent]) -> DayGroups {
    let mut groups = DayGroups::new();

    for event in events {
        groups
            .entry(event.day_key().to_string())
            .or_default()
            .push(event.clone());
    }

    groups
}

/// Read the mirrored events and lay out `view`'s month.
///
/// Grouping is rebuilt on every call so the grid always reflects the
/// latest mirror.
pub fn render(storage: &impl Storage, view: CalendarView) -> MonthGrid {
    let events = mirror::load_events(storage);
    MonthGrid::build(view, &group_by_date(&events))
}

// =============================================================================
// Tests
// =============================================================================
