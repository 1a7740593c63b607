//! Calendar mirror of the appointment list.
//!
//! The mirror is a derived cache: it is regenerated in full from the
//! appointment blob every time the store changes, and never edited directly.

use serde::{Deserialize, Serialize};

use crate::appointment::{Appointment, null_as_default};
use crate::constants::{APPOINTMENTS_KEY, CALENDAR_EVENTS_KEY, TIME_SEPARATOR};
use crate::error::AgendaResult;
use crate::storage::{self, Storage};

/// An appointment as seen by the calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MirroredEvent {
    #[serde(default, alias = "nome", deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, alias = "congregacao", deserialize_with = "null_as_default")]
    pub group: String,
    #[serde(default, alias = "contato", deserialize_with = "null_as_default")]
    pub contact: String,
    /// `YYYY-MM-DD`, optionally followed by the time separator and the time.
    #[serde(default, alias = "data", deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(default, alias = "horario", deserialize_with = "null_as_default")]
    pub time: String,
}

impl MirroredEvent {
    /// The calendar date this event falls on (everything before the first space).
    pub fn day_key(&self) -> &str {
        date_part(&self.date)
    }
}

impl From<&Appointment> for MirroredEvent {
    fn from(appointment: &Appointment) -> Self {
        MirroredEvent {
            name: appointment.name.clone(),
            group: appointment.group.clone(),
            contact: appointment.contact.clone(),
            date: compose_date(&appointment.date, &appointment.time),
            time: appointment.time.clone(),
        }
    }
}

/// Derive the calendar events for a list of appointments.
pub fn mirror(appointments: &[Appointment]) -> Vec<MirroredEvent> {
    appointments.iter().map(MirroredEvent::from).collect()
}

/// Join a date and a time into the composite mirrored date.
///
/// A date that is already composite is reduced to its date part first, so
/// applying this to mirrored output yields the same value again.
pub fn compose_date(date: &str, time: &str) -> String {
    let date = date_part(date);

    if time.is_empty() {
        date.to_string()
    } else {
        format!("{date}{TIME_SEPARATOR}{time}")
    }
}

fn date_part(date: &str) -> &str {
    date.split(' ').next().unwrap_or_default()
}

/// Regenerate the mirrored blob from the persisted appointment blob.
///
/// Unreadable appointment data is logged and mirrored as an empty list.
/// Returns the number of mirrored events.
pub fn sync(storage: &impl Storage) -> AgendaResult<usize> {
    let appointments: Vec<Appointment> = storage::load_list(storage, APPOINTMENTS_KEY);
    let events = mirror(&appointments);

    storage::save_list(storage, CALENDAR_EVENTS_KEY, &events)?;
    tracing::debug!(count = events.len(), "calendar mirror regenerated");

    Ok(events.len())
}

/// Read the mirrored blob. Absent or corrupt data reads as empty.
pub fn load_events(storage: &impl Storage) -> Vec<MirroredEvent> {
    storage::load_list(storage, CALENDAR_EVENTS_KEY)
}

// =============================================================================
// Tests
// =============================================================================
