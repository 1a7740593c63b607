//! Persisted appointment list.
//!
//! Every mutation loads the full list, changes it, writes the full list back
//! and then regenerates the calendar mirror, in that order. Mutations refuse
//! to run over an appointment blob that exists but can't be parsed.

use chrono::Utc;

use crate::appointment::{self, Appointment, NewAppointment};
use crate::constants::APPOINTMENTS_KEY;
use crate::error::AgendaResult;
use crate::mirror;
use crate::storage::{self, Storage};

pub struct AppointmentStore<S: Storage> {
    storage: S,
}

/// Counts shown next to the appointment list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreSummary {
    pub total: usize,
    pub completed: usize,
}

impl StoreSummary {
    /// Whether the "clear completed" action has anything to do.
    pub fn has_completed(&self) -> bool {
        self.completed > 0
    }
}

impl<S: Storage> AppointmentStore<S> {
    pub fn new(storage: S) -> Self {
        AppointmentStore { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// All appointments in insertion order. Absent or corrupt data reads as empty.
    pub fn list(&self) -> Vec<Appointment> {
        storage::load_list(&self.storage, APPOINTMENTS_KEY)
    }

    pub fn summary(&self) -> StoreSummary {
        let appointments = self.list();
        StoreSummary {
            total: appointments.len(),
            completed: appointments.iter().filter(|a| a.completed).count(),
        }
    }

    pub fn has_completed(&self) -> bool {
        self.summary().has_completed()
    }

    /// Append a new, not yet completed appointment.
    pub fn add(&self, fields: NewAppointment) -> AgendaResult<Appointment> {
        let mut appointments = self.load_for_update()?;

        let id = appointment::next_id(&appointments, Utc::now().timestamp_millis());
        let created = fields.into_appointment(id);
        appointments.push(created.clone());

        self.save(&appointments)?;
        tracing::info!(id = %created.id, date = %created.date, "appointment added");

        Ok(created)
    }

    /// Remove the appointment with `id`. Unknown ids leave the list as is.
    pub fn remove(&self, id: &str) -> AgendaResult<()> {
        let mut appointments = self.load_for_update()?;
        let before = appointments.len();
        appointments.retain(|a| a.id != id);

        if appointments.len() == before {
            tracing::debug!(id, "remove: no such appointment");
        }

        self.save(&appointments)
    }

    /// Flip the completed flag. Returns the new value, `None` if `id` is unknown.
    pub fn toggle_completed(&self, id: &str) -> AgendaResult<Option<bool>> {
        let mut appointments = self.load_for_update()?;

        let Some(appointment) = appointments.iter_mut().find(|a| a.id == id) else {
            tracing::debug!(id, "toggle: no such appointment");
            return Ok(None);
        };

        appointment.completed = !appointment.completed;
        let completed = appointment.completed;

        self.save(&appointments)?;
        Ok(Some(completed))
    }

    /// Drop every completed appointment. Returns how many were removed.
    pub fn clear_completed(&self) -> AgendaResult<usize> {
        let mut appointments = self.load_for_update()?;
        let before = appointments.len();
        appointments.retain(|a| !a.completed);

        self.save(&appointments)?;
        Ok(before - appointments.len())
    }

    fn load_for_update(&self) -> AgendaResult<Vec<Appointment>> {
        storage::load_list_strict(&self.storage, APPOINTMENTS_KEY)
    }

    /// Write the full list, then regenerate the mirror from what was written.
    fn save(&self, appointments: &[Appointment]) -> AgendaResult<()> {
        storage::save_list(&self.storage, APPOINTMENTS_KEY, appointments)?;
        mirror::sync(&self.storage)?;
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
