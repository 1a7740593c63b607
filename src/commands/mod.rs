pub mod add;
pub mod calendar;
pub mod clear;
pub mod complete;
pub mod config;
pub mod day;
pub mod delete;
pub mod list;
pub mod sync;

use agenda_core::Appointment;
use agenda_core::storage::Storage;
use agenda_core::store::AppointmentStore;
use anyhow::Result;
use dialoguer::Select;

/// Find the appointment the user means.
///
/// Accepts an exact id or a 1-based list position. Without a selector,
/// asks the user to pick one.
pub fn resolve_appointment<S: Storage>(
    store: &AppointmentStore<S>,
    selector: Option<&str>,
) -> Result<Appointment> {
    let appointments = store.list();

    if appointments.is_empty() {
        anyhow::bail!("No appointments yet.\n\nSchedule one with:\n  agenda add");
    }

    let Some(selector) = selector else {
        let items: Vec<String> = appointments.iter().map(|a| a.to_string()).collect();
        let index = Select::new()
            .with_prompt("  Which appointment?")
            .items(&items)
            .default(0)
            .interact()?;
        return Ok(appointments[index].clone());
    };

    find_appointment(&appointments, selector).ok_or_else(|| {
        anyhow::anyhow!(
            "Appointment '{}' not found. Use an id or a position from `agenda list`",
            selector
        )
    })
}

fn find_appointment(appointments: &[Appointment], selector: &str) -> Option<Appointment> {
    if let Some(found) = appointments.iter().find(|a| a.id == selector) {
        return Some(found.clone());
    }

    let position: usize = selector.trim_start_matches('#').parse().ok()?;
    position
        .checked_sub(1)
        .and_then(|i| appointments.get(i))
        .cloned()
}
