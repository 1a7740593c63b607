use agenda_core::storage::Storage;
use agenda_core::store::AppointmentStore;
use anyhow::Result;
use dialoguer::Confirm;
use owo_colors::OwoColorize;

use super::resolve_appointment;

pub fn run<S: Storage>(store: &AppointmentStore<S>, selector: Option<&str>, confirm: bool) -> Result<()> {
    let appointment = resolve_appointment(store, selector)?;

    // Marking as completed needs the details to have been recorded elsewhere first
    if !appointment.completed && confirm {
        let confirmed = Confirm::new()
            .with_prompt("Interview completed. Has the information already been recorded?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Left as pending".dimmed());
            return Ok(());
        }
    }

    match store.toggle_completed(&appointment.id)? {
        Some(true) => println!("{}", format!("Completed: {}", appointment.name).green()),
        Some(false) => println!("{}", format!("Reopened: {}", appointment.name).yellow()),
        None => anyhow::bail!("Appointment '{}' disappeared", appointment.id),
    }

    Ok(())
}
