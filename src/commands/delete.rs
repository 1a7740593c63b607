use agenda_core::storage::Storage;
use agenda_core::store::AppointmentStore;
use anyhow::Result;
use dialoguer::Confirm;
use owo_colors::OwoColorize;

use super::resolve_appointment;

pub fn run<S: Storage>(store: &AppointmentStore<S>, selector: Option<&str>, confirm: bool) -> Result<()> {
    let appointment = resolve_appointment(store, selector)?;

    if confirm {
        println!("{}", appointment);
        let confirmed = Confirm::new()
            .with_prompt("Are you sure you want to delete this item?")
            .default(false)
            .interact()?;

        if !confirmed {
            return Ok(());
        }
    }

    store.remove(&appointment.id)?;
    println!("{}", format!("Deleted: {}", appointment.name).red());

    Ok(())
}
