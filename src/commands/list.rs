use agenda_core::storage::Storage;
use agenda_core::store::AppointmentStore;
use anyhow::Result;
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run<S: Storage>(store: &AppointmentStore<S>) -> Result<()> {
    let appointments = store.list();

    if appointments.is_empty() {
        println!("{}", "No appointments".dimmed());
        return Ok(());
    }

    for (i, appointment) in appointments.iter().enumerate() {
        println!(
            "{:>3}. {} {}",
            i + 1,
            appointment.render(),
            format!("[{}]", appointment.id).dimmed()
        );
    }

    let summary = store.summary();
    if summary.has_completed() {
        println!();
        println!(
            "{}",
            format!(
                "{} of {} completed. Remove them with `agenda clear`",
                summary.completed, summary.total
            )
            .dimmed()
        );
    }

    Ok(())
}
