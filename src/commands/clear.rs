use agenda_core::storage::Storage;
use agenda_core::store::AppointmentStore;
use anyhow::Result;
use owo_colors::OwoColorize;

pub fn run<S: Storage>(store: &AppointmentStore<S>) -> Result<()> {
    if !store.has_completed() {
        println!("{}", "Nothing to clear".dimmed());
        return Ok(());
    }

    let removed = store.clear_completed()?;
    println!(
        "Cleared {} completed {}",
        removed,
        if removed == 1 { "interview" } else { "interviews" }
    );

    Ok(())
}
