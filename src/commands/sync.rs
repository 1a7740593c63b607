use agenda_core::mirror;
use agenda_core::storage::Storage;
use anyhow::Result;

pub fn run(storage: &impl Storage) -> Result<()> {
    let count = mirror::sync(storage)?;
    println!(
        "Calendar rebuilt from {} {}",
        count,
        if count == 1 { "appointment" } else { "appointments" }
    );
    Ok(())
}
