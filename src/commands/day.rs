use agenda_core::appointment::canonical_date;
use agenda_core::calendar::group_by_date;
use agenda_core::detail::DayDetail;
use agenda_core::mirror;
use agenda_core::storage::Storage;
use anyhow::Result;

use crate::render::Render;

pub fn run(storage: &impl Storage, date: &str) -> Result<()> {
    let date = canonical_date(date)?;
    let groups = group_by_date(&mirror::load_events(storage));

    let events = groups.get(&date).map(Vec::as_slice).unwrap_or_default();
    println!("{}", DayDetail::new(&date, events).render());

    Ok(())
}
