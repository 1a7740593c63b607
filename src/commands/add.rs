use agenda_core::appointment::canonical_date;
use agenda_core::storage::Storage;
use agenda_core::store::AppointmentStore;
use agenda_core::NewAppointment;
use anyhow::Result;
use chrono::NaiveDate;
use dialoguer::Input;
use owo_colors::OwoColorize;

pub fn run<S: Storage>(
    store: &AppointmentStore<S>,
    name: Option<String>,
    group: Option<String>,
    contact: Option<String>,
    date: Option<String>,
    time: Option<String>,
) -> Result<()> {
    let interactive = name.is_none() || date.is_none();

    let name = match name {
        Some(n) => n,
        None => Input::<String>::new().with_prompt("  Name").interact_text()?,
    };

    let group = prompt_optional(group, "  Group (skip)", interactive)?;
    let contact = prompt_optional(contact, "  Contact (skip)", interactive)?;

    let date = if let Some(d) = date {
        parse_date(&d)?
    } else {
        prompt_date()?
    };

    let time = prompt_optional(time, "  Time, HH:MM (skip)", interactive)?;

    let fields = NewAppointment::new(name, group, contact, &date, &time)?;
    let created = store.add(fields)?;

    if interactive {
        println!();
    }
    println!("{}", format!("  Scheduled: {}", created).green());
    println!("  {}", format!("id {}", created.id).dimmed());

    Ok(())
}

/// Use the given value, ask for it in interactive mode, or leave it empty.
fn prompt_optional(value: Option<String>, prompt: &str, interactive: bool) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None if interactive => Ok(Input::new()
            .with_prompt(prompt)
            .default(String::new())
            .show_default(false)
            .interact_text()?),
        None => Ok(String::new()),
    }
}

/// Ask for the interview day until it parses.
fn prompt_date() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("  Interview day (e.g. 2025-11-25, next fri)")
        .validate_with(|input: &String| parse_date(input).map(|_| ()).map_err(|e| e.to_string()))
        .interact_text()?;

    parse_date(&input)
}

/// Parse a date into canonical `YYYY-MM-DD`.
///
/// Tries the canonical form first, then natural language ("tomorrow",
/// "next fri", "dec 3").
fn parse_date(input: &str) -> Result<String> {
    if let Ok(date) = canonical_date(input) {
        return Ok(date);
    }

    let expanded = spell_out(input);
    let dt = fuzzydate::parse(&expanded)
        .map_err(|_| anyhow::anyhow!("\"{}\" is not a day, try YYYY-MM-DD", input))?;

    Ok(format_date(dt.date()))
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Lowercase the input and spell out the short day and month names that
/// fuzzydate only knows in full.
fn spell_out(input: &str) -> String {
    input
        .to_lowercase()
        .split_whitespace()
        .map(|word| full_word(word.trim_end_matches([',', '.'])))
        .collect::<Vec<_>>()
        .join(" ")
}

fn full_word(word: &str) -> &str {
    match word {
        "tmr" | "tmrw" => "tomorrow",
        "mon" => "monday",
        "tue" | "tues" => "tuesday",
        "wed" => "wednesday",
        "thu" | "thur" | "thurs" => "thursday",
        "fri" => "friday",
        "sat" => "saturday",
        "sun" => "sunday",
        "jan" => "january",
        "feb" => "february",
        "mar" => "march",
        "apr" => "april",
        "jun" => "june",
        "jul" => "july",
        "aug" => "august",
        "sep" | "sept" => "september",
        "oct" => "october",
        "nov" => "november",
        "dec" => "december",
        other => other,
    }
}
