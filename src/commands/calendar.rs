use agenda_core::calendar::{self, CalendarView, DayCell, MonthGrid};
use agenda_core::detail::DayDetail;
use agenda_core::storage::Storage;
use anyhow::Result;
use chrono::{Datelike, Local};
use console::{Key, Term};
use dialoguer::Input;
use owo_colors::OwoColorize;

use crate::render::Render;

const HELP: &str = "←/→ month   t today   d open day   q quit";

pub fn run(
    storage: &impl Storage,
    month: Option<u32>,
    year: Option<i32>,
    interactive: bool,
) -> Result<()> {
    let view = initial_view(month, year)?;

    if interactive {
        return navigate(storage, view);
    }

    let grid = calendar::render(storage, view);
    println!("{}", grid.render());
    print_marked_summary(&grid);

    Ok(())
}

fn initial_view(month: Option<u32>, year: Option<i32>) -> Result<CalendarView> {
    let current = CalendarView::current();

    let view = match (month, year) {
        (None, None) => current,
        (Some(m), y) => CalendarView::from_month_number(m, y.unwrap_or(current.year()))?,
        (None, Some(y)) => CalendarView::new(current.month0(), y)?,
    };

    Ok(view)
}

/// Redraw the month after every key until the user quits.
fn navigate(storage: &impl Storage, mut view: CalendarView) -> Result<()> {
    let term = Term::stdout();

    loop {
        let grid = calendar::render(storage, view);

        term.clear_screen()?;
        println!("{}", grid.render());
        println!();
        println!("{}", HELP.dimmed());

        match term.read_key()? {
            Key::ArrowLeft | Key::Char('h') => view = view.prev(),
            Key::ArrowRight | Key::Char('l') => view = view.next(),
            Key::Home | Key::Char('t') => view = CalendarView::current(),
            Key::Enter | Key::Char('d') => open_day(&term, &grid)?,
            Key::Escape | Key::Char('q') => break,
            _ => {}
        }
    }

    term.clear_screen()?;
    Ok(())
}

/// Ask for a day number and show its appointments until a key is pressed.
fn open_day(term: &Term, grid: &MonthGrid) -> Result<()> {
    let default_day = default_day(grid);

    let day: u32 = Input::new()
        .with_prompt("  Day")
        .default(default_day)
        .interact_text()?;

    match grid.day(day) {
        Some(DayCell::Day { date, events, .. }) if !events.is_empty() => {
            println!();
            println!("{}", DayDetail::new(date, events).render());
        }
        Some(DayCell::Day { .. }) => {
            println!("{}", format!("  No interviews on day {}", day).dimmed());
        }
        _ => {
            println!(
                "{}",
                format!("  {} has no day {}", grid.view.title(), day).red()
            );
        }
    }

    println!();
    println!("{}", "Press any key to close".dimmed());
    term.read_key()?;

    Ok(())
}

/// Today if it's in the displayed month, else the first marked day, else the 1st.
fn default_day(grid: &MonthGrid) -> u32 {
    let today = Local::now().date_naive();

    if CalendarView::containing(today) == grid.view {
        return today.day();
    }

    grid.marked_days().first().copied().unwrap_or(1)
}

fn print_marked_summary(grid: &MonthGrid) {
    let marked = grid.marked_days();

    println!();
    if marked.is_empty() {
        println!("{}", "No interviews this month".dimmed());
        return;
    }

    let days: Vec<String> = marked.iter().map(|d| d.to_string()).collect();
    println!(
        "{} {}",
        "Interviews on:".dimmed(),
        days.join(", ")
    );
    println!(
        "{}",
        "Run `agenda day YYYY-MM-DD` to see the details".dimmed()
    );
}
