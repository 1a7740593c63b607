mod commands;
mod render;

use agenda_core::config::AgendaConfig;
use agenda_core::storage::FileStorage;
use agenda_core::store::AppointmentStore;
use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "agenda")]
#[command(about = "Schedule interviews and see them on a monthly calendar")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Schedule a new interview (prompts for anything not given)
    Add {
        /// Interviewee name
        #[arg(short, long)]
        name: Option<String>,

        /// Group or organization
        #[arg(short, long)]
        group: Option<String>,

        /// Contact info (phone, email, ...)
        #[arg(short, long)]
        contact: Option<String>,

        /// Date (YYYY-MM-DD, or e.g. "next friday")
        #[arg(short, long)]
        date: Option<String>,

        /// Time (HH:MM)
        #[arg(short, long)]
        time: Option<String>,
    },
    /// List all interviews
    List,
    /// Toggle an interview between pending and completed
    Complete {
        /// Appointment id or list position (prompts if omitted)
        id: Option<String>,

        /// Don't ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Delete an interview
    Delete {
        /// Appointment id or list position (prompts if omitted)
        id: Option<String>,

        /// Don't ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Remove all completed interviews
    Clear,
    /// Show a month with the days that have interviews marked
    Calendar {
        /// Month number (1-12), defaults to the current month
        #[arg(short, long)]
        month: Option<u32>,

        /// Year (1-9999), defaults to the current year
        #[arg(short, long, value_parser = clap::value_parser!(i32).range(1..=9999))]
        year: Option<i32>,

        /// Navigate with the arrow keys and open days
        #[arg(short, long)]
        interactive: bool,
    },
    /// Show the interviews of one day
    Day {
        /// Date (YYYY-MM-DD)
        date: String,
    },
    /// Rebuild the calendar copy of the appointment list
    Sync,
    /// Show config and data paths
    Config {
        /// Turn confirmation prompts on or off
        #[arg(long)]
        confirm: Option<bool>,
    },
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();

    if let Commands::Config { confirm } = cli.command {
        return commands::config::run(confirm);
    }

    let config = AgendaConfig::load()?;
    let store = open_store(&config);

    match cli.command {
        Commands::Add {
            name,
            group,
            contact,
            date,
            time,
        } => commands::add::run(&store, name, group, contact, date, time),
        Commands::List => commands::list::run(&store),
        Commands::Complete { id, yes } => {
            commands::complete::run(&store, id.as_deref(), config.confirm && !yes)
        }
        Commands::Delete { id, yes } => {
            commands::delete::run(&store, id.as_deref(), config.confirm && !yes)
        }
        Commands::Clear => commands::clear::run(&store),
        Commands::Calendar {
            month,
            year,
            interactive,
        } => commands::calendar::run(store.storage(), month, year, interactive),
        Commands::Day { date } => commands::day::run(store.storage(), &date),
        Commands::Sync => commands::sync::run(store.storage()),
        Commands::Config { .. } => Ok(()),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("AGENDA_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn open_store(config: &AgendaConfig) -> AppointmentStore<FileStorage> {
    let storage = config.storage();
    tracing::debug!(dir = %storage.dir().display(), "opening appointment store");
    AppointmentStore::new(storage)
}
