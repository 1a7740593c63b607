use agenda_core::config::AgendaConfig;
use anyhow::Result;
use owo_colors::OwoColorize;

pub fn run(confirm: Option<bool>) -> Result<()> {
    let config_path = AgendaConfig::config_path()?;
    let config = AgendaConfig::load()?;

    let config = match confirm {
        Some(confirm) => {
            // Edit the file's own settings; AGENDA_* overrides stay per-run.
            let mut stored = AgendaConfig::load_file(&config_path)?;
            stored.confirm = confirm;
            stored.save_to(&config_path)?;
            println!("{}", format!("Saved {}", config_path.display()).green());
            println!();
            AgendaConfig::load_from(&config_path)?
        }
        None => config,
    };

    println!("{}", "Paths".bold());
    println!("  Config:  {}", config_path.display());
    println!("  Data:    {}", config.data_path().display());
    println!();
    println!("{}", "Settings".bold());
    println!("  Confirm actions:  {}", config.confirm);

    Ok(())
}
