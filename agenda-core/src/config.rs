//! Agenda configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{AgendaError, AgendaResult};
use crate::storage::FileStorage;

static DEFAULT_DATA_DIR: &str = "~/.local/share/agenda";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn is_default_data_dir(p: &PathBuf) -> bool {
    *p == default_data_dir()
}

fn default_confirm() -> bool {
    true
}

/// Configuration at ~/.config/agenda/config.toml
///
/// Every key can be overridden with an `AGENDA_` environment variable,
/// e.g. `AGENDA_DATA_DIR`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AgendaConfig {
    /// Where the appointment and calendar blobs are stored
    #[serde(default = "default_data_dir", skip_serializing_if = "is_default_data_dir")]
    pub data_dir: PathBuf,

    /// Ask before deleting or completing an appointment
    #[serde(default = "default_confirm")]
    pub confirm: bool,
}

impl Default for AgendaConfig {
    fn default() -> Self {
        AgendaConfig {
            data_dir: default_data_dir(),
            confirm: default_confirm(),
        }
    }
}

impl AgendaConfig {
    pub fn config_path() -> AgendaResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| AgendaError::Config("Could not determine config directory".into()))?
            .join("agenda");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config file with environment overrides applied, writing the
    /// commented template first if there is no file yet.
    pub fn load() -> AgendaResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::write_template(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Settings in effect: the file at `path` plus `AGENDA_*` variables.
    pub fn load_from(path: &Path) -> AgendaResult<Self> {
        Self::build(path, Some(Environment::with_prefix(ENV_PREFIX).try_parsing(true)))
    }

    /// Only what is written in the file at `path`. Edit and save this one,
    /// so per-run environment overrides never end up in the file.
    pub fn load_file(path: &Path) -> AgendaResult<Self> {
        Self::build(path, None)
    }

    fn build(path: &Path, env: Option<Environment>) -> AgendaResult<Self> {
        let mut builder = Config::builder().add_source(File::from(path).required(false));
        if let Some(env) = env {
            builder = builder.add_source(env);
        }

        let config: AgendaConfig = builder
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| AgendaError::Config(format!("{}: {e}", path.display())))?;

        tracing::debug!(path = %path.display(), data_dir = %config.data_dir.display(), "config loaded");
        Ok(config)
    }

    /// The data directory with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();
        PathBuf::from(full_path_str)
    }

    pub fn storage(&self) -> FileStorage {
        FileStorage::new(self.data_path())
    }

    /// Write these settings to `path`, replacing the commented template.
    pub fn save_to(&self, path: &Path) -> AgendaResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| AgendaError::Config(e.to_string()))?;
        write_config_file(path, &format!("{CONFIG_HEADER}\n{content}"))
    }

    /// Write a config file where every setting is commented out at its default.
    pub fn write_template(path: &Path) -> AgendaResult<()> {
        let template = format!(
            "{CONFIG_HEADER}\n\
             # Folder holding appointments.json and calendar_events.json:\n\
             # data_dir = \"{DEFAULT_DATA_DIR}\"\n\
             \n\
             # Ask before deleting an interview or marking it completed:\n\
             # confirm = true\n"
        );
        write_config_file(path, &template)
    }
}

const ENV_PREFIX: &str = "AGENDA";

const CONFIG_HEADER: &str = "\
# agenda: interview scheduler settings
# Any value can be overridden for one run with AGENDA_<KEY>,
# e.g. AGENDA_DATA_DIR=/tmp/agenda agenda list
";

fn write_config_file(path: &Path, contents: &str) -> AgendaResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| AgendaError::Config(format!("Could not create {}: {e}", parent.display())))?;
    }

    std::fs::write(path, contents)
        .map_err(|e| AgendaError::Config(format!("Could not write {}: {e}", path.display())))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commented_default_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("agenda/config.toml");

        AgendaConfig::write_template(&path).unwrap();
        let config = AgendaConfig::load_from(&path).unwrap();

        assert!(config.confirm);
        assert!(config.data_dir.ends_with("agenda"));
    }

    #[test]
    fn test_values_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "data_dir = \"/tmp/interviews\"\nconfirm = false\n").unwrap();

        let config = AgendaConfig::load_from(&path).unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/tmp/interviews"));
        assert!(!config.confirm);
        assert_eq!(config.data_path(), PathBuf::from("/tmp/interviews"));
    }

    fn env_with(key: &str, value: &str) -> Environment {
        let mut vars = config::Map::new();
        vars.insert(key.to_string(), value.to_string());
        Environment::with_prefix(ENV_PREFIX)
            .try_parsing(true)
            .source(Some(vars))
    }

    #[test]
    fn test_env_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "confirm = false\n").unwrap();

        let config =
            AgendaConfig::build(&path, Some(env_with("AGENDA_DATA_DIR", "/tmp/one-off"))).unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/tmp/one-off"));
        assert!(!config.confirm);
    }

    #[test]
    fn test_saving_file_settings_leaves_env_out() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        AgendaConfig::write_template(&path).unwrap();

        let effective =
            AgendaConfig::build(&path, Some(env_with("AGENDA_DATA_DIR", "/tmp/one-off"))).unwrap();
        assert_eq!(effective.data_dir, PathBuf::from("/tmp/one-off"));

        let mut stored = AgendaConfig::load_file(&path).unwrap();
        stored.confirm = false;
        stored.save_to(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(!written.contains("one-off"));
        assert!(written.contains("confirm = false"));

        let reloaded = AgendaConfig::load_file(&path).unwrap();
        assert_eq!(reloaded, AgendaConfig { confirm: false, ..AgendaConfig::default() });
    }

    #[test]
    fn test_serialize_skips_default_dir() {
        let config = AgendaConfig::default();
        let content = toml::to_string_pretty(&config).unwrap();

        assert!(!content.contains("data_dir"));
        assert!(content.contains("confirm = true"));
    }
}
