use crate::cli::Cli;
use crate::services::storage::config_dir;
use crate::services::suggest::DEFAULT_MAX_ATTEMPTS;
use serde::Deserialize;
use std::path::PathBuf;

/// Optional on-disk configuration, `~/.config/mpinguard/config.toml`.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub paths: PathsSection,
    #[serde(default)]
    pub suggest: SuggestSection,
}

#[derive(Debug, Deserialize, Default)]
pub struct PathsSection {
    #[serde(default)]
    pub dictionary: Option<PathBuf>,
    #[serde(default)]
    pub ledger: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default)]
pub struct SuggestSection {
    #[serde(default)]
    pub max_attempts: Option<u32>,
}

pub fn load_config() -> anyhow::Result<ConfigFile> {
    let path = config_dir()?.join("config.toml");
    if !path.exists() {
        return Ok(ConfigFile::default());
    }
    let raw = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}

/// Effective settings after layering: CLI flag, then config file, then
/// built-in default.
#[derive(Debug, Clone)]
pub struct Settings {
    pub dictionary_path: PathBuf,
    pub ledger_path: PathBuf,
    pub max_attempts: u32,
}

impl Settings {
    pub fn resolve(cli: &Cli, file: &ConfigFile) -> anyhow::Result<Self> {
        let dir = config_dir()?;
        Ok(Settings {
            dictionary_path: cli
                .dictionary
                .clone()
                .or_else(|| file.paths.dictionary.clone())
                .unwrap_or_else(|| dir.join("common_pins.txt")),
            ledger_path: cli
                .ledger
                .clone()
                .or_else(|| file.paths.ledger.clone())
                .unwrap_or_else(|| dir.join("used_pins.txt")),
            max_attempts: file.suggest.max_attempts.unwrap_or(DEFAULT_MAX_ATTEMPTS),
        })
    }
}
