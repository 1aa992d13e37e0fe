use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::cli::{ColorMode, UseCase};
use crate::error::AppError;
use crate::pricing::{PricingEntry, PricingTable};

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) compact: bool,
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) debug: bool,
    /// Free-form so that unknown names degrade to tokens instead of failing
    #[serde(default)]
    pub(crate) unit: Option<String>,
    #[serde(default)]
    pub(crate) use_case: Option<UseCase>,
    /// Monthly growth in percent
    #[serde(default)]
    pub(crate) growth: Option<f64>,
    #[serde(default)]
    pub(crate) months: Option<u32>,
    #[serde(default)]
    pub(crate) color: Option<ColorMode>,
    #[serde(default)]
    pub(crate) locale: Option<String>,
    /// Replaces the built-in pricing table when present
    #[serde(default)]
    pub(crate) pricing: Option<Vec<PricingEntry>>,
}

impl Config {
    pub(crate) fn load() -> Self {
        // Try config locations in order of priority
        for path in Self::get_config_paths() {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match toml::from_str::<Config>(&content) {
                    Ok(config) => {
                        eprintln!("Loaded config from {}", path.display());
                        return config;
                    }
                    Err(e) => {
                        eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                    }
                }
            }
        }

        Self::default()
    }

    /// Pricing table from config, or the built-in table
    pub(crate) fn pricing_table(&self) -> Result<PricingTable, AppError> {
        match &self.pricing {
            Some(entries) => PricingTable::from_entries(entries.clone()),
            None => Ok(PricingTable::default()),
        }
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/llmcost/config.toml (Linux/cross-platform)
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("llmcost").join("config.toml"));
        }

        // 2. macOS Application Support: ~/Library/Application Support/llmcost/config.toml
        if let Some(config_dir) = dirs::config_dir() {
            let macos_path = config_dir.join("llmcost").join("config.toml");
            if !paths.contains(&macos_path) {
                paths.push(macos_path);
            }
        }

        // 3. Home directory: ~/.llmcost.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".llmcost.toml"));
        }

        paths
    }
}
