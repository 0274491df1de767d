//! Configuration loading and parsing

use anyhow::{Context, Result};
use callback_demos::{Record, Unit, UnitInputs};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Application configuration (loaded from a TOML file)
///
/// Every field is optional; missing fields fall back to the built-in
/// defaults, which reproduce the canonical demo run.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Units to run, in order (default: all, canonical order)
    #[serde(default)]
    pub units: Option<Vec<Unit>>,
    /// Number divided by the numeric unit
    #[serde(default)]
    pub number: Option<f64>,
    /// Record walked by the record unit
    #[serde(default)]
    pub record: Option<Record>,
    /// Report format
    #[serde(default)]
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One result line per logged value
    #[default]
    Text,
    /// A JSON array of per-unit transcripts
    Json,
}

impl AppConfig {
    /// Unit inputs with config overrides applied over the defaults
    pub fn inputs(&self) -> UnitInputs {
        let mut inputs = UnitInputs::new();
        if let Some(record) = &self.record {
            inputs = inputs.with_record(record.clone());
        }
        if let Some(number) = self.number {
            inputs = inputs.with_number(number);
        }
        inputs
    }

    /// Selected units, or all of them
    pub fn units(&self) -> Vec<Unit> {
        self.units.clone().unwrap_or_else(|| Unit::ALL.to_vec())
    }
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    parse_config(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
}

/// Parse configuration from TOML text
pub fn parse_config(content: &str) -> Result<AppConfig> {
    let config: AppConfig = toml::from_str(content)?;
    log::debug!("Parsed configuration: {:?}", config);
    Ok(config)
}
