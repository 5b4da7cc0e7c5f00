use std::{env, fs, path::Path};

use crate::components::{
    error::{DeskError, Result},
    shell::OutputFormat,
};

pub const ENV_PREFIX: &str = "TRAFFIC_DESK_";

#[derive(Debug, Clone, PartialEq)]
pub struct DeskConfig {
    pub output_format: OutputFormat, // How the shell renders results
    pub log_level: String,           // Fallback filter when RUST_LOG is unset
    pub log_json: bool,              // JSON lines instead of plain log output
    pub seed_demo_data: bool,        // Start with the sample records
    pub recent_limit: usize,         // Rows shown in "recent" listings
}

impl Default for DeskConfig {
    fn default() -> Self {
        DeskConfig {
            output_format: OutputFormat::Table,
            log_level: "warn".to_string(),
            log_json: false,
            seed_demo_data: true,
            recent_limit: 4,
        }
    }
}

impl DeskConfig {
    /// Defaults overlaid with `TRAFFIC_DESK_*` environment variables.
    pub fn from_env() -> Result<Self> {
        let mut config = DeskConfig::default();
        for key in ["FORMAT", "LOG", "LOG_JSON", "SEED", "RECENT"] {
            if let Ok(value) = env::var(format!("{}{}", ENV_PREFIX, key)) {
                config.apply(key, &value)?;
            }
        }
        Ok(config)
    }

    /// Reads `key=value` lines; `#` starts a comment line.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| DeskError::Config(format!("{}: {}", path.display(), e)))?;
        DeskConfig::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let mut config = DeskConfig::default();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (key, value) = line.split_once('=').ok_or_else(|| {
                DeskError::Config(format!("expected key=value, found '{}'", line))
            })?;
            config.apply(&key.trim().to_uppercase(), value.trim())?;
        }
        Ok(config)
    }

    fn apply(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "FORMAT" => self.output_format = value.parse()?,
            "LOG" => self.log_level = value.to_string(),
            "LOG_JSON" => self.log_json = parse_bool(key, value)?,
            "SEED" => self.seed_demo_data = parse_bool(key, value)?,
            "RECENT" => {
                self.recent_limit = value.parse().map_err(|_| {
                    DeskError::Config(format!("RECENT must be a count, got '{}'", value))
                })?
            }
            _ => return Err(DeskError::Config(format!("unknown setting '{}'", key))),
        }
        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(DeskError::Config(format!("{} must be a boolean, got '{}'", key, value))),
    }
}
