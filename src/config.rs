//! Dashboard settings.
//!
//! Everything is optional; a missing file section falls back to the built-in
//! four-city deployment. See `meridian.example.toml` for the full layout.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use tracing::info;

use crate::Result;
use crate::api::Axis;
use crate::cities::{AuxZone, City, DEFAULT_AUX_ZONES, DEFAULT_CITIES};
use crate::store::TempUnit;
use crate::ticker::FxRates;

/// Environment variable consulted when no config path is given.
pub const CONFIG_ENV: &str = "MERIDIAN_CONFIG";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub refresh: RefreshConfig,
    pub display: DisplayConfig,
    pub cities: Vec<City>,
    pub aux_zones: Vec<AuxZone>,
    /// Static ticker values; without them the ticker shows its loading line.
    pub rates: Option<FxRates>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `error`, `warn`, `info`, `debug` or `trace`, or any `EnvFilter` directive.
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RefreshConfig {
    pub interval_secs: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub axis: Axis,
    pub unit: TempUnit,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            refresh: RefreshConfig::default(),
            display: DisplayConfig::default(),
            cities: DEFAULT_CITIES.clone(),
            aux_zones: DEFAULT_AUX_ZONES.clone(),
            rates: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "warn".to_string() }
    }
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self { interval_secs: 60 }
    }
}

impl RefreshConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

impl Settings {
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let settings = Self::from_toml(&text)?;
        info!(target: "meridian::config", path = %path.display(), cities = settings.cities.len(), "settings loaded");
        Ok(settings)
    }

    /// Load `path`, else the file named by `MERIDIAN_CONFIG`, else the defaults.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }
}
