//! Configuration module
//!
//! The doctor catalog, time slots, brand label and the two delays are
//! injected from an optional JSON file. Every field falls back to the
//! built-in values, so a missing file yields the stock clinic.
//!
//! Lookup order:
//! 1. `CAREBOOK_CONFIG` (path to a JSON file)
//! 2. `<config dir>/carebook/config.json`
//! 3. defaults

use crate::error::{AppError, AppResult};
use crate::models::Catalog;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_ENV_VAR: &str = "CAREBOOK_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    pub submission_delay_ms: u64,
    pub success_dismiss_ms: u64,
}

impl Timings {
    pub fn submission_delay(&self) -> Duration {
        Duration::from_millis(self.submission_delay_ms)
    }

    pub fn success_dismiss(&self) -> Duration {
        Duration::from_millis(self.success_dismiss_ms)
    }
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            submission_delay_ms: 1500,
            success_dismiss_ms: 2000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub brand_name: String,
    pub catalog: Catalog,
    pub timings: Timings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            brand_name: "Brandname".to_string(),
            catalog: Catalog::default(),
            timings: Timings::default(),
        }
    }
}

impl AppConfig {
    /// Resolves the configuration file and validates the result.
    pub fn load() -> AppResult<Self> {
        let config = match config_path() {
            Some(path) => Self::from_file(&path)?,
            None => {
                info!("No configuration file found, using built-in catalog");
                Self::default()
            }
        };
        validate_config(&config)?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> AppResult<Self> {
        info!("Loading configuration from {}", path.display());
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> AppResult<Self> {
        let config: Self = serde_json::from_str(raw)?;
        debug!(
            "Configuration has {} doctors and {} time slots",
            config.catalog.doctors.len(),
            config.catalog.time_slots.len()
        );
        Ok(config)
    }
}

/// `CAREBOOK_CONFIG` wins even when the file is missing, so a typo surfaces
/// as an error instead of silently falling back to defaults.
fn config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        if !path.trim().is_empty() {
            return Some(PathBuf::from(path));
        }
    }

    dirs::config_dir()
        .map(|dir| dir.join("carebook").join("config.json"))
        .filter(|path| path.exists())
}

/// Rejects catalogs the form cannot render sensibly.
pub fn validate_config(config: &AppConfig) -> AppResult<()> {
    let catalog = &config.catalog;

    if catalog.doctors.is_empty() {
        return Err(AppError::config("doctor catalog is empty"));
    }

    let mut ids = HashSet::new();
    for doctor in &catalog.doctors {
        if !ids.insert(doctor.id) {
            return Err(AppError::config(format!("duplicate doctor id {}", doctor.id)));
        }
        if doctor.name.trim().is_empty() {
            return Err(AppError::config(format!("doctor {} has no name", doctor.id)));
        }
    }

    if catalog.time_slots.is_empty() {
        return Err(AppError::config("time slot list is empty"));
    }

    let mut labels = HashSet::new();
    for slot in &catalog.time_slots {
        if !labels.insert(slot.label()) {
            return Err(AppError::config(format!("duplicate time slot '{}'", slot)));
        }
    }

    if config.timings.submission_delay_ms == 0 || config.timings.success_dismiss_ms == 0 {
        return Err(AppError::config("delays must be greater than zero"));
    }

    info!(
        "Configuration valid: {} doctors, {} time slots",
        catalog.doctors.len(),
        catalog.time_slots.len()
    );
    Ok(())
}
