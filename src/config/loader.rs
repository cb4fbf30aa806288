//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading rate schedules
//! from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::auth::StoredCredential;
use crate::error::{ForecastError, ForecastResult};
use crate::models::RateSchedule;

use super::types::{CredentialsConfig, ForecastConfig, ProgramMetadata};

/// Loads and provides access to a forecast configuration.
///
/// # Directory Structure
///
/// ```text
/// config/monthly/
/// ├── program.yaml      # Program metadata
/// ├── schedule.yaml     # COLA, proration, grades and fringe lines
/// └── credentials.yaml  # Optional: the account allowed to forecast
/// ```
///
/// # Example
///
/// ```no_run
/// use grant_forecast::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/monthly").unwrap();
/// let rate = loader.get_grade_rate("Grade A").unwrap();
/// println!("Grade A fringe: {}", rate);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: ForecastConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `program.yaml` or `schedule.yaml` is missing
    /// - Any file contains invalid YAML
    /// - The schedule's proration mode has a zero period length
    ///
    /// A missing `credentials.yaml` leaves the API unrestricted.
    pub fn load<P: AsRef<Path>>(path: P) -> ForecastResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<ProgramMetadata>(&path.join("program.yaml"))?;

        let schedule_path = path.join("schedule.yaml");
        let schedule = Self::load_yaml::<RateSchedule>(&schedule_path)?;
        if !schedule.proration.is_valid() {
            return Err(ForecastError::ConfigParseError {
                path: schedule_path.display().to_string(),
                message: "proration period length and periods per year must be positive"
                    .to_string(),
            });
        }

        let credentials_path = path.join("credentials.yaml");
        let credential = if credentials_path.exists() {
            Some(Self::load_yaml::<CredentialsConfig>(&credentials_path)?.account)
        } else {
            None
        };

        tracing::info!(
            program = %metadata.code,
            version = %metadata.version,
            grades = schedule.grades.len(),
            fringes = schedule.fringes.len(),
            restricted = credential.is_some(),
            "Loaded forecast configuration"
        );

        Ok(Self {
            config: ForecastConfig::new(metadata, schedule, credential),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> ForecastResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ForecastError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| ForecastError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the program metadata.
    pub fn program(&self) -> &ProgramMetadata {
        self.config.program()
    }

    /// Returns the configured rate schedule.
    pub fn rate_schedule(&self) -> &RateSchedule {
        self.config.schedule()
    }

    /// Returns the stored credential, if access is restricted.
    pub fn credential(&self) -> Option<&StoredCredential> {
        self.config.credential()
    }

    /// Gets the fringe rate for a grade.
    ///
    /// # Returns
    ///
    /// Returns the rate if found, or `UnknownCategory` error.
    pub fn get_grade_rate(&self, code: &str) -> ForecastResult<Decimal> {
        self.rate_schedule()
            .grade_rate(code)
            .ok_or_else(|| ForecastError::unknown_grade(code))
    }
}
