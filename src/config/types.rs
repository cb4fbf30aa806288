//! Configuration types for grant forecasting.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::auth::StoredCredential;
use crate::models::RateSchedule;

/// Metadata about the forecasting program a schedule belongs to.
#[derive(Debug, Clone, Deserialize)]
pub struct ProgramMetadata {
    /// Short program code (e.g. "LAREDO-MONTHLY").
    pub code: String,
    /// The human-readable name of the program.
    pub name: String,
    /// The version or effective date of the rate assumptions.
    pub version: String,
    /// The organization the assumptions apply to.
    pub jurisdiction: String,
}

/// Credentials configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct CredentialsConfig {
    /// The single account allowed to use the forecast API.
    pub account: StoredCredential,
}

/// The complete forecast configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct ForecastConfig {
    metadata: ProgramMetadata,
    schedule: RateSchedule,
    credential: Option<StoredCredential>,
}

impl ForecastConfig {
    /// Creates a new ForecastConfig from its component parts.
    pub fn new(
        metadata: ProgramMetadata,
        schedule: RateSchedule,
        credential: Option<StoredCredential>,
    ) -> Self {
        Self {
            metadata,
            schedule,
            credential,
        }
    }

    /// Returns the program metadata.
    pub fn program(&self) -> &ProgramMetadata {
        &self.metadata
    }

    /// Returns the rate schedule.
    pub fn schedule(&self) -> &RateSchedule {
        &self.schedule
    }

    /// Returns the stored credential, if access is restricted.
    pub fn credential(&self) -> Option<&StoredCredential> {
        self.credential.as_ref()
    }
}
