//! Configuration loading and management for the grant forecast engine.
//!
//! This module loads rate schedules from YAML files: program metadata, the
//! COLA and proration assumptions, grade fringe rates, fringe and benefit
//! line definitions, and the optional API credential.
//!
//! # Example
//!
//! ```no_run
//! use grant_forecast::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/monthly").unwrap();
//! println!("Loaded program: {}", config.program().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CredentialsConfig, ForecastConfig, ProgramMetadata};
