//! Shared domain types and configuration for clipscout.

pub mod app_config;
pub mod config;
pub mod platform;
pub mod video;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use platform::{Platform, PlatformError};
pub use video::{VideoRecord, UNKNOWN};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
