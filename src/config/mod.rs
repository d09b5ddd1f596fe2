//! Application configuration

mod app_config;

pub use app_config::{AppConfig, DatabaseConfig, InvitationsConfig, LogFormat, LoggingConfig};
