//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, ArtifactConfig, LogFormat, LoggingConfig, MetricsConfig, ServerConfig, UiConfig,
};
