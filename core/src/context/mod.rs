mod config;
mod error;

pub use config::{TrackerConfig, TrackerConfigExt};
pub use error::ConfigError;
