//! Infrastructure layer - Configuration and logging setup

pub mod config;
pub mod logging;

pub use config::Config;
