//! Tunables for a single switch.
//!
//! There is no config file and no environment overrides: every run uses
//! [`SwitchConfig::default`]. The struct exists so the thresholds live in one
//! place and tests can shrink the settle delay.

pub mod defaults;
pub mod errors;
pub mod types;
pub mod validation;

pub use errors::ConfigError;
pub use types::SwitchConfig;
pub use validation::validate_config;
