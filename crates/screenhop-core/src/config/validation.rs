//! Configuration validation logic.

use crate::config::errors::ConfigError;
use crate::config::types::SwitchConfig;

/// Validate a SwitchConfig before a switch runs.
///
/// # Validation Rules
///
/// - `row_tolerance` and `min_window_size` must be finite and non-negative
/// - `min_overlap_ratio` must be in `(0, 1]`
/// - `normal_layer` must not exceed `max_layer`
///
/// # Errors
///
/// Returns `ConfigError::InvalidConfiguration` naming the first bad field.
pub fn validate_config(config: &SwitchConfig) -> Result<(), ConfigError> {
    if !config.row_tolerance.is_finite() || config.row_tolerance < 0.0 {
        return Err(invalid(format!(
            "row_tolerance must be a non-negative number, got {}",
            config.row_tolerance
        )));
    }

    if !config.min_window_size.is_finite() || config.min_window_size < 0.0 {
        return Err(invalid(format!(
            "min_window_size must be a non-negative number, got {}",
            config.min_window_size
        )));
    }

    if !(config.min_overlap_ratio > 0.0 && config.min_overlap_ratio <= 1.0) {
        return Err(invalid(format!(
            "min_overlap_ratio must be in (0, 1], got {}",
            config.min_overlap_ratio
        )));
    }

    if config.normal_layer > config.max_layer {
        return Err(invalid(format!(
            "normal_layer ({}) is above max_layer ({})",
            config.normal_layer, config.max_layer
        )));
    }

    Ok(())
}

fn invalid(message: String) -> ConfigError {
    ConfigError::InvalidConfiguration { message }
}
