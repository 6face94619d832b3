use crate::errors::HopError;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}

impl HopError for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::InvalidConfiguration { .. } => "INVALID_CONFIGURATION",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, ConfigError::InvalidConfiguration { .. })
    }
}
