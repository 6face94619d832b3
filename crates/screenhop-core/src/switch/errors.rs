use crate::config::ConfigError;
use crate::errors::HopError;
use crate::platform::PlatformError;

#[derive(Debug, thiserror::Error)]
pub enum SwitchError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),
}

impl HopError for SwitchError {
    fn error_code(&self) -> &'static str {
        match self {
            SwitchError::Config(e) => e.error_code(),
            SwitchError::Platform(e) => e.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            SwitchError::Config(e) => e.is_user_error(),
            SwitchError::Platform(e) => e.is_user_error(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switch_error_delegates_to_source() {
        let error: SwitchError = PlatformError::PointerLocationUnavailable.into();
        assert_eq!(error.to_string(), "Pointer location unavailable");
        assert_eq!(error.error_code(), "PLATFORM_POINTER_LOCATION_UNAVAILABLE");
        assert!(!error.is_user_error());

        let error: SwitchError = ConfigError::InvalidConfiguration {
            message: "bad".to_string(),
        }
        .into();
        assert_eq!(error.error_code(), "INVALID_CONFIGURATION");
        assert!(error.is_user_error());
    }
}
