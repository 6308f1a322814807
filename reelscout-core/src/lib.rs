//! Reelscout Core - shared configuration and process setup
//!
//! Holds the pieces every other Reelscout crate leans on: the central
//! configuration, the runtime mode switch, tracing initialization and the
//! top-level error type used by the binary.

pub mod config;
pub mod mode;
pub mod tracing_setup;

pub use config::{OmdbConfig, ReelscoutConfig, ServerConfig};
pub use mode::RuntimeMode;

/// Core errors raised while setting up a Reelscout process.
#[derive(Debug, thiserror::Error)]
pub enum ReelscoutError {
    #[error("Configuration error: {reason}")]
    Configuration { reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logging setup failed: {reason}")]
    Logging { reason: String },
}

impl ReelscoutError {
    /// Returns a user-friendly error message suitable for display.
    pub fn user_message(&self) -> String {
        match self {
            ReelscoutError::Configuration { reason } => format!("Invalid configuration: {reason}"),
            ReelscoutError::Io(_) => "File system error occurred".to_string(),
            ReelscoutError::Logging { .. } => "Could not set up logging".to_string(),
        }
    }

    /// Checks if this error is due to user-supplied settings.
    pub fn is_user_error(&self) -> bool {
        matches!(self, ReelscoutError::Configuration { .. })
    }
}

pub type Result<T> = std::result::Result<T, ReelscoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_errors_are_user_errors() {
        let err = ReelscoutError::Configuration {
            reason: "port out of range".to_string(),
        };
        assert!(err.is_user_error());
        assert_eq!(err.user_message(), "Invalid configuration: port out of range");

        let io = ReelscoutError::from(std::io::Error::other("disk gone"));
        assert!(!io.is_user_error());
        assert_eq!(io.user_message(), "File system error occurred");
    }
}
