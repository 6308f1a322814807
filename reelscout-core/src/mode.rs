//! Runtime mode configuration for Reelscout.

use serde::{Deserialize, Serialize};

/// Runtime mode for Reelscout services.
///
/// Controls whether lookups go to the real OMDb API or to the built-in demo
/// catalogue. Both sides sit behind the same provider interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RuntimeMode {
    /// Production mode - queries the OMDb API
    #[default]
    Production,
    /// Development mode - serves the offline demo catalogue
    Development,
}

impl RuntimeMode {
    /// Check if running in development mode.
    pub fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }
}

impl std::fmt::Display for RuntimeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Production => write!(f, "PRODUCTION"),
            Self::Development => write!(f, "DEVELOPMENT"),
        }
    }
}

impl std::str::FromStr for RuntimeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Ok(Self::Production),
            "development" | "dev" => Ok(Self::Development),
            _ => Err(format!(
                "Invalid runtime mode: '{s}'. Valid options are: production, development"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mode_aliases() {
        assert_eq!("prod".parse::<RuntimeMode>(), Ok(RuntimeMode::Production));
        assert_eq!("Development".parse::<RuntimeMode>(), Ok(RuntimeMode::Development));
        assert!("staging".parse::<RuntimeMode>().is_err());
    }

    #[test]
    fn test_default_mode_queries_omdb() {
        assert_eq!(RuntimeMode::default(), RuntimeMode::Production);
        assert!(!RuntimeMode::default().is_development());
        assert_eq!(RuntimeMode::Development.to_string(), "DEVELOPMENT");
    }
}
