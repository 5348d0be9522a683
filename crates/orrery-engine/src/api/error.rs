//! Error types shared by the simulator and render backends.

use thiserror::Error;

/// Result type for render-backend calls.
pub type RenderResult<T> = Result<T, RenderError>;

/// Invalid scene data. Fatal: raised before any body is simulated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("body registry is empty")]
    EmptyRegistry,

    #[error("body `{name}`: {field} must be positive and finite, got {value}")]
    InvalidBody {
        name: String,
        field: &'static str,
        value: f64,
    },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("config parse error: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

/// Failure reported by a render backend.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("{kind} capacity exceeded (max {capacity})")]
    CapacityExceeded { kind: &'static str, capacity: usize },

    #[error("resource creation failed: {0}")]
    ResourceCreation(String),

    #[error("draw failed: {0}")]
    Draw(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_body_message_names_field() {
        let err = ConfigError::InvalidBody {
            name: "Mars".into(),
            field: "orbital_period",
            value: -1.0,
        };
        assert_eq!(
            err.to_string(),
            "body `Mars`: orbital_period must be positive and finite, got -1"
        );
    }

    #[test]
    fn json_error_converts_to_parse() {
        let err: ConfigError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
