//! Configuration error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// A required field is missing or empty.
    #[error("Configuration field '{field}' is required (set {env_var})")]
    MissingField { field: String, env_var: String },

    /// A configuration field has an invalid value.
    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

impl ConfigError {
    pub(crate) fn missing(section: &str, field: &str) -> Self {
        Self::MissingField {
            field: format!("{section}.{field}"),
            env_var: format!(
                "{}{}__{}",
                crate::ENV_PREFIX,
                section.to_uppercase(),
                field.to_uppercase()
            ),
        }
    }

    pub(crate) fn invalid(section: &str, field: &str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: format!("{section}.{field}"),
            reason: reason.into(),
        }
    }
}
