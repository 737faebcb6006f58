//! OAuth initiation defaults.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const SECTION: &str = "oauth";

/// Accepted size of the random state token, in bytes.
pub const STATE_BYTES_RANGE: RangeInclusive<usize> = 8..=64;

fn default_provider() -> String {
    String::from("google")
}

const fn default_state_bytes() -> usize {
    16
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OAuthConfig {
    /// Provider used when the caller does not name one (e.g. `"google"`).
    #[serde(default = "default_provider")]
    pub default_provider: String,

    /// Callback URI used when the caller does not pass one.
    #[serde(default)]
    pub redirect_uri: String,

    /// Random bytes in a generated state token (hex-encoded, so twice as many chars).
    #[serde(default = "default_state_bytes")]
    pub state_bytes: usize,
}

impl Default for OAuthConfig {
    fn default() -> Self {
        Self {
            default_provider: default_provider(),
            redirect_uri: String::new(),
            state_bytes: default_state_bytes(),
        }
    }
}

impl OAuthConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_provider.trim().is_empty() {
            return Err(ConfigError::missing(SECTION, "default_provider"));
        }
        if !STATE_BYTES_RANGE.contains(&self.state_bytes) {
            return Err(ConfigError::invalid(
                SECTION,
                "state_bytes",
                format!(
                    "{} is outside {}..={}",
                    self.state_bytes,
                    STATE_BYTES_RANGE.start(),
                    STATE_BYTES_RANGE.end()
                ),
            ));
        }
        Ok(())
    }

    /// Configured callback URI, if any.
    pub fn redirect_uri(&self) -> Option<&str> {
        let value = self.redirect_uri.trim();
        (!value.is_empty()).then_some(value)
    }
}
