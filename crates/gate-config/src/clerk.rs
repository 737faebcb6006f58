//! Clerk identity provider configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const SECTION: &str = "clerk";

/// Default Clerk Backend API base URL.
fn default_backend_url() -> String {
    String::from("https://api.clerk.com/v1")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClerkConfig {
    /// Clerk publishable key (`pk_...`).
    #[serde(default)]
    pub publishable_key: String,

    /// Clerk secret key (`sk_...`). Used for Backend API calls only.
    #[serde(default)]
    pub secret_key: String,

    /// Frontend API endpoint used for OAuth redirects, e.g.
    /// `humble-monkey-3.clerk.accounts.dev`. The scheme may be omitted.
    #[serde(default)]
    pub frontend_api: String,

    /// Backend API base URL.
    #[serde(default = "default_backend_url")]
    pub backend_url: String,
}

impl Default for ClerkConfig {
    fn default() -> Self {
        Self {
            publishable_key: String::new(),
            secret_key: String::new(),
            frontend_api: String::new(),
            backend_url: default_backend_url(),
        }
    }
}

impl ClerkConfig {
    /// Check if the Clerk config has the minimum required fields.
    pub fn is_configured(&self) -> bool {
        !self.publishable_key.is_empty() && !self.secret_key.is_empty()
    }

    /// Return the frontend endpoint, failing early if it is unusable.
    ///
    /// The URL builder never fails, so an empty or malformed endpoint has to
    /// be caught here, before the first authorization URL is built.
    pub fn require_frontend_api(&self) -> Result<&str, ConfigError> {
        let value = self.frontend_api.trim();
        if value.is_empty() {
            return Err(ConfigError::missing(SECTION, "frontend_api"));
        }
        check_endpoint(value, "frontend_api", true)?;
        Ok(value)
    }

    /// Return the secret key, failing early if it is not set.
    pub fn require_secret_key(&self) -> Result<&str, ConfigError> {
        if self.secret_key.trim().is_empty() {
            return Err(ConfigError::missing(SECTION, "secret_key"));
        }
        Ok(&self.secret_key)
    }

    /// Validate every non-empty endpoint in the section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.frontend_api.trim().is_empty() {
            self.require_frontend_api()?;
        }
        check_endpoint(self.backend_url.trim(), "backend_url", false)
    }

    /// Backend API base URL with surrounding whitespace and trailing `/` removed.
    pub fn backend_url(&self) -> &str {
        self.backend_url.trim().trim_end_matches('/')
    }
}

/// Reject whitespace and non-HTTP schemes. A missing scheme is only allowed
/// where the URL builder adds `https://` itself.
fn check_endpoint(value: &str, field: &str, scheme_optional: bool) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::missing(SECTION, field));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(ConfigError::invalid(SECTION, field, "must not contain whitespace"));
    }
    match value.split_once("://") {
        Some(("http" | "https", rest)) if !rest.is_empty() => Ok(()),
        Some(("http" | "https", _)) => Err(ConfigError::invalid(SECTION, field, "missing host")),
        Some((scheme, _)) => Err(ConfigError::invalid(
            SECTION,
            field,
            format!("unsupported scheme '{scheme}' (expected http or https)"),
        )),
        None if scheme_optional => Ok(()),
        None => Err(ConfigError::invalid(
            SECTION,
            field,
            "must start with http:// or https://",
        )),
    }
}
