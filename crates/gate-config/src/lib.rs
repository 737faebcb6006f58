//! # gate-config
//!
//! Layered configuration loading for Gatehouse using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`GATEHOUSE_*` prefix, `__` as separator)
//! 2. Project-level `.gatehouse/config.toml`
//! 3. User-level `~/.config/gatehouse/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `GATEHOUSE_CLERK__FRONTEND_API` -> `clerk.frontend_api`,
//! `GATEHOUSE_OAUTH__STATE_BYTES` -> `oauth.state_bytes`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use gate_config::GatehouseConfig;
//!
//! let config = GatehouseConfig::load_with_dotenv().expect("config");
//! let frontend = config.clerk.require_frontend_api().expect("frontend endpoint");
//! println!("Clerk frontend: {frontend}");
//! ```

mod clerk;
mod error;
mod oauth;

pub use clerk::ClerkConfig;
pub use error::ConfigError;
pub use oauth::{OAuthConfig, STATE_BYTES_RANGE};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix for every setting.
pub const ENV_PREFIX: &str = "GATEHOUSE_";

/// Project-local config file, relative to the working directory.
pub const LOCAL_CONFIG_PATH: &str = ".gatehouse/config.toml";

/// Process-wide configuration, built once at startup and passed by reference.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GatehouseConfig {
    #[serde(default)]
    pub clerk: ClerkConfig,
    #[serde(default)]
    pub oauth: OAuthConfig,
}

impl GatehouseConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need `.env` file loading.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Load, then validate every section.
    ///
    /// Missing credentials are not an error here; commands that need them
    /// call [`ClerkConfig::require_frontend_api`] or
    /// [`ClerkConfig::require_secret_key`] before doing any work.
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load_with_dotenv()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.clerk.validate()?;
        self.oauth.validate()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(LOCAL_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("gatehouse").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) or falls back to the
    /// current directory. Silently does nothing if no `.env` is found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // crate -> crates/ -> workspace root
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}
