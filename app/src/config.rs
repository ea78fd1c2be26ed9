//! Process-wide configuration, read once at start-up.
//!
//! Values come from the environment (after `.env` has been loaded by the
//! server binary). Every variable has a fallback so a bare `cargo run` works
//! for local development; [`AppConfig::uses_default_secret`] lets callers
//! refuse the fallback secret where it matters.

use std::fmt;
use std::net::SocketAddr;

use crate::error::StartupError;

/// Fallback signing secret used when `SECRET_KEY` is not set.
pub const DEFAULT_SECRET_KEY: &str = "your-secret-key-here";
/// Fallback listen address used when `SITE_ADDR` is not set.
pub const DEFAULT_SITE_ADDR: &str = "0.0.0.0:5001";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    fn from_value(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.eq_ignore_ascii_case("production") => Self::Production,
            _ => Self::Development,
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Signing/session secret (`SECRET_KEY`).
    pub secret_key: String,
    /// Address the HTTP listener binds to (`SITE_ADDR`).
    pub site_addr: SocketAddr,
    /// Deployment environment (`RUST_ENV`).
    pub environment: Environment,
}

impl AppConfig {
    /// Builds the configuration from process environment variables.
    pub fn from_env() -> Result<Self, StartupError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated the same as missing ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, StartupError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let secret_key = get("SECRET_KEY").unwrap_or_else(|| DEFAULT_SECRET_KEY.to_owned());

        let raw_addr = get("SITE_ADDR").unwrap_or_else(|| DEFAULT_SITE_ADDR.to_owned());
        let site_addr = raw_addr
            .trim()
            .parse::<SocketAddr>()
            .map_err(|source| StartupError::InvalidAddress {
                variable: "SITE_ADDR",
                value: raw_addr.clone(),
                source,
            })?;

        let environment = Environment::from_value(get("RUST_ENV").as_deref());

        Ok(Self {
            secret_key,
            site_addr,
            environment,
        })
    }

    pub fn uses_default_secret(&self) -> bool {
        self.secret_key == DEFAULT_SECRET_KEY
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            secret_key: DEFAULT_SECRET_KEY.to_owned(),
            site_addr: SocketAddr::from(([0, 0, 0, 0], 5001)),
            environment: Environment::Development,
        }
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("secret_key", &"<redacted>")
            .field("site_addr", &self.site_addr)
            .field("environment", &self.environment)
            .finish()
    }
}
