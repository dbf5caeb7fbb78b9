//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional when loading. The server binary additionally
//! requires a database URL (see [`StorefrontConfig::require_database_url`]).
//!
//! - `TAGSMITH_HOST` - Bind address (default: 127.0.0.1)
//! - `TAGSMITH_PORT` - Listen port (default: 3000)
//! - `TAGSMITH_BASE_URL` - Public URL for the storefront (default: <http://localhost:3000>)
//! - `TAGSMITH_DATABASE_URL` - `PostgreSQL` connection string for the session
//!   store; falls back to `DATABASE_URL`
//! - `TAGSMITH_CART_TTL_DAYS` - Days of inactivity before a visitor's cart
//!   session expires (default: 365, max: 400)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error event sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Performance trace sample rate (default: 0.0)

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

/// Browsers cap cookie lifetimes at 400 days.
const MAX_CART_TTL_DAYS: i64 = 400;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),

    #[error("Missing environment variable {0}")]
    MissingEnvVar(String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: Url,
    /// `PostgreSQL` URL for the session store (contains password)
    pub database_url: Option<SecretString>,
    /// Days of inactivity before a cart session expires
    pub cart_ttl_days: i64,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name (e.g., "production")
    pub sentry_environment: Option<String>,
    /// Fraction of error events sent to Sentry
    pub sentry_sample_rate: f32,
    /// Fraction of transactions traced
    pub sentry_traces_sample_rate: f32,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let env = EnvReader { lookup };

        let host = env.parse_or("TAGSMITH_HOST", "127.0.0.1")?;
        let port = env.parse_or("TAGSMITH_PORT", "3000")?;
        let base_url = env.parse_or("TAGSMITH_BASE_URL", "http://localhost:3000")?;
        let database_url = env
            .optional("TAGSMITH_DATABASE_URL")
            .or_else(|| env.optional("DATABASE_URL"))
            .map(SecretString::from);

        let cart_ttl_days: i64 = env.parse_or("TAGSMITH_CART_TTL_DAYS", "365")?;
        if !(1..=MAX_CART_TTL_DAYS).contains(&cart_ttl_days) {
            return Err(ConfigError::InvalidEnvVar(
                "TAGSMITH_CART_TTL_DAYS".to_string(),
                format!("must be between 1 and {MAX_CART_TTL_DAYS}"),
            ));
        }

        Ok(Self {
            host,
            port,
            base_url,
            database_url,
            cart_ttl_days,
            sentry_dsn: env.optional("SENTRY_DSN"),
            sentry_environment: env.optional("SENTRY_ENVIRONMENT"),
            sentry_sample_rate: env.parse_or("SENTRY_SAMPLE_RATE", "1.0")?,
            sentry_traces_sample_rate: env.parse_or("SENTRY_TRACES_SAMPLE_RATE", "0.0")?,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// The session database URL, which the server and `tagsmith migrate` need.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] if neither `TAGSMITH_DATABASE_URL`
    /// nor `DATABASE_URL` is set.
    pub fn require_database_url(&self) -> Result<&SecretString, ConfigError> {
        self.database_url
            .as_ref()
            .ok_or_else(|| ConfigError::MissingEnvVar("TAGSMITH_DATABASE_URL".to_string()))
    }

    /// Whether cookies must be marked `Secure` (the storefront is served over HTTPS).
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.scheme() == "https"
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

struct EnvReader<F> {
    lookup: F,
}

impl<F: Fn(&str) -> Option<String>> EnvReader<F> {
    /// Get an optional variable, treating empty values as unset.
    fn optional(&self, key: &str) -> Option<String> {
        (self.lookup)(key).filter(|value| !value.trim().is_empty())
    }

    /// Parse a variable, falling back to `default` when unset.
    fn parse_or<T>(&self, key: &str, default: &str) -> Result<T, ConfigError>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        let raw = self.optional(key).unwrap_or_else(|| default.to_string());
        raw.trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use secrecy::ExposeSecret;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<StorefrontConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        StorefrontConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.cart_ttl_days, 365);
        assert!(config.database_url.is_none());
        assert!(!config.is_secure());
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
    }

    #[test]
    fn test_database_url_fallback() {
        let config = load(&[("DATABASE_URL", "postgres://localhost/tags")]).unwrap();
        assert_eq!(
            config.database_url.unwrap().expose_secret(),
            "postgres://localhost/tags"
        );

        let config = load(&[
            ("DATABASE_URL", "postgres://localhost/other"),
            ("TAGSMITH_DATABASE_URL", "postgres://localhost/tags"),
        ])
        .unwrap();
        assert_eq!(
            config.database_url.unwrap().expose_secret(),
            "postgres://localhost/tags"
        );
    }

    #[test]
    fn test_database_url_is_required_for_serving() {
        let err = load(&[]).unwrap().require_database_url().unwrap_err();
        assert!(
            matches!(err, ConfigError::MissingEnvVar(ref key) if key == "TAGSMITH_DATABASE_URL")
        );

        let config = load(&[("TAGSMITH_DATABASE_URL", "postgres://localhost/tags")]).unwrap();
        assert_eq!(
            config.require_database_url().unwrap().expose_secret(),
            "postgres://localhost/tags"
        );
    }

    #[test]
    fn test_https_base_url_is_secure() {
        let config = load(&[("TAGSMITH_BASE_URL", "https://tags.example.com")]).unwrap();
        assert!(config.is_secure());
    }

    #[test]
    fn test_invalid_port() {
        let err = load(&[("TAGSMITH_PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "TAGSMITH_PORT"));
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(load(&[("TAGSMITH_BASE_URL", "not a url")]).is_err());
    }

    #[test]
    fn test_cart_ttl_bounds() {
        assert!(load(&[("TAGSMITH_CART_TTL_DAYS", "0")]).is_err());
        assert!(load(&[("TAGSMITH_CART_TTL_DAYS", "401")]).is_err());
        assert_eq!(
            load(&[("TAGSMITH_CART_TTL_DAYS", "30")]).unwrap().cart_ttl_days,
            30
        );
    }

    #[test]
    fn test_empty_values_use_defaults() {
        let config = load(&[("TAGSMITH_PORT", ""), ("SENTRY_DSN", " ")]).unwrap();
        assert_eq!(config.port, 3000);
        assert!(config.sentry_dsn.is_none());
    }
}
