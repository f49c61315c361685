//! # API Configuration Module
//!
//! This module handles loading and managing configuration for the scheduler.
//! Every value is read once at startup from environment variables, falling
//! back to a development default when the variable is unset. The resulting
//! [`AppConfig`] is read-only: it is shared behind an `Arc` and exposes only
//! getters.
//!
//! ## Environment Variables
//!
//! Application settings:
//!
//! - `APP_NAME`: Application name (default: "Scheduler")
//! - `APP_VERSION`: Application version (default: "1.0.0-prototype")
//! - `NODE_ENV`: Deployment environment (default: "development")
//! - `PORT`: The port to listen on, must be an integer (default: 3000)
//! - `GOOGLE_CLIENT_ID`: Calendar OAuth client id
//! - `GOOGLE_CLIENT_SECRET`: Calendar OAuth client secret
//! - `GOOGLE_REDIRECT_URI`: Calendar OAuth redirect URI
//! - `DATABASE_URL`: Database connection string (configured but unused)
//! - `JWT_SECRET`: Token signing secret
//!
//! Server settings:
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins (`*` is refused)
//! - `API_REQUEST_TIMEOUT_SECONDS`: Request timeout (default: 30)
//!
//! None of the defaults are checked for production-readiness.

use std::{env, fmt};

use axum::http::HeaderValue;
use eyre::{Result, WrapErr, eyre};
use tracing::Level;

/// A configuration value that must never appear in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the underlying value
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(<redacted>)")
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

/// Configuration for the scheduler
///
/// # Example
///
/// ```no_run
/// use eyre::Result;
/// use scheduler_api::config::AppConfig;
///
/// fn example() -> Result<()> {
///     let config = AppConfig::from_env()?;
///     println!("Starting {} on {}", config.app_name(), config.server_addr());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AppConfig {
    app_name: String,
    app_version: String,
    environment: String,
    host: String,
    port: u16,
    google_client_id: String,
    google_client_secret: Secret,
    google_redirect_uri: String,
    database_url: String,
    jwt_secret: Secret,
    log_level: Level,
    cors_origins: Option<Vec<HeaderValue>>,
    request_timeout: u64,
}

impl AppConfig {
    /// Creates a new AppConfig from the process environment
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The PORT value cannot be parsed as a u16
    /// - The API_REQUEST_TIMEOUT_SECONDS value cannot be parsed as an integer
    /// - An API_CORS_ORIGINS entry is not a valid header value, or is `*`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Creates a new AppConfig from an arbitrary key-value source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let string = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        // Application settings
        let app_name = string("APP_NAME", "Scheduler");
        let app_version = string("APP_VERSION", "1.0.0-prototype");
        let environment = string("NODE_ENV", "development");

        // Network settings
        let host = string("API_HOST", "0.0.0.0");
        let port = string("PORT", "3000")
            .parse::<u16>()
            .wrap_err("Invalid PORT value")?;

        // Calendar credentials
        let google_client_id = string("GOOGLE_CLIENT_ID", "mock_client_id_for_development");
        let google_client_secret =
            Secret::new(string("GOOGLE_CLIENT_SECRET", "mock_secret_for_development"));
        let google_redirect_uri =
            string("GOOGLE_REDIRECT_URI", "http://localhost:3000/auth/callback");

        // Storage and security settings
        let database_url = string("DATABASE_URL", "sqlite://./data/scheduler.db");
        let jwt_secret = Secret::new(string(
            "JWT_SECRET",
            "development_jwt_secret_minimum_32_chars_long_for_security",
        ));

        // Logging settings
        let log_level = match string("LOG_LEVEL", "info").as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        // CORS settings
        let cors_origins = lookup("API_CORS_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(|origin| {
                        // Credentialed CORS cannot answer with a wildcard origin
                        if origin == "*" {
                            return Err(eyre!("Invalid API_CORS_ORIGINS entry {origin:?}"));
                        }
                        origin
                            .parse::<HeaderValue>()
                            .wrap_err_with(|| format!("Invalid API_CORS_ORIGINS entry {origin:?}"))
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .transpose()?;

        // Performance settings
        let request_timeout = string("API_REQUEST_TIMEOUT_SECONDS", "30")
            .parse::<u64>()
            .wrap_err("Invalid API_REQUEST_TIMEOUT_SECONDS value")?;

        Ok(Self {
            app_name,
            app_version,
            environment,
            host,
            port,
            google_client_id,
            google_client_secret,
            google_redirect_uri,
            database_url,
            jwt_secret,
            log_level,
            cors_origins,
            request_timeout,
        })
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn version(&self) -> &str {
        &self.app_version
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn google_client_id(&self) -> &str {
        &self.google_client_id
    }

    pub fn google_client_secret(&self) -> &Secret {
        &self.google_client_secret
    }

    pub fn google_redirect_uri(&self) -> &str {
        &self.google_redirect_uri
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn jwt_secret(&self) -> &Secret {
        &self.jwt_secret
    }

    pub fn log_level(&self) -> Level {
        self.log_level
    }

    pub fn cors_origins(&self) -> Option<&[HeaderValue]> {
        self.cors_origins.as_deref()
    }

    /// Request timeout in seconds
    pub fn request_timeout(&self) -> u64 {
        self.request_timeout
    }

    /// Returns the server address as a string
    ///
    /// # Returns
    ///
    /// * `String` - Formatted server address (e.g., "0.0.0.0:3000")
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
