// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, deployment modes, and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use super::database::DatabaseConfig;
use crate::constants::{defaults, env_config};
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt::{self, Display, Formatter};
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use tracing::info;

/// Deployment environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Cross-origin settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    /// `*` or a comma separated list of origins
    pub allowed_origins: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: defaults::CORS_ALLOWED_ORIGINS.to_owned(),
        }
    }
}

/// Switches for optional behavior
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppBehaviorConfig {
    /// Expose `POST /restaurants/self-test`
    pub enable_self_test: bool,
}

/// Complete server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// HTTP API port
    pub http_port: u16,
    /// Address to bind
    pub host: IpAddr,
    /// Deployment environment
    pub environment: Environment,
    /// Store settings
    pub database: DatabaseConfig,
    /// Cross-origin settings
    pub cors: CorsConfig,
    /// Optional behavior
    pub app_behavior: AppBehaviorConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: defaults::HTTP_PORT,
            host: IpAddr::from([0, 0, 0, 0]),
            environment: Environment::default(),
            database: DatabaseConfig::default(),
            cors: CorsConfig::default(),
            app_behavior: AppBehaviorConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if any variable is set to a value that does not parse
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let host = env_config::host();
        let config = Self {
            http_port: parse_env("HTTP_PORT", defaults::HTTP_PORT)?,
            host: host
                .parse()
                .map_err(|e| AppError::config(format!("Invalid HOST value '{host}': {e}")))?,
            environment: Environment::from_str_or_default(&env_config::environment()),
            database: DatabaseConfig::from_env()?,
            cors: CorsConfig {
                allowed_origins: env_config::cors_allowed_origins(),
            },
            app_behavior: AppBehaviorConfig {
                enable_self_test: parse_env("ENABLE_SELF_TEST", false)?,
            },
        };

        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Configuration for tests: in-memory `SQLite` and the self test enabled
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            http_port: 0,
            host: IpAddr::from([127, 0, 0, 1]),
            environment: Environment::Testing,
            database: DatabaseConfig::sqlite_memory(),
            app_behavior: AppBehaviorConfig {
                enable_self_test: true,
            },
            ..Self::default()
        }
    }

    /// Socket address the server binds to
    #[must_use]
    pub const fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.http_port)
    }

    /// One-line summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "environment={} bind={} database={} cors={} self_test={}",
            self.environment,
            self.bind_addr(),
            self.database.url,
            self.cors.allowed_origins,
            self.app_behavior.enable_self_test
        )
    }
}

/// Read `key` and parse it, falling back to `default` when unset
///
/// # Errors
///
/// Returns a configuration error when the variable is set but does not parse
pub(crate) fn parse_env<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::config(format!("Invalid {key} value '{raw}': {e}"))),
        Err(_) => Ok(default),
    }
}
