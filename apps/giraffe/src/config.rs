//! # Server Configuration
//!
//! Layered, lowest precedence first:
//! 1. Built-in defaults
//! 2. TOML file passed with `--config`
//! 3. Environment variables (`GIRAFFE_*`)
//! 4. Explicit CLI flags (applied by the `server` command)
//!
//! ## Environment Variables
//!
//! - `GIRAFFE_HOST`: Bind host (default: 127.0.0.1)
//! - `GIRAFFE_PORT`: Bind port (default: 8080)
//! - `GIRAFFE_RATE_LIMIT`: Requests per second, 0 disables (default: 100)
//! - `GIRAFFE_CORS_ORIGINS`: Comma-separated origins, or "*" for all
//! - `GIRAFFE_RESPONSE_DELAY_MS`: Pause before answering `/classify` (default: 0)

use giraffe_core::GiraffeError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default rate limit in requests per second.
pub const DEFAULT_RATE_LIMIT: u32 = 100;

/// Upper bound on the cosmetic response delay.
pub const MAX_RESPONSE_DELAY_MS: u64 = 5_000;

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Requests per second across all clients; 0 disables limiting.
    pub rate_limit: u32,
    /// Allowed CORS origins. Empty means localhost only, `["*"]` means any.
    pub cors_origins: Vec<String>,
    /// Artificial pause before `/classify` answers, in milliseconds.
    pub response_delay_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            rate_limit: DEFAULT_RATE_LIMIT,
            cors_origins: Vec::new(),
            response_delay_ms: 0,
        }
    }
}

impl ServerConfig {
    /// Load defaults, then the optional file, then the environment.
    pub fn load(path: Option<&Path>) -> Result<Self, GiraffeError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.with_env_overrides(|key| std::env::var(key).ok())
    }

    /// Parse a TOML file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, GiraffeError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            GiraffeError::IoError(format!("Cannot read config '{}': {}", path.display(), e))
        })?;
        Self::from_toml(&contents)
    }

    /// Parse TOML text.
    pub fn from_toml(contents: &str) -> Result<Self, GiraffeError> {
        let config: ServerConfig =
            toml::from_str(contents).map_err(|e| GiraffeError::ConfigError(e.to_string()))?;
        config.validated()
    }

    /// Apply `GIRAFFE_*` overrides read through `lookup`.
    ///
    /// `lookup` is injected so tests never touch the process environment.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Result<Self, GiraffeError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("GIRAFFE_HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("GIRAFFE_PORT") {
            self.port = parse_env("GIRAFFE_PORT", &port)?;
        }
        if let Some(rate) = lookup("GIRAFFE_RATE_LIMIT") {
            self.rate_limit = parse_env("GIRAFFE_RATE_LIMIT", &rate)?;
        }
        if let Some(origins) = lookup("GIRAFFE_CORS_ORIGINS") {
            self.cors_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }
        if let Some(delay) = lookup("GIRAFFE_RESPONSE_DELAY_MS") {
            self.response_delay_ms = parse_env("GIRAFFE_RESPONSE_DELAY_MS", &delay)?;
        }
        self.validated()
    }

    /// Address string for `TcpListener::bind`.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    fn validated(self) -> Result<Self, GiraffeError> {
        if self.host.trim().is_empty() {
            return Err(GiraffeError::ConfigError("host must not be empty".into()));
        }
        if self.response_delay_ms > MAX_RESPONSE_DELAY_MS {
            return Err(GiraffeError::ConfigError(format!(
                "response_delay_ms {} exceeds maximum {}",
                self.response_delay_ms, MAX_RESPONSE_DELAY_MS
            )));
        }
        Ok(self)
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T, GiraffeError> {
    raw.trim()
        .parse()
        .map_err(|_| GiraffeError::ConfigError(format!("{} has invalid value '{}'", key, raw)))
}

// =============================================================================
// TESTS
// =============================================================================
