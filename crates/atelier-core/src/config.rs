//! # Configuration
//!
//! Environment-derived constants shared by every component.
//!
//! The configuration is an explicit value handed to whoever needs it; it is
//! never looked up from a global.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::pattern::encode_segment;

/// Environment variable overriding the HTTP origin.
pub const HTTP_ORIGIN_ENV: &str = "ATELIER_HTTP_ORIGIN";

/// Origin used when nothing is configured.
pub const DEFAULT_HTTP_ORIGIN: &str = "http://localhost:8080";

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawConfig")]
pub struct Config {
    /// Origin of the backend API, without a trailing `/`.
    http_origin: String,
}

#[derive(Deserialize)]
struct RawConfig {
    #[serde(default = "default_origin")]
    http_origin: String,
}

fn default_origin() -> String {
    DEFAULT_HTTP_ORIGIN.to_string()
}

impl TryFrom<RawConfig> for Config {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        Self::new(raw.http_origin)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_origin: default_origin(),
        }
    }
}

impl Config {
    /// Creates a configuration for `http_origin`.
    ///
    /// One trailing `/` is stripped.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOrigin`] unless the origin starts with
    /// `http://` or `https://` and names a host with no path after it.
    pub fn new(http_origin: impl Into<String>) -> Result<Self, ConfigError> {
        let mut origin = http_origin.into();
        if origin.ends_with('/') {
            origin.pop();
        }

        let host = origin
            .strip_prefix("https://")
            .or_else(|| origin.strip_prefix("http://"));
        match host {
            Some(host)
                if !host.is_empty()
                    && !host.contains('/')
                    && !host.contains(char::is_whitespace) =>
            {
                Ok(Self { http_origin: origin })
            }
            _ => Err(ConfigError::InvalidOrigin(origin)),
        }
    }

    /// Parses a JSON configuration document such as
    /// `{"http_origin": "https://studio.example.com"}`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the document is malformed or the
    /// origin is invalid.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads the origin from [`HTTP_ORIGIN_ENV`], falling back to the default.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOrigin`] if the variable is set to an
    /// invalid origin.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_origin_var(std::env::var(HTTP_ORIGIN_ENV).ok())
    }

    /// Builds from an optional origin value, as read from the environment
    /// at run time or at compile time.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOrigin`] if `value` is an invalid origin.
    pub fn from_origin_var(value: Option<String>) -> Result<Self, ConfigError> {
        match value {
            Some(origin) if !origin.trim().is_empty() => {
                let config = Self::new(origin.trim())?;
                tracing::info!(origin = %config.http_origin, "Using configured http origin");
                Ok(config)
            }
            _ => {
                tracing::debug!(origin = DEFAULT_HTTP_ORIGIN, "No http origin configured");
                Ok(Self::default())
            }
        }
    }

    /// Origin of the backend API.
    #[must_use]
    pub fn http_origin(&self) -> &str {
        &self.http_origin
    }

    /// Download endpoint for a project archive.
    ///
    /// The identifier is percent-encoded as one path segment.
    #[must_use]
    pub fn project_download_url(&self, project_id: &str) -> String {
        format!("{}/api/projects/{}", self.http_origin, encode_segment(project_id))
    }
}
