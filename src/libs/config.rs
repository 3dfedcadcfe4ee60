//! Runtime configuration for a single invocation.
//!
//! Configuration is read once from the process environment and handed to the
//! request pipeline and renderer explicitly. Nothing is cached between runs:
//! credentials live only in the environment of the invoking shell.
//!
//! ## Environment Variables
//!
//! - **`RITUAL_USERNAME`** / **`RITUAL_PASSWORD`**: account credentials, both
//!   required by every command except `signup`
//! - **`RITUAL_API_URL`**: overrides the backend base URL compiled into the binary
//! - **`RITUAL_TIMEOUT`**: request timeout in whole seconds (default 30)
//! - **`NO_COLOR`** / **`CLICOLOR`** / **`CLICOLOR_FORCE`**: color policy,
//!   applied by [`Style::detect`]
//!
//! ## Usage
//!
//! ```rust
//! use ritual::libs::config::Config;
//!
//! let config = Config::from_lookup(|key| match key {
//!     "RITUAL_USERNAME" => Some("me@example.com".to_string()),
//!     "RITUAL_PASSWORD" => Some("secret".to_string()),
//!     _ => None,
//! })?;
//! assert!(config.credentials.is_some());
//! # Ok::<(), ritual::libs::config::ConfigError>(())
//! ```

use super::style::Style;
use base64::prelude::*;
use std::env;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

pub const USERNAME_VAR: &str = "RITUAL_USERNAME";
pub const PASSWORD_VAR: &str = "RITUAL_PASSWORD";
pub const API_URL_VAR: &str = "RITUAL_API_URL";
pub const TIMEOUT_VAR: &str = "RITUAL_TIMEOUT";

/// Backend base URL compiled into the binary.
pub const DEFAULT_API_URL: &str = APP_METADATA_API_URL;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// `User-Agent` sent with every request, e.g. `ritual/0.3.0`.
pub fn user_agent() -> String {
    format!("{}/{}", APP_METADATA_NAME, APP_METADATA_VERSION)
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be a positive whole number of seconds, got '{value}'")]
    InvalidTimeout { var: &'static str, value: String },
    #[error("{var} must be an http:// or https:// URL, got '{value}'")]
    InvalidApiUrl { var: &'static str, value: String },
}

/// Username and password for Basic authentication.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Value for the `Authorization` header: `Basic base64(username:password)`.
    pub fn basic_auth(&self) -> String {
        let token = BASE64_STANDARD.encode(format!("{}:{}", self.username, self.password));
        format!("Basic {}", token)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    /// `None` when either credential variable is unset or empty.
    pub credentials: Option<Credentials>,
    pub timeout: Duration,
    pub style: Style,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            credentials: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            style: Style::default(),
        }
    }
}

impl Config {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds configuration from any key lookup.
    ///
    /// The output style is not part of the lookup; it depends on the terminal
    /// and is picked by [`Style::detect`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let credentials = match (present(USERNAME_VAR), present(PASSWORD_VAR)) {
            (Some(username), Some(password)) => Some(Credentials::new(username, password)),
            _ => None,
        };

        let api_url = match present(API_URL_VAR) {
            Some(url) => {
                let url = url.trim().to_string();
                if !(url.starts_with("http://") || url.starts_with("https://")) {
                    return Err(ConfigError::InvalidApiUrl { var: API_URL_VAR, value: url });
                }
                url
            }
            None => DEFAULT_API_URL.to_string(),
        };

        let timeout = match present(TIMEOUT_VAR) {
            Some(value) => match value.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::InvalidTimeout { var: TIMEOUT_VAR, value }),
            },
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            api_url,
            credentials,
            timeout,
            style: Style::detect(),
        })
    }

    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}
