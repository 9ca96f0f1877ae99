//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_HOST: &str = "0.0.0.0";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `BIND_HOST`: default `0.0.0.0`
    /// - `PORT`: default 3000
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when `PORT` is not a valid port number
    /// or `BIND_HOST` is blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = match lookup("BIND_HOST") {
            None => DEFAULT_BIND_HOST.to_owned(),
            Some(raw) if raw.trim().is_empty() => {
                return Err(ConfigError::Invalid { var: "BIND_HOST", value: raw });
            }
            Some(raw) => raw.trim().to_owned(),
        };
        let port = match lookup("PORT") {
            None => DEFAULT_PORT,
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { var: "PORT", value: raw })?,
        };
        Ok(Self { host, port })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
