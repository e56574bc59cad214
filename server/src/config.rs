//! Host configuration parsed from environment variables.
//!
//! Variables may come from the process environment or a `.env` file loaded
//! by `main` before this runs.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {value:?}")]
    InvalidPort { value: String },
    #[error("HOST must not be empty")]
    EmptyHost,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub host: String,
    pub port: u16,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `HOST`: bind interface, default `0.0.0.0`
    /// - `PORT`: bind port, default 3000
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when either variable is present but unusable.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("HOST").ok();
        let port = std::env::var("PORT").ok();
        Self::parse(host.as_deref(), port.as_deref())
    }

    /// Build config from raw values; `None` selects the default.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyHost`] for a blank host and
    /// [`ConfigError::InvalidPort`] for a port that is not a `u16`.
    pub fn parse(host: Option<&str>, port: Option<&str>) -> Result<Self, ConfigError> {
        let host = match host.map(str::trim) {
            None => {
                tracing::warn!(default = DEFAULT_HOST, "HOST not set, using default");
                DEFAULT_HOST.to_owned()
            }
            Some("") => return Err(ConfigError::EmptyHost),
            Some(h) => h.to_owned(),
        };
        let port = match port {
            None => {
                tracing::warn!(default = DEFAULT_PORT, "PORT not set, using default");
                DEFAULT_PORT
            }
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort { value: raw.to_owned() })?,
        };
        Ok(Self { host, port })
    }

    /// `host:port` string accepted by `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
