//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {var}")]
    Missing { var: &'static str },
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// Base URL of the leads service, without a trailing slash.
    pub api_url: String,
    pub api_timeout_secs: u64,
}

impl Config {
    /// Build typed config from environment variables.
    ///
    /// Required:
    /// - `LEADS_API_URL`: base URL of the leads service
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `LEADS_API_TIMEOUT_SECS`: default 15
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("LEADS_API_URL")
            .map(|raw| raw.trim().trim_end_matches('/').to_owned())
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::Missing { var: "LEADS_API_URL" })?;
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(ConfigError::Invalid { var: "LEADS_API_URL", value: api_url });
        }

        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let api_timeout_secs = parse_or("LEADS_API_TIMEOUT_SECS", lookup("LEADS_API_TIMEOUT_SECS"), DEFAULT_API_TIMEOUT_SECS)?;

        Ok(Self { port, api_url, api_timeout_secs })
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid { var, value }),
    }
}
