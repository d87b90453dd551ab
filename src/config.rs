use std::env;

use crate::error::Error;

/// Versioned base path of the production API.
pub const DEFAULT_BASE_URL: &str = "https://api.twitter.com/1.1/";

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub bearer_token: Option<String>,
}

impl Config {
    /// Reads the configuration from the environment. Unset variables fall
    /// back to the defaults; only a present-but-malformed value is an error.
    pub fn from_env() -> Result<Self, Error> {
        Ok(Self {
            base_url: optional_var("API_BASE_URL")?.unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
            bearer_token: optional_var("API_BEARER_TOKEN")?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            bearer_token: None,
        }
    }
}

fn optional_var(key: &str) -> Result<Option<String>, Error> {
    match env::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(err) => Err(err.into()),
    }
}
