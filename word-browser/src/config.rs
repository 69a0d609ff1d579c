use std::env;
use std::time::Duration;

use dictionary::DictionaryConfig;

pub const API_KEY_VAR: &str = "WORDS_API_KEY";
pub const API_HOST_VAR: &str = "WORDS_API_HOST";
pub const API_URL_VAR: &str = "WORDS_API_URL";
pub const TIMEOUT_VAR: &str = "WORDS_API_TIMEOUT_SECONDS";

const DEFAULT_API_HOST: &str = "wordsapiv1.p.rapidapi.com";
const DEFAULT_API_URL: &str = "https://wordsapiv1.p.rapidapi.com";
const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set, add it to the environment or a .env file")]
    MissingApiKey(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_key: String,
    pub api_host: String,
    pub api_url: String,
    pub timeout_seconds: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = lookup(API_KEY_VAR)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey(API_KEY_VAR))?;

        let api_host = lookup(API_HOST_VAR).unwrap_or_else(|| DEFAULT_API_HOST.to_string());

        let api_url = lookup(API_URL_VAR).unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let timeout_seconds = lookup(TIMEOUT_VAR)
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECONDS);

        Ok(Config {
            api_key,
            api_host,
            api_url,
            timeout_seconds,
        })
    }

    pub fn dictionary(&self) -> DictionaryConfig {
        DictionaryConfig {
            base_url: self.api_url.clone(),
            api_key: self.api_key.clone(),
            api_host: self.api_host.clone(),
            timeout: Duration::from_secs(self.timeout_seconds),
        }
    }
}
