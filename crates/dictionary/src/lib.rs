use std::time::Duration;

use reqwest::Url;
use words_api::{get_word, Credentials};

mod dictionary;
mod normalize;
mod record;
mod words_api;

pub use dictionary::{RawMeaning, RawResponse};
pub use normalize::normalize;
pub use record::{DetailCategory, WordRecord};

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("couldn't reach the dictionary service: {0}")]
    Fetch(#[source] reqwest::Error),
    #[error("couldn't read the dictionary service response: {0}")]
    Deserialize(#[source] reqwest::Error),
    #[error("the dictionary service rejected the API key")]
    Unauthorized,
    #[error("the dictionary service rate limit was reached")]
    RateLimited,
    #[error("the dictionary service answered with status {0}")]
    Status(u16),
    #[error("invalid dictionary service URL {0:?}")]
    InvalidUrl(String),
}

impl DictionaryError {
    /// Whether retrying with another word is pointless because the setup itself is broken.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            DictionaryError::Unauthorized | DictionaryError::InvalidUrl(_)
        )
    }
}

/// A source of raw lexical data for single words.
#[async_trait::async_trait]
pub trait LookupProvider: Send + Sync {
    /// A well-formed "no such word" answer is `Ok` with `found == false`, never an error.
    async fn fetch(&self, word: &str) -> Result<RawResponse, DictionaryError>;
}

#[derive(Debug, Clone)]
pub struct DictionaryConfig {
    pub base_url: String,
    pub api_key: String,
    pub api_host: String,
    pub timeout: Duration,
}

pub struct Dictionary {
    client: reqwest::Client,
    base_url: Url,
    api_key: String,
    api_host: String,
}

impl Dictionary {
    pub fn new(config: DictionaryConfig) -> Result<Self, DictionaryError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|_| DictionaryError::InvalidUrl(config.base_url.clone()))?;
        if base_url.cannot_be_a_base() {
            return Err(DictionaryError::InvalidUrl(config.base_url));
        }
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(DictionaryError::Fetch)?;
        Ok(Self {
            client,
            base_url,
            api_key: config.api_key,
            api_host: config.api_host,
        })
    }

    pub async fn get_definition(&self, word: &str) -> Result<RawResponse, DictionaryError> {
        let credentials = Credentials {
            key: &self.api_key,
            host: &self.api_host,
        };
        get_word(&self.client, &self.base_url, &credentials, word).await
    }
}

#[async_trait::async_trait]
impl LookupProvider for Dictionary {
    async fn fetch(&self, word: &str) -> Result<RawResponse, DictionaryError> {
        self.get_definition(word).await
    }
}
