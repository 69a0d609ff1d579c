// https://www.wordsapi.com/docs/ - definitions, synonyms, antonyms, similar words
// https://www.wordsapi.com/docs/#rhymes - rhymes come from a separate endpoint

use reqwest::{StatusCode, Url};
use serde::Deserialize;

use crate::{DictionaryError, RawMeaning, RawResponse};

const WORDS_PATH: &str = "words";
const RHYMES_PATH: &str = "rhymes";
const API_KEY_HEADER: &str = "X-RapidAPI-Key";
const API_HOST_HEADER: &str = "X-RapidAPI-Host";

pub(crate) struct Credentials<'a> {
    pub key: &'a str,
    pub host: &'a str,
}

#[derive(Debug, Deserialize)]
struct WordEntry {
    #[serde(default)]
    results: Vec<WordResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WordResult {
    definition: Option<String>,
    synonyms: Option<Vec<Option<String>>>,
    also: Option<Vec<Option<String>>>,
    antonyms: Option<Vec<Option<String>>>,
    similar_to: Option<Vec<Option<String>>>,
}

#[derive(Debug, Default, Deserialize)]
struct RhymesEntry {
    #[serde(default)]
    rhymes: Rhymes,
}

#[derive(Debug, Default, Deserialize)]
struct Rhymes {
    #[serde(default)]
    all: Vec<Option<String>>,
}

pub(crate) async fn get_word(
    client: &reqwest::Client,
    base_url: &Url,
    credentials: &Credentials<'_>,
    word: &str,
) -> Result<RawResponse, DictionaryError> {
    if !is_path_word(word) {
        tracing::debug!(word, "word can't be addressed by the service");
        return Ok(RawResponse::not_found());
    }
    let url = word_url(base_url, word, None)?;
    let Some(entry) = get_json::<WordEntry>(client, url, credentials).await? else {
        tracing::debug!(word, "word is not known to the service");
        return Ok(RawResponse::not_found());
    };
    let url = word_url(base_url, word, Some(RHYMES_PATH))?;
    let rhymes = match get_json::<RhymesEntry>(client, url, credentials).await {
        Ok(rhymes) => rhymes.unwrap_or_default(),
        Err(error) if error.is_fatal() => return Err(error),
        Err(error) => {
            tracing::warn!(word, %error, "rhymes lookup failed, showing none");
            RhymesEntry::default()
        }
    };
    Ok(into_raw_response(entry, rhymes))
}

/// Empty, `.` and `..` segments are dropped or resolved by URL building, so they'd hit
/// another endpoint instead of a word.
fn is_path_word(word: &str) -> bool {
    !matches!(word, "" | "." | "..")
}

/// Fetches and decodes `url`, yielding `None` when the service answers 404.
async fn get_json<T>(
    client: &reqwest::Client,
    url: Url,
    credentials: &Credentials<'_>,
) -> Result<Option<T>, DictionaryError>
where
    T: for<'de> Deserialize<'de>,
{
    let res: reqwest::Response = client
        .get(url)
        .header(API_KEY_HEADER, credentials.key)
        .header(API_HOST_HEADER, credentials.host)
        .send()
        .await
        .map_err(DictionaryError::Fetch)?;
    match res.status() {
        StatusCode::NOT_FOUND => return Ok(None),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            return Err(DictionaryError::Unauthorized);
        }
        StatusCode::TOO_MANY_REQUESTS => return Err(DictionaryError::RateLimited),
        status if !status.is_success() => return Err(DictionaryError::Status(status.as_u16())),
        _ => {}
    }
    res.json::<T>()
        .await
        .map(Some)
        .map_err(DictionaryError::Deserialize)
}

fn word_url(base_url: &Url, word: &str, endpoint: Option<&str>) -> Result<Url, DictionaryError> {
    let mut url = base_url.clone();
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| DictionaryError::InvalidUrl(base_url.to_string()))?;
        segments.pop_if_empty().push(WORDS_PATH).push(word);
        if let Some(endpoint) = endpoint {
            segments.push(endpoint);
        }
    }
    Ok(url)
}

fn into_raw_response(entry: WordEntry, rhymes: RhymesEntry) -> RawResponse {
    let mut meanings = entry
        .results
        .into_iter()
        .map(|result| RawMeaning {
            definition: result.definition,
            synonyms: result.synonyms,
            also: result.also,
            antonyms: result.antonyms,
            similar_words: result.similar_to,
            rhymes: None,
        })
        .collect::<Vec<RawMeaning>>();
    if let Some(first) = meanings.first_mut() {
        first.rhymes = Some(rhymes.rhymes.all);
    }
    RawResponse::found(meanings)
}
