use serde::{Deserialize, Serialize};

/// A provider's answer for one word, before normalization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawResponse {
    pub found: bool,
    #[serde(default)]
    pub meanings: Vec<RawMeaning>,
}

/// One sense of a word. Every field may be missing and list entries may be null.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMeaning {
    #[serde(default)]
    pub definition: Option<String>,
    #[serde(default)]
    pub synonyms: Option<Vec<Option<String>>>,
    #[serde(default)]
    pub also: Option<Vec<Option<String>>>,
    #[serde(default)]
    pub antonyms: Option<Vec<Option<String>>>,
    #[serde(default)]
    pub similar_words: Option<Vec<Option<String>>>,
    #[serde(default)]
    pub rhymes: Option<Vec<Option<String>>>,
}

impl RawResponse {
    pub fn not_found() -> Self {
        Self {
            found: false,
            meanings: Vec::new(),
        }
    }

    pub fn found(meanings: Vec<RawMeaning>) -> Self {
        Self {
            found: true,
            meanings,
        }
    }
}
