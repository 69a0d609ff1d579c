use std::collections::BTreeSet;
use std::fmt;

/// The browsable detail lists of a looked-up word, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DetailCategory {
    Synonyms,
    Antonyms,
    SimilarWords,
    Rhymes,
}

impl DetailCategory {
    pub const ALL: [DetailCategory; 4] = [
        DetailCategory::Synonyms,
        DetailCategory::Antonyms,
        DetailCategory::SimilarWords,
        DetailCategory::Rhymes,
    ];

    /// 1-based position in the category menu.
    pub fn index(self) -> usize {
        match self {
            DetailCategory::Synonyms => 1,
            DetailCategory::Antonyms => 2,
            DetailCategory::SimilarWords => 3,
            DetailCategory::Rhymes => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DetailCategory::Synonyms => "synonyms",
            DetailCategory::Antonyms => "antonyms",
            DetailCategory::SimilarWords => "similar words",
            DetailCategory::Rhymes => "rhymes",
        }
    }

    pub fn from_choice(choice: usize) -> Option<Self> {
        Self::ALL.get(choice.wrapping_sub(1)).copied()
    }
}

impl fmt::Display for DetailCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The normalized form of a single lookup.
///
/// A record that was not found carries no details at all. A found record keeps its
/// definitions in the provider's sense order and every other list as a deduplicated set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRecord {
    text: String,
    found: bool,
    definitions: Vec<String>,
    synonyms: BTreeSet<String>,
    antonyms: BTreeSet<String>,
    similar_words: BTreeSet<String>,
    rhymes: BTreeSet<String>,
}

impl WordRecord {
    pub fn not_found(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            found: false,
            definitions: Vec::new(),
            synonyms: BTreeSet::new(),
            antonyms: BTreeSet::new(),
            similar_words: BTreeSet::new(),
            rhymes: BTreeSet::new(),
        }
    }

    pub(crate) fn found(
        text: impl Into<String>,
        definitions: Vec<String>,
        synonyms: BTreeSet<String>,
        antonyms: BTreeSet<String>,
        similar_words: BTreeSet<String>,
        rhymes: BTreeSet<String>,
    ) -> Self {
        Self {
            text: text.into(),
            found: true,
            definitions,
            synonyms,
            antonyms,
            similar_words,
            rhymes,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_found(&self) -> bool {
        self.found
    }

    pub fn definitions(&self) -> &[String] {
        &self.definitions
    }

    pub fn synonyms(&self) -> &BTreeSet<String> {
        &self.synonyms
    }

    pub fn antonyms(&self) -> &BTreeSet<String> {
        &self.antonyms
    }

    pub fn similar_words(&self) -> &BTreeSet<String> {
        &self.similar_words
    }

    pub fn rhymes(&self) -> &BTreeSet<String> {
        &self.rhymes
    }

    pub fn detail(&self, category: DetailCategory) -> &BTreeSet<String> {
        match category {
            DetailCategory::Synonyms => &self.synonyms,
            DetailCategory::Antonyms => &self.antonyms,
            DetailCategory::SimilarWords => &self.similar_words,
            DetailCategory::Rhymes => &self.rhymes,
        }
    }
}
