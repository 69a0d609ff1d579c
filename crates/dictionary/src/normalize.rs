use std::collections::BTreeSet;

use crate::{RawMeaning, RawResponse, WordRecord};

/// Shapes a provider response for `text` into a [`WordRecord`].
///
/// Detail lists are gathered across every meaning, stripped of null and blank entries and
/// deduplicated. Synonyms also absorb the `also` list. Definitions keep their meaning order
/// and are never deduplicated.
pub fn normalize(text: &str, raw: &RawResponse) -> WordRecord {
    if !raw.found {
        return WordRecord::not_found(text);
    }

    let definitions = raw
        .meanings
        .iter()
        .filter_map(|meaning| meaning.definition.clone())
        .collect::<Vec<String>>();
    let synonyms = collect(&raw.meanings, |meaning| {
        [meaning.synonyms.as_deref(), meaning.also.as_deref()]
    });
    let antonyms = collect(&raw.meanings, |meaning| [meaning.antonyms.as_deref()]);
    let similar_words = collect(&raw.meanings, |meaning| [meaning.similar_words.as_deref()]);
    let rhymes = collect(&raw.meanings, |meaning| [meaning.rhymes.as_deref()]);

    WordRecord::found(text, definitions, synonyms, antonyms, similar_words, rhymes)
}

fn collect<'a, const N: usize>(
    meanings: &'a [RawMeaning],
    fields: impl Fn(&'a RawMeaning) -> [Option<&'a [Option<String>]>; N],
) -> BTreeSet<String> {
    meanings
        .iter()
        .flat_map(fields)
        .flatten()
        .flatten()
        .filter_map(|entry| entry.as_deref())
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_owned)
        .collect()
}
