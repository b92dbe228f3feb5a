//! Heuristic suffix stripper used for fuzzy keyword equality.
//!
//! Maps common morphological variants ("optimizing", "optimized",
//! "optimization") to a shared root. Not a linguistic stemmer: two words that
//! share a stem are likely related, nothing more.

use crate::analysis::lexicon::is_short_keyword;

/// Suffixes tried in order; the first one that leaves a long enough stem wins.
pub const SUFFIXES: &[&str] = &[
    "ization", "isation", "izing", "ising", "ized", "ised", "ation", "ment", "ness", "ible", "able",
    "ting", "ing", "ical", "ally", "ious", "ity", "ive", "ous", "ful", "ant", "ent", "ion", "ism",
    "ist", "ed", "er", "ly",
];

/// Words at or below this length are never stemmed.
const PROTECTED_LEN: usize = 4;
const MIN_STEM_LEN: usize = 3;

/// Reduces a lowercase token to its heuristic root.
pub fn stem_word(word: &str) -> String {
    let len = word.chars().count();
    if len <= PROTECTED_LEN || is_short_keyword(word) {
        return word.to_string();
    }

    for suffix in SUFFIXES {
        if let Some(stem) = word.strip_suffix(suffix) {
            if stem.chars().count() >= MIN_STEM_LEN {
                return stem.to_string();
            }
        }
    }

    if let Some(stem) = word.strip_suffix('s') {
        let keeps_s = word.ends_with("ss") || word.ends_with("us") || word.ends_with("is");
        if !keeps_s && stem.chars().count() > PROTECTED_LEN {
            return stem.to_string();
        }
    }

    word.to_string()
}
