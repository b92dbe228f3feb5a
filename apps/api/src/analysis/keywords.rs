//! Keyword extraction — turns free text (job descriptions, resumes) into a
//! normalized set of significant terms.

use std::collections::HashSet;

use tracing::debug;

use crate::analysis::lexicon::{is_short_keyword, is_stop_word, KNOWN_PHRASES};

/// Minimum token length kept without an allow-list entry.
pub const MIN_KEYWORD_LEN: usize = 3;

/// Lowercase keywords and phrases. Iteration order carries no meaning.
pub type KeywordSet = HashSet<String>;

/// Extracts the significant keywords and known phrases from `text`.
///
/// Known phrases are found by plain substring search over the lowercased text;
/// single tokens are split on anything outside `[a-z0-9#+./-]` so terms like
/// `node.js`, `c++` and `ci/cd` survive intact.
pub fn extract_keywords(text: &str) -> KeywordSet {
    let lower = text.to_lowercase();
    let mut keywords = KeywordSet::new();

    for phrase in KNOWN_PHRASES {
        if lower.contains(phrase) {
            keywords.insert((*phrase).to_string());
        }
    }

    for token in tokenize(&lower) {
        if is_significant(token) {
            keywords.insert(token.to_string());
        }
    }

    debug!(
        "Extracted {} keywords from {} chars of text",
        keywords.len(),
        text.len()
    );
    keywords
}

/// Splits lowercased text into candidate tokens, trimming edge `.` and `-`.
pub fn tokenize(lower: &str) -> impl Iterator<Item = &str> {
    lower
        .split(|c: char| !is_token_char(c))
        .map(|t| t.trim_matches(|c: char| c == '.' || c == '-'))
        .filter(|t| !t.is_empty())
}

fn is_token_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '#' | '+' | '.' | '/' | '-')
}

fn is_significant(token: &str) -> bool {
    if token.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    if is_stop_word(token) {
        return false;
    }
    token.len() >= MIN_KEYWORD_LEN || is_short_keyword(token)
}

/// Normalizes an externally supplied keyword list (e.g. from the LLM) into a
/// set: trims, lowercases, and drops blanks.
pub fn normalize_keywords<I, S>(keywords: I) -> KeywordSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    keywords
        .into_iter()
        .map(|k| k.as_ref().trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .collect()
}

/// Returns the set as a lexicographically sorted list, for stable output.
pub fn sorted(keywords: &KeywordSet) -> Vec<String> {
    let mut list: Vec<String> = keywords.iter().cloned().collect();
    list.sort();
    list
}
