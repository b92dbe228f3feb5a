//! Phrase cleanup — swaps stock "AI-sounding" resume phrasing for plainer
//! wording and tidies the dash punctuation models like to emit.
//!
//! Phrases match anywhere, case-insensitively, and longer phrases are always
//! substituted before shorter ones so that "paradigm shift" wins over
//! "paradigm". No replacement contains a dictionary entry, and dictionary
//! passes repeat until the text stops changing, so cleaning cleaned text is a
//! no-op.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::resume::Section;

/// Phrase → plain replacement. An empty replacement deletes the phrase.
pub const AI_PHRASES: &[(&str, &str)] = &[
    // inflated action verbs
    ("spearheaded", "led"),
    ("spearheading", "leading"),
    ("spearhead", "lead"),
    ("orchestrated", "coordinated"),
    ("orchestrating", "coordinating"),
    ("leveraged", "used"),
    ("leveraging", "using"),
    ("leverage", "use"),
    ("utilized", "used"),
    ("utilizing", "using"),
    ("utilize", "use"),
    ("harnessed", "used"),
    ("championed", "promoted"),
    ("facilitated", "ran"),
    ("revolutionized", "overhauled"),
    ("synergized", "combined"),
    ("architected", "designed"),
    ("pioneered", "introduced"),
    ("delved into", "explored"),
    ("delve into", "explore"),
    ("empowered", "enabled"),
    ("fostered", "built"),
    ("bolstered", "strengthened"),
    ("galvanized", "motivated"),
    // buzzwords
    ("cutting-edge", "modern"),
    ("state-of-the-art", "modern"),
    ("best-in-class", "top"),
    ("world-class", "strong"),
    ("game-changing", "significant"),
    ("groundbreaking", "new"),
    ("innovative", "new"),
    ("robust", "reliable"),
    ("seamless", "smooth"),
    ("seamlessly", "smoothly"),
    ("synergy", "collaboration"),
    ("synergies", "overlap"),
    ("holistic", "complete"),
    ("paradigm shift", "major change"),
    ("paradigm", "model"),
    ("passionate about", "interested in"),
    ("results-driven", "focused"),
    ("detail-oriented", "careful"),
    ("proven track record", "history"),
    ("track record", "history"),
    ("tapestry", "mix"),
    ("myriad", "many"),
    ("a plethora of", "many"),
    ("plethora of", "many"),
    ("multifaceted", "varied"),
    ("meticulous", "careful"),
    ("meticulously", "carefully"),
    ("pivotal role", "key role"),
    ("pivotal", "key"),
    ("instrumental in", "key to"),
    ("thought leadership", "expertise"),
    ("thought leader", "expert"),
    ("value-add", "benefit"),
    ("deep dive", "review"),
    ("move the needle", "make progress"),
    ("ever-evolving", "changing"),
    ("ever-changing", "changing"),
    ("fast-paced", "busy"),
    // filler
    ("in order to", "to"),
    ("due to the fact that", "because"),
    ("a wide range of", "many"),
    ("a wide array of", "many"),
    ("in the realm of", "in"),
    ("navigating the complexities of", "handling"),
    ("in today's fast-paced world", ""),
    ("it is worth noting that", ""),
    ("it's worth noting that", ""),
    ("at the end of the day", ""),
    ("moving forward", ""),
    ("going forward", ""),
];

/// Outcome of cleaning one text (or a batch of sections).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanupResult {
    pub text: String,
    pub replaced_phrases: Vec<String>, // dictionary keys, deduplicated
    pub replacement_count: usize,
}

/// Aggregate outcome of cleaning every section's content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionCleanup {
    pub sections: Vec<Section>,
    pub replaced_phrases: Vec<String>,
    pub replacement_count: usize,
}

struct PhraseRule {
    phrase: &'static str,
    replacement: &'static str,
    pattern: Regex,
}

/// Dictionary compiled to case-insensitive patterns, longest phrase first.
static PHRASE_RULES: Lazy<Vec<PhraseRule>> = Lazy::new(|| {
    let mut entries: Vec<&(&str, &str)> = AI_PHRASES.iter().collect();
    entries.sort_by(|a, b| b.0.chars().count().cmp(&a.0.chars().count()));
    entries
        .into_iter()
        .map(|&(phrase, replacement)| PhraseRule {
            phrase,
            replacement,
            pattern: Regex::new(&phrase_pattern(phrase)).expect("AI phrase pattern must compile"),
        })
        .collect()
});

/// A run of em-dashes or 3+ hyphens, with the blanks around and between them.
static DASH_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \t]*(?:(?:—|-{3,})[ \t]*)+").unwrap());
/// One or more `--` tokens, each with whitespace on both sides.
static SPACED_DOUBLE_HYPHEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \t]+--(?:[ \t]+--)*[ \t]+").unwrap());
static MULTI_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r" {2,}").unwrap());

/// Upper bound on dictionary passes; real text settles in one or two.
const MAX_PASSES: usize = 8;

fn phrase_pattern(phrase: &str) -> String {
    format!("(?i){}", regex::escape(phrase))
}

/// Replaces AI-sounding phrases in `text` and normalizes dash punctuation.
pub fn clean_ai_phrases(text: &str) -> CleanupResult {
    let mut cleaned = collapse_spaces(text);
    let mut replaced_phrases = Vec::new();
    let mut replacement_count = 0;

    // A deletion can leave two words adjacent that form another phrase
    // ("in order moving forward to"), so repeat until a pass finds nothing.
    for _ in 0..MAX_PASSES {
        let found = replace_phrases(&mut cleaned, &mut replaced_phrases);
        if found == 0 {
            break;
        }
        replacement_count += found;
    }

    let cleaned = normalize_punctuation(&cleaned);

    if replacement_count > 0 {
        debug!("Replaced {replacement_count} AI phrases ({})", replaced_phrases.join(", "));
    }

    CleanupResult {
        text: cleaned,
        replaced_phrases,
        replacement_count,
    }
}

/// Cleans each section's content (titles are left alone) and aggregates counts.
pub fn clean_sections(sections: &[Section]) -> SectionCleanup {
    let mut cleaned_sections = Vec::with_capacity(sections.len());
    let mut replaced_phrases: Vec<String> = Vec::new();
    let mut replacement_count = 0;

    for section in sections {
        let result = clean_ai_phrases(&section.content);
        replacement_count += result.replacement_count;
        for phrase in result.replaced_phrases {
            if !replaced_phrases.contains(&phrase) {
                replaced_phrases.push(phrase);
            }
        }
        cleaned_sections.push(Section::new(section.title.clone(), result.text));
    }

    SectionCleanup {
        sections: cleaned_sections,
        replaced_phrases,
        replacement_count,
    }
}

/// Carries the first-letter capitalization of `matched` onto `replacement`.
pub fn match_case(matched: &str, replacement: &str) -> String {
    let capitalize = matched.chars().next().is_some_and(char::is_uppercase);
    let mut chars = replacement.chars();
    match chars.next() {
        Some(first) if capitalize => first.to_uppercase().chain(chars).collect(),
        _ => replacement.to_string(),
    }
}

/// One pass over the dictionary, longest phrase first. Returns the number of
/// occurrences replaced.
fn replace_phrases(text: &mut String, replaced_phrases: &mut Vec<String>) -> usize {
    let mut found = 0;
    for rule in PHRASE_RULES.iter() {
        let occurrences = rule.pattern.find_iter(text.as_str()).count();
        if occurrences == 0 {
            continue;
        }
        if !replaced_phrases.iter().any(|p| p == rule.phrase) {
            replaced_phrases.push(rule.phrase.to_string());
        }
        found += occurrences;
        *text = rule
            .pattern
            .replace_all(text.as_str(), |caps: &Captures| {
                match_case(&caps[0], rule.replacement)
            })
            .into_owned();
    }
    if found > 0 {
        *text = collapse_spaces(text);
    }
    found
}

fn collapse_spaces(text: &str) -> String {
    MULTI_SPACE.replace_all(text, " ").into_owned()
}

fn normalize_punctuation(text: &str) -> String {
    let text = DASH_RUN.replace_all(text, ", ");
    let text = SPACED_DOUBLE_HYPHEN.replace_all(&text, ", ");
    collapse_spaces(&text).trim().to_string()
}
