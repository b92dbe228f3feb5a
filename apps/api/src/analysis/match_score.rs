//! Match Scoring — measures how much of a job description's keyword set a
//! resume covers.
//!
//! Single-word keywords match exactly or by shared stem. Compound keywords
//! (containing a space or `/`) match only as a substring of the resume text.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::keywords::{extract_keywords, KeywordSet};
use crate::analysis::stemmer::stem_word;

/// Result of scoring one resume against one keyword set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub matched_keywords: Vec<String>, // sorted
    pub missed_keywords: Vec<String>,  // sorted
    pub match_count: usize,
    pub total_keywords: usize,
    pub match_percentage: u32, // 0 – 100
}

/// Scores `resume_text` against pre-normalized job-description keywords.
///
/// Algorithm:
/// 1. Extract the resume's own keywords and their stems
/// 2. For each JD keyword:
///    - compound (space or `/`) → substring of the lowercased resume
///    - otherwise → exact keyword hit, or stem hit
/// 3. match_percentage = round(100 × matched / total), 0 when there are no keywords
pub fn calculate_match_score(resume_text: &str, jd_keywords: &KeywordSet) -> MatchResult {
    let resume_lower = resume_text.to_lowercase();
    let resume_keywords = extract_keywords(resume_text);
    let resume_stems: HashSet<String> = resume_keywords.iter().map(|k| stem_word(k)).collect();

    let mut matched_keywords = Vec::new();
    let mut missed_keywords = Vec::new();

    for keyword in jd_keywords {
        let is_match = if is_compound(keyword) {
            resume_lower.contains(keyword.as_str())
        } else {
            resume_keywords.contains(keyword) || resume_stems.contains(&stem_word(keyword))
        };

        if is_match {
            matched_keywords.push(keyword.clone());
        } else {
            missed_keywords.push(keyword.clone());
        }
    }

    matched_keywords.sort();
    missed_keywords.sort();

    let match_count = matched_keywords.len();
    let total_keywords = jd_keywords.len();
    let match_percentage = percentage(match_count, total_keywords);

    debug!("Match score: {match_count}/{total_keywords} keywords ({match_percentage}%)");

    MatchResult {
        matched_keywords,
        missed_keywords,
        match_count,
        total_keywords,
        match_percentage,
    }
}

fn is_compound(keyword: &str) -> bool {
    keyword.contains(' ') || keyword.contains('/')
}

fn percentage(matched: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((matched as f64 / total as f64) * 100.0).round().clamp(0.0, 100.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> KeywordSet {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_half_of_tech_stack_matches() {
        let jd = set(&["react", "typescript", "node.js", "python"]);
        let result = calculate_match_score("I know React and TypeScript well", &jd);

        assert_eq!(result.match_count, 2);
        assert_eq!(result.total_keywords, 4);
        assert_eq!(result.match_percentage, 50);
        assert_eq!(result.matched_keywords, vec!["react", "typescript"]);
        assert_eq!(result.missed_keywords, vec!["node.js", "python"]);
    }

    #[test]
    fn test_empty_keyword_set_scores_zero() {
        let result = calculate_match_score("Rust, Go and Kubernetes", &KeywordSet::new());
        assert_eq!(result.match_percentage, 0);
        assert_eq!(result.total_keywords, 0);
        assert_eq!(result.match_count, 0);
        assert!(result.matched_keywords.is_empty());
        assert!(result.missed_keywords.is_empty());
    }

    #[test]
    fn test_empty_resume_misses_everything() {
        let result = calculate_match_score("", &set(&["rust", "machine learning"]));
        assert_eq!(result.match_percentage, 0);
        assert_eq!(result.missed_keywords, vec!["machine learning", "rust"]);
    }

    #[test]
    fn test_text_matches_its_own_keywords() {
        let text = "Senior engineer: Rust, Kafka, PostgreSQL, CI/CD, machine learning, \
                    real-time systems, C++ and Go. Optimized distributed systems.";
        let result = calculate_match_score(text, &extract_keywords(text));
        assert_eq!(result.match_percentage, 100);
        assert!(result.missed_keywords.is_empty());
    }

    #[test]
    fn test_stem_match_counts_variants() {
        let jd = set(&["optimization", "developer"]);
        let result = calculate_match_score("Optimized queries while developing APIs", &jd);
        assert_eq!(result.matched_keywords, vec!["developer", "optimization"]);
        assert_eq!(result.match_percentage, 100);
    }

    #[test]
    fn test_compound_keywords_need_substring() {
        let jd = set(&["ci/cd", "machine learning"]);
        let result = calculate_match_score("Owned CI/CD; learning about machines", &jd);
        assert_eq!(result.matched_keywords, vec!["ci/cd"]);
        assert_eq!(result.missed_keywords, vec!["machine learning"]);
    }

    #[test]
    fn test_compound_substring_is_literal() {
        let jd = set(&["machine learning"]);
        let result = calculate_match_score("Fixed the coffee machine. Learning Rust.", &jd);
        // "machine. learning" does not contain "machine learning"
        assert_eq!(result.match_count, 0);

        let result = calculate_match_score("Repaired the machine learning station", &jd);
        assert_eq!(result.match_count, 1);
    }

    #[test]
    fn test_percentage_rounds_to_nearest() {
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 8), 13); // 12.5 rounds up
        assert_eq!(percentage(0, 5), 0);
        assert_eq!(percentage(5, 5), 100);
    }

    #[test]
    fn test_percentage_always_bounded() {
        let jd = set(&["rust", "go", "java", "kotlin", "swift", "scala", "elixir"]);
        for resume in ["", "rust", "rust go java", "rust go java kotlin swift scala elixir"] {
            let result = calculate_match_score(resume, &jd);
            assert!(result.match_percentage <= 100);
            assert_eq!(result.match_count + result.missed_keywords.len(), result.total_keywords);
        }
    }

    #[test]
    fn test_match_result_serializes_snake_case() {
        let result = calculate_match_score("rust", &set(&["rust"]));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["match_percentage"], 100);
        assert_eq!(json["matched_keywords"][0], "rust");
    }
}
