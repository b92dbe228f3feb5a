//! Static word tables shared by keyword extraction and stemming.
//!
//! Tables are declared as ordered slices so match priority is explicit in
//! source. Set-style lookups are built once on first use.

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Multi-word domain terms, checked as case-insensitive substrings before
/// tokenization. Order is the scan order.
pub const KNOWN_PHRASES: &[&str] = &[
    "machine learning",
    "deep learning",
    "natural language processing",
    "computer vision",
    "large language models",
    "data science",
    "data engineering",
    "data analysis",
    "data pipelines",
    "data modeling",
    "distributed systems",
    "system design",
    "cloud computing",
    "google cloud",
    "web development",
    "mobile development",
    "full stack",
    "full-stack",
    "front end",
    "front-end",
    "back end",
    "back-end",
    "react native",
    "ruby on rails",
    "sql server",
    "power bi",
    "rest api",
    "restful api",
    "ci/cd",
    "a/b testing",
    "unit testing",
    "integration testing",
    "test-driven development",
    "continuous integration",
    "continuous delivery",
    "version control",
    "infrastructure as code",
    "site reliability",
    "incident response",
    "penetration testing",
    "event-driven",
    "object-oriented",
    "real-time",
    "user experience",
    "user interface",
    "design systems",
    "project management",
    "product management",
    "stakeholder management",
    "business intelligence",
    "supply chain",
    "financial modeling",
];

/// Tokens shorter than the minimum keyword length that still carry signal.
pub const SHORT_KEYWORD_ALLOWLIST: &[&str] = &[
    "go", "ai", "ml", "ci", "cd", "qa", "ui", "ux", "db", "js", "ts", "os", "ar", "vr", "bi", "c",
    "r", "c#", "f#", "3d", "aws", "gcp", "sql", "api", "k8s",
];

/// Generic and boilerplate tokens excluded from keyword extraction.
pub const STOP_WORDS: &[&str] = &[
    // articles, pronouns, prepositions, conjunctions
    "a", "an", "the", "and", "or", "but", "nor", "yet", "so", "of", "in", "on", "at", "to", "by",
    "as", "is", "it", "be", "we", "us", "me", "my", "he", "if", "no", "up", "for", "with", "you",
    "your", "yours", "our", "ours", "its", "his", "her", "him", "she", "they", "them", "their",
    "this", "that", "these", "those", "from", "into", "onto", "about", "over", "under", "than",
    "then", "there", "here", "what", "when", "where", "which", "who", "whom", "whose", "why",
    "how", "all", "any", "both", "each", "few", "more", "most", "other", "some", "such", "only",
    "own", "same", "also", "just", "not", "very", "too", "out", "off", "via", "per", "etc",
    "upon", "within", "without", "across", "through", "throughout", "while", "during", "before",
    "after", "above", "below", "between", "among", "like", "well", "new",
    // auxiliary and modal verbs
    "are", "was", "were", "been", "being", "has", "have", "had", "having", "does", "did",
    "doing", "will", "would", "can", "could", "should", "shall", "may", "might", "must",
    // resume-generic verbs
    "worked", "working", "work", "works", "responsible", "duties", "helped", "help", "helping",
    "assisted", "participated", "involved", "handled", "performed", "used", "using", "use",
    "utilized", "made", "make", "making", "ensure", "ensuring", "ensured", "provide",
    "provided", "providing", "including", "include", "includes", "various", "several",
    "successfully", "effectively",
    // job-posting filler
    "experience", "experienced", "years", "year", "team", "teams", "role", "roles",
    "position", "candidate", "candidates", "opportunity", "opportunities", "ideal", "required",
    "requirements", "requirement", "preferred", "qualifications", "qualification", "plus",
    "bonus", "strong", "excellent", "ability", "skills", "skill", "knowledge", "understanding",
    "familiarity", "proficiency", "proficient", "job", "company", "join", "apply", "looking",
    "seeking", "benefits", "salary", "equal", "employer", "environment", "responsibilities",
    "responsibility", "day", "days", "must-have", "nice-to-have", "minimum",
    "least", "related", "relevant", "field", "degree", "equivalent", "applicants", "hiring",
    // corporate buzzwords
    "synergy", "dynamic", "passionate", "innovative", "fast-paced", "self-starter",
    "rockstar", "ninja", "guru", "world-class", "best-in-class", "results-driven",
    "detail-oriented", "motivated", "highly", "proven", "cutting-edge", "leverage",
    "leveraging", "robust", "seamless", "excited", "exciting", "mission", "culture",
    // place names and work arrangements
    "canada", "vancouver", "toronto", "montreal", "ontario", "usa", "united", "states",
    "america", "york", "san", "francisco", "seattle", "austin", "boston", "london",
    "california", "remote", "hybrid", "onsite", "on-site", "office",
];

pub static STOP_WORD_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| STOP_WORDS.iter().copied().collect());

pub static SHORT_KEYWORD_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| SHORT_KEYWORD_ALLOWLIST.iter().copied().collect());

pub fn is_stop_word(token: &str) -> bool {
    STOP_WORD_SET.contains(token)
}

pub fn is_short_keyword(token: &str) -> bool {
    SHORT_KEYWORD_SET.contains(token)
}
