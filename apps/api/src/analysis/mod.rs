// Text analysis core: keyword extraction, stemming, match scoring,
// AI-phrase cleanup and preview redaction.
// Pure, synchronous functions over static tables; safe to call from any handler.

pub mod cleanup;
pub mod keywords;
pub mod lexicon;
pub mod match_score;
pub mod redaction;
pub mod stemmer;
