//! Keyword Source — pluggable, trait-based provider of the job-description
//! keyword set that match scoring runs against.
//!
//! Default: `ExtractedKeywordSource` (local extractor, deterministic, no network).
//! Optional: `LlmKeywordSource` (asks the model, falls back to local extraction).
//!
//! `AppState` holds an `Arc<dyn KeywordSource>`, chosen at startup via config.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::analysis::keywords::{extract_keywords, normalize_keywords, KeywordSet};
use crate::errors::AppError;
use crate::llm_client::{LlmClient, LlmError};
use crate::tailoring::prompts::{
    render_template, KEYWORD_EXTRACT_PROMPT_TEMPLATE, KEYWORD_EXTRACT_SYSTEM,
};

/// Where a keyword set came from — echoed to clients for transparency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordOrigin {
    /// Caller sent a pre-extracted list.
    Supplied,
    /// Local keyword extractor.
    Extracted,
    /// Hosted language model.
    Llm,
}

/// Keyword set plus its provenance.
#[derive(Debug, Clone)]
pub struct SourcedKeywords {
    pub keywords: KeywordSet,
    pub origin: KeywordOrigin,
}

/// The keyword source trait. Implement this to swap how JD keywords are
/// obtained without touching handlers.
#[async_trait]
pub trait KeywordSource: Send + Sync {
    async fn keywords(&self, jd_text: &str) -> Result<SourcedKeywords, AppError>;
}

/// Runs the local keyword extractor over the job description.
pub struct ExtractedKeywordSource;

#[async_trait]
impl KeywordSource for ExtractedKeywordSource {
    async fn keywords(&self, jd_text: &str) -> Result<SourcedKeywords, AppError> {
        Ok(SourcedKeywords {
            keywords: extract_keywords(jd_text),
            origin: KeywordOrigin::Extracted,
        })
    }
}

/// Asks the LLM for the keyword list; local extraction covers any failure.
pub struct LlmKeywordSource(pub LlmClient);

#[derive(Debug, Deserialize)]
struct LlmKeywordList {
    keywords: Vec<String>,
}

#[async_trait]
impl KeywordSource for LlmKeywordSource {
    async fn keywords(&self, jd_text: &str) -> Result<SourcedKeywords, AppError> {
        let prompt = render_template(KEYWORD_EXTRACT_PROMPT_TEMPLATE, &[("jd_text", jd_text)]);
        let response = self
            .0
            .call_json::<LlmKeywordList>(&prompt, KEYWORD_EXTRACT_SYSTEM)
            .await
            .map(|list| list.keywords);
        Ok(keywords_or_fallback(response, jd_text))
    }
}

/// Normalizes a model-supplied list, or falls back to local extraction when
/// the call failed or produced nothing usable.
fn keywords_or_fallback(
    response: Result<Vec<String>, LlmError>,
    jd_text: &str,
) -> SourcedKeywords {
    match response {
        Ok(list) => {
            let keywords = normalize_keywords(list);
            if keywords.is_empty() {
                warn!("LLM returned no keywords, falling back to local extraction");
                return local(jd_text);
            }
            info!("LLM extracted {} JD keywords", keywords.len());
            SourcedKeywords {
                keywords,
                origin: KeywordOrigin::Llm,
            }
        }
        Err(e) => {
            warn!("LLM keyword extraction failed, falling back to local extraction: {e}");
            local(jd_text)
        }
    }
}

fn local(jd_text: &str) -> SourcedKeywords {
    SourcedKeywords {
        keywords: extract_keywords(jd_text),
        origin: KeywordOrigin::Extracted,
    }
}

/// Uses the caller's list when one was sent, otherwise asks `source`.
pub async fn resolve_keywords(
    source: &dyn KeywordSource,
    jd_text: &str,
    supplied: Option<&[String]>,
) -> Result<SourcedKeywords, AppError> {
    match supplied {
        Some(list) if !list.is_empty() => Ok(SourcedKeywords {
            keywords: normalize_keywords(list),
            origin: KeywordOrigin::Supplied,
        }),
        _ => source.keywords(jd_text).await,
    }
}
