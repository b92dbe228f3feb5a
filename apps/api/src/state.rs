use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::tailoring::keyword_source::KeywordSource;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    pub config: Config,
    /// Pluggable JD keyword source. Default: ExtractedKeywordSource. Swap via LLM_KEYWORD_EXTRACTION.
    pub keyword_source: Arc<dyn KeywordSource>,
}
