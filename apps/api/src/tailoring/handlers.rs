//! Axum route handlers for the Tailoring API.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::analysis::cleanup::{clean_ai_phrases, clean_sections};
use crate::analysis::keywords::sorted;
use crate::analysis::match_score::{calculate_match_score, MatchResult};
use crate::auth::Viewer;
use crate::errors::AppError;
use crate::models::resume::{Section, TailoredResume};
use crate::state::AppState;
use crate::tailoring::keyword_source::{resolve_keywords, KeywordOrigin};
use crate::tailoring::pipeline::{tailor_resume, CleanupSummary, TailorRequest};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct MatchScoreRequest {
    #[serde(default)]
    pub job_description: String,
    pub resume_before: String,
    pub resume_after: Option<String>,
    /// Pre-extracted JD keywords; replaces local extraction when non-empty.
    pub keywords: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct MatchScoreResponse {
    pub before: MatchResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<MatchResult>,
    pub keyword_source: KeywordOrigin,
    pub total_keywords: usize,
}

#[derive(Debug, Deserialize)]
pub struct KeywordsRequest {
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct KeywordsResponse {
    pub keywords: Vec<String>,
    pub source: KeywordOrigin,
}

#[derive(Debug, Deserialize)]
pub struct CleanupRequest {
    pub text: Option<String>,
    pub sections: Option<Vec<Section>>,
}

#[derive(Debug, Serialize)]
pub struct CleanupResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<Section>>,
    pub replaced_phrases: Vec<String>,
    pub replacement_count: usize,
}

#[derive(Debug, Serialize)]
pub struct TailorResponse {
    pub request_id: Uuid,
    pub resume: TailoredResume,
    pub cleanup: CleanupSummary,
    pub is_preview: bool,
    pub generated_at: DateTime<Utc>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/match-score
///
/// Scores the resume before (and optionally after) tailoring against the JD's keywords.
/// A supplied keyword list takes precedence over extracting from the JD.
pub async fn handle_match_score(
    State(state): State<AppState>,
    Json(request): Json<MatchScoreRequest>,
) -> Result<Json<MatchScoreResponse>, AppError> {
    let has_keywords = request.keywords.as_ref().is_some_and(|k| !k.is_empty());
    if request.job_description.trim().is_empty() && !has_keywords {
        return Err(AppError::Validation(
            "job_description or keywords must be provided".to_string(),
        ));
    }
    if request.resume_before.trim().is_empty() {
        return Err(AppError::Validation(
            "resume_before cannot be empty".to_string(),
        ));
    }

    let sourced = resolve_keywords(
        state.keyword_source.as_ref(),
        &request.job_description,
        request.keywords.as_deref(),
    )
    .await?;

    let before = calculate_match_score(&request.resume_before, &sourced.keywords);
    let after = request
        .resume_after
        .as_deref()
        .map(|resume| calculate_match_score(resume, &sourced.keywords));

    Ok(Json(MatchScoreResponse {
        before,
        after,
        keyword_source: sourced.origin,
        total_keywords: sourced.keywords.len(),
    }))
}

/// POST /api/v1/keywords
///
/// Returns the JD keyword set the match score would use, sorted.
pub async fn handle_keywords(
    State(state): State<AppState>,
    Json(request): Json<KeywordsRequest>,
) -> Result<Json<KeywordsResponse>, AppError> {
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    let sourced = state.keyword_source.keywords(&request.job_description).await?;

    Ok(Json(KeywordsResponse {
        keywords: sorted(&sourced.keywords),
        source: sourced.origin,
    }))
}

/// POST /api/v1/cleanup
///
/// Runs phrase cleanup over free text, sections, or both.
pub async fn handle_cleanup(
    Json(request): Json<CleanupRequest>,
) -> Result<Json<CleanupResponse>, AppError> {
    if request.text.is_none() && request.sections.is_none() {
        return Err(AppError::Validation(
            "text or sections must be provided".to_string(),
        ));
    }

    let mut replaced_phrases: Vec<String> = Vec::new();
    let mut replacement_count = 0;

    let text = request.text.as_deref().map(|text| {
        let result = clean_ai_phrases(text);
        replacement_count += result.replacement_count;
        replaced_phrases.extend(result.replaced_phrases);
        result.text
    });

    let sections = request.sections.as_deref().map(|sections| {
        let result = clean_sections(sections);
        replacement_count += result.replacement_count;
        for phrase in result.replaced_phrases {
            if !replaced_phrases.contains(&phrase) {
                replaced_phrases.push(phrase);
            }
        }
        result.sections
    });

    Ok(Json(CleanupResponse {
        text,
        sections,
        replaced_phrases,
        replacement_count,
    }))
}

/// POST /api/v1/tailor
///
/// Full pipeline: LLM rewrite → phrase cleanup → redaction for anonymous viewers.
pub async fn handle_tailor(
    State(state): State<AppState>,
    viewer: Viewer,
    Json(request): Json<TailorRequest>,
) -> Result<Json<TailorResponse>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "resume_text cannot be empty".to_string(),
        ));
    }
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    let request_id = Uuid::new_v4();
    info!("Tailoring request {request_id} ({viewer:?})");

    let outcome = tailor_resume(&state.llm, &request, viewer.is_authenticated()).await?;

    Ok(Json(TailorResponse {
        request_id,
        resume: outcome.resume,
        cleanup: outcome.cleanup,
        is_preview: outcome.is_preview,
        generated_at: Utc::now(),
    }))
}
