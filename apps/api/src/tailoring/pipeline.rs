//! Resume Tailoring — turns a resume + job description into a rewritten,
//! cleaned resume.
//!
//! Flow: LLM rewrite → phrase cleanup → (anonymous viewer) redaction and
//! cover-letter drop → response.
//!
//! Anonymous viewers get a preview: same layout, unreadable words, no cover letter.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::cleanup::{clean_ai_phrases, clean_sections};
use crate::analysis::redaction::{redact_personal_info, redact_sections};
use crate::errors::AppError;
use crate::llm_client::prompts::{PLAIN_LANGUAGE_INSTRUCTION, TRUTHFULNESS_INSTRUCTION};
use crate::llm_client::LlmClient;
use crate::models::resume::TailoredResume;
use crate::tailoring::prompts::{
    render_template, COVER_LETTER_INCLUDE, COVER_LETTER_OMIT, TAILOR_PROMPT_TEMPLATE,
    TAILOR_SYSTEM,
};

/// Request body for resume tailoring.
#[derive(Debug, Clone, Deserialize)]
pub struct TailorRequest {
    pub resume_text: String,
    pub job_description: String,
    #[serde(default)]
    pub include_cover_letter: bool,
}

/// What phrase cleanup changed across the whole resume.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanupSummary {
    pub replaced_phrases: Vec<String>,
    pub replacement_count: usize,
}

/// Post-processed tailoring output.
#[derive(Debug, Clone, Serialize)]
pub struct TailorOutcome {
    pub resume: TailoredResume,
    pub cleanup: CleanupSummary,
    /// True when the content was redacted for an anonymous viewer.
    pub is_preview: bool,
}

/// Asks the LLM to tailor the resume, then post-processes its answer.
pub async fn tailor_resume(
    llm: &LlmClient,
    request: &TailorRequest,
    authenticated: bool,
) -> Result<TailorOutcome, AppError> {
    let prompt = build_tailor_prompt(request, authenticated);

    let raw: TailoredResume = llm
        .call_json(&prompt, TAILOR_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Resume tailoring failed: {e}")))?;

    if raw.sections.is_empty() {
        return Err(AppError::UnprocessableEntity(
            "The model returned a resume with no sections".to_string(),
        ));
    }

    let outcome = finalize_tailored_resume(raw, authenticated);
    info!(
        "Tailored resume: {} sections, {} phrase replacements, preview={}",
        outcome.resume.sections.len(),
        outcome.cleanup.replacement_count,
        outcome.is_preview
    );
    Ok(outcome)
}

fn build_tailor_prompt(request: &TailorRequest, authenticated: bool) -> String {
    // Anonymous viewers never see a cover letter, so don't pay to generate one.
    let cover_letter_instruction = if request.include_cover_letter && authenticated {
        COVER_LETTER_INCLUDE
    } else {
        COVER_LETTER_OMIT
    };

    render_template(
        TAILOR_PROMPT_TEMPLATE,
        &[
            ("truthfulness_instruction", TRUTHFULNESS_INSTRUCTION),
            ("plain_language_instruction", PLAIN_LANGUAGE_INSTRUCTION),
            ("cover_letter_instruction", cover_letter_instruction),
            ("resume_text", request.resume_text.as_str()),
            ("jd_text", request.job_description.as_str()),
        ],
    )
}

/// Cleans the model's output and, for anonymous viewers, redacts it.
///
/// Steps:
/// 1. clean_sections() on every section's content
/// 2. authenticated: clean the cover letter too and merge its counts
/// 3. anonymous: redact sections + personal info, drop the cover letter,
///    and report only the replacement count (the phrases would leak content)
pub fn finalize_tailored_resume(raw: TailoredResume, authenticated: bool) -> TailorOutcome {
    let cleaned = clean_sections(&raw.sections);

    if !authenticated {
        return TailorOutcome {
            resume: TailoredResume {
                personal_info: redact_personal_info(&raw.personal_info),
                sections: redact_sections(&cleaned.sections),
                cover_letter: None,
            },
            cleanup: CleanupSummary {
                replaced_phrases: Vec::new(),
                replacement_count: cleaned.replacement_count,
            },
            is_preview: true,
        };
    }

    let mut cleanup = CleanupSummary {
        replaced_phrases: cleaned.replaced_phrases,
        replacement_count: cleaned.replacement_count,
    };

    let cover_letter = raw.cover_letter.map(|letter| {
        let result = clean_ai_phrases(&letter);
        cleanup.replacement_count += result.replacement_count;
        for phrase in result.replaced_phrases {
            if !cleanup.replaced_phrases.contains(&phrase) {
                cleanup.replaced_phrases.push(phrase);
            }
        }
        result.text
    });

    TailorOutcome {
        resume: TailoredResume {
            personal_info: raw.personal_info,
            sections: cleaned.sections,
            cover_letter,
        },
        cleanup,
        is_preview: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::redaction::PHONE_MASK;
    use crate::models::resume::{PersonalInfo, Section};

    fn raw_resume() -> TailoredResume {
        TailoredResume {
            personal_info: PersonalInfo {
                full_name: Some("Jane Doe".to_string()),
                email: Some("jane@example.com".to_string()),
                phone: Some("604-555-1234".to_string()),
                location: None,
                linkedin: None,
            },
            sections: vec![
                Section::new("Experience", "• Spearheaded the Rust migration\n• Cut costs 30%"),
                Section::new("Skills", "Rust, Kafka, robust testing"),
            ],
            cover_letter: Some("I leveraged Go in order to ship.".to_string()),
        }
    }

    #[test]
    fn test_authenticated_gets_cleaned_resume_and_letter() {
        let outcome = finalize_tailored_resume(raw_resume(), true);

        assert!(!outcome.is_preview);
        assert_eq!(
            outcome.resume.sections[0].content,
            "• Led the Rust migration\n• Cut costs 30%"
        );
        assert_eq!(outcome.resume.sections[1].content, "Rust, Kafka, reliable testing");
        assert_eq!(
            outcome.resume.cover_letter.as_deref(),
            Some("I used Go to ship.")
        );
        assert_eq!(outcome.resume.personal_info, raw_resume().personal_info);
        assert_eq!(outcome.cleanup.replacement_count, 4);
        assert_eq!(
            outcome.cleanup.replaced_phrases,
            vec!["spearheaded", "robust", "in order to", "leveraged"]
        );
    }

    #[test]
    fn test_anonymous_gets_redacted_preview_without_letter() {
        let outcome = finalize_tailored_resume(raw_resume(), false);

        assert!(outcome.is_preview);
        assert!(outcome.resume.cover_letter.is_none());
        assert_eq!(outcome.resume.sections[0].title, "Experience");
        assert_ne!(
            outcome.resume.sections[0].content,
            "• Led the Rust migration\n• Cut costs 30%"
        );
        assert!(outcome.resume.sections[0].content.starts_with("• "));
        assert!(outcome.resume.sections[0].content.contains("30%"));
        assert_eq!(outcome.resume.personal_info.phone.as_deref(), Some(PHONE_MASK));
        assert!(outcome.resume.personal_info.location.is_none());
        assert!(outcome.resume.personal_info.email.unwrap().ends_with(".com"));
    }

    #[test]
    fn test_anonymous_cleanup_reports_count_only() {
        let outcome = finalize_tailored_resume(raw_resume(), false);
        assert_eq!(outcome.cleanup.replacement_count, 2);
        assert!(outcome.cleanup.replaced_phrases.is_empty());
    }

    #[test]
    fn test_prompt_keeps_placeholder_text_inside_resume() {
        let request = TailorRequest {
            resume_text: "Wrote docs on {jd_text} templating".to_string(),
            job_description: "JD BODY".to_string(),
            include_cover_letter: false,
        };
        let prompt = build_tailor_prompt(&request, true);
        assert!(prompt.contains("Wrote docs on {jd_text} templating"));
        assert_eq!(prompt.matches("JD BODY").count(), 1);
    }

    #[test]
    fn test_prompt_requests_cover_letter_only_when_allowed() {
        let request = TailorRequest {
            resume_text: "RESUME BODY".to_string(),
            job_description: "JD BODY".to_string(),
            include_cover_letter: true,
        };
        let prompt = build_tailor_prompt(&request, true);
        assert!(prompt.contains(COVER_LETTER_INCLUDE));
        assert!(prompt.contains("RESUME BODY"));
        assert!(prompt.contains("JD BODY"));
        assert!(!prompt.contains("{resume_text}"));

        let prompt = build_tailor_prompt(&request, false);
        assert!(prompt.contains(COVER_LETTER_OMIT));
    }

    #[test]
    fn test_tailor_request_defaults_cover_letter_off() {
        let json = r#"{"resume_text": "r", "job_description": "j"}"#;
        let request: TailorRequest = serde_json::from_str(json).unwrap();
        assert!(!request.include_cover_letter);
    }
}
