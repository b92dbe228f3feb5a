// LLM prompt constants for the Tailoring module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// System prompt for JD keyword extraction — enforces JSON-only output.
pub const KEYWORD_EXTRACT_SYSTEM: &str = "You are an expert technical recruiter. \
    Extract the skills and technologies a job description asks for. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Keyword extraction prompt template. Replace `{jd_text}` before sending.
pub const KEYWORD_EXTRACT_PROMPT_TEMPLATE: &str = r#"List the keywords an applicant tracking system would match for this job description.

Return a JSON object with this EXACT schema:
{
  "keywords": ["rust", "kubernetes", "distributed systems", "ci/cd"]
}

Rules:
- lowercase only, no duplicates
- single technologies, tools, languages, methodologies or multi-word domain terms
- NO generic words ("team", "experience", "communication", "passionate")
- NO locations, salaries, benefits or company names
- at most 40 keywords, most important first

JOB DESCRIPTION:
{jd_text}"#;

/// System prompt for resume tailoring.
pub const TAILOR_SYSTEM: &str = "You are an expert resume writer. \
    You rewrite an existing resume so it targets a specific job description \
    without inventing experience. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Resume tailoring prompt template.
/// Replace: {truthfulness_instruction}, {plain_language_instruction},
///          {cover_letter_instruction}, {resume_text}, {jd_text}
pub const TAILOR_PROMPT_TEMPLATE: &str = r#"{truthfulness_instruction}

{plain_language_instruction}

Rewrite the resume below for the job description below. Return a JSON object:
{
  "personal_info": {
    "full_name": "Jane Doe",
    "email": "jane@example.com",
    "phone": "604-555-1234",
    "location": "Vancouver, BC",
    "linkedin": "linkedin.com/in/janedoe"
  },
  "sections": [
    {"title": "Summary", "content": "..."},
    {"title": "Experience", "content": "Company — Role (2021–2024)\n• Bullet\n• Bullet"},
    {"title": "Skills", "content": "..."}
  ],
  "cover_letter": "..."
}

Rules:
1. Omit any personal_info field the resume does not contain — never guess contact details
2. Keep section titles generic ("Experience", "Education", "Skills", "Projects")
3. Use "\n" line breaks and "• " bullets inside section content
4. {cover_letter_instruction}

RESUME:
{resume_text}

JOB DESCRIPTION:
{jd_text}"#;

pub const COVER_LETTER_INCLUDE: &str =
    "Write a short cover letter (3 paragraphs) in `cover_letter`";

pub const COVER_LETTER_OMIT: &str = "Omit the `cover_letter` field entirely";

/// Fills `{name}` placeholders in one left-to-right pass. Inserted values are
/// never rescanned, so user text containing `{jd_text}` stays literal.
/// Braces that don't name a known placeholder (the JSON schemas above) are kept.
pub fn render_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        let placeholder = tail.find('}').and_then(|close| {
            let name = &tail[1..close];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (close, *value))
        });
        match placeholder {
            Some((close, value)) => {
                out.push_str(value);
                rest = &tail[close + 1..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}
