// Shared prompt constants and prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Instruction that keeps tailoring from inventing experience.
pub const TRUTHFULNESS_INSTRUCTION: &str = "\
    CRITICAL: Every claim in the rewritten resume must already be present in the \
    original resume. Reorder, rephrase and emphasize, but do NOT add employers, \
    titles, dates, metrics, degrees or skills the candidate did not list. \
    If the job asks for something the resume lacks, leave it out.";

/// Instruction that steers the model away from stock AI phrasing.
/// Output is still passed through phrase cleanup afterwards.
pub const PLAIN_LANGUAGE_INSTRUCTION: &str = "\
    Write in plain, specific language. Avoid words like 'spearheaded', 'leveraged', \
    'cutting-edge', 'robust', 'seamless' and 'synergy'. Do not use em-dashes.";
