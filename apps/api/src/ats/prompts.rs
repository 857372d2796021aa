// LLM prompt templates for résumé improvement suggestions.

use crate::ats::scorer::ScoreResult;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;

/// Résumé text beyond this many characters is cut from the prompt.
pub const RESUME_EXCERPT_CHARS: usize = 3000;

pub const SUGGESTIONS_ROLE: &str = "You are a professional Applicant Tracking System (ATS) \
    reviewer and career advisor. You give concrete, actionable résumé feedback.";

/// Replace `{score}`, `{matched}`, `{missing}` and `{resume_text}` before sending.
pub const SUGGESTIONS_PROMPT_TEMPLATE: &str = r#"A résumé was just scanned against a target job profile.

ATS scan results:
- ATS Score: {score}%
- Matched Keywords: {matched}
- Missing Keywords: {missing}

Extracted résumé text (may be truncated):
---
{resume_text}
---

Using the score and the matched and missing keywords, give a three-part review:
1. Summary of Strengths: the 2-3 strongest points of this résumé for the profile.
2. Keyword Improvements: specific ways to work the missing keywords in, using synonyms or relevant context.
3. Formatting/Structure Tip: one high-impact change that improves ATS readability and visual appeal.

OUTPUT SCHEMA (return exactly this structure):
{"suggestions": ["string", "string", "string"]}"#;

pub fn suggestions_system() -> String {
    format!("{SUGGESTIONS_ROLE} {JSON_ONLY_SYSTEM}")
}

pub fn build_suggestions_prompt(result: &ScoreResult, resume_text: &str) -> String {
    SUGGESTIONS_PROMPT_TEMPLATE
        .replace("{score}", &result.score.to_string())
        .replace("{matched}", &join_or_none(&result.matched_keywords))
        .replace("{missing}", &join_or_none(&result.missing_keywords))
        .replace("{resume_text}", &excerpt(resume_text))
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        return "None".to_string();
    }
    items.join(", ")
}

fn excerpt(text: &str) -> String {
    match text.char_indices().nth(RESUME_EXCERPT_CHARS) {
        Some((cut, _)) => format!("{}... (truncated)", &text[..cut]),
        None => text.to_string(),
    }
}
