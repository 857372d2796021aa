// ATS résumé scan: normalization, scoring, text extraction and AI suggestions.
// All LLM calls go through llm_client; no direct Gemini calls here.

pub mod extraction;
pub mod handlers;
pub mod normalizer;
pub mod profile;
pub mod prompts;
pub mod scorer;
pub mod suggestions;
