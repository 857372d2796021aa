//! AI improvement suggestions for a scored résumé.
//!
//! Default: `GeminiSuggestionGenerator`. Its `LlmClient` is built lazily on the
//! first request and reused afterwards. Any failure degrades to
//! [`FALLBACK_SUGGESTION`] instead of failing the scan.

use async_trait::async_trait;
use serde::Deserialize;
use tokio::sync::OnceCell;
use tracing::{error, info};

use crate::ats::prompts::{build_suggestions_prompt, suggestions_system};
use crate::ats::scorer::ScoreResult;
use crate::llm_client::{LlmClient, LlmError, MODEL};

pub const FALLBACK_SUGGESTION: &str =
    "Could not generate AI suggestions. Please check your GEMINI_API_KEY and service status.";

/// Carried in `AppState` as `Arc<dyn SuggestionGenerator>`.
#[async_trait]
pub trait SuggestionGenerator: Send + Sync {
    /// Never fails: implementations absorb errors into a fallback suggestion.
    async fn suggest(&self, result: &ScoreResult, resume_text: &str) -> Vec<String>;
}

#[derive(Debug, Deserialize)]
struct SuggestionsPayload {
    suggestions: Vec<String>,
}

pub struct GeminiSuggestionGenerator {
    api_key: Option<String>,
    base_url: Option<String>,
    client: OnceCell<LlmClient>,
}

impl GeminiSuggestionGenerator {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            base_url: None,
            client: OnceCell::new(),
        }
    }

    /// For testing: points the lazily-built client at another base URL.
    pub fn with_base_url(api_key: Option<String>, base_url: &str) -> Self {
        Self {
            api_key,
            base_url: Some(base_url.to_string()),
            client: OnceCell::new(),
        }
    }

    async fn client(&self) -> Result<&LlmClient, LlmError> {
        self.client
            .get_or_try_init(|| async {
                let api_key = self.api_key.clone().ok_or(LlmError::MissingApiKey)?;
                let client = match &self.base_url {
                    Some(url) => LlmClient::with_base_url(api_key, url)?,
                    None => LlmClient::new(api_key)?,
                };
                info!("LLM client initialized (model: {MODEL})");
                Ok::<_, LlmError>(client)
            })
            .await
    }

    async fn try_suggest(
        &self,
        result: &ScoreResult,
        resume_text: &str,
    ) -> Result<Vec<String>, LlmError> {
        let client = self.client().await?;
        let prompt = build_suggestions_prompt(result, resume_text);
        let payload: SuggestionsPayload = client.call_json(&prompt, &suggestions_system()).await?;
        if payload.suggestions.is_empty() {
            return Err(LlmError::EmptyContent);
        }
        Ok(payload.suggestions)
    }
}

#[async_trait]
impl SuggestionGenerator for GeminiSuggestionGenerator {
    async fn suggest(&self, result: &ScoreResult, resume_text: &str) -> Vec<String> {
        match self.try_suggest(result, resume_text).await {
            Ok(suggestions) => suggestions,
            Err(e) => {
                error!("Suggestion generation failed: {e}");
                vec![FALLBACK_SUGGESTION.to_string()]
            }
        }
    }
}
