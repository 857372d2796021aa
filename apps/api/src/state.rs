use std::sync::Arc;

use crate::ats::extraction::TextExtractor;
use crate::ats::scorer::Scorer;
use crate::ats::suggestions::SuggestionGenerator;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Immutable scorer built from the active ATS profile. Shared without locks.
    pub scorer: Arc<Scorer>,
    /// Pluggable document-to-text extractor. Default: PdfTextExtractor.
    pub extractor: Arc<dyn TextExtractor>,
    /// Pluggable suggestion backend. Default: GeminiSuggestionGenerator (lazy client).
    pub suggester: Arc<dyn SuggestionGenerator>,
}
