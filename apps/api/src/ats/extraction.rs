//! Document text extraction for uploaded résumés.
//!
//! `AppState` holds an `Arc<dyn TextExtractor>`; the default is [`PdfTextExtractor`].

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("could not parse document: {0}")]
    Parse(String),

    #[error("Could not extract any text from the PDF. File may be image-based or corrupt.")]
    NoText,

    #[error("extraction task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// Returns the document's plain text, or a structured failure.
    /// Implementations never return blank text; that is `ExtractionError::NoText`.
    async fn extract(&self, document: Bytes) -> Result<String, ExtractionError>;
}

/// Text-based PDF extraction via `pdf-extract`. Image-only PDFs yield `NoText`.
pub struct PdfTextExtractor;

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract(&self, document: Bytes) -> Result<String, ExtractionError> {
        let text = tokio::task::spawn_blocking(move || {
            pdf_extract::extract_text_from_mem(&document)
                .map_err(|e| ExtractionError::Parse(e.to_string()))
        })
        .await??;

        require_text(text)
    }
}

/// Rejects whitespace-only output.
pub fn require_text(text: String) -> Result<String, ExtractionError> {
    if text.trim().is_empty() {
        return Err(ExtractionError::NoText);
    }
    Ok(text)
}
