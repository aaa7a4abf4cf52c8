//! Turns an uploaded document into flat text.
//!
//! `AppState` holds an `Arc<dyn TextExtractor>` so the pipeline can be driven
//! by an in-memory fake in tests.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Could not read document: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not extract text from PDF: {0}")]
    Pdf(String),

    #[error("Extraction task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, path: &Path) -> Result<String, ExtractError>;
}

/// PDF backend built on `pdf-extract`. Parsing is CPU-bound, so it runs on the
/// blocking pool instead of a runtime worker.
pub struct PdfTextExtractor;

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String, ExtractError> {
        let path: PathBuf = path.to_path_buf();
        let text = tokio::task::spawn_blocking(move || extract_pdf_text(&path)).await??;
        debug!("Extracted {} bytes of text from document", text.len());
        Ok(text)
    }
}

fn extract_pdf_text(path: &Path) -> Result<String, ExtractError> {
    let bytes = std::fs::read(path)?;
    pdf_extract::extract_text_from_mem(&bytes).map_err(|e| ExtractError::Pdf(e.to_string()))
}
