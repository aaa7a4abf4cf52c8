use std::sync::Arc;

use crate::config::Config;
use crate::extraction::TextExtractor;
use crate::llm_client::Rewriter;
use crate::segmentation::HeadingVocabulary;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Document-to-text backend. Default: PdfTextExtractor.
    pub extractor: Arc<dyn TextExtractor>,
    /// Completion backend. Default: LlmClient.
    pub rewriter: Arc<dyn Rewriter>,
    /// Built once at startup; read-only for the life of the process.
    pub headings: Arc<HeadingVocabulary>,
}
