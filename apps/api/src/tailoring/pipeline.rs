//! Experience rewrite pipeline: extract → segment → compose → rewrite.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::extraction::TextExtractor;
use crate::llm_client::Rewriter;
use crate::segmentation::HeadingVocabulary;
use crate::tailoring::prompts::compose;

/// Collaborators the pipeline needs, borrowed from `AppState`.
pub struct PipelineDeps<'a> {
    pub extractor: &'a dyn TextExtractor,
    pub headings: &'a HeadingVocabulary,
    pub rewriter: &'a dyn Rewriter,
}

#[derive(Debug, Clone, Serialize)]
pub struct TailoredExperience {
    pub modified_experience: String,
    #[serde(skip)]
    pub original_experience: String,
    #[serde(skip)]
    pub model: String,
}

/// Runs the full rewrite for one uploaded document.
/// An empty experience section short-circuits before the rewriter is called.
pub async fn tailor_experience(
    document: &Path,
    job_description: &str,
    deps: PipelineDeps<'_>,
) -> Result<TailoredExperience, AppError> {
    let text = deps.extractor.extract(document).await?;

    let experience = deps.headings.extract_experience(&text);
    if experience.is_empty() {
        warn!(
            "No experience section found in {} chars of document text",
            text.len()
        );
        return Err(AppError::SectionNotFound);
    }
    debug!(
        "Experience section spans {} lines",
        experience.lines().count()
    );

    let prompt = compose(&experience, job_description);
    let modified = deps.rewriter.rewrite(&prompt).await?;

    info!(
        model = deps.rewriter.model(),
        original_chars = experience.len(),
        rewritten_chars = modified.len(),
        "Experience section rewritten"
    );

    Ok(TailoredExperience {
        modified_experience: modified,
        original_experience: experience,
        model: deps.rewriter.model().to_string(),
    })
}
