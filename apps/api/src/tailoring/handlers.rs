//! Axum route handler for the experience rewrite.

use std::io::Write;

use axum::{
    extract::{multipart::Field, Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use tempfile::NamedTempFile;
use tracing::{info, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;
use crate::tailoring::pipeline::{tailor_experience, PipelineDeps, TailoredExperience};

const RESUME_FIELD: &str = "resume";
const JOB_DESCRIPTION_FIELD: &str = "job_desc";

/// The two form fields the endpoint accepts.
#[derive(Debug)]
pub struct TailorForm {
    pub resume: Bytes,
    pub job_description: String,
}

impl TailorForm {
    /// Reads the multipart body. Unknown fields are ignored; a later duplicate wins.
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut resume: Option<Bytes> = None;
        let mut job_description: Option<String> = None;

        while let Some(field) = multipart.next_field().await.map_err(bad_multipart)? {
            let name = field.name().map(str::to_string);
            match name.as_deref() {
                Some(RESUME_FIELD) => resume = Some(read_bytes(field).await?),
                Some(JOB_DESCRIPTION_FIELD) => {
                    job_description = Some(field.text().await.map_err(bad_multipart)?)
                }
                _ => {}
            }
        }

        let resume = resume
            .filter(|b| !b.is_empty())
            .ok_or_else(|| AppError::Validation(format!("'{RESUME_FIELD}' file is required")))?;
        let job_description = job_description
            .filter(|j| !j.trim().is_empty())
            .ok_or_else(|| {
                AppError::Validation(format!("'{JOB_DESCRIPTION_FIELD}' cannot be empty"))
            })?;

        Ok(Self {
            resume,
            job_description,
        })
    }
}

async fn read_bytes(field: Field<'_>) -> Result<Bytes, AppError> {
    field.bytes().await.map_err(bad_multipart)
}

/// Length-limit rejections carry 413; everything else is a malformed body.
fn bad_multipart(e: axum::extract::multipart::MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge
    } else {
        AppError::Validation(format!("Malformed multipart body: {e}"))
    }
}

/// Writes the upload to a `.pdf` temp file. The file is removed when the
/// returned handle is dropped, on success and failure alike.
fn materialize(resume: &[u8]) -> Result<NamedTempFile, AppError> {
    let mut file = tempfile::Builder::new()
        .prefix("resume-")
        .suffix(".pdf")
        .tempfile()
        .map_err(|e| AppError::Internal(e.into()))?;
    file.write_all(resume)
        .and_then(|_| file.flush())
        .map_err(|e| AppError::Internal(e.into()))?;
    Ok(file)
}

/// POST /process_resumee
/// POST /api/v1/experience/tailor
///
/// Multipart form: `resume` (PDF file) and `job_desc` (text).
/// Returns `{"modified_experience": "..."}`.
pub async fn handle_process_resume(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<TailoredExperience>, AppError> {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("tailor", %request_id);

    async move {
        let form = TailorForm::from_multipart(multipart).await?;
        info!("Received resume upload of {} bytes", form.resume.len());

        let document = materialize(&form.resume)?;
        let result = tailor_experience(
            document.path(),
            &form.job_description,
            PipelineDeps {
                extractor: state.extractor.as_ref(),
                headings: state.headings.as_ref(),
                rewriter: state.rewriter.as_ref(),
            },
        )
        .await;
        drop(document);

        result.map(Json)
    }
    .instrument(span)
    .await
}
