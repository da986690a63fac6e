//! Axum route handlers for the document-generation API.

use axum::{extract::State, Json};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::export::ExportArtifact;
use crate::generation::pipeline::generate_documents;
use crate::llm_client;
use crate::models::profile::{CandidateProfile, OutputFormat};
use crate::state::AppState;

/// Shown in place of an empty cover-letter section so a degraded split is
/// visible to the user. Exported files keep the raw (empty) text.
const EMPTY_COVER_NOTICE: &str = "(no cover letter detected)";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateDocumentsRequest {
    pub profile: CandidateProfile,
    pub output_format: OutputFormat,
}

/// One downloadable file, base64-encoded for transport inside the JSON body.
#[derive(Debug, Serialize)]
pub struct FilePayload {
    pub filename: String,
    pub content_type: String,
    pub data_base64: String,
}

impl From<&ExportArtifact> for FilePayload {
    fn from(artifact: &ExportArtifact) -> Self {
        FilePayload {
            filename: artifact.filename.clone(),
            content_type: artifact.content_type.to_string(),
            data_base64: BASE64.encode(&artifact.data),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GenerateDocumentsResponse {
    pub model: &'static str,
    pub resume_text: String,
    pub cover_letter_text: String,
    pub resume_file: FilePayload,
    pub cover_letter_file: FilePayload,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/documents/generate
///
/// Runs the full pipeline for one submission: prompt → completion → split →
/// export. Requires a configured completion credential; without one, no
/// backend call is attempted and the configuration error is the only effect.
pub async fn handle_generate_documents(
    State(state): State<AppState>,
    Json(request): Json<GenerateDocumentsRequest>,
) -> Result<Json<GenerateDocumentsResponse>, AppError> {
    let backend = state.backend.as_ref().ok_or_else(|| {
        AppError::Configuration(
            "No completion-service API key configured. Set OPENAI_API_KEY and restart."
                .to_string(),
        )
    })?;

    let generated = generate_documents(
        backend.as_ref(),
        &request.profile,
        request.output_format,
        Local::now(),
    )
    .await?;

    let cover_letter_text = if generated.pair.cover_letter_text.is_empty() {
        EMPTY_COVER_NOTICE.to_string()
    } else {
        generated.pair.cover_letter_text.clone()
    };

    Ok(Json(GenerateDocumentsResponse {
        model: llm_client::MODEL,
        resume_text: generated.pair.resume_text.clone(),
        cover_letter_text,
        resume_file: FilePayload::from(&generated.resume_artifact),
        cover_letter_file: FilePayload::from(&generated.cover_artifact),
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
