//! Generation pipeline: orchestrates one submission end to end.
//!
//! Flow: build_prompt → backend.complete → split_response → export both
//! documents in the requested format. One linear run per submission, no
//! shared state, no retry, no caching. The remote call is the only stage
//! that blocks for non-trivial wall-clock time.

use chrono::{DateTime, Local};
use tracing::info;

use crate::errors::AppError;
use crate::export::{export_artifact, DocumentKind, ExportArtifact};
use crate::generation::prompt_builder::build_prompt;
use crate::generation::prompts::GENERATION_SYSTEM;
use crate::generation::splitter::{split_response, DocumentPair};
use crate::llm_client::CompletionBackend;
use crate::models::profile::{CandidateProfile, OutputFormat};

/// Everything produced for one submission: the two text sections plus the
/// two exported artifacts in the requested format.
#[derive(Debug)]
pub struct GeneratedDocuments {
    pub pair: DocumentPair,
    pub resume_artifact: ExportArtifact,
    pub cover_artifact: ExportArtifact,
}

/// Runs the full pipeline for one submission.
///
/// `at` is the submission time used for artifact filenames; callers pass
/// `Local::now()` outside of tests.
pub async fn generate_documents(
    backend: &dyn CompletionBackend,
    profile: &CandidateProfile,
    format: OutputFormat,
    at: DateTime<Local>,
) -> Result<GeneratedDocuments, AppError> {
    let prompt = build_prompt(profile);
    info!(
        "requesting documents for {} ({})",
        profile.display_name(),
        profile.display_role()
    );

    let raw = backend
        .complete(&prompt, GENERATION_SYSTEM)
        .await
        .map_err(AppError::Generation)?;

    let pair = split_response(&raw);
    info!(
        "completion split: resume {} chars, cover letter {} chars",
        pair.resume_text.len(),
        pair.cover_letter_text.len()
    );

    let basename = profile.file_basename();
    let resume_artifact = export_artifact(
        &basename,
        &format!("{} — Resume", profile.display_name()),
        &pair.resume_text,
        DocumentKind::Resume,
        format,
        at,
    )?;
    let cover_artifact = export_artifact(
        &basename,
        &format!("{} — Cover Letter", profile.display_name()),
        &pair.cover_letter_text,
        DocumentKind::CoverLetter,
        format,
        at,
    )?;

    Ok(GeneratedDocuments {
        pair,
        resume_artifact,
        cover_artifact,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
