//! Document export: turns a (title, body) text pair into a named,
//! downloadable byte stream in one of three formats.
//!
//! All converters are stateless and accept arbitrary-length plain text,
//! embedded blank lines, multi-byte characters, and an empty title.

pub mod docx;
pub mod pdf;
pub mod text;

use chrono::{DateTime, Local};
use thiserror::Error;

use crate::models::profile::OutputFormat;

/// Timestamp component of artifact filenames, minute resolution, local time.
const FILENAME_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("PDF rendering failed: {0}")]
    Pdf(String),

    #[error("DOCX rendering failed: {0}")]
    Docx(String),
}

/// A named byte sequence plus content-type label, ready for download.
/// Produced per requested format per submission; never cached or persisted.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    pub filename: String,
    pub content_type: &'static str,
    pub data: Vec<u8>,
}

/// Which of the two documents an artifact holds. Only affects the filename.
#[derive(Debug, Clone, Copy)]
pub enum DocumentKind {
    Resume,
    CoverLetter,
}

impl DocumentKind {
    fn file_label(self) -> &'static str {
        match self {
            DocumentKind::Resume => "resume",
            DocumentKind::CoverLetter => "cover",
        }
    }
}

/// Builds `{basename}_{kind}_{timestamp}.{ext}` for one artifact.
pub fn artifact_filename(
    basename: &str,
    kind: DocumentKind,
    format: OutputFormat,
    at: DateTime<Local>,
) -> String {
    format!(
        "{}_{}_{}.{}",
        basename,
        kind.file_label(),
        at.format(FILENAME_TIMESTAMP_FORMAT),
        format.extension()
    )
}

/// Renders one document body in the requested format.
pub fn export_document(title: &str, body: &str, format: OutputFormat) -> Result<Vec<u8>, ExportError> {
    match format {
        OutputFormat::Txt => Ok(text::to_text_bytes(body)),
        OutputFormat::Pdf => pdf::to_pdf_bytes(title, body),
        OutputFormat::Docx => docx::to_docx_bytes(title, body),
    }
}

/// Renders and names one document in a single step.
pub fn export_artifact(
    basename: &str,
    title: &str,
    body: &str,
    kind: DocumentKind,
    format: OutputFormat,
    at: DateTime<Local>,
) -> Result<ExportArtifact, ExportError> {
    Ok(ExportArtifact {
        filename: artifact_filename(basename, kind, format, at),
        content_type: format.content_type(),
        data: export_document(title, body, format)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 8, 30, 14, 5, 9).unwrap()
    }

    #[test]
    fn test_artifact_filename_shape() {
        let name = artifact_filename("Jane_Doe", DocumentKind::Resume, OutputFormat::Pdf, fixed_time());
        assert_eq!(name, "Jane_Doe_resume_20260830_1405.pdf");
        let name = artifact_filename("candidate", DocumentKind::CoverLetter, OutputFormat::Txt, fixed_time());
        assert_eq!(name, "candidate_cover_20260830_1405.txt");
    }

    #[test]
    fn test_export_artifact_carries_content_type() {
        let artifact = export_artifact(
            "Jane_Doe",
            "Jane Doe — Resume",
            "body text",
            DocumentKind::Resume,
            OutputFormat::Txt,
            fixed_time(),
        )
        .unwrap();
        assert_eq!(artifact.content_type, "text/plain");
        assert_eq!(artifact.data, b"body text");
    }

    #[test]
    fn test_export_document_dispatches_all_formats() {
        for format in [OutputFormat::Txt, OutputFormat::Pdf, OutputFormat::Docx] {
            let bytes = export_document("Title", "line one\n\nline two", format).unwrap();
            assert!(!bytes.is_empty(), "{format:?} export must produce bytes");
        }
    }
}
