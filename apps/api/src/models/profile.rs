//! Submission data model: one fully-enumerated career record per form submission.
//!
//! Missing-vs-empty is explicit here: optional fields are `Option<String>`,
//! free-text fields default to empty strings. A profile is constructed once
//! per submission, never mutated, and never persisted.

use serde::{Deserialize, Serialize};

/// Display value substituted for a blank candidate name.
pub const NAME_PLACEHOLDER: &str = "Candidate Name";
/// Display value substituted for a blank target role.
pub const ROLE_PLACEHOLDER: &str = "Target Role";
/// Filename stem used when the candidate name is blank.
const BASENAME_FALLBACK: &str = "candidate";

/// Requested writing tone for the generated documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Professional,
    Friendly,
    Confident,
    Concise,
}

impl Tone {
    /// The tone label as it is interpolated into the prompt.
    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Friendly => "friendly",
            Tone::Confident => "confident",
            Tone::Concise => "concise",
        }
    }
}

/// Download format for the exported documents. Exactly one per submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Txt,
    Pdf,
    Docx,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Txt => "txt",
            OutputFormat::Pdf => "pdf",
            OutputFormat::Docx => "docx",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            OutputFormat::Txt => "text/plain",
            OutputFormat::Pdf => "application/pdf",
            OutputFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }
}

/// One submission's career details, exactly as entered in the form shell.
/// All fields are plain text; the only normalization is the placeholder
/// substitution for blank required fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub target_role: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub extra_notes: Option<String>,
    #[serde(default)]
    pub tone: Tone,
}

impl CandidateProfile {
    /// Candidate name as shown in prompts and document titles.
    /// Blank or whitespace-only input resolves to a placeholder, never an
    /// empty label.
    pub fn display_name(&self) -> &str {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            NAME_PLACEHOLDER
        } else {
            trimmed
        }
    }

    /// Target role as shown in the prompt, with the same placeholder rule.
    pub fn display_role(&self) -> &str {
        let trimmed = self.target_role.trim();
        if trimmed.is_empty() {
            ROLE_PLACEHOLDER
        } else {
            trimmed
        }
    }

    /// Filename stem for exported artifacts: the candidate name with spaces
    /// replaced by underscores, or a fixed fallback when blank.
    pub fn file_basename(&self) -> String {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            BASENAME_FALLBACK.to_string()
        } else {
            trimmed.replace(' ', "_")
        }
    }
}
