//! Word-processor export: title heading plus one paragraph per source line.

use std::io::Cursor;

use docx_rs::{Docx, Paragraph, Run};

use super::ExportError;

/// Title run size in half-points (32 half-points = 16pt).
const TITLE_SIZE_HALF_PT: usize = 32;

/// Renders the title as a bold heading paragraph followed by one paragraph
/// per line of body text. Blank source lines become empty paragraphs so the
/// document keeps the original vertical spacing.
pub fn to_docx_bytes(title: &str, body: &str) -> Result<Vec<u8>, ExportError> {
    let mut document = Docx::new().add_paragraph(
        Paragraph::new().add_run(Run::new().add_text(title).bold().size(TITLE_SIZE_HALF_PT)),
    );

    for line in body.lines() {
        let paragraph = if line.trim().is_empty() {
            Paragraph::new()
        } else {
            Paragraph::new().add_run(Run::new().add_text(line))
        };
        document = document.add_paragraph(paragraph);
    }

    let mut buffer = Cursor::new(Vec::new());
    document
        .build()
        .pack(&mut buffer)
        .map_err(|e| ExportError::Docx(e.to_string()))?;
    Ok(buffer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_docx_bytes_are_a_zip_container() {
        let bytes = to_docx_bytes("Jane Doe — Resume", "line one\nline two").unwrap();
        // OOXML documents are zip archives
        assert!(bytes.starts_with(b"PK"), "output must be a zip container");
    }

    #[test]
    fn test_empty_title_and_blank_lines_succeed() {
        let bytes = to_docx_bytes("", "first\n\n\nlast").unwrap();
        assert!(!bytes.is_empty());
    }

    #[test]
    fn test_multibyte_body_succeeds() {
        let bytes = to_docx_bytes("Résumé", "Zoë Müller — 東京").unwrap();
        assert!(!bytes.is_empty());
    }

    #[test]
    fn test_empty_body_still_produces_document() {
        let bytes = to_docx_bytes("Cover Letter", "").unwrap();
        assert!(bytes.starts_with(b"PK"));
    }
}
