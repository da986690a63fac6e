//! Response splitting: carves the raw completion text into the resume and
//! cover-letter sections.
//!
//! The primary path relies on the two literal delimiter lines the prompt
//! requests. When either is missing or they arrive out of order, a positional
//! fallback assigns the first 40 lines to the resume. That is best-effort
//! degradation, not a correctness guarantee; section content is never
//! validated. Garbage in, garbage out is accepted behavior.

use tracing::warn;

use crate::generation::prompts::{COVER_LETTER_MARKER, RESUME_MARKER};

/// Lines assigned to the resume section when the delimiters are unusable.
const FALLBACK_RESUME_LINES: usize = 40;

/// The two derived text sections of one completion. Either may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentPair {
    pub resume_text: String,
    pub cover_letter_text: String,
}

/// Splits raw completion text into a `DocumentPair`.
///
/// Delimiter path: the resume is the text strictly between the end of the
/// resume marker and the start of the cover-letter marker; the cover letter
/// is everything after the end of the cover-letter marker. Both trimmed.
///
/// Pure string processing: identical input always yields identical output.
pub fn split_response(raw: &str) -> DocumentPair {
    if let (Some(resume_at), Some(cover_at)) =
        (raw.find(RESUME_MARKER), raw.find(COVER_LETTER_MARKER))
    {
        let resume_end = resume_at + RESUME_MARKER.len();
        if resume_end <= cover_at {
            return DocumentPair {
                resume_text: raw[resume_end..cover_at].trim().to_string(),
                cover_letter_text: raw[cover_at + COVER_LETTER_MARKER.len()..]
                    .trim()
                    .to_string(),
            };
        }
    }

    warn!("completion is missing section delimiters; falling back to positional split");
    let lines: Vec<&str> = raw.lines().collect();
    let boundary = lines.len().min(FALLBACK_RESUME_LINES);
    DocumentPair {
        resume_text: lines[..boundary].join("\n"),
        cover_letter_text: lines[boundary..].join("\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delimiter_split_round_trip() {
        let raw = "---RESUME---\nA\n---COVER LETTER---\nB";
        let pair = split_response(raw);
        assert_eq!(pair.resume_text, "A");
        assert_eq!(pair.cover_letter_text, "B");
    }

    #[test]
    fn test_delimiter_split_trims_sections() {
        let raw = "preamble ---RESUME---\n\n  resume body  \n\n---COVER LETTER---\n\n  Dear Hiring Manager,  \n";
        let pair = split_response(raw);
        assert_eq!(pair.resume_text, "resume body");
        assert_eq!(pair.cover_letter_text, "Dear Hiring Manager,");
    }

    #[test]
    fn test_fallback_split_at_line_40() {
        let lines: Vec<String> = (1..=50).map(|i| format!("line {i}")).collect();
        let raw = lines.join("\n");
        let pair = split_response(&raw);
        assert_eq!(pair.resume_text, lines[..40].join("\n"));
        assert_eq!(pair.cover_letter_text, lines[40..].join("\n"));
    }

    #[test]
    fn test_fallback_with_fewer_than_40_lines() {
        let raw = "only\nthree\nlines";
        let pair = split_response(raw);
        assert_eq!(pair.resume_text, raw);
        assert_eq!(pair.cover_letter_text, "");
    }

    #[test]
    fn test_missing_cover_marker_triggers_fallback() {
        let raw = "---RESUME---\nsome resume text";
        let pair = split_response(raw);
        // No delimiter split: the marker line itself lands in the resume section
        assert!(pair.resume_text.contains("some resume text"));
        assert_eq!(pair.cover_letter_text, "");
    }

    #[test]
    fn test_out_of_order_markers_trigger_fallback() {
        let raw = "---COVER LETTER---\nB\n---RESUME---\nA";
        let pair = split_response(raw);
        assert!(pair.resume_text.starts_with("---COVER LETTER---"));
    }

    #[test]
    fn test_empty_input_yields_empty_pair() {
        let pair = split_response("");
        assert_eq!(pair.resume_text, "");
        assert_eq!(pair.cover_letter_text, "");
    }

    #[test]
    fn test_split_is_deterministic() {
        let raw = "no markers here\njust text";
        assert_eq!(split_response(raw), split_response(raw));
    }
}
