//! Prompt rendering: turns a CandidateProfile into the single instruction string.

use crate::generation::prompts::GENERATION_PROMPT_TEMPLATE;
use crate::models::profile::CandidateProfile;

/// Renders the generation prompt for one submission.
///
/// Pure transformation: the same profile always yields a byte-identical
/// string. Blank required fields resolve to placeholder display values;
/// absent optional fields interpolate as empty strings so the model always
/// sees the complete labeled template. Never fails.
pub fn build_prompt(profile: &CandidateProfile) -> String {
    GENERATION_PROMPT_TEMPLATE
        .replace("{name}", profile.display_name())
        .replace("{target_role}", profile.display_role())
        .replace(
            "{location}",
            profile.location.as_deref().unwrap_or("").trim(),
        )
        .replace("{email}", profile.email.as_deref().unwrap_or("").trim())
        .replace("{experience}", profile.experience.trim())
        .replace("{education}", profile.education.trim())
        .replace("{skills}", profile.skills.trim())
        .replace("{tone}", profile.tone.as_str())
        .replace(
            "{extra_notes}",
            profile.extra_notes.as_deref().unwrap_or("").trim(),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::prompts::{COVER_LETTER_MARKER, RESUME_MARKER};
    use crate::models::profile::{Tone, NAME_PLACEHOLDER, ROLE_PLACEHOLDER};

    fn sample_profile() -> CandidateProfile {
        CandidateProfile {
            name: "Jane Doe".to_string(),
            target_role: "Data Analyst".to_string(),
            email: Some("jane@example.com".to_string()),
            location: None,
            experience: "3 years at Acme Corp".to_string(),
            education: "BSc Statistics".to_string(),
            skills: "SQL, Python".to_string(),
            extra_notes: None,
            tone: Tone::Confident,
        }
    }

    #[test]
    fn test_build_prompt_is_deterministic() {
        let profile = sample_profile();
        assert_eq!(build_prompt(&profile), build_prompt(&profile));
    }

    #[test]
    fn test_prompt_contains_both_markers_in_order() {
        let prompt = build_prompt(&sample_profile());
        let resume_at = prompt.find(RESUME_MARKER).expect("resume marker");
        let cover_at = prompt.find(COVER_LETTER_MARKER).expect("cover marker");
        assert!(resume_at < cover_at, "resume block must come first");
    }

    #[test]
    fn test_prompt_interpolates_every_field() {
        let prompt = build_prompt(&sample_profile());
        assert!(prompt.contains("Name: Jane Doe"));
        assert!(prompt.contains("Target role: Data Analyst"));
        assert!(prompt.contains("Email: jane@example.com"));
        assert!(prompt.contains("Skills: SQL, Python"));
        assert!(prompt.contains("Tone: confident"));
        assert!(!prompt.contains('{'), "no placeholder may survive rendering");
    }

    #[test]
    fn test_blank_required_fields_use_placeholders() {
        let profile: CandidateProfile = serde_json::from_str("{}").unwrap();
        let prompt = build_prompt(&profile);
        assert!(prompt.contains(&format!("Name: {NAME_PLACEHOLDER}")));
        assert!(prompt.contains(&format!("Target role: {ROLE_PLACEHOLDER}")));
    }

    #[test]
    fn test_absent_optional_fields_keep_empty_labels() {
        let prompt = build_prompt(&sample_profile());
        // location is None: the label stays, the value is empty
        assert!(prompt.contains("Location: \n"));
        assert!(prompt.contains("Extra notes: "));
    }
}
