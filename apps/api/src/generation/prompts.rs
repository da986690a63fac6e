// Prompt constants for the Generation module.
// The section delimiters double as the parsing contract in `splitter.rs`.

/// Literal line preceding the resume block in the completion output.
pub const RESUME_MARKER: &str = "---RESUME---";

/// Literal line preceding the cover-letter block in the completion output.
pub const COVER_LETTER_MARKER: &str = "---COVER LETTER---";

/// Fixed system instruction sent with every generation call.
pub const GENERATION_SYSTEM: &str = "You are a professional resume writer.";

/// Generation prompt template.
/// Replace: {name}, {target_role}, {location}, {email}, {experience},
///          {education}, {skills}, {tone}, {extra_notes}
///
/// The one-vs-two-page length rule is instruction text only; generated
/// output is never measured against it.
pub const GENERATION_PROMPT_TEMPLATE: &str = r#"You are an expert resume writer and career coach. Produce TWO blocks separated with exact tags:
---RESUME---
Format a concise, ATS-friendly resume in plain text (use bullets). Start with Name and Target Title, contact line (email/location if provided), then a 2-3 line Professional Summary tailored to the target role. Then Key Skills (comma/short list). Then Work Experience (reverse chronological: Company — Title — Dates, 3-6 bullets each focusing on achievements and metrics). Then Education. Keep it one page for <10 years experience, two pages max otherwise. Use strong action verbs and metrics when possible.

---COVER LETTER---
Write a cover letter tailored to the role (3 short paragraphs): 1) Open referencing the role and why they're excited, 2) Connect 1-2 concrete achievements/skills to the role, 3) Closing with enthusiasm and call-to-action. Keep professional and concise.

User info:
Name: {name}
Target role: {target_role}
Location: {location}
Email: {email}
Experience (raw text): {experience}
Education: {education}
Skills: {skills}
Tone: {tone}
Extra notes: {extra_notes}

IMPORTANT: Put literal tags ---RESUME--- and ---COVER LETTER--- before each block. Output only these two blocks and nothing else."#;
