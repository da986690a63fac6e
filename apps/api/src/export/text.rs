//! Plain-text export: identity passthrough.

/// Returns the body bytes unchanged. For this format the title only ever
/// appears in the filename.
pub fn to_text_bytes(body: &str) -> Vec<u8> {
    body.as_bytes().to_vec()
}
