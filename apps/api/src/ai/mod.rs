//! AI narrative layer: prompt building, response repair, and fallbacks.
//!
//! Three analysis flavors (resume, general document, cover letter) share
//! one contract: whatever tier produced the result (live model output,
//! deterministic no-model fallback, or the generic error substitute), the
//! schema is identical and callers never branch on provenance. Model
//! unavailability and malformed responses are absorbed here, logged, and
//! never surfaced as request errors.

pub mod cover_letter;
pub mod document;
pub mod handlers;
pub mod prompts;
pub mod resume;

use serde::de::DeserializeOwned;

/// Truncates to at most `max` characters on a char boundary. Prompt bodies
/// are capped at 4000 chars and job descriptions at 1000 to bound prompt size.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from model output.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or_else(|| stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or_else(|| stripped.trim_start())
    } else {
        text
    }
}

/// Best-effort structured parse of a model response.
///
/// Locates the widest `{...}` span (first opening to last closing brace,
/// greedy across newlines) and runs a validating deserialize; if no span is
/// found the whole text is tried. `None` means the caller must substitute
/// its tier-3 error-shaped object.
pub fn parse_json_object<T: DeserializeOwned>(text: &str) -> Option<T> {
    let span = match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if start < end => &text[start..=end],
        _ => text,
    };
    serde_json::from_str(span).ok()
}
