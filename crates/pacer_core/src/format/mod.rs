use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::RetrievedMaterial;

pub const DEFAULT_TRUNCATE_LEN: usize = 150;

const MIN_QUOTE_CHARS: usize = 20;

// Lecture slide decks are uploaded as "<number>-<Topic_Name>.<ext>".
static LECTURE_FILE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)-([^.]+)").unwrap());

// Content that leaked out of the pipeline un-deserialized looks like raw
// JSON; never show it as a quote.
const RAW_JSON_MARKERS: &[&str] = &["\"pageContent\"", "\"metadata\"", "\"source\":", "\"has_ocr\""];

/// Render a similarity score as a whole percentage, e.g. `0.873` -> `"87%"`.
pub fn format_similarity(similarity: Option<f64>) -> Option<String> {
    similarity.map(|s| format!("{}%", (s * 100.0).round() as i64))
}

/// Truncate to `max_len` characters plus an ellipsis. Counted in characters,
/// not bytes, so multi-byte excerpts are never split mid-character.
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_len).collect();
    out.push('…');
    out
}

/// The displayable excerpt of a material: `excerpt` when non-empty, else
/// `content`, else `""`. Normalizes the two historical field names.
pub fn material_content(material: &RetrievedMaterial) -> &str {
    material
        .excerpt
        .as_deref()
        .filter(|s| !s.is_empty())
        .or_else(|| material.content.as_deref().filter(|s| !s.is_empty()))
        .unwrap_or("")
}

/// Whether an excerpt is worth quoting: long enough and not raw JSON.
pub fn is_valid_quote(content: &str) -> bool {
    let t = content.trim();
    if t.chars().count() < MIN_QUOTE_CHARS {
        return false;
    }
    if t.starts_with('{') || t.starts_with('[') {
        return false;
    }
    !RAW_JSON_MARKERS.iter().any(|m| t.contains(m))
}

fn is_generic_title(title: &str) -> bool {
    let t = title.trim().to_lowercase();
    t.is_empty()
        || t == "unknown source"
        || t == "course material"
        || t == "course materials"
        || t == "lecture"
        || t == "lecture slides"
}

/// Display name for a source. Generic placeholder titles are replaced by
/// `"Lecture N: Topic"` derived from the material's upload filename when one
/// is available; titles mentioning "textbook" collapse to `"Textbook"`.
pub fn format_lecture_name(doc_title: &str, material: Option<&RetrievedMaterial>) -> String {
    if is_generic_title(doc_title) {
        if let Some(url) = material.and_then(|m| m.source_url.as_deref()) {
            if let Some(caps) = LECTURE_FILE_RE.captures(url) {
                let topic = caps[2].replace('_', " ");
                return format!("Lecture {}: {}", &caps[1], topic.trim());
            }
        }
        return doc_title.to_string();
    }
    if doc_title.to_lowercase().contains("textbook") {
        return "Textbook".to_string();
    }
    doc_title.to_string()
}
