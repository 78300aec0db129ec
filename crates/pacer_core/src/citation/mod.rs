use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::{ParsedCitation, SourceType};

static PAGE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)page\s*(\d+)").unwrap());
static SLIDE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)slide\s*(\d+)").unwrap());
// Trailing source indicator, e.g. "(LOCAL_UPLOAD)".
static SUFFIX_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\([^)]*\)\s*$").unwrap());

/// Phrases the pipeline emits in place of citations when the answer did not
/// draw on course materials. Matched case-insensitively as substrings.
const NO_CITATION_PHRASES: &[&str] = &[
    "no course materials",
    "no materials were retrieved",
    "general knowledge",
    "not from course materials",
];

fn capture_number(re: &Regex, part: &str) -> Option<u32> {
    re.captures(part)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Parse one raw citation line into a structured record.
///
/// Total function: malformed input degrades to `"Unknown Source"` with the
/// optional fields unset, it never fails.
///
/// Expected shape: `- <title>, <chapter or topic>, Page N (SOURCE)` with
/// every piece after the title optional.
pub fn parse_citation(raw: &str) -> ParsedCitation {
    let line = raw.trim();
    let line = line.strip_prefix("- ").unwrap_or(line);
    let line = SUFFIX_RE.replace(line, "");
    let parts: Vec<&str> = line.split(',').map(str::trim).collect();

    let document_title = match parts.first() {
        Some(p) if !p.is_empty() => (*p).to_string(),
        _ => "Unknown Source".to_string(),
    };
    let source_type = SourceType::infer(&document_title);

    // Everything after the title carries the location designators.
    let rest = parts.get(1..).unwrap_or(&[]);

    let page_number = rest.iter().find_map(|p| capture_number(&PAGE_RE, p));
    let slide_number = rest.iter().find_map(|p| capture_number(&SLIDE_RE, p));

    let chapter = rest
        .iter()
        .find(|p| p.to_lowercase().contains("chapter"))
        .map(|p| (*p).to_string())
        .or_else(|| {
            // No explicit chapter: treat part 1 as a topic label unless it is
            // itself the page or slide designator.
            rest.first()
                .filter(|p| !p.is_empty() && !PAGE_RE.is_match(p) && !SLIDE_RE.is_match(p))
                .map(|p| (*p).to_string())
        });

    ParsedCitation {
        document_title,
        chapter,
        page_number,
        slide_number,
        source_type,
    }
}

/// True when the citation list signals that no course materials were used:
/// either the list is empty or any entry carries a known sentinel phrase.
pub fn is_no_citation_message(citations: &[String]) -> bool {
    if citations.is_empty() {
        return true;
    }
    citations.iter().any(|c| {
        let lower = c.to_lowercase();
        NO_CITATION_PHRASES.iter().any(|p| lower.contains(p))
    })
}
