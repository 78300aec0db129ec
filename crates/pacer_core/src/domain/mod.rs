use serde::{Deserialize, Serialize};

/// Coarse source classification inferred from a document title.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    Textbook,
    Lecture,
    Unknown,
}

impl SourceType {
    /// Always computed from the title, never stored independently.
    pub fn infer(title: &str) -> Self {
        let t = title.to_lowercase();
        if t.contains("textbook") {
            SourceType::Textbook
        } else if t.contains("lecture") {
            SourceType::Lecture
        } else {
            SourceType::Unknown
        }
    }
}

/// Structured citation derived from one raw citation line.
///
/// `page_number` and `slide_number` are independently optional on purpose:
/// the upstream pipeline never promises that at most one is set, and the
/// dedupe key uses both positions as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParsedCitation {
    pub document_title: String,
    pub chapter: Option<String>,
    pub page_number: Option<u32>,
    pub slide_number: Option<u32>,
    pub source_type: SourceType,
}

/// One retrieved document excerpt supplied alongside the citations of a chat
/// turn. Field names follow the upstream payload; `excerpt` and `content`
/// are two historical spellings of the same field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RetrievedMaterial {
    #[serde(default)]
    pub document_title: Option<String>,
    #[serde(default)]
    pub chapter: Option<String>,
    #[serde(default)]
    pub page_number: Option<u32>,
    #[serde(default)]
    pub slide_number: Option<u32>,
    #[serde(default)]
    pub similarity: Option<f64>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
}

/// Display unit: a parsed citation, optionally backed by its supporting
/// excerpt from the same response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CitationCard {
    pub citation: ParsedCitation,
    pub material: Option<RetrievedMaterial>,
}

/// Recoverable anomaly surfaced to the caller instead of being logged or
/// turned into an error. Mirrors the error shape minus severity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationWarning {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
}

impl ValidationWarning {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}
