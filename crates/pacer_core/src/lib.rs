pub mod citation;
pub mod domain;
pub mod error;
pub mod format;
pub mod matching;
pub mod response;
pub mod section;

#[cfg(test)]
mod tests {
    use super::citation::parse_citation;
    use super::domain::SourceType;
    use super::error::AppError;

    #[test]
    fn app_error_is_structured() {
        let err = AppError::new("RESPONSE_DECODE_FAILED", "decode failed").with_details("eof");
        assert_eq!(err.code, "RESPONSE_DECODE_FAILED");
        assert_eq!(err.message, "decode failed");
        assert_eq!(err.details.as_deref(), Some("eof"));
    }

    #[test]
    fn parse_citation_never_fails() {
        let parsed = parse_citation("");
        assert_eq!(parsed.document_title, "Unknown Source");
        assert_eq!(parsed.source_type, SourceType::Unknown);
        assert_eq!(parsed.chapter, None);
        assert_eq!(parsed.page_number, None);
        assert_eq!(parsed.slide_number, None);
    }
}
