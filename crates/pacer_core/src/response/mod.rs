use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{RetrievedMaterial, ValidationWarning};
use crate::error::AppError;

// Payload exactly as the workflow webhook returns it; every field may be
// missing and the arrays may carry entries of the wrong shape.
#[derive(Debug, Deserialize)]
struct RawChatResponse {
    #[serde(default)]
    answer: Option<String>,
    #[serde(default)]
    citations: Option<Vec<Value>>,
    #[serde(default, alias = "retrievedMaterials")]
    retrieved_materials: Option<Vec<Value>>,
}

/// One chat turn's worth of pipeline output, cleaned up for display logic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatResponse {
    pub answer: String,
    pub citations: Vec<String>,
    pub retrieved_materials: Vec<RetrievedMaterial>,
}

/// Decode the upstream chat payload.
///
/// Undecodable JSON is the only hard error. Within a decodable payload,
/// non-string citation entries and undecodable material entries are dropped
/// and surfaced as warnings so the caller can display the rest.
pub fn decode_chat_response(
    json: &str,
) -> Result<(ChatResponse, Vec<ValidationWarning>), AppError> {
    let raw: RawChatResponse = serde_json::from_str(json).map_err(|e| {
        AppError::new(
            "RESPONSE_DECODE_FAILED",
            "Failed to decode chat response payload",
        )
        .with_details(e.to_string())
    })?;

    let mut warnings: Vec<ValidationWarning> = Vec::new();

    let mut citations: Vec<String> = Vec::new();
    for (i, entry) in raw.citations.unwrap_or_default().into_iter().enumerate() {
        match entry {
            Value::String(s) => citations.push(s),
            other => warnings.push(
                ValidationWarning::new(
                    "RESPONSE_CITATION_NOT_STRING",
                    "Dropped non-string citation entry",
                )
                .with_details(format!("index={i}; value={other}")),
            ),
        }
    }

    let mut retrieved_materials: Vec<RetrievedMaterial> = Vec::new();
    for (i, entry) in raw
        .retrieved_materials
        .unwrap_or_default()
        .into_iter()
        .enumerate()
    {
        match serde_json::from_value::<RetrievedMaterial>(entry) {
            Ok(m) => retrieved_materials.push(m),
            Err(e) => warnings.push(
                ValidationWarning::new(
                    "RESPONSE_MATERIAL_INVALID",
                    "Dropped undecodable retrieved material",
                )
                .with_details(format!("index={i}; err={e}")),
            ),
        }
    }

    Ok((
        ChatResponse {
            answer: raw.answer.unwrap_or_default(),
            citations,
            retrieved_materials,
        },
        warnings,
    ))
}
