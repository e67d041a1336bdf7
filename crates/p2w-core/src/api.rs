use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::blueprint::WorldBlueprint;
use crate::error::GenerationError;
use crate::world_type::WorldType;

/// A request to turn a text prompt into a world blueprint.
///
/// `world_type` is kept as the raw string the caller sent so that an unknown
/// name can be reported as a validation failure instead of a decode error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptRequest {
    /// Free-text description of the desired world.
    pub prompt: String,
    /// Optional explicit world type; inferred from the prompt when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub world_type: Option<String>,
    /// The user making the request.
    pub user_id: String,
}

impl PromptRequest {
    /// Create a request without an explicit world type.
    pub fn new(prompt: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            world_type: None,
            user_id: user_id.into(),
        }
    }

    /// Builder-style: request a specific world type.
    pub fn with_world_type(mut self, world_type: impl Into<String>) -> Self {
        self.world_type = Some(world_type.into());
        self
    }
}

/// Successful response envelope for a generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptResponse {
    /// Always true for this envelope.
    pub success: bool,
    /// The generated blueprint.
    pub world_blueprint: Option<WorldBlueprint>,
    /// Human-readable status message.
    pub message: String,
    /// Generation time, in whole milliseconds.
    pub processing_time_ms: u64,
}

impl From<WorldBlueprint> for PromptResponse {
    fn from(blueprint: WorldBlueprint) -> Self {
        Self {
            success: true,
            processing_time_ms: blueprint.processing_time_ms.unwrap_or_default(),
            world_blueprint: Some(blueprint),
            message: "World blueprint generated successfully".to_string(),
        }
    }
}

/// Error response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always false for errors.
    pub success: bool,
    /// Machine-readable error kind.
    pub error: String,
    /// Human-readable message.
    pub message: String,
    /// Additional structured details, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Map<String, Value>>,
}

impl From<&GenerationError> for ErrorResponse {
    fn from(err: &GenerationError) -> Self {
        let details = match err {
            GenerationError::EmptyPrompt => None,
            GenerationError::PromptTooLong { len, max } => Some(json!({
                "length": len,
                "max_length": max,
            })),
            GenerationError::UnknownWorldType(name) => {
                let allowed: Vec<&str> = WorldType::ALL.iter().map(|wt| wt.as_str()).collect();
                Some(json!({
                    "world_type": name,
                    "allowed": allowed,
                }))
            }
            GenerationError::DuplicateInstanceId(id) => Some(json!({
                "instance_id": id.0.to_string(),
            })),
            GenerationError::FieldLength { field, len, max } => Some(json!({
                "field": field,
                "length": len,
                "max_length": max,
            })),
            GenerationError::NonFiniteVector(location) => Some(json!({
                "location": location,
            })),
        };

        Self {
            success: false,
            error: err.kind().to_string(),
            message: format!("World generation failed: {err}"),
            details: details.and_then(|v| match v {
                Value::Object(map) => Some(map),
                _ => None,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefab::InstanceId;

    #[test]
    fn request_without_world_type_deserializes() {
        let req: PromptRequest =
            serde_json::from_str(r#"{"prompt": "a city", "user_id": "u1"}"#).unwrap();
        assert_eq!(req, PromptRequest::new("a city", "u1"));
    }

    #[test]
    fn request_keeps_raw_world_type() {
        let req: PromptRequest = serde_json::from_str(
            r#"{"prompt": "a city", "world_type": "steampunk", "user_id": "u1"}"#,
        )
        .unwrap();
        assert_eq!(req.world_type.as_deref(), Some("steampunk"));
    }

    #[test]
    fn response_carries_processing_time() {
        let mut bp = WorldBlueprint::new("p", WorldType::Urban, "P World", "d");
        bp.processing_time_ms = Some(3);
        let resp = PromptResponse::from(bp);
        assert!(resp.success);
        assert_eq!(resp.processing_time_ms, 3);
        assert!(resp.world_blueprint.is_some());
    }

    #[test]
    fn error_response_for_unknown_world_type() {
        let resp = ErrorResponse::from(&GenerationError::UnknownWorldType("steampunk".into()));
        assert!(!resp.success);
        assert_eq!(resp.error, "validation_error");
        let details = resp.details.unwrap();
        assert_eq!(details["world_type"], "steampunk");
        assert_eq!(details["allowed"].as_array().unwrap().len(), 8);
    }

    #[test]
    fn error_response_for_defect() {
        let resp = ErrorResponse::from(&GenerationError::DuplicateInstanceId(InstanceId::new()));
        assert_eq!(resp.error, "internal_invariant_violation");
        assert!(resp.details.unwrap().contains_key("instance_id"));
    }

    #[test]
    fn empty_prompt_has_no_details() {
        let resp = ErrorResponse::from(&GenerationError::EmptyPrompt);
        assert!(resp.details.is_none());
        let json = serde_json::to_value(&resp).unwrap();
        assert!(json.get("details").is_none());
    }
}
