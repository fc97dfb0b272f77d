use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Query parameters accepted by every `/v1/{entity_type}/` detector.
///
/// Field order is the order of the parameters in the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionQuery {
    pub message: String,
    pub entity_name: String,
    pub structured_value: String,
    pub bot_message: String,
    pub fallback_value: String,
}

/// Response body of a detector call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionEnvelope {
    /// `null` when nothing was detected
    pub data: Option<Vec<DetectedEntity>>,
}

/// Single entity found by a detector
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectedEntity {
    /// Normalized value, e.g. `{"value": "mcdonalds"}`
    pub entity_value: Value,
    /// Where the value came from: `message`, `structure_value_verified`,
    /// `structure_value_not_verified`, `fallback_value` or a model tag
    pub detection: String,
    /// Text span as it appeared in the input
    pub original_text: String,
    #[serde(default)]
    pub language: Option<String>,
}

impl DetectionEnvelope {
    /// Interpret an arbitrary response as a detection envelope.
    ///
    /// Returns `None` for payloads of any other shape.
    pub fn from_value(value: &Value) -> Option<Self> {
        // a missing `data` key would otherwise deserialize as `None`
        if !value.as_object()?.contains_key("data") {
            return None;
        }
        serde_json::from_value(value.clone()).ok()
    }

    pub fn detected_count(&self) -> usize {
        self.data.as_ref().map(Vec::len).unwrap_or(0)
    }
}
