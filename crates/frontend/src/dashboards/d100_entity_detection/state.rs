//! Form and output state of the entity detection dashboard
//!
//! All state is held in plain values. The component keeps one of each in a
//! signal and swaps in a new value on every interaction.

use super::api::DetectionError;
use crate::shared::json_highlight::{pretty_json, syntax_highlight};
use contracts::dashboards::d100_entity_detection::{DetectionEnvelope, DetectionQuery};
use contracts::enums::entity_type::path_segment;
use contracts::enums::{EntityType, TextEntityName};
use serde_json::Value;

/// The only text a user ever sees for a failed request
pub const ERROR_MESSAGE: &str = "Oops! Something went wrong, please check your input data";

pub const ENTITY_TYPE_PLACEHOLDER: &str = "Entity Type";
pub const ENTITY_NAME_PLACEHOLDER: &str = "Entity Name";

/// Which entity-name control is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityNameMode {
    /// No entity type picked yet
    Hidden,
    /// Fixed list of dictionary names
    Dropdown,
    FreeText,
}

/// Plain text fields of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    EntityNameInput,
    StructuredValue,
    BotMessage,
    Message,
    FallbackValue,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    /// Label picked in the type dropdown
    pub entity_type: Option<String>,
    /// Label picked in the entity-name dropdown
    pub entity_name: Option<String>,
    /// Text typed into the free-text entity-name input
    pub entity_name_input: String,
    pub structured_value: String,
    pub bot_message: String,
    pub message: String,
    pub fallback_value: String,
}

/// Everything needed to issue one detector call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectionRequest {
    pub path_segment: String,
    pub query: DetectionQuery,
}

impl FormState {
    /// Pick an entity type. The entity-name control is rebuilt from scratch,
    /// so any previous name selection or typed text is dropped.
    pub fn select_entity_type(&self, label: &str) -> Self {
        Self {
            entity_type: Some(label.to_string()),
            entity_name: None,
            entity_name_input: String::new(),
            ..self.clone()
        }
    }

    /// Pick an item of the entity-name dropdown. No-op unless the dropdown
    /// is the visible control.
    pub fn select_entity_name(&self, label: &str) -> Self {
        if self.name_mode() != EntityNameMode::Dropdown {
            return self.clone();
        }
        Self {
            entity_name: Some(label.to_string()),
            ..self.clone()
        }
    }

    pub fn with_field(&self, field: FormField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let value = value.into();
        match field {
            FormField::EntityNameInput => next.entity_name_input = value,
            FormField::StructuredValue => next.structured_value = value,
            FormField::BotMessage => next.bot_message = value,
            FormField::Message => next.message = value,
            FormField::FallbackValue => next.fallback_value = value,
        }
        next
    }

    pub fn field(&self, field: FormField) -> String {
        match field {
            FormField::EntityNameInput => self.entity_name_input.clone(),
            FormField::StructuredValue => self.structured_value.clone(),
            FormField::BotMessage => self.bot_message.clone(),
            FormField::Message => self.message.clone(),
            FormField::FallbackValue => self.fallback_value.clone(),
        }
    }

    pub fn name_mode(&self) -> EntityNameMode {
        match self.entity_type.as_deref() {
            None => EntityNameMode::Hidden,
            Some(label) => match EntityType::from_label(label) {
                Some(t) if t.uses_dictionary_names() => EntityNameMode::Dropdown,
                _ => EntityNameMode::FreeText,
            },
        }
    }

    pub fn entity_type_label(&self) -> String {
        self.entity_type
            .clone()
            .unwrap_or_else(|| ENTITY_TYPE_PLACEHOLDER.to_string())
    }

    pub fn entity_name_label(&self) -> String {
        self.entity_name
            .clone()
            .unwrap_or_else(|| ENTITY_NAME_PLACEHOLDER.to_string())
    }

    /// Items of the entity-name dropdown, empty in the other modes
    pub fn name_options(&self) -> Vec<String> {
        match self.name_mode() {
            EntityNameMode::Dropdown => TextEntityName::all()
                .iter()
                .map(|n| n.label().to_string())
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Normalize the form into a detector call.
    ///
    /// The free-text entity name is used only when no dropdown item is
    /// picked. With neither, `entity_name` goes out empty.
    pub fn to_request(&self) -> DetectionRequest {
        let entity_type = self.entity_type.as_deref().unwrap_or_default();
        let entity_name = self
            .entity_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(self.entity_name_input.as_str());

        DetectionRequest {
            path_segment: path_segment(entity_type),
            query: DetectionQuery {
                message: self.message.trim().to_string(),
                entity_name: entity_name.trim().to_lowercase(),
                structured_value: self.structured_value.trim().to_string(),
                bot_message: self.bot_message.trim().to_string(),
                fallback_value: self.fallback_value.trim().to_string(),
            },
        }
    }
}

/// Hands out request tokens; only the newest token may render.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_latest(&self, token: u64) -> bool {
        token == self.latest
    }
}

/// Content of the output region
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputView {
    #[default]
    Empty,
    Rendered {
        /// Pretty JSON as received
        raw: String,
        /// Escaped and highlighted markup of `raw`
        html: String,
        /// Entity count when the body is a detection envelope
        detected: Option<usize>,
    },
    Failed,
}

impl OutputView {
    pub fn from_result(result: Result<Value, DetectionError>) -> Self {
        match result {
            Ok(value) => Self::rendered(&value),
            Err(err) => {
                log::warn!("Entity detection failed: {}", err);
                OutputView::Failed
            }
        }
    }

    pub fn rendered(value: &Value) -> Self {
        match pretty_json(value) {
            Ok(raw) => OutputView::Rendered {
                html: syntax_highlight(&raw),
                detected: DetectionEnvelope::from_value(value).map(|e| e.detected_count()),
                raw,
            },
            Err(err) => {
                log::warn!("Failed to serialize detection response: {}", err);
                OutputView::Failed
            }
        }
    }

    /// Markup for the output region
    pub fn html(&self) -> String {
        match self {
            OutputView::Empty => String::new(),
            OutputView::Rendered { html, .. } => html.clone(),
            OutputView::Failed => ERROR_MESSAGE.to_string(),
        }
    }

    pub fn raw(&self) -> Option<String> {
        match self {
            OutputView::Rendered { raw, .. } => Some(raw.clone()),
            _ => None,
        }
    }

    pub fn detected_note(&self) -> Option<String> {
        match self {
            OutputView::Rendered {
                detected: Some(count),
                ..
            } => Some(format!("Detected: {}", count)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_initial_state_hides_entity_name() {
        let form = FormState::default();
        assert_eq!(form.name_mode(), EntityNameMode::Hidden);
        assert_eq!(form.entity_type_label(), ENTITY_TYPE_PLACEHOLDER);
        assert!(form.name_options().is_empty());
    }

    #[test]
    fn test_text_type_shows_dictionary_dropdown() {
        let form = FormState::default().select_entity_type("Text");
        assert_eq!(form.name_mode(), EntityNameMode::Dropdown);
        assert_eq!(form.entity_type_label(), "Text");
        assert_eq!(form.entity_name_label(), ENTITY_NAME_PLACEHOLDER);
        assert_eq!(
            form.name_options(),
            vec!["Brand", "Clothes", "Cuisine", "Dish", "Footwear", "Movie", "Restaurant"]
        );
    }

    #[test]
    fn test_other_types_show_free_text() {
        for entity_type in EntityType::all() {
            if entity_type == EntityType::Text {
                continue;
            }
            let form = FormState::default().select_entity_type(entity_type.label());
            assert_eq!(form.name_mode(), EntityNameMode::FreeText, "{:?}", entity_type);
            assert!(form.name_options().is_empty());
        }
    }

    #[test]
    fn test_mode_follows_latest_type() {
        let form = FormState::default()
            .select_entity_type("Text")
            .select_entity_type("City");
        assert_eq!(form.name_mode(), EntityNameMode::FreeText);
        let form = form.select_entity_type("Text");
        assert_eq!(form.name_mode(), EntityNameMode::Dropdown);
    }

    #[test]
    fn test_type_change_resets_entity_name_control() {
        let form = FormState::default()
            .select_entity_type("Text")
            .select_entity_name("Dish")
            .select_entity_type("Text");
        assert_eq!(form.entity_name, None);

        let form = FormState::default()
            .select_entity_type("Date")
            .with_field(FormField::EntityNameInput, "arrival_date")
            .select_entity_type("Time");
        assert_eq!(form.entity_name_input, "");
    }

    #[test]
    fn test_name_selection_touches_only_its_label() {
        let before = FormState::default()
            .select_entity_type("Text")
            .with_field(FormField::Message, "hi")
            .with_field(FormField::BotMessage, "which brand?");
        let after = before.select_entity_name("Footwear");

        assert_eq!(after.entity_name_label(), "Footwear");
        assert_eq!(after.entity_type_label(), before.entity_type_label());
        assert_eq!(after.message, before.message);
        assert_eq!(after.bot_message, before.bot_message);
        assert_eq!(after.entity_name_input, before.entity_name_input);
    }

    #[test]
    fn test_name_selection_ignored_without_dropdown() {
        let form = FormState::default().select_entity_type("Email");
        assert_eq!(form.select_entity_name("Brand"), form);
    }

    #[test]
    fn test_request_normalization() {
        let form = FormState::default()
            .select_entity_type("Text ")
            .with_field(FormField::EntityNameInput, " Brand")
            .with_field(FormField::Message, "  I want Nike shoes ")
            .with_field(FormField::StructuredValue, " Nike ")
            .with_field(FormField::BotMessage, " Which brand? ")
            .with_field(FormField::FallbackValue, " Adidas ");

        let request = form.to_request();
        assert_eq!(request.path_segment, "text");
        assert_eq!(request.query.entity_name, "brand");
        assert_eq!(request.query.message, "I want Nike shoes");
        assert_eq!(request.query.structured_value, "Nike");
        assert_eq!(request.query.bot_message, "Which brand?");
        assert_eq!(request.query.fallback_value, "Adidas");
    }

    #[test]
    fn test_request_from_dropdown_name() {
        let request = FormState::default()
            .select_entity_type("Text")
            .select_entity_name("Restaurant")
            .to_request();
        assert_eq!(request.path_segment, "text");
        assert_eq!(request.query.entity_name, "restaurant");
    }

    #[test]
    fn test_request_type_with_spaces() {
        let request = FormState::default()
            .select_entity_type("Passenger Count")
            .with_field(FormField::EntityNameInput, "Passengers")
            .to_request();
        assert_eq!(request.path_segment, "passenger_count");
        assert_eq!(request.query.entity_name, "passengers");
    }

    #[test]
    fn test_request_without_any_entity_name() {
        let request = FormState::default().select_entity_type("Text").to_request();
        assert_eq!(request.query.entity_name, "");
    }

    #[test]
    fn test_request_sequence_only_latest_renders() {
        let mut sequence = RequestSequence::default();
        let first = sequence.issue();
        let second = sequence.issue();
        assert!(second > first);
        assert!(!sequence.is_latest(first));
        assert!(sequence.is_latest(second));
    }

    #[test]
    fn test_success_output_is_highlighted() {
        let view = OutputView::from_result(Ok(json!({"a": 1, "b": "x"})));
        let html = view.html();
        assert!(html.contains("<span class=\"key\">\"a\":</span>"));
        assert!(html.contains("<span class=\"number\">1</span>"));
        assert!(html.contains("<span class=\"key\">\"b\":</span>"));
        assert!(html.contains("<span class=\"string\">\"x\"</span>"));
        assert_eq!(view.raw().as_deref(), Some("{\n    \"a\": 1,\n    \"b\": \"x\"\n}"));
        assert_eq!(view.detected_note(), None);
    }

    #[test]
    fn test_failure_replaces_output_with_fixed_message() {
        let view = OutputView::from_result(Err(DetectionError::Status(500)));
        assert_eq!(view, OutputView::Failed);
        assert_eq!(view.html(), ERROR_MESSAGE);
        assert_eq!(view.raw(), None);

        let view = OutputView::from_result(Err(DetectionError::Decode("eof".into())));
        assert_eq!(view.html(), ERROR_MESSAGE);
    }

    #[test]
    fn test_detection_envelope_note() {
        let view = OutputView::rendered(&json!({
            "data": [{
                "entity_value": {"value": "nike"},
                "detection": "message",
                "original_text": "nike",
                "language": "en"
            }]
        }));
        assert_eq!(view.detected_note().as_deref(), Some("Detected: 1"));
    }
}
