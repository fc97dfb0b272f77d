use serde::{Deserialize, Serialize};

/// Detector endpoints exposed under the v1 API of the NER service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityType {
    Text,
    Location,
    PhoneNumber,
    Email,
    City,
    Pnr,
    ShoppingSize,
    PassengerCount,
    Number,
    Time,
    TimeWithRange,
    Date,
    Budget,
    PersonName,
    Regex,
}

impl EntityType {
    /// Menu label shown in the type dropdown
    pub fn label(&self) -> &'static str {
        match self {
            EntityType::Text => "Text",
            EntityType::Location => "Location",
            EntityType::PhoneNumber => "Phone Number",
            EntityType::Email => "Email",
            EntityType::City => "City",
            EntityType::Pnr => "PNR",
            EntityType::ShoppingSize => "Shopping Size",
            EntityType::PassengerCount => "Passenger Count",
            EntityType::Number => "Number",
            EntityType::Time => "Time",
            EntityType::TimeWithRange => "Time With Range",
            EntityType::Date => "Date",
            EntityType::Budget => "Budget",
            EntityType::PersonName => "Person Name",
            EntityType::Regex => "Regex",
        }
    }

    /// All entity types in menu order
    pub fn all() -> Vec<EntityType> {
        vec![
            EntityType::Text,
            EntityType::Location,
            EntityType::PhoneNumber,
            EntityType::Email,
            EntityType::City,
            EntityType::Pnr,
            EntityType::ShoppingSize,
            EntityType::PassengerCount,
            EntityType::Number,
            EntityType::Time,
            EntityType::TimeWithRange,
            EntityType::Date,
            EntityType::Budget,
            EntityType::PersonName,
            EntityType::Regex,
        ]
    }

    /// Exact label match, as produced by the menu
    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().into_iter().find(|t| t.label() == label)
    }

    /// URL path segment of the detector, e.g. `phone_number`
    pub fn path_segment(&self) -> String {
        path_segment(self.label())
    }

    /// Whether the entity name is picked from a fixed dictionary list
    pub fn uses_dictionary_names(&self) -> bool {
        matches!(self, EntityType::Text)
    }
}

/// Normalize a free-form type label into a URL path segment:
/// trimmed, lower-cased, every space replaced with `_`.
pub fn path_segment(label: &str) -> String {
    label.trim().to_lowercase().replace(' ', "_")
}
