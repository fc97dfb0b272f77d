use serde::{Deserialize, Serialize};

/// Dictionary-backed entity names served by the `text` detector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextEntityName {
    Brand,
    Clothes,
    Cuisine,
    Dish,
    Footwear,
    Movie,
    Restaurant,
}

impl TextEntityName {
    pub fn label(&self) -> &'static str {
        match self {
            TextEntityName::Brand => "Brand",
            TextEntityName::Clothes => "Clothes",
            TextEntityName::Cuisine => "Cuisine",
            TextEntityName::Dish => "Dish",
            TextEntityName::Footwear => "Footwear",
            TextEntityName::Movie => "Movie",
            TextEntityName::Restaurant => "Restaurant",
        }
    }

    pub fn all() -> Vec<TextEntityName> {
        vec![
            TextEntityName::Brand,
            TextEntityName::Clothes,
            TextEntityName::Cuisine,
            TextEntityName::Dish,
            TextEntityName::Footwear,
            TextEntityName::Movie,
            TextEntityName::Restaurant,
        ]
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().into_iter().find(|n| n.label() == label)
    }
}
