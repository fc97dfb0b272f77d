pub mod entity_type;
pub mod text_entity_name;

pub use entity_type::EntityType;
pub use text_entity_name::TextEntityName;
