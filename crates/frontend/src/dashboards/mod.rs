pub mod d100_entity_detection;

pub use d100_entity_detection::ui::EntityDetectionDashboard;
