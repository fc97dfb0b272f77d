pub mod d100_entity_detection;
