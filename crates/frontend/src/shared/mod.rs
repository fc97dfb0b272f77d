pub mod api_utils;
pub mod components;
pub mod config;
pub mod icons;
pub mod json_highlight;
pub mod json_viewer;
