pub mod habitat_keywords;
pub mod interaction;
pub mod path;
pub mod render_settings;
