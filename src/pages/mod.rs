pub mod analyzer;
pub mod health;
pub mod settings;
pub mod text_analysis;
