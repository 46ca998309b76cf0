pub mod health;
pub mod history;
pub mod languages;
pub mod speech_to_text;
pub mod text_to_speech;
pub mod translate;
