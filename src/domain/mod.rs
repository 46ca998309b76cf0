pub mod language;
pub mod shared;
pub mod stt;
pub mod translation;
pub mod tts;
