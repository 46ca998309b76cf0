pub mod assemblyai_stt_repository;
pub mod elevenlabs_tts_repository;
pub mod google_translate_repository;
pub mod language_usage_repository;
pub mod playai_tts_repository;
pub mod speechify_tts_repository;
pub mod stt_repository;
pub mod translate_repository;
pub mod translation_repository;
pub mod tts_repository;
pub mod voicerss_tts_repository;

pub use assemblyai_stt_repository::AssemblyAiSttRepository;
pub use elevenlabs_tts_repository::ElevenLabsTtsRepository;
pub use google_translate_repository::GoogleTranslateRepository;
pub use language_usage_repository::LanguageUsageRepository;
pub use playai_tts_repository::PlayAiTtsRepository;
pub use speechify_tts_repository::SpeechifyTtsRepository;
pub use stt_repository::SttRepository;
pub use translate_repository::TranslateRepository;
pub use translation_repository::TranslationRepository;
pub use tts_repository::TtsRepository;
pub use voicerss_tts_repository::VoiceRssTtsRepository;
