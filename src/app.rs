//! Dependency wiring shared by the binary and the end-to-end tests

use std::sync::Arc;

use crate::controllers::{
    health::HealthController, history::HistoryController, languages::LanguagesController,
    speech_to_text::SpeechToTextController, text_to_speech::TextToSpeechController,
    translate::TranslateController,
};
use crate::domain::shared::PollPolicy;
use crate::domain::stt::SttService;
use crate::domain::translation::{TranslationEvents, TranslationService};
use crate::domain::tts::TtsService;
use crate::infrastructure::config::{Config, TtsConfig, TtsProvider};
use crate::infrastructure::db::DbPool;
use crate::infrastructure::http::{build_http_client, ApiControllers};
use crate::infrastructure::repositories::{
    AssemblyAiSttRepository, ElevenLabsTtsRepository, GoogleTranslateRepository,
    LanguageUsageRepository, PlayAiTtsRepository, SpeechifyTtsRepository, SttRepository,
    TranslateRepository, TranslationRepository, TtsRepository, VoiceRssTtsRepository,
};

/// Instantiate repositories, services and controllers from configuration
pub fn build_controllers(
    config: &Config,
    pool: Arc<DbPool>,
) -> Result<ApiControllers, reqwest::Error> {
    let http_client = build_http_client(config.http_timeout_secs)?;

    // 1. Repositories
    let translation_repo = Arc::new(TranslationRepository::new(pool.clone()));
    let usage_repo = Arc::new(LanguageUsageRepository::new(pool.clone()));

    let translate_repo = config.translate.google_api_key.clone().map(|api_key| {
        Arc::new(GoogleTranslateRepository::new(
            http_client.clone(),
            api_key,
            config.translate.google_base_url.clone(),
        )) as Arc<dyn TranslateRepository>
    });
    if translate_repo.is_none() {
        tracing::warn!("GOOGLE_TRANSLATE_API_KEY not set, translation is disabled");
    }

    let stt_repo = config.stt.assemblyai_api_key.clone().map(|api_key| {
        Arc::new(AssemblyAiSttRepository::new(
            http_client.clone(),
            api_key,
            config.stt.assemblyai_base_url.clone(),
            PollPolicy::new(config.stt.poll_interval_ms, config.stt.poll_max_attempts),
        )) as Arc<dyn SttRepository>
    });
    if stt_repo.is_none() {
        tracing::warn!("ASSEMBLYAI_API_KEY not set, speech-to-text is disabled");
    }

    let tts_repo = tts_repository(&config.tts, &http_client);
    match &tts_repo {
        Some(repo) => tracing::info!(provider = repo.provider(), "TTS provider selected"),
        None => tracing::warn!(
            provider = %config.tts.provider,
            "TTS provider credentials not set, text-to-speech is disabled"
        ),
    }

    // 2. Services
    let translation_service = Arc::new(TranslationService::new(
        translate_repo,
        translation_repo,
        usage_repo,
        TranslationEvents::new(),
        config.translate.max_chars,
    ));
    let stt_service = Arc::new(SttService::new(stt_repo));
    let tts_service = Arc::new(TtsService::new(
        tts_repo,
        config.tts.max_chars,
        config.tts.cache_enabled,
    ));

    // 3. Controllers
    Ok(ApiControllers {
        health: Arc::new(HealthController::new(
            pool,
            translation_service.clone(),
            stt_service.clone(),
            tts_service.clone(),
        )),
        translate: Arc::new(TranslateController::new(translation_service.clone())),
        speech_to_text: Arc::new(SpeechToTextController::new(stt_service)),
        text_to_speech: Arc::new(TextToSpeechController::new(tts_service)),
        history: Arc::new(HistoryController::new(translation_service.clone())),
        languages: Arc::new(LanguagesController::new(translation_service)),
    })
}

/// The configured TTS vendor, or `None` when its credentials are missing
fn tts_repository(tts: &TtsConfig, http_client: &reqwest::Client) -> Option<Arc<dyn TtsRepository>> {
    let repo: Arc<dyn TtsRepository> = match tts.provider {
        TtsProvider::VoiceRss => Arc::new(VoiceRssTtsRepository::new(
            http_client.clone(),
            tts.voicerss_api_key.clone()?,
            tts.voicerss_base_url.clone(),
        )),
        TtsProvider::PlayAi => Arc::new(PlayAiTtsRepository::new(
            http_client.clone(),
            tts.playai_api_key.clone()?,
            tts.playai_user_id.clone()?,
            tts.playai_base_url.clone(),
            PollPolicy::new(tts.playai_poll_interval_ms, tts.playai_poll_max_attempts),
        )),
        TtsProvider::Speechify => Arc::new(SpeechifyTtsRepository::new(
            http_client.clone(),
            tts.speechify_api_key.clone()?,
            tts.speechify_base_url.clone(),
        )),
        TtsProvider::ElevenLabs => Arc::new(ElevenLabsTtsRepository::new(
            http_client.clone(),
            tts.elevenlabs_api_key.clone()?,
            tts.elevenlabs_base_url.clone(),
            tts.elevenlabs_model_id.clone(),
        )),
    };
    Some(repo)
}
