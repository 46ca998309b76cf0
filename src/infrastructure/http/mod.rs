pub mod client;

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::controllers::{
    health::HealthController, history::HistoryController, languages::LanguagesController,
    speech_to_text::SpeechToTextController, text_to_speech::TextToSpeechController,
    translate::TranslateController,
};
use crate::infrastructure::config::Config;
use crate::infrastructure::middleware::{cors_layer, request_id_middleware};

pub use client::build_http_client;

/// Every controller the router needs
#[derive(Clone)]
pub struct ApiControllers {
    pub health: Arc<HealthController>,
    pub translate: Arc<TranslateController>,
    pub speech_to_text: Arc<SpeechToTextController>,
    pub text_to_speech: Arc<TextToSpeechController>,
    pub history: Arc<HistoryController>,
    pub languages: Arc<LanguagesController>,
}

/// Build the application router with all routes and layers
pub fn build_router(controllers: ApiControllers, max_upload_bytes: usize) -> Router {
    let translate_routes = Router::new()
        .route("/api/translate", post(TranslateController::translate))
        .with_state(controllers.translate);

    // Uploads get their own body limit; the default 2 MB stays for JSON routes
    let stt_routes = Router::new()
        .route("/api/speech-to-text", post(SpeechToTextController::transcribe))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(controllers.speech_to_text);

    let tts_routes = Router::new()
        .route("/api/text-to-speech", post(TextToSpeechController::synthesize))
        .with_state(controllers.text_to_speech);

    let history_routes = Router::new()
        .route("/api/translations", get(HistoryController::list))
        .route("/api/translations/stream", get(HistoryController::stream))
        .route(
            "/api/translations/:id",
            get(HistoryController::get).delete(HistoryController::delete),
        )
        .with_state(controllers.history);

    let language_routes = Router::new()
        .route("/api/languages", get(LanguagesController::list))
        .route("/api/languages/usage", get(LanguagesController::usage))
        .route("/api/languages/:code", get(LanguagesController::get))
        .with_state(controllers.languages);

    Router::new()
        .route("/health", get(HealthController::health))
        .route("/health/ready", get(HealthController::health_ready))
        .with_state(controllers.health)
        .merge(translate_routes)
        .merge(stt_routes)
        .merge(tts_routes)
        .merge(history_routes)
        .merge(language_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        // Outermost so CORS preflight answers also carry the id
        .layer(middleware::from_fn(request_id_middleware))
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    controllers: ApiControllers,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(controllers, config.stt.max_upload_bytes);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
