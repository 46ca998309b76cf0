use serde::Deserialize;
use std::env;
use std::str::FromStr;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub db_max_connections: u32,
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    pub http_timeout_secs: u64,
    pub translate: TranslateConfig,
    pub stt: SttConfig,
    pub tts: TtsConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Google Cloud Translation v2
#[derive(Debug, Clone, Deserialize)]
pub struct TranslateConfig {
    pub google_api_key: Option<String>,
    pub google_base_url: String,
    pub max_chars: usize,
}

/// AssemblyAI transcription
#[derive(Debug, Clone, Deserialize)]
pub struct SttConfig {
    pub assemblyai_api_key: Option<String>,
    pub assemblyai_base_url: String,
    pub poll_interval_ms: u64,
    pub poll_max_attempts: u32,
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TtsProvider {
    VoiceRss,
    PlayAi,
    Speechify,
    ElevenLabs,
}

impl TtsProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            TtsProvider::VoiceRss => "voicerss",
            TtsProvider::PlayAi => "playai",
            TtsProvider::Speechify => "speechify",
            TtsProvider::ElevenLabs => "elevenlabs",
        }
    }
}

impl FromStr for TtsProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "voicerss" => Ok(TtsProvider::VoiceRss),
            "playai" | "playht" => Ok(TtsProvider::PlayAi),
            "speechify" => Ok(TtsProvider::Speechify),
            "elevenlabs" => Ok(TtsProvider::ElevenLabs),
            other => Err(format!("unknown TTS provider: {}", other)),
        }
    }
}

impl std::fmt::Display for TtsProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TtsConfig {
    pub provider: TtsProvider,
    pub max_chars: usize,
    pub cache_enabled: bool,
    pub voicerss_api_key: Option<String>,
    pub voicerss_base_url: String,
    pub playai_api_key: Option<String>,
    pub playai_user_id: Option<String>,
    pub playai_base_url: String,
    pub playai_poll_interval_ms: u64,
    pub playai_poll_max_attempts: u32,
    pub speechify_api_key: Option<String>,
    pub speechify_base_url: String,
    pub elevenlabs_api_key: Option<String>,
    pub elevenlabs_base_url: String,
    pub elevenlabs_model_id: String,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            database_url: env::var("DATABASE_URL")?,
            db_max_connections: parse_or("DB_MAX_CONNECTIONS", 10)?,
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_or("PORT", 8080)?,
            environment: match env::var("ENVIRONMENT").unwrap_or_default().as_str() {
                "production" => Environment::Production,
                _ => Environment::Development,
            },
            log_format: match env::var("LOG_FORMAT").unwrap_or_default().as_str() {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            http_timeout_secs: parse_or("HTTP_TIMEOUT_SECS", 30)?,
            translate: TranslateConfig {
                google_api_key: optional("GOOGLE_TRANSLATE_API_KEY"),
                google_base_url: env::var("GOOGLE_TRANSLATE_BASE_URL")
                    .unwrap_or_else(|_| "https://translation.googleapis.com".to_string()),
                max_chars: parse_or("TRANSLATE_MAX_CHARS", 30_000)?,
            },
            stt: SttConfig {
                assemblyai_api_key: optional("ASSEMBLYAI_API_KEY"),
                assemblyai_base_url: env::var("ASSEMBLYAI_BASE_URL")
                    .unwrap_or_else(|_| "https://api.assemblyai.com".to_string()),
                poll_interval_ms: parse_or("STT_POLL_INTERVAL_MS", 5000)?,
                poll_max_attempts: parse_or("STT_POLL_MAX_ATTEMPTS", 60)?,
                max_upload_bytes: parse_or("STT_MAX_UPLOAD_BYTES", 25 * 1024 * 1024)?,
            },
            tts: TtsConfig {
                provider: env::var("TTS_PROVIDER")
                    .unwrap_or_else(|_| "voicerss".to_string())
                    .parse()?,
                max_chars: parse_or("TTS_MAX_CHARS", 5000)?,
                cache_enabled: env::var("TTS_CACHE_ENABLED")
                    .map(|s| s.to_lowercase() == "true")
                    .unwrap_or(false),
                voicerss_api_key: optional("VOICERSS_API_KEY"),
                voicerss_base_url: env::var("VOICERSS_BASE_URL")
                    .unwrap_or_else(|_| "http://api.voicerss.org".to_string()),
                playai_api_key: optional("PLAYAI_API_KEY"),
                playai_user_id: optional("PLAYAI_USER_ID"),
                playai_base_url: env::var("PLAYAI_BASE_URL")
                    .unwrap_or_else(|_| "https://api.play.ht".to_string()),
                playai_poll_interval_ms: parse_or("PLAYAI_POLL_INTERVAL_MS", 1000)?,
                playai_poll_max_attempts: parse_or("PLAYAI_POLL_MAX_ATTEMPTS", 30)?,
                speechify_api_key: optional("SPEECHIFY_API_KEY"),
                speechify_base_url: env::var("SPEECHIFY_BASE_URL")
                    .unwrap_or_else(|_| "https://api.sws.speechify.com".to_string()),
                elevenlabs_api_key: optional("ELEVENLABS_API_KEY"),
                elevenlabs_base_url: env::var("ELEVENLABS_BASE_URL")
                    .unwrap_or_else(|_| "https://api.elevenlabs.io".to_string()),
                elevenlabs_model_id: env::var("ELEVENLABS_MODEL_ID")
                    .unwrap_or_else(|_| "eleven_multilingual_v2".to_string()),
            },
        };

        Ok(config)
    }
}

/// Read an env var, treating unset and blank values alike
fn optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_or<T>(key: &str, default: T) -> Result<T, Box<dyn std::error::Error>>
where
    T: FromStr,
    T::Err: std::error::Error + 'static,
{
    match optional(key) {
        Some(raw) => Ok(raw.trim().parse::<T>()?),
        None => Ok(default),
    }
}
