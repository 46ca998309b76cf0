use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Google answers with one translation and the language it detected
pub async fn mock_google_translation(
    server: &MockServer,
    translated_text: &str,
    detected_source_language: Option<&str>,
) {
    let mut translation = json!({ "translatedText": translated_text });
    if let Some(detected) = detected_source_language {
        translation["detectedSourceLanguage"] = json!(detected);
    }

    Mock::given(method("POST"))
        .and(path("/language/translate/v2"))
        .and(query_param("key", "test-google-key"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "data": { "translations": [translation] } })),
        )
        .mount(server)
        .await;
}

pub async fn mock_google_error(server: &MockServer, status: u16, message: &str) {
    Mock::given(method("POST"))
        .and(path("/language/translate/v2"))
        .respond_with(ResponseTemplate::new(status).set_body_json(json!({
            "error": { "code": status, "message": message }
        })))
        .mount(server)
        .await;
}

/// Upload and job creation for AssemblyAI; the transcript id is always `tr_e2e`
pub async fn mock_assemblyai_job(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/v2/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "upload_url": "https://cdn.assemblyai.test/upload/e2e"
        })))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v2/transcript"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "tr_e2e", "status": "queued"
        })))
        .mount(server)
        .await;
}

pub async fn mock_assemblyai_transcript(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/v2/transcript/tr_e2e"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// VoiceRSS returns raw MP3 bytes with HTTP 200
pub async fn mock_voicerss_audio(server: &MockServer, audio: Vec<u8>) {
    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("key", "test-voicerss-key"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "audio/mpeg")
                .set_body_bytes(audio),
        )
        .mount(server)
        .await;
}

/// VoiceRSS reports failures as a 200 with an `ERROR:` text body
pub async fn mock_voicerss_error(server: &MockServer, message: &str) {
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!("ERROR: {}", message)))
        .mount(server)
        .await;
}
