use crate::e2e::helpers;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use helpers::vendor_mocks::{mock_voicerss_audio, mock_voicerss_error};
use helpers::TestContext;
use hyper::StatusCode;
use serde_json::json;
use test_context::test_context;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

fn fake_mp3() -> Vec<u8> {
    let mut audio = b"ID3".to_vec();
    audio.extend(std::iter::repeat(0xAB).take(512));
    audio
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_base64_audio(ctx: &TestContext) {
    mock_voicerss_audio(&ctx.vendors.tts, fake_mp3()).await;

    let response = ctx
        .client
        .post(
            "/api/text-to-speech",
            &json!({ "text": "Hello, this is a test message for text to speech." }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body.as_ref().unwrap();
    assert_eq!(body["contentType"], "audio/mpeg");
    assert_eq!(body["provider"], "voicerss");
    assert_eq!(body["language"], "en");
    assert_eq!(body["voiceId"], "Alice");

    let audio = STANDARD
        .decode(body["audioData"].as_str().unwrap())
        .unwrap();
    assert_eq!(audio, fake_mp3());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_pass_voice_and_locale_to_the_vendor(ctx: &TestContext) {
    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("hl", "es-es"))
        .and(query_param("v", "Juana"))
        .and(query_param("c", "mp3"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(fake_mp3()))
        .expect(1)
        .mount(&ctx.vendors.tts)
        .await;

    let response = ctx
        .client
        .post(
            "/api/text-to-speech",
            &json!({ "text": "Hola, esto es una prueba.", "language": "es-ES", "voice": "Juana" }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.body.as_ref().unwrap()["voiceId"], "Juana");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_prefer_voice_id_over_voice(ctx: &TestContext) {
    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("v", "Pablo"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(fake_mp3()))
        .expect(1)
        .mount(&ctx.vendors.tts)
        .await;

    let response = ctx
        .client
        .post(
            "/api/text-to-speech",
            &json!({ "text": "Hola", "language": "es-ES", "voice": "Juana", "voiceId": "Pablo" }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.body.as_ref().unwrap()["voiceId"], "Pablo");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_detect_language_when_auto(ctx: &TestContext) {
    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("hl", "de-de"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(fake_mp3()))
        .expect(1)
        .mount(&ctx.vendors.tts)
        .await;

    let response = ctx
        .client
        .post(
            "/api/text-to-speech",
            &json!({
                "text": "Dies ist ein Test auf Deutsch. Der schnelle braune Fuchs springt über den faulen Hund.",
                "language": "auto"
            }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.body.as_ref().unwrap()["language"], "de");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_empty_text(ctx: &TestContext) {
    for body in [json!({}), json!({ "text": "" }), json!({ "text": "  https://example.com " })] {
        let response = ctx.client.post("/api/text-to-speech", &body).await.unwrap();
        response
            .assert_status(StatusCode::BAD_REQUEST)
            .assert_error("No text provided");
    }
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_text_over_the_limit(ctx: &TestContext) {
    let text = "word ".repeat(ctx.config.tts.max_chars);

    let response = ctx
        .client
        .post("/api/text-to-speech", &json!({ "text": text }))
        .await
        .unwrap();

    response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_languages_without_voice_output(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/api/text-to-speech", &json!({ "text": "Sannu", "language": "ha" }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error("Voice output is not supported for Hausa");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_surface_vendor_errors(ctx: &TestContext) {
    mock_voicerss_error(&ctx.vendors.tts, "The API key is not available!").await;

    let response = ctx
        .client
        .post("/api/text-to-speech", &json!({ "text": "Hello" }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR)
        .assert_error_contains("The API key is not available!");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_suspiciously_small_audio(ctx: &TestContext) {
    mock_voicerss_audio(&ctx.vendors.tts, b"tiny".to_vec()).await;

    let response = ctx
        .client
        .post("/api/text-to-speech", &json!({ "text": "Hello" }))
        .await
        .unwrap();

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_missing_configuration(ctx: &TestContext) {
    let client = ctx.unconfigured_client().await;

    let response = client
        .post("/api/text-to-speech", &json!({ "text": "Hello" }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR)
        .assert_error("Text-to-speech service not configured");
}
