use crate::e2e::helpers;

use helpers::assertions::assert_translation_record;
use helpers::vendor_mocks::mock_google_translation;
use helpers::TestContext;
use http_body_util::BodyExt;
use hyper::StatusCode;
use serde_json::json;
use std::time::Duration;
use test_context::test_context;
use uuid::Uuid;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_list_translations_newest_first(ctx: &TestContext) {
    ctx.fixtures
        .create_translation(None, "old", "viejo", 30)
        .await
        .unwrap();
    ctx.fixtures
        .create_translation(None, "new", "nuevo", 1)
        .await
        .unwrap();

    let response = ctx.client.get("/api/translations").await.unwrap();

    response.assert_status(StatusCode::OK);
    let records = response.body.as_ref().unwrap().as_array().unwrap().clone();
    assert_eq!(records.len(), 2);
    assert_translation_record(&records[0], "new", "nuevo");
    assert_translation_record(&records[1], "old", "viejo");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_filter_by_user_and_limit(ctx: &TestContext) {
    let user_id = Uuid::new_v4();
    for minutes in 1..=3 {
        ctx.fixtures
            .create_translation(Some(user_id), "mine", "mío", minutes)
            .await
            .unwrap();
    }
    ctx.fixtures
        .create_translation(Some(Uuid::new_v4()), "theirs", "suyo", 0)
        .await
        .unwrap();

    let response = ctx
        .client
        .get(&format!("/api/translations?userId={}&limit=2", user_id))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let records = response.body.as_ref().unwrap().as_array().unwrap().clone();
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r["userId"] == json!(user_id)));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_invalid_history_queries(ctx: &TestContext) {
    ctx.client
        .get("/api/translations?limit=0")
        .await
        .unwrap()
        .assert_status(StatusCode::BAD_REQUEST);

    ctx.client
        .get("/api/translations?userId=not-a-uuid")
        .await
        .unwrap()
        .assert_status(StatusCode::BAD_REQUEST);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_get_and_delete_a_translation(ctx: &TestContext) {
    let record = ctx
        .fixtures
        .create_translation(None, "Hello", "Hola", 0)
        .await
        .unwrap();
    let path = format!("/api/translations/{}", record.id);

    let response = ctx.client.get(&path).await.unwrap();
    response.assert_status(StatusCode::OK);
    assert_translation_record(response.body.as_ref().unwrap(), "Hello", "Hola");

    ctx.client
        .delete(&path)
        .await
        .unwrap()
        .assert_status(StatusCode::NO_CONTENT);

    ctx.client
        .get(&path)
        .await
        .unwrap()
        .assert_status(StatusCode::NOT_FOUND)
        .assert_error("Resource not found: Translation not found");

    // Deleting twice reports nothing to delete
    ctx.client
        .delete(&path)
        .await
        .unwrap()
        .assert_status(StatusCode::NOT_FOUND);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_malformed_ids(ctx: &TestContext) {
    ctx.client
        .get("/api/translations/42")
        .await
        .unwrap()
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error("Invalid translation id");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_stream_new_translations(ctx: &TestContext) {
    mock_google_translation(&ctx.vendors.translate, "Bonjour", Some("en")).await;

    let stream = ctx.client.open_stream("/api/translations/stream").await.unwrap();
    assert_eq!(stream.status(), StatusCode::OK);
    assert_eq!(
        stream.headers().get("content-type").unwrap(),
        "text/event-stream"
    );
    let mut body = stream.into_body();

    ctx.client
        .post(
            "/api/translate",
            &json!({ "sourceText": "Hello", "targetLang": "fr" }),
        )
        .await
        .unwrap()
        .assert_status(StatusCode::OK);

    // Read frames until the translation event arrives
    let received = tokio::time::timeout(Duration::from_secs(5), async {
        let mut buffer = String::new();
        while let Some(frame) = body.frame().await {
            if let Ok(data) = frame.unwrap().into_data() {
                buffer.push_str(&String::from_utf8_lossy(&data));
                if buffer.contains("\n\n") && buffer.contains("event: translation") {
                    return buffer;
                }
            }
        }
        buffer
    })
    .await
    .expect("No translation event received");

    assert!(received.contains("event: translation"), "{}", received);
    assert!(received.contains("\"translatedText\":\"Bonjour\""), "{}", received);
    assert!(received.contains("\"targetLanguage\":\"fr\""), "{}", received);
}
