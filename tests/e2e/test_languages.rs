use crate::e2e::helpers;

use helpers::assertions::assert_language_entry;
use helpers::TestContext;
use hyper::StatusCode;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_list_the_catalog_by_popularity(ctx: &TestContext) {
    let response = ctx.client.get("/api/languages").await.unwrap();

    response.assert_status(StatusCode::OK);
    let languages = response.body.as_ref().unwrap().as_array().unwrap().clone();
    assert_eq!(languages.len(), 58);
    assert_eq!(languages[0]["code"], "auto");
    assert_eq!(languages[1]["code"], "en");
    languages.iter().for_each(assert_language_entry);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_filter_by_region_and_capability(ctx: &TestContext) {
    let response = ctx
        .client
        .get("/api/languages?region=Africa&capability=stt")
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let codes: Vec<String> = response
        .body
        .as_ref()
        .unwrap()
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["code"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(codes, vec!["ar", "sw", "am", "af"]);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_unknown_capability(ctx: &TestContext) {
    ctx.client
        .get("/api/languages?capability=ocr")
        .await
        .unwrap()
        .assert_status(StatusCode::BAD_REQUEST);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_get_a_language_by_code(ctx: &TestContext) {
    let response = ctx.client.get("/api/languages/ar").await.unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body.as_ref().unwrap();
    assert_language_entry(body);
    assert_eq!(body["name"], "Arabic");
    assert_eq!(body["direction"], "rtl");

    // Locale tags resolve to the base language
    let response = ctx.client.get("/api/languages/pt-BR").await.unwrap();
    response.assert_status(StatusCode::OK);
    assert_eq!(response.body.as_ref().unwrap()["code"], "pt");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_not_found_for_unknown_codes(ctx: &TestContext) {
    ctx.client
        .get("/api/languages/xx")
        .await
        .unwrap()
        .assert_status(StatusCode::NOT_FOUND);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_rank_language_pairs_by_usage(ctx: &TestContext) {
    ctx.fixtures.set_language_usage("en", "es", 3).await.unwrap();
    ctx.fixtures.set_language_usage("fr", "en", 7).await.unwrap();
    ctx.fixtures.set_language_usage("de", "it", 1).await.unwrap();

    let response = ctx.client.get("/api/languages/usage?limit=2").await.unwrap();

    response.assert_status(StatusCode::OK);
    let pairs = response.body.as_ref().unwrap().as_array().unwrap().clone();
    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs[0]["sourceLanguage"], "fr");
    assert_eq!(pairs[0]["usageCount"], 7);
    assert_eq!(pairs[1]["sourceLanguage"], "en");
}
