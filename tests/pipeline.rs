use autolisting::session::{EXTRACTION_FAILED_MESSAGE, Phase};
use autolisting::{ExtractorConfig, FIXED_DESCRIPTION, GeminiExtractor, ListingSession};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GENERATE_PATH: &str = "/models/gemini-3-flash-preview:generateContent";

fn candidate(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }]
    })
}

fn civic_text() -> String {
    serde_json::json!({
        "title": "2020 Honda Civic",
        "year": 2020,
        "make": "Honda",
        "model": "Civic",
        "price": "$15,000",
        "mileage": "32,000 mi",
        "bodyStyle": "Sedan",
        "description": "Clean car, one owner."
    })
    .to_string()
}

fn session_for(server: &MockServer) -> ListingSession<GeminiExtractor> {
    let config = ExtractorConfig::new().api_key("test-key").base_url(server.uri());
    ListingSession::new(GeminiExtractor::new(config).expect("Failed to build extractor"))
}

#[tokio::test]
async fn test_listing_to_script() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate(&civic_text())))
        .expect(1)
        .mount(&server)
        .await;

    let mut session = session_for(&server);
    let status = session
        .analyze("https://example.com/listing/1")
        .await
        .expect("Valid URL rejected");

    assert!(!status.is_analyzing);
    assert!(status.error.is_none());

    let record = status.data.as_ref().expect("No data after successful extraction");
    assert_eq!(record.price, "15000");
    assert_eq!(record.mileage, "32000");
    assert_eq!(record.description, FIXED_DESCRIPTION);

    let script = session.script().expect("No script for extracted record");
    assert!(script.contains(r#""make":"Honda""#));
    assert!(script.contains(r#""price":"15000""#));
}

#[tokio::test]
async fn test_error_after_success_keeps_data() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate(&civic_text())))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .mount(&server)
        .await;

    let mut session = session_for(&server);
    session.analyze("https://example.com/listing/1").await.unwrap();
    let status = session.analyze("https://example.com/listing/2").await.unwrap();

    assert_eq!(status.phase(), Phase::Failed);
    assert_eq!(status.error.as_deref(), Some(EXTRACTION_FAILED_MESSAGE));
    assert_eq!(status.data.as_ref().map(|r| r.model.as_str()), Some("Civic"));
}

#[tokio::test]
async fn test_empty_model_output_fails() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate("")))
        .mount(&server)
        .await;

    let mut session = session_for(&server);
    let status = session.analyze("https://example.com/listing/1").await.unwrap();

    assert!(!status.is_analyzing);
    assert_eq!(status.error.as_deref(), Some(EXTRACTION_FAILED_MESSAGE));
    assert!(status.data.is_none());
    assert!(session.script().is_none());
}

#[tokio::test]
async fn test_identical_records_give_identical_scripts() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate(&civic_text())))
        .mount(&server)
        .await;

    let mut first = session_for(&server);
    let mut second = session_for(&server);
    first.analyze("https://example.com/listing/1").await.unwrap();
    second.analyze("https://example.com/listing/1").await.unwrap();

    assert_eq!(first.script(), second.script());
}

#[tokio::test]
async fn test_timeout_reports_fixed_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(candidate(&civic_text()))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let config = ExtractorConfig::new()
        .api_key("test-key")
        .base_url(server.uri())
        .timeout(Duration::from_millis(50));
    let mut session = ListingSession::new(GeminiExtractor::new(config).unwrap());
    let status = session.analyze("https://example.com/listing/1").await.unwrap();

    assert_eq!(status.phase(), Phase::Failed);
    assert_eq!(status.error.as_deref(), Some(EXTRACTION_FAILED_MESSAGE));
    assert!(status.data.is_none());
}
