use axum::http::StatusCode;
use serde_json::json;

use koereq::infrastructure::clients::MockClientFactory;
use koereq::infrastructure::llm::MockLlmClient;
use koereq::infrastructure::storage::{ContainerBehavior, MockBlobStore};
use koereq::infrastructure::text_processing::MockDocumentAnalyzer;

use super::helpers::{body_json, body_text, create_test_app, post_json, post_raw, send};

const FIRST: &str = "https://koereqdev.blob.core.windows.net/uploads/a.jpg?sig=aaa";
const SECOND: &str = "https://koereqdev.blob.core.windows.net/uploads/b.jpg?sig=bbb";

fn clients_with(analyzer: MockDocumentAnalyzer) -> MockClientFactory {
    MockClientFactory::new(
        MockBlobStore::new(ContainerBehavior::Created),
        analyzer,
        MockLlmClient::replying("unused"),
    )
}

#[tokio::test]
async fn given_two_documents_when_analyzing_then_lines_concatenated_in_order() {
    let analyzer = MockDocumentAnalyzer::new()
        .with_document(FIRST, vec![vec!["紹介状", "患者: 山田太郎"], vec!["2ページ目"]])
        .with_document(SECOND, vec![vec!["", "追記"]]);
    let app = create_test_app(clients_with(analyzer));

    let response = send(
        &app,
        post_json("/api/analyzeDocument", json!({ "urls": [FIRST, SECOND] })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({
            "textBlocks": ["紹介状", "患者: 山田太郎", "2ページ目", "追記"],
            "tables": [],
            "checkboxes": []
        })
    );
    assert_eq!(app.clients.document_analyzer.calls(), vec![FIRST, SECOND]);
}

#[tokio::test]
async fn given_document_without_text_when_analyzing_then_empty_text_blocks() {
    let analyzer = MockDocumentAnalyzer::new().with_document(FIRST, vec![vec![]]);
    let app = create_test_app(clients_with(analyzer));

    let response = send(&app, post_json("/api/analyzeDocument", json!({ "urls": [FIRST] }))).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["textBlocks"], json!([]));
}

#[tokio::test]
async fn given_missing_or_empty_urls_when_analyzing_then_bad_request_without_ocr_calls() {
    let app = create_test_app(MockClientFactory::default());

    for body in [
        json!({}),
        json!({ "urls": [] }),
        json!({ "urls": "https://example.com/a.jpg" }),
        json!({ "urls": [FIRST, 42] }),
    ] {
        let response = send(&app, post_json("/api/analyzeDocument", body)).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "missing urls");
    }
    assert!(app.clients.document_analyzer.calls().is_empty());
}

#[tokio::test]
async fn given_malformed_body_when_analyzing_then_invalid_json() {
    let app = create_test_app(MockClientFactory::default());

    let response = send(&app, post_raw("/api/analyzeDocument", "urls=a")).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, "invalid json");
}

#[tokio::test]
async fn given_failing_first_document_when_analyzing_then_aborts_before_second() {
    let analyzer = MockDocumentAnalyzer::new()
        .with_failure(FIRST)
        .with_document(SECOND, vec![vec!["never read"]]);
    let app = create_test_app(clients_with(analyzer));

    let response = send(
        &app,
        post_json("/api/analyzeDocument", json!({ "urls": [FIRST, SECOND] })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_text(response).await;
    assert!(body.starts_with("analyze error: "));
    assert!(body.contains("InvalidContent"));
    assert_eq!(app.clients.document_analyzer.calls(), vec![FIRST]);
}
