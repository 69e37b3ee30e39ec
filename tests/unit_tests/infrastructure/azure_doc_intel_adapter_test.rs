use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::Router;
use axum::body::Bytes;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use koereq::application::ports::{DocumentAnalyzer, DocumentAnalyzerError};
use koereq::infrastructure::text_processing::{AnalyzeOperation, AzureDocIntelAdapter};

const API_KEY: &str = "di-key";
const SOURCE_URL: &str = "https://acct.blob.core.windows.net/uploads/page.jpg?sig=x";

const SUCCEEDED: &str = r#"{
    "status": "succeeded",
    "analyzeResult": {
        "pages": [
            { "pageNumber": 1, "lines": [{ "content": "お薬手帳" }, { "content": "" }, { "content": "処方日 2025/02/01" }] },
            { "pageNumber": 2, "lines": [{ "content": "ロキソニン錠60mg" }] }
        ]
    }
}"#;

#[derive(Clone, Copy)]
struct DiBehavior {
    running_polls: usize,
    final_body: &'static str,
    retry_after: &'static str,
    send_location: bool,
}

impl DiBehavior {
    fn succeeding() -> Self {
        Self {
            running_polls: 0,
            final_body: SUCCEEDED,
            retry_after: "0",
            send_location: true,
        }
    }
}

async fn start_mock_di(behavior: DiBehavior) -> (String, Arc<AtomicUsize>, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);
    let polls = Arc::new(AtomicUsize::new(0));

    let operation_url = format!(
        "{}/documentintelligence/documentModels/prebuilt-read/analyzeResults/op-1?api-version=2024-11-30",
        base_url
    );
    let poll_counter = polls.clone();

    let app = Router::new().fallback(move |method: Method, uri: Uri, headers: HeaderMap, body: Bytes| {
        let operation_url = operation_url.clone();
        let polls = poll_counter.clone();
        async move {
            if headers
                .get("Ocp-Apim-Subscription-Key")
                .is_none_or(|v| v != API_KEY)
            {
                return (StatusCode::UNAUTHORIZED, r#"{"error":{"code":"401"}}"#).into_response();
            }

            if method == Method::POST && uri.path().ends_with("/prebuilt-read:analyze") {
                let payload: serde_json::Value = serde_json::from_slice(&body).unwrap();
                assert_eq!(payload["urlSource"], SOURCE_URL);
                assert_eq!(uri.query(), Some("api-version=2024-11-30"));

                let mut response: Response = StatusCode::ACCEPTED.into_response();
                if behavior.send_location {
                    response
                        .headers_mut()
                        .insert("Operation-Location", operation_url.parse().unwrap());
                }
                return response;
            }

            if method == Method::GET && uri.path().contains("/analyzeResults/") {
                let poll = polls.fetch_add(1, Ordering::SeqCst) + 1;
                let body = if poll <= behavior.running_polls {
                    r#"{"status":"running"}"#
                } else {
                    behavior.final_body
                };
                return (
                    StatusCode::OK,
                    [
                        ("Retry-After", behavior.retry_after),
                        ("Content-Type", "application/json"),
                    ],
                    body,
                )
                    .into_response();
            }

            StatusCode::NOT_FOUND.into_response()
        }
    });

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (base_url, polls, shutdown_tx)
}

fn adapter(base_url: &str, api_key: &str, poll_timeout: Duration) -> AzureDocIntelAdapter {
    AzureDocIntelAdapter::new(reqwest::Client::new(), base_url, api_key, poll_timeout)
}

#[tokio::test]
async fn given_completed_analysis_when_analyzing_then_returns_pages_in_order() {
    let (base_url, polls, shutdown_tx) = start_mock_di(DiBehavior::succeeding()).await;

    let document = adapter(&base_url, API_KEY, Duration::from_secs(10))
        .analyze(SOURCE_URL)
        .await
        .unwrap();

    assert_eq!(document.pages.len(), 2);
    let lines: Vec<String> = document.into_lines().collect();
    assert_eq!(lines, vec!["お薬手帳", "処方日 2025/02/01", "ロキソニン錠60mg"]);
    assert_eq!(polls.load(Ordering::SeqCst), 1);
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_running_operation_when_analyzing_then_polls_until_succeeded() {
    let behavior = DiBehavior {
        running_polls: 2,
        ..DiBehavior::succeeding()
    };
    let (base_url, polls, shutdown_tx) = start_mock_di(behavior).await;

    let document = adapter(&base_url, API_KEY, Duration::from_secs(10))
        .analyze(SOURCE_URL)
        .await
        .unwrap();

    assert_eq!(document.pages.len(), 2);
    assert_eq!(polls.load(Ordering::SeqCst), 3);
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_failed_operation_when_analyzing_then_analysis_failed_with_service_message() {
    let behavior = DiBehavior {
        final_body: r#"{"status":"failed","error":{"code":"InvalidRequest","message":"Could not download the file."}}"#,
        ..DiBehavior::succeeding()
    };
    let (base_url, _, shutdown_tx) = start_mock_di(behavior).await;

    let result = adapter(&base_url, API_KEY, Duration::from_secs(10))
        .analyze(SOURCE_URL)
        .await;

    match result {
        Err(DocumentAnalyzerError::AnalysisFailed(message)) => {
            assert_eq!(message, "InvalidRequest: Could not download the file.");
        }
        other => panic!("expected analysis failure, got {other:?}"),
    }
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_wrong_key_when_analyzing_then_submit_failed() {
    let (base_url, polls, shutdown_tx) = start_mock_di(DiBehavior::succeeding()).await;

    let result = adapter(&base_url, "wrong", Duration::from_secs(10))
        .analyze(SOURCE_URL)
        .await;

    assert!(matches!(result, Err(DocumentAnalyzerError::SubmitFailed(ref m)) if m.contains("401")));
    assert_eq!(polls.load(Ordering::SeqCst), 0);
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_missing_operation_location_when_analyzing_then_invalid_response() {
    let behavior = DiBehavior {
        send_location: false,
        ..DiBehavior::succeeding()
    };
    let (base_url, _, shutdown_tx) = start_mock_di(behavior).await;

    let result = adapter(&base_url, API_KEY, Duration::from_secs(10))
        .analyze(SOURCE_URL)
        .await;

    assert!(matches!(result, Err(DocumentAnalyzerError::InvalidResponse(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_operation_never_finishes_when_analyzing_then_times_out() {
    let behavior = DiBehavior {
        running_polls: usize::MAX,
        retry_after: "5",
        ..DiBehavior::succeeding()
    };
    let (base_url, _, shutdown_tx) = start_mock_di(behavior).await;

    let result = adapter(&base_url, API_KEY, Duration::from_secs(1))
        .analyze(SOURCE_URL)
        .await;

    assert!(matches!(result, Err(DocumentAnalyzerError::Timeout(1))));
    shutdown_tx.send(()).ok();
}

#[test]
fn given_trailing_slash_endpoint_when_building_analyze_url_then_uses_read_model() {
    let adapter = adapter("https://di.cognitiveservices.azure.com/", API_KEY, Duration::from_secs(1));

    assert_eq!(
        adapter.analyze_url(),
        "https://di.cognitiveservices.azure.com/documentintelligence/documentModels/prebuilt-read:analyze?api-version=2024-11-30"
    );
}

#[test]
fn given_running_status_when_parsing_operation_then_no_result() {
    let parsed: AnalyzeOperation = serde_json::from_str(r#"{"status":"running"}"#).unwrap();

    assert_eq!(parsed.status, "running");
    assert!(parsed.analyze_result.is_none());
    assert!(parsed.error.is_none());
}

#[test]
fn given_page_without_lines_when_parsing_operation_then_lines_default_empty() {
    let parsed: AnalyzeOperation = serde_json::from_str(
        r#"{"status":"succeeded","analyzeResult":{"pages":[{"pageNumber":1}]}}"#,
    )
    .unwrap();

    let result = parsed.analyze_result.unwrap();
    assert_eq!(result.pages.len(), 1);
    assert!(result.pages[0].lines.is_empty());
}
