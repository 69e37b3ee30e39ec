use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use tower::ServiceExt;

use koereq::infrastructure::clients::MockClientFactory;
use koereq::infrastructure::config::InMemoryConfigSource;
use koereq::presentation::config::{
    AnalysisSettings, AuthSettings, LoggingSettings, ServerSettings,
};
use koereq::presentation::{AppState, Settings, create_router};

pub const TEST_FUNCTION_KEY: &str = "test-function-key";

pub struct TestApp {
    pub router: Router,
    pub clients: Arc<MockClientFactory>,
    pub config: Arc<InMemoryConfigSource>,
}

pub fn full_config() -> InMemoryConfigSource {
    InMemoryConfigSource::new()
        .with("AZURE_STORAGE_ACCOUNT", "koereqdev")
        .with("AZURE_STORAGE_KEY", "c3RvcmFnZS1rZXk=")
        .with("AZURE_STORAGE_CONTAINER", "uploads")
        .with("AZURE_DI_ENDPOINT", "https://di.cognitiveservices.azure.com")
        .with("AZURE_DI_KEY", "di-key")
        .with("AZURE_OPENAI_ENDPOINT", "https://koereq.openai.azure.com/")
        .with("AZURE_OPENAI_KEY", "openai-key")
}

pub fn test_settings(function_key: Option<&str>) -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        logging: LoggingSettings {
            level: "debug".to_string(),
            json_format: false,
        },
        analysis: AnalysisSettings {
            poll_timeout_secs: 5,
        },
        auth: AuthSettings {
            function_key: function_key.map(String::from),
        },
    }
}

pub fn create_test_app(clients: MockClientFactory) -> TestApp {
    create_test_app_with(clients, full_config(), None)
}

pub fn create_test_app_with(
    clients: MockClientFactory,
    config: InMemoryConfigSource,
    function_key: Option<&str>,
) -> TestApp {
    let clients = Arc::new(clients);
    let config = Arc::new(config);
    let state = AppState::new(config.clone(), clients.clone(), test_settings(function_key));

    TestApp {
        router: create_router(state),
        clients,
        config,
    }
}

pub fn post_raw(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    post_raw(uri, &body.to_string())
}

pub async fn send(app: &TestApp, request: Request<Body>) -> Response<Body> {
    app.router.clone().oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_str(&body_text(response).await).unwrap()
}
