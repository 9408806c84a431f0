//! In-process stand-in for the graph backend.
//!
//! Every request, whatever its method or path, is recorded and answered with
//! the status and body the test configured.

use std::sync::{Arc, Mutex};

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use kingraph_client::ApiClient;
use kingraph_core::ClientConfig;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("recorded body is not JSON")
    }
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: Option<String>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

pub struct MockBackend {
    api_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockBackend {
    /// Starts a backend on an ephemeral port that answers every request with
    /// `status` and, when given, `body` as `application/json`.
    pub async fn respond_with(status: u16, body: Option<&str>) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            status: StatusCode::from_u16(status).expect("invalid status code"),
            body: body.map(str::to_string),
            requests: requests.clone(),
        };

        let app = Router::new().fallback(record).with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind mock backend");
        let addr = listener.local_addr().expect("mock backend has no address");

        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("mock backend stopped");
        });

        Self {
            api_url: format!("http://{addr}/api"),
            requests,
        }
    }

    pub async fn json(status: u16, body: serde_json::Value) -> Self {
        Self::respond_with(status, Some(&body.to_string())).await
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new(&ClientConfig::new(self.api_url.clone())).expect("failed to build client")
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("request log poisoned").clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests()
            .pop()
            .expect("mock backend received no requests")
    }
}

async fn record(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    state
        .requests
        .lock()
        .expect("request log poisoned")
        .push(RecordedRequest {
            method: method.to_string(),
            path: uri.path().to_string(),
            query: uri.query().map(str::to_string),
            content_type,
            body: body.to_vec(),
        });

    match state.body {
        Some(body) => (
            state.status,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        None => state.status.into_response(),
    }
}
