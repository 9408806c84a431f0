use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument, warn};
use url::Url;

use kingraph_core::api_types::ErrorBody;
use kingraph_core::config::ClientConfig;
use kingraph_core::error::{KingraphError, Result};

use crate::endpoint::{Endpoint, StatusPolicy};

/// Shared handle to the backend. Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base_url = config.base_url()?;
        let http = Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves `endpoint` below the API prefix, appending `segment` (an id or
    /// type name) as one percent-encoded path segment.
    pub fn endpoint_url(&self, endpoint: &Endpoint, segment: Option<&str>) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                KingraphError::Config(format!("API URL cannot be a base: {}", self.base_url))
            })?;
            segments.pop_if_empty().extend(endpoint.path.split('/'));
            if let Some(segment) = segment {
                segments.push(segment);
            }
        }
        Ok(url)
    }

    /// Starts a request for `endpoint`. Add a query or body, then `send` it.
    pub fn request(
        &self,
        endpoint: &'static Endpoint,
        segment: Option<&str>,
    ) -> Result<PreparedRequest<'_>> {
        let url = self.endpoint_url(endpoint, segment)?;
        let builder = self.http.request(endpoint.method.clone(), url);

        Ok(PreparedRequest {
            client: self,
            endpoint,
            builder,
        })
    }
}

pub struct PreparedRequest<'a> {
    client: &'a ApiClient,
    endpoint: &'static Endpoint,
    builder: RequestBuilder,
}

impl PreparedRequest<'_> {
    /// Appends query parameters. `None` fields are left out of the URL.
    pub fn query<T: Serialize + ?Sized>(mut self, query: &T) -> Self {
        self.builder = self.builder.query(query);
        self
    }

    /// Attaches a JSON body and `Content-Type: application/json`.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Self {
        self.builder = self.builder.json(body);
        self
    }

    pub fn build(self) -> Result<reqwest::Request> {
        Ok(self.builder.build()?)
    }

    #[instrument(skip_all, fields(endpoint = self.endpoint.name))]
    pub async fn send(self) -> Result<Value> {
        let endpoint = self.endpoint;
        let request = self.builder.build()?;

        debug!(method = %request.method(), url = %request.url(), "sending request");

        let response = self.client.http.execute(request).await?;
        read_response(endpoint, response).await
    }
}

async fn read_response(endpoint: &Endpoint, response: Response) -> Result<Value> {
    let status = response.status();
    debug!(status = status.as_u16(), "received response");

    if !status.is_success() {
        match endpoint.policy {
            StatusPolicy::Unchecked => {
                debug!(status = status.as_u16(), "status not checked for this endpoint");
            }
            StatusPolicy::Generic(fallback) => {
                return Err(rejected(endpoint, status, fallback.to_string()));
            }
            StatusPolicy::ServerMessage(fallback) => {
                let body = response.bytes().await.unwrap_or_default();
                return Err(rejected(endpoint, status, error_message(&body, fallback)));
            }
        }
    }

    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

fn rejected(endpoint: &Endpoint, status: StatusCode, message: String) -> KingraphError {
    warn!(
        endpoint = endpoint.name,
        status = status.as_u16(),
        %message,
        "backend rejected request"
    );
    KingraphError::Api {
        status: status.as_u16(),
        message,
    }
}

/// Pulls `error` out of a backend error body. Any body that is not JSON,
/// lacks the field or carries an empty message yields `fallback`.
/// A non-string `error` (e.g. `{"error": 42}`) also yields `fallback`.
pub fn error_message(body: &[u8], fallback: &str) -> String {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.error)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}
