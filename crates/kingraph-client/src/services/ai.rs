use async_trait::async_trait;
use serde_json::Value;

use kingraph_core::api_types::AiAskRequest;
use kingraph_core::error::Result;
use kingraph_core::service::AiApi;

use crate::endpoint;
use crate::http::ApiClient;

#[async_trait]
impl AiApi for ApiClient {
    async fn ai_ask(&self, request: &AiAskRequest) -> Result<Value> {
        self.request(&endpoint::AI_ASK, None)?
            .json(request)
            .send()
            .await
    }

    async fn ask(&self, request: &AiAskRequest) -> Result<Value> {
        self.request(&endpoint::AI_ASK, None)?
            .json(request)
            .send()
            .await
    }
}
