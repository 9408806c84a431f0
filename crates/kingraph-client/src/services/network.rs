use async_trait::async_trait;
use serde_json::Value;

use kingraph_core::api_types::PathQuery;
use kingraph_core::error::Result;
use kingraph_core::service::NetworkApi;

use crate::endpoint;
use crate::http::ApiClient;

#[async_trait]
impl NetworkApi for ApiClient {
    async fn find_path(&self, start: &str, end: &str) -> Result<Value> {
        let query = PathQuery {
            start: start.to_string(),
            end: end.to_string(),
        };
        self.request(&endpoint::NETWORK_PATH, None)?
            .query(&query)
            .send()
            .await
    }
}
