use async_trait::async_trait;
use serde_json::Value;

use kingraph_core::api_types::InitQuery;
use kingraph_core::error::Result;
use kingraph_core::service::GraphApi;

use crate::endpoint;
use crate::http::ApiClient;

#[async_trait]
impl GraphApi for ApiClient {
    async fn get_graph(&self) -> Result<Value> {
        self.request(&endpoint::GRAPH_GET, None)?.send().await
    }

    async fn import_graph(&self, data: &Value) -> Result<Value> {
        self.request(&endpoint::GRAPH_IMPORT, None)?
            .json(data)
            .send()
            .await
    }

    async fn export_graph(&self, data: &Value) -> Result<Value> {
        self.request(&endpoint::GRAPH_EXPORT, None)?
            .json(data)
            .send()
            .await
    }

    async fn init_data(&self, dataset: Option<&str>) -> Result<Value> {
        // An empty dataset name means "backend default", same as none.
        let query = InitQuery {
            dataset: dataset.filter(|d| !d.is_empty()).map(str::to_string),
        };
        self.request(&endpoint::GRAPH_INIT, None)?
            .query(&query)
            .send()
            .await
    }

    async fn graph_stats(&self) -> Result<Value> {
        self.request(&endpoint::GRAPH_STATS, None)?.send().await
    }
}
