use async_trait::async_trait;
use serde_json::Value;

use kingraph_core::api_types::{NameQuery, SearchQuery};
use kingraph_core::error::Result;
use kingraph_core::service::PersonApi;

use crate::endpoint;
use crate::http::ApiClient;

#[async_trait]
impl PersonApi for ApiClient {
    async fn add_person(&self, data: &Value) -> Result<Value> {
        self.request(&endpoint::PERSON_ADD, None)?
            .json(data)
            .send()
            .await
    }

    async fn update_person(&self, person_id: &str, data: &Value) -> Result<Value> {
        self.request(&endpoint::PERSON_UPDATE, Some(person_id))?
            .json(data)
            .send()
            .await
    }

    async fn delete_person(&self, person_id: &str) -> Result<Value> {
        self.request(&endpoint::PERSON_DELETE, Some(person_id))?
            .send()
            .await
    }

    async fn search_person(&self, query: &SearchQuery) -> Result<Value> {
        self.request(&endpoint::PERSON_SEARCH, None)?
            .query(query)
            .send()
            .await
    }

    async fn query_person(&self, name: &str) -> Result<Value> {
        let query = NameQuery {
            name: name.to_string(),
        };
        self.request(&endpoint::PERSON_QUERY, None)?
            .query(&query)
            .send()
            .await
    }

    async fn list_nodes(&self) -> Result<Value> {
        self.request(&endpoint::NODE_LIST, None)?.send().await
    }

    async fn create_node(&self, data: &Value) -> Result<Value> {
        self.request(&endpoint::NODE_CREATE, None)?
            .json(data)
            .send()
            .await
    }
}
