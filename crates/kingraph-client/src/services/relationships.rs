use async_trait::async_trait;
use serde_json::Value;

use kingraph_core::error::Result;
use kingraph_core::service::RelationshipApi;

use crate::endpoint;
use crate::http::ApiClient;

#[async_trait]
impl RelationshipApi for ApiClient {
    async fn add_relationship(&self, data: &Value) -> Result<Value> {
        self.request(&endpoint::RELATIONSHIP_ADD, None)?
            .json(data)
            .send()
            .await
    }

    async fn delete_relationship(&self, rel_id: &str) -> Result<Value> {
        self.request(&endpoint::RELATIONSHIP_DELETE, Some(rel_id))?
            .send()
            .await
    }

    async fn get_all_relationships(&self) -> Result<Value> {
        self.request(&endpoint::RELATIONSHIP_LIST, None)?
            .send()
            .await
    }

    async fn relationships_by_type(&self, rel_type: &str) -> Result<Value> {
        self.request(&endpoint::RELATIONSHIP_BY_TYPE, Some(rel_type))?
            .send()
            .await
    }
}
