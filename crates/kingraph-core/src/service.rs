//! Service groups exposed by the relationship-graph backend.
//!
//! Every operation returns the backend's JSON body untouched. Records are
//! opaque to this layer; validation is left to the backend.

use async_trait::async_trait;
use serde_json::Value;

use crate::api_types::{
    AiAskRequest, AllPathsQuery, CentralityQuery, InfluenceQuery, PatternQuery, RankingQuery,
    SearchQuery,
};
use crate::error::Result;

#[async_trait]
pub trait GraphApi: Send + Sync {
    /// Whole graph. Never fails on status alone: error bodies are returned as data.
    async fn get_graph(&self) -> Result<Value>;
    async fn import_graph(&self, data: &Value) -> Result<Value>;
    async fn export_graph(&self, data: &Value) -> Result<Value>;
    /// Reload the backend's seed data, optionally choosing a named dataset.
    async fn init_data(&self, dataset: Option<&str>) -> Result<Value>;
    async fn graph_stats(&self) -> Result<Value>;
}

#[async_trait]
pub trait PersonApi: Send + Sync {
    async fn add_person(&self, data: &Value) -> Result<Value>;
    async fn update_person(&self, person_id: &str, data: &Value) -> Result<Value>;
    async fn delete_person(&self, person_id: &str) -> Result<Value>;
    /// Never fails on status alone: error bodies are returned as data.
    async fn search_person(&self, query: &SearchQuery) -> Result<Value>;
    async fn query_person(&self, name: &str) -> Result<Value>;
    async fn list_nodes(&self) -> Result<Value>;
    async fn create_node(&self, data: &Value) -> Result<Value>;
}

#[async_trait]
pub trait RelationshipApi: Send + Sync {
    async fn add_relationship(&self, data: &Value) -> Result<Value>;
    async fn delete_relationship(&self, rel_id: &str) -> Result<Value>;
    async fn get_all_relationships(&self) -> Result<Value>;
    async fn relationships_by_type(&self, rel_type: &str) -> Result<Value>;
}

#[async_trait]
pub trait NetworkApi: Send + Sync {
    /// Shortest path between two persons.
    async fn find_path(&self, start: &str, end: &str) -> Result<Value>;
}

#[async_trait]
pub trait AnalysisApi: Send + Sync {
    async fn centrality_ranking(&self, query: &RankingQuery) -> Result<Value>;
    async fn centrality(&self, query: &CentralityQuery) -> Result<Value>;
    async fn communities(&self) -> Result<Value>;
    async fn triangles(&self) -> Result<Value>;
    async fn influence(&self, query: &InfluenceQuery) -> Result<Value>;
    async fn all_paths(&self, query: &AllPathsQuery) -> Result<Value>;
    async fn recommend(&self, person_id: &str) -> Result<Value>;
    async fn pattern(&self, query: &PatternQuery) -> Result<Value>;
    async fn similarity(&self, person_id: &str) -> Result<Value>;
    async fn bridges(&self) -> Result<Value>;
    async fn density(&self) -> Result<Value>;
}

/// Question answering over the graph.
///
/// `ai_ask` and `ask` are the same operation published under two names;
/// implementations bind both to one endpoint.
#[async_trait]
pub trait AiApi: Send + Sync {
    async fn ai_ask(&self, request: &AiAskRequest) -> Result<Value>;
    async fn ask(&self, request: &AiAskRequest) -> Result<Value>;
}
