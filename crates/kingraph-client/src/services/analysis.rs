use async_trait::async_trait;
use serde_json::Value;

use kingraph_core::api_types::{
    AllPathsQuery, CentralityQuery, InfluenceQuery, PatternQuery, PersonIdQuery, RankingQuery,
};
use kingraph_core::error::Result;
use kingraph_core::service::AnalysisApi;

use crate::endpoint;
use crate::http::ApiClient;

#[async_trait]
impl AnalysisApi for ApiClient {
    async fn centrality_ranking(&self, query: &RankingQuery) -> Result<Value> {
        self.request(&endpoint::RANKING_CENTRALITY, None)?
            .query(query)
            .send()
            .await
    }

    async fn centrality(&self, query: &CentralityQuery) -> Result<Value> {
        self.request(&endpoint::NETWORK_CENTRALITY, None)?
            .query(query)
            .send()
            .await
    }

    async fn communities(&self) -> Result<Value> {
        self.request(&endpoint::NETWORK_COMMUNITIES, None)?
            .send()
            .await
    }

    async fn triangles(&self) -> Result<Value> {
        self.request(&endpoint::NETWORK_TRIANGLES, None)?
            .send()
            .await
    }

    async fn influence(&self, query: &InfluenceQuery) -> Result<Value> {
        self.request(&endpoint::NETWORK_INFLUENCE, None)?
            .query(query)
            .send()
            .await
    }

    async fn all_paths(&self, query: &AllPathsQuery) -> Result<Value> {
        self.request(&endpoint::NETWORK_ALL_PATHS, None)?
            .query(query)
            .send()
            .await
    }

    async fn recommend(&self, person_id: &str) -> Result<Value> {
        let query = PersonIdQuery {
            id: person_id.to_string(),
        };
        self.request(&endpoint::NETWORK_RECOMMEND, None)?
            .query(&query)
            .send()
            .await
    }

    async fn pattern(&self, query: &PatternQuery) -> Result<Value> {
        self.request(&endpoint::NETWORK_PATTERN, None)?
            .query(query)
            .send()
            .await
    }

    async fn similarity(&self, person_id: &str) -> Result<Value> {
        let query = PersonIdQuery {
            id: person_id.to_string(),
        };
        self.request(&endpoint::NETWORK_SIMILARITY, None)?
            .query(&query)
            .send()
            .await
    }

    async fn bridges(&self) -> Result<Value> {
        self.request(&endpoint::NETWORK_BRIDGES, None)?
            .send()
            .await
    }

    async fn density(&self) -> Result<Value> {
        self.request(&endpoint::NETWORK_DENSITY, None)?
            .send()
            .await
    }
}
