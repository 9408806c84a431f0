pub mod api_types;
pub mod config;
pub mod error;
pub mod service;

pub use api_types::{
    AiAskRequest, AllPathsQuery, CentralityQuery, ErrorBody, InfluenceQuery, InitQuery,
    NameQuery, PathQuery, PatternQuery, PersonIdQuery, RankingQuery, SearchQuery,
};
pub use config::{ClientConfig, API_BASE_URL, API_URL};
pub use error::{KingraphError, Result};
pub use service::{AiApi, AnalysisApi, GraphApi, NetworkApi, PersonApi, RelationshipApi};
