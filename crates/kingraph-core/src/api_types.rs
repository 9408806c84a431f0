use serde::{Deserialize, Serialize};

// --- Errors ---

/// Body the backend sends alongside a failing status.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

// --- Graph ---

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct InitQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset: Option<String>,
}

// --- Persons ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    pub keyword: String,
    #[serde(default = "default_search_field")]
    pub field: String,
}

fn default_search_field() -> String {
    "name".to_string()
}

impl SearchQuery {
    pub fn new(keyword: impl Into<String>, field: Option<&str>) -> Self {
        Self {
            keyword: keyword.into(),
            field: field.map(str::to_string).unwrap_or_else(default_search_field),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NameQuery {
    pub name: String,
}

// --- Network ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathQuery {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllPathsQuery {
    pub start: String,
    pub end: String,
    #[serde(rename = "maxLength", skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct RankingQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct CentralityQuery {
    /// `degree`, `betweenness` or `closeness`; the backend defaults to `degree`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfluenceQuery {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<u32>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct PatternQuery {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub pattern_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonIdQuery {
    pub id: String,
}

// --- AI ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiAskRequest {
    pub question: String,
    #[serde(default)]
    pub prompt: String,
}

impl AiAskRequest {
    pub fn new(question: impl Into<String>, prompt: Option<&str>) -> Self {
        Self {
            question: question.into(),
            prompt: prompt.unwrap_or_default().to_string(),
        }
    }
}
