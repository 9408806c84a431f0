//! Static description of every backend route: method, path and how a
//! failing status is turned into an error.

use reqwest::Method;

/// How a non-2xx response is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusPolicy {
    /// Status is never inspected; whatever JSON comes back is returned.
    /// Only the graph fetch and person search routes use this.
    Unchecked,
    /// Fail with the fixed message, ignoring the body.
    Generic(&'static str),
    /// Fail with the body's `error` field, or the fixed message when it is
    /// missing, empty or the body is not JSON.
    ServerMessage(&'static str),
}

#[derive(Debug)]
pub struct Endpoint {
    pub name: &'static str,
    pub method: Method,
    /// Slash-separated path below the API prefix.
    pub path: &'static str,
    pub policy: StatusPolicy,
}

const IMPORT_FAILED: &str = "导入失败";
const EXPORT_FAILED: &str = "导出失败";
const INIT_FAILED: &str = "初始化失败";
const ADD_PERSON_FAILED: &str = "添加人物失败";
const UPDATE_FAILED: &str = "更新失败";
const DELETE_FAILED: &str = "删除失败";
const ADD_RELATIONSHIP_FAILED: &str = "添加关系失败";
const FETCH_RELATIONSHIPS_FAILED: &str = "获取关系失败";
const QUERY_FAILED: &str = "查询失败";
const AI_FAILED: &str = "AI 问答失败";
const STATS_FAILED: &str = "获取统计失败";
const PERSON_QUERY_FAILED: &str = "人物查询失败";
const FETCH_NODES_FAILED: &str = "获取节点失败";
const CREATE_NODE_FAILED: &str = "创建节点失败";
const RANKING_FAILED: &str = "获取排名失败";
const ANALYSIS_FAILED: &str = "分析失败";

// --- Graph ---

pub static GRAPH_GET: Endpoint = Endpoint {
    name: "graph.get",
    method: Method::GET,
    path: "graph",
    policy: StatusPolicy::Unchecked,
};

pub static GRAPH_IMPORT: Endpoint = Endpoint {
    name: "graph.import",
    method: Method::POST,
    path: "graph/import",
    policy: StatusPolicy::Generic(IMPORT_FAILED),
};

pub static GRAPH_EXPORT: Endpoint = Endpoint {
    name: "graph.export",
    method: Method::POST,
    path: "graph/export",
    policy: StatusPolicy::Generic(EXPORT_FAILED),
};

pub static GRAPH_INIT: Endpoint = Endpoint {
    name: "graph.init",
    method: Method::POST,
    path: "init",
    policy: StatusPolicy::Generic(INIT_FAILED),
};

pub static GRAPH_STATS: Endpoint = Endpoint {
    name: "graph.stats",
    method: Method::GET,
    path: "graph/stats",
    policy: StatusPolicy::ServerMessage(STATS_FAILED),
};

// --- Persons ---

pub static PERSON_ADD: Endpoint = Endpoint {
    name: "person.add",
    method: Method::POST,
    path: "persons",
    policy: StatusPolicy::ServerMessage(ADD_PERSON_FAILED),
};

pub static PERSON_UPDATE: Endpoint = Endpoint {
    name: "person.update",
    method: Method::PUT,
    path: "persons",
    policy: StatusPolicy::ServerMessage(UPDATE_FAILED),
};

pub static PERSON_DELETE: Endpoint = Endpoint {
    name: "person.delete",
    method: Method::DELETE,
    path: "persons",
    policy: StatusPolicy::Generic(DELETE_FAILED),
};

pub static PERSON_SEARCH: Endpoint = Endpoint {
    name: "person.search",
    method: Method::GET,
    path: "search",
    policy: StatusPolicy::Unchecked,
};

pub static PERSON_QUERY: Endpoint = Endpoint {
    name: "person.query",
    method: Method::GET,
    path: "query",
    policy: StatusPolicy::ServerMessage(PERSON_QUERY_FAILED),
};

pub static NODE_LIST: Endpoint = Endpoint {
    name: "node.list",
    method: Method::GET,
    path: "nodes",
    policy: StatusPolicy::ServerMessage(FETCH_NODES_FAILED),
};

pub static NODE_CREATE: Endpoint = Endpoint {
    name: "node.create",
    method: Method::POST,
    path: "nodes",
    policy: StatusPolicy::ServerMessage(CREATE_NODE_FAILED),
};

// --- Relationships ---

pub static RELATIONSHIP_ADD: Endpoint = Endpoint {
    name: "relationship.add",
    method: Method::POST,
    path: "relationships",
    policy: StatusPolicy::ServerMessage(ADD_RELATIONSHIP_FAILED),
};

pub static RELATIONSHIP_DELETE: Endpoint = Endpoint {
    name: "relationship.delete",
    method: Method::DELETE,
    path: "relationships",
    policy: StatusPolicy::Generic(DELETE_FAILED),
};

pub static RELATIONSHIP_LIST: Endpoint = Endpoint {
    name: "relationship.list",
    method: Method::GET,
    path: "relationships",
    policy: StatusPolicy::Generic(FETCH_RELATIONSHIPS_FAILED),
};

pub static RELATIONSHIP_BY_TYPE: Endpoint = Endpoint {
    name: "relationship.by_type",
    method: Method::GET,
    path: "relationships/type",
    policy: StatusPolicy::ServerMessage(FETCH_RELATIONSHIPS_FAILED),
};

// --- Network ---

pub static NETWORK_PATH: Endpoint = Endpoint {
    name: "network.path",
    method: Method::GET,
    path: "network/path",
    policy: StatusPolicy::Generic(QUERY_FAILED),
};

// --- Analysis ---

pub static RANKING_CENTRALITY: Endpoint = Endpoint {
    name: "analysis.ranking",
    method: Method::GET,
    path: "ranking/centrality",
    policy: StatusPolicy::ServerMessage(RANKING_FAILED),
};

pub static NETWORK_CENTRALITY: Endpoint = Endpoint {
    name: "analysis.centrality",
    method: Method::GET,
    path: "network/centrality",
    policy: StatusPolicy::ServerMessage(ANALYSIS_FAILED),
};

pub static NETWORK_COMMUNITIES: Endpoint = Endpoint {
    name: "analysis.communities",
    method: Method::GET,
    path: "network/communities",
    policy: StatusPolicy::ServerMessage(ANALYSIS_FAILED),
};

pub static NETWORK_TRIANGLES: Endpoint = Endpoint {
    name: "analysis.triangles",
    method: Method::GET,
    path: "network/triangles",
    policy: StatusPolicy::ServerMessage(ANALYSIS_FAILED),
};

pub static NETWORK_INFLUENCE: Endpoint = Endpoint {
    name: "analysis.influence",
    method: Method::GET,
    path: "network/influence",
    policy: StatusPolicy::ServerMessage(ANALYSIS_FAILED),
};

pub static NETWORK_ALL_PATHS: Endpoint = Endpoint {
    name: "analysis.all_paths",
    method: Method::GET,
    path: "network/all-paths",
    policy: StatusPolicy::ServerMessage(QUERY_FAILED),
};

pub static NETWORK_RECOMMEND: Endpoint = Endpoint {
    name: "analysis.recommend",
    method: Method::GET,
    path: "network/recommend",
    policy: StatusPolicy::ServerMessage(ANALYSIS_FAILED),
};

pub static NETWORK_PATTERN: Endpoint = Endpoint {
    name: "analysis.pattern",
    method: Method::GET,
    path: "network/pattern",
    policy: StatusPolicy::ServerMessage(ANALYSIS_FAILED),
};

pub static NETWORK_SIMILARITY: Endpoint = Endpoint {
    name: "analysis.similarity",
    method: Method::GET,
    path: "network/similarity",
    policy: StatusPolicy::ServerMessage(ANALYSIS_FAILED),
};

pub static NETWORK_BRIDGES: Endpoint = Endpoint {
    name: "analysis.bridges",
    method: Method::GET,
    path: "network/bridges",
    policy: StatusPolicy::ServerMessage(ANALYSIS_FAILED),
};

pub static NETWORK_DENSITY: Endpoint = Endpoint {
    name: "analysis.density",
    method: Method::GET,
    path: "network/density",
    policy: StatusPolicy::ServerMessage(ANALYSIS_FAILED),
};

// --- AI ---

/// Shared by `AiApi::ai_ask` and its alias `AiApi::ask`.
pub static AI_ASK: Endpoint = Endpoint {
    name: "ai.ask",
    method: Method::POST,
    path: "ai_ask",
    policy: StatusPolicy::ServerMessage(AI_FAILED),
};

pub static ENDPOINTS: &[&Endpoint] = &[
    &GRAPH_GET,
    &GRAPH_IMPORT,
    &GRAPH_EXPORT,
    &GRAPH_INIT,
    &GRAPH_STATS,
    &PERSON_ADD,
    &PERSON_UPDATE,
    &PERSON_DELETE,
    &PERSON_SEARCH,
    &PERSON_QUERY,
    &NODE_LIST,
    &NODE_CREATE,
    &RELATIONSHIP_ADD,
    &RELATIONSHIP_DELETE,
    &RELATIONSHIP_LIST,
    &RELATIONSHIP_BY_TYPE,
    &NETWORK_PATH,
    &RANKING_CENTRALITY,
    &NETWORK_CENTRALITY,
    &NETWORK_COMMUNITIES,
    &NETWORK_TRIANGLES,
    &NETWORK_INFLUENCE,
    &NETWORK_ALL_PATHS,
    &NETWORK_RECOMMEND,
    &NETWORK_PATTERN,
    &NETWORK_SIMILARITY,
    &NETWORK_BRIDGES,
    &NETWORK_DENSITY,
    &AI_ASK,
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn endpoint_names_are_unique() {
        let names: HashSet<_> = ENDPOINTS.iter().map(|e| e.name).collect();
        assert_eq!(names.len(), ENDPOINTS.len());
    }

    #[test]
    fn paths_are_relative() {
        for endpoint in ENDPOINTS {
            assert!(
                !endpoint.path.starts_with('/') && !endpoint.path.ends_with('/'),
                "endpoint {} has a malformed path: {}",
                endpoint.name,
                endpoint.path
            );
        }
    }

    #[test]
    fn only_graph_fetch_and_search_skip_status_check() {
        let unchecked: Vec<_> = ENDPOINTS
            .iter()
            .filter(|e| e.policy == StatusPolicy::Unchecked)
            .map(|e| e.name)
            .collect();
        assert_eq!(unchecked, vec!["graph.get", "person.search"]);
    }

    #[test]
    fn supplemental_routes_report_server_message() {
        let expected = [
            (&GRAPH_STATS, "获取统计失败"),
            (&PERSON_QUERY, "人物查询失败"),
            (&NODE_LIST, "获取节点失败"),
            (&NODE_CREATE, "创建节点失败"),
            (&RELATIONSHIP_BY_TYPE, "获取关系失败"),
            (&RANKING_CENTRALITY, "获取排名失败"),
            (&NETWORK_CENTRALITY, "分析失败"),
            (&NETWORK_COMMUNITIES, "分析失败"),
            (&NETWORK_TRIANGLES, "分析失败"),
            (&NETWORK_INFLUENCE, "分析失败"),
            (&NETWORK_ALL_PATHS, "查询失败"),
            (&NETWORK_RECOMMEND, "分析失败"),
            (&NETWORK_PATTERN, "分析失败"),
            (&NETWORK_SIMILARITY, "分析失败"),
            (&NETWORK_BRIDGES, "分析失败"),
            (&NETWORK_DENSITY, "分析失败"),
        ];
        for (endpoint, fallback) in expected {
            assert_eq!(
                endpoint.policy,
                StatusPolicy::ServerMessage(fallback),
                "endpoint {} has the wrong policy",
                endpoint.name
            );
        }
    }

    #[test]
    fn delete_routes_report_fixed_message() {
        assert_eq!(PERSON_DELETE.policy, StatusPolicy::Generic("删除失败"));
        assert_eq!(RELATIONSHIP_DELETE.policy, StatusPolicy::Generic("删除失败"));
    }
}
