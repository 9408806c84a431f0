use kingraph_core::api_types::{
    AiAskRequest, AllPathsQuery, CentralityQuery, InfluenceQuery, PatternQuery, RankingQuery,
    SearchQuery,
};
use kingraph_core::service::{
    AiApi, AnalysisApi, GraphApi, NetworkApi, PersonApi, RelationshipApi,
};
use kingraph_tests::MockBackend;
use serde_json::json;

async fn ok_backend() -> MockBackend {
    MockBackend::json(200, json!({ "message": "ok" })).await
}

// ---------------------------------------------------------------------------
// Graph
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_graph_is_plain_get() {
    let backend = ok_backend().await;
    backend.client().get_graph().await.unwrap();

    let req = backend.last_request();
    assert_eq!(req.method, "GET");
    assert_eq!(req.path, "/api/graph");
    assert!(req.query.is_none());
    assert!(req.content_type.is_none());
    assert!(req.body.is_empty());
}

#[tokio::test]
async fn import_and_export_post_payload() {
    let backend = ok_backend().await;
    let client = backend.client();
    let payload = json!({
        "nodes": [{ "name": "雍正" }, { "name": "乾隆" }],
        "relationships": [{ "source": 1, "target": 2, "type": "父子" }]
    });

    client.import_graph(&payload).await.unwrap();
    client.export_graph(&payload).await.unwrap();

    let requests = backend.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/api/graph/import");
    assert_eq!(requests[1].path, "/api/graph/export");
    for req in &requests {
        assert_eq!(req.content_type.as_deref(), Some("application/json"));
        assert_eq!(req.json(), payload);
    }
}

#[tokio::test]
async fn init_without_dataset_has_no_query() {
    let backend = ok_backend().await;
    backend.client().init_data(None).await.unwrap();

    let req = backend.last_request();
    assert_eq!(req.method, "POST");
    assert_eq!(req.path, "/api/init");
    assert!(req.query.is_none());
    assert!(req.content_type.is_none());
    assert!(req.body.is_empty());
}

#[tokio::test]
async fn init_with_dataset_appends_query() {
    let backend = ok_backend().await;
    let client = backend.client();

    client.init_data(Some("x")).await.unwrap();
    assert_eq!(backend.last_request().query.as_deref(), Some("dataset=x"));

    client.init_data(Some("")).await.unwrap();
    assert!(backend.last_request().query.is_none());
}

#[tokio::test]
async fn graph_stats_route() {
    let backend = ok_backend().await;
    backend.client().graph_stats().await.unwrap();

    let req = backend.last_request();
    assert_eq!(req.method, "GET");
    assert_eq!(req.path, "/api/graph/stats");
}

// ---------------------------------------------------------------------------
// Persons
// ---------------------------------------------------------------------------

#[tokio::test]
async fn add_person_posts_record() {
    let backend = ok_backend().await;
    backend
        .client()
        .add_person(&json!({ "name": "Bob" }))
        .await
        .unwrap();

    let req = backend.last_request();
    assert_eq!(req.method, "POST");
    assert_eq!(req.path, "/api/persons");
    assert_eq!(req.content_type.as_deref(), Some("application/json"));
    assert_eq!(req.json(), json!({ "name": "Bob" }));
}

#[tokio::test]
async fn update_person_puts_to_id() {
    let backend = ok_backend().await;
    backend
        .client()
        .update_person("p1", &json!({ "occupation": "皇帝" }))
        .await
        .unwrap();

    let req = backend.last_request();
    assert_eq!(req.method, "PUT");
    assert_eq!(req.path, "/api/persons/p1");
    assert_eq!(req.json(), json!({ "occupation": "皇帝" }));
}

#[tokio::test]
async fn delete_person_has_no_body() {
    let backend = ok_backend().await;
    backend.client().delete_person("p1").await.unwrap();

    let req = backend.last_request();
    assert_eq!(req.method, "DELETE");
    assert_eq!(req.path, "/api/persons/p1");
    assert!(req.content_type.is_none());
    assert!(req.body.is_empty());
}

#[tokio::test]
async fn person_id_is_percent_encoded() {
    let backend = ok_backend().await;
    backend.client().delete_person("4:abc/7").await.unwrap();

    assert_eq!(backend.last_request().path, "/api/persons/4:abc%2F7");
}

#[tokio::test]
async fn search_defaults_field_to_name() {
    let backend = ok_backend().await;
    let client = backend.client();

    client
        .search_person(&SearchQuery::new("alice", None))
        .await
        .unwrap();
    let req = backend.last_request();
    assert_eq!(req.method, "GET");
    assert_eq!(req.path, "/api/search");
    assert_eq!(req.query.as_deref(), Some("keyword=alice&field=name"));

    client
        .search_person(&SearchQuery::new("alice", Some("id")))
        .await
        .unwrap();
    assert_eq!(
        backend.last_request().query.as_deref(),
        Some("keyword=alice&field=id")
    );
}

#[tokio::test]
async fn search_keyword_is_form_encoded() {
    let backend = ok_backend().await;
    backend
        .client()
        .search_person(&SearchQuery::new("a&b c", Some("description")))
        .await
        .unwrap();

    assert_eq!(
        backend.last_request().query.as_deref(),
        Some("keyword=a%26b+c&field=description")
    );
}

#[tokio::test]
async fn query_person_and_nodes_routes() {
    let backend = ok_backend().await;
    let client = backend.client();

    client.query_person("Bob").await.unwrap();
    client.list_nodes().await.unwrap();
    client
        .create_node(&json!({ "id": "n1", "name": "Bob" }))
        .await
        .unwrap();

    let requests = backend.requests();
    assert_eq!(requests[0].path, "/api/query");
    assert_eq!(requests[0].query.as_deref(), Some("name=Bob"));
    assert_eq!(requests[1].method, "GET");
    assert_eq!(requests[1].path, "/api/nodes");
    assert_eq!(requests[2].method, "POST");
    assert_eq!(requests[2].path, "/api/nodes");
    assert_eq!(requests[2].json(), json!({ "id": "n1", "name": "Bob" }));
}

// ---------------------------------------------------------------------------
// Relationships and paths
// ---------------------------------------------------------------------------

#[tokio::test]
async fn relationship_routes() {
    let backend = ok_backend().await;
    let client = backend.client();
    let record = json!({ "source": "p1", "target": "p2", "type": "父子" });

    client.add_relationship(&record).await.unwrap();
    client.delete_relationship("r9").await.unwrap();
    client.get_all_relationships().await.unwrap();
    client.relationships_by_type("spouse").await.unwrap();

    let requests = backend.requests();
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/api/relationships");
    assert_eq!(requests[0].json(), record);
    assert_eq!(requests[1].method, "DELETE");
    assert_eq!(requests[1].path, "/api/relationships/r9");
    assert_eq!(requests[2].method, "GET");
    assert_eq!(requests[2].path, "/api/relationships");
    assert_eq!(requests[3].path, "/api/relationships/type/spouse");
}

#[tokio::test]
async fn find_path_sends_endpoints_as_query() {
    let backend = ok_backend().await;
    backend.client().find_path("Alice", "Bob").await.unwrap();

    let req = backend.last_request();
    assert_eq!(req.method, "GET");
    assert_eq!(req.path, "/api/network/path");
    assert_eq!(req.query.as_deref(), Some("start=Alice&end=Bob"));
}

// ---------------------------------------------------------------------------
// AI
// ---------------------------------------------------------------------------

#[tokio::test]
async fn ai_ask_and_ask_hit_the_same_route() {
    let backend = ok_backend().await;
    let client = backend.client();

    client
        .ai_ask(&AiAskRequest::new("who?", None))
        .await
        .unwrap();
    client
        .ask(&AiAskRequest::new("who?", Some("answer briefly")))
        .await
        .unwrap();

    let requests = backend.requests();
    for req in &requests {
        assert_eq!(req.method, "POST");
        assert_eq!(req.path, "/api/ai_ask");
        assert_eq!(req.content_type.as_deref(), Some("application/json"));
    }
    assert_eq!(requests[0].json(), json!({ "question": "who?", "prompt": "" }));
    assert_eq!(
        requests[1].json(),
        json!({ "question": "who?", "prompt": "answer briefly" })
    );
}

// ---------------------------------------------------------------------------
// Analysis
// ---------------------------------------------------------------------------

#[tokio::test]
async fn analysis_routes_and_queries() {
    let backend = ok_backend().await;
    let client = backend.client();

    client
        .centrality_ranking(&RankingQuery { limit: Some(5) })
        .await
        .unwrap();
    client
        .centrality(&CentralityQuery {
            metric: Some("betweenness".into()),
            limit: None,
        })
        .await
        .unwrap();
    client.communities().await.unwrap();
    client.triangles().await.unwrap();
    client
        .influence(&InfluenceQuery {
            id: "p1".into(),
            depth: Some(2),
        })
        .await
        .unwrap();
    client
        .all_paths(&AllPathsQuery {
            start: "p1".into(),
            end: "p2".into(),
            max_length: Some(3),
        })
        .await
        .unwrap();
    client.recommend("p1").await.unwrap();
    client
        .pattern(&PatternQuery {
            pattern_type: Some("star".into()),
        })
        .await
        .unwrap();
    client.similarity("p1").await.unwrap();
    client.bridges().await.unwrap();
    client.density().await.unwrap();

    let seen: Vec<(String, Option<String>)> = backend
        .requests()
        .into_iter()
        .map(|r| {
            assert_eq!(r.method, "GET");
            (r.path, r.query)
        })
        .collect();

    let expected: Vec<(&str, Option<&str>)> = vec![
        ("/api/ranking/centrality", Some("limit=5")),
        ("/api/network/centrality", Some("metric=betweenness")),
        ("/api/network/communities", None),
        ("/api/network/triangles", None),
        ("/api/network/influence", Some("id=p1&depth=2")),
        ("/api/network/all-paths", Some("start=p1&end=p2&maxLength=3")),
        ("/api/network/recommend", Some("id=p1")),
        ("/api/network/pattern", Some("type=star")),
        ("/api/network/similarity", Some("id=p1")),
        ("/api/network/bridges", None),
        ("/api/network/density", None),
    ];

    assert_eq!(seen.len(), expected.len());
    for ((path, query), (want_path, want_query)) in seen.iter().zip(expected) {
        assert_eq!(path, want_path);
        assert_eq!(query.as_deref(), want_query);
    }
}

#[tokio::test]
async fn analysis_defaults_leave_query_empty() {
    let backend = ok_backend().await;
    let client = backend.client();

    client
        .centrality(&CentralityQuery::default())
        .await
        .unwrap();
    client.pattern(&PatternQuery::default()).await.unwrap();

    for req in backend.requests() {
        assert!(req.query.is_none(), "unexpected query on {}", req.path);
    }
}
