use std::io::Read;

use anyhow::Context;
use serde_json::Value;

use kingraph_client::ApiClient;
use kingraph_core::api_types::{
    AiAskRequest, AllPathsQuery, CentralityQuery, InfluenceQuery, PatternQuery, RankingQuery,
    SearchQuery,
};
use kingraph_core::service::{AiApi, AnalysisApi, GraphApi, NetworkApi, PersonApi, RelationshipApi};

use crate::cli::{
    AnalysisCommand, Command, GraphCommand, Payload, PersonCommand, RelationshipCommand,
};

pub async fn run(client: &ApiClient, command: Command) -> anyhow::Result<Value> {
    let result = match command {
        Command::Graph(cmd) => match cmd {
            GraphCommand::Get => client.get_graph().await?,
            GraphCommand::Import(payload) => client.import_graph(&read_payload(&payload)?).await?,
            GraphCommand::Export(payload) => client.export_graph(&read_payload(&payload)?).await?,
            GraphCommand::Init { dataset } => client.init_data(dataset.as_deref()).await?,
            GraphCommand::Stats => client.graph_stats().await?,
        },
        Command::Person(cmd) => match cmd {
            PersonCommand::Add(payload) => client.add_person(&read_payload(&payload)?).await?,
            PersonCommand::Update { id, payload } => {
                client.update_person(&id, &read_payload(&payload)?).await?
            }
            PersonCommand::Delete { id } => client.delete_person(&id).await?,
            PersonCommand::Search { keyword, field } => {
                let query = SearchQuery::new(keyword, field.as_deref());
                client.search_person(&query).await?
            }
            PersonCommand::Query { name } => client.query_person(&name).await?,
            PersonCommand::Nodes => client.list_nodes().await?,
            PersonCommand::CreateNode(payload) => {
                client.create_node(&read_payload(&payload)?).await?
            }
        },
        Command::Rel(cmd) => match cmd {
            RelationshipCommand::Add(payload) => {
                client.add_relationship(&read_payload(&payload)?).await?
            }
            RelationshipCommand::Delete { id } => client.delete_relationship(&id).await?,
            RelationshipCommand::List => client.get_all_relationships().await?,
            RelationshipCommand::ByType { rel_type } => {
                client.relationships_by_type(&rel_type).await?
            }
        },
        Command::Path { start, end } => client.find_path(&start, &end).await?,
        Command::Analysis(cmd) => run_analysis(client, cmd).await?,
        Command::Ask { question, prompt } => {
            let request = AiAskRequest::new(question, prompt.as_deref());
            client.ask(&request).await?
        }
    };

    Ok(result)
}

async fn run_analysis(
    client: &ApiClient,
    command: AnalysisCommand,
) -> kingraph_core::Result<Value> {
    match command {
        AnalysisCommand::Ranking { limit } => {
            client.centrality_ranking(&RankingQuery { limit }).await
        }
        AnalysisCommand::Centrality { metric, limit } => {
            client.centrality(&CentralityQuery { metric, limit }).await
        }
        AnalysisCommand::Communities => client.communities().await,
        AnalysisCommand::Triangles => client.triangles().await,
        AnalysisCommand::Influence { id, depth } => {
            client.influence(&InfluenceQuery { id, depth }).await
        }
        AnalysisCommand::AllPaths {
            start,
            end,
            max_length,
        } => {
            client
                .all_paths(&AllPathsQuery {
                    start,
                    end,
                    max_length,
                })
                .await
        }
        AnalysisCommand::Recommend { id } => client.recommend(&id).await,
        AnalysisCommand::Pattern { pattern_type } => {
            client.pattern(&PatternQuery { pattern_type }).await
        }
        AnalysisCommand::Similarity { id } => client.similarity(&id).await,
        AnalysisCommand::Bridges => client.bridges().await,
        AnalysisCommand::Density => client.density().await,
    }
}

fn read_payload(payload: &Payload) -> anyhow::Result<Value> {
    parse_payload(&payload.json, std::io::stdin())
}

/// `-` reads the payload from `stdin`; anything else is parsed as inline JSON.
fn parse_payload(raw: &str, mut stdin: impl Read) -> anyhow::Result<Value> {
    if raw == "-" {
        let mut input = String::new();
        stdin
            .read_to_string(&mut input)
            .context("failed to read payload from stdin")?;
        return serde_json::from_str(&input).context("stdin is not valid JSON");
    }
    serde_json::from_str(raw).context("payload is not valid JSON")
}
