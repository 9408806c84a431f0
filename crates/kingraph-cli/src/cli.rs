use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "kingraph")]
#[command(about = "Query and edit a relationship graph through its HTTP backend")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// API prefix, e.g. http://localhost:5000/api (default: $KINGRAPH_API_URL or the local backend).
    #[arg(long, global = true)]
    pub api_url: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Whole-graph operations.
    #[command(subcommand)]
    Graph(GraphCommand),
    /// Person records.
    #[command(subcommand)]
    Person(PersonCommand),
    /// Relationships between persons.
    #[command(subcommand)]
    Rel(RelationshipCommand),
    /// Shortest path between two persons.
    Path {
        start: String,
        end: String,
    },
    /// Network analysis.
    #[command(subcommand)]
    Analysis(AnalysisCommand),
    /// Ask a question about the graph.
    Ask {
        question: String,
        /// Extra instructions forwarded with the question.
        #[arg(long)]
        prompt: Option<String>,
    },
}

/// JSON payloads are given inline or as `-` to read stdin.
#[derive(Args, Debug)]
pub struct Payload {
    pub json: String,
}

#[derive(Subcommand, Debug)]
pub enum GraphCommand {
    Get,
    Import(Payload),
    Export(Payload),
    Init {
        #[arg(long)]
        dataset: Option<String>,
    },
    Stats,
}

#[derive(Subcommand, Debug)]
pub enum PersonCommand {
    Add(Payload),
    Update {
        id: String,
        #[command(flatten)]
        payload: Payload,
    },
    Delete {
        id: String,
    },
    Search {
        keyword: String,
        /// Property to match against.
        #[arg(long)]
        field: Option<String>,
    },
    /// Exact lookup by name, with relationships.
    Query {
        name: String,
    },
    Nodes,
    CreateNode(Payload),
}

#[derive(Subcommand, Debug)]
pub enum RelationshipCommand {
    Add(Payload),
    Delete {
        id: String,
    },
    List,
    ByType {
        rel_type: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum AnalysisCommand {
    Ranking {
        #[arg(long)]
        limit: Option<u32>,
    },
    Centrality {
        /// degree, betweenness or closeness.
        #[arg(long)]
        metric: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    Communities,
    Triangles,
    Influence {
        id: String,
        #[arg(long)]
        depth: Option<u32>,
    },
    AllPaths {
        start: String,
        end: String,
        #[arg(long)]
        max_length: Option<u32>,
    },
    Recommend {
        id: String,
    },
    Pattern {
        /// chain, triangle or star.
        #[arg(long = "type")]
        pattern_type: Option<String>,
    },
    Similarity {
        id: String,
    },
    Bridges,
    Density,
}
