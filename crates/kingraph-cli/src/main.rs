//! `kingraph` command-line client.
//!
//! Prints the backend's JSON response on stdout; logs go to stderr.

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

use kingraph_client::ApiClient;
use kingraph_core::ClientConfig;

mod cli;
mod commands;

use cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    let mut config = ClientConfig::from_env();
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url;
    }
    let client = ApiClient::new(&config)?;
    debug!(api_url = %client.base_url(), "client ready");

    let result = commands::run(&client, cli.command).await?;
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
