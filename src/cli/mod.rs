pub mod add;
pub mod algorithms;
pub mod get;
pub mod hunt;
pub mod resolve;
pub mod string;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::client::HashDbClient;
use crate::config::Config;

#[derive(Parser)]
#[command(name = "hashdb")]
#[command(about = "Client for the HashDB hash lookup service")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress status messages on stderr
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List hash algorithms known to the service
    Algorithms(algorithms::AlgorithmsArgs),
    /// Get original strings for hashes under a known algorithm
    Get(get::GetArgs),
    /// Find which algorithms could produce the given hashes
    Hunt(hunt::HuntArgs),
    /// Hunt for hashes and fetch the original strings automatically
    Resolve(resolve::ResolveArgs),
    /// Submit a new string for hashing and indexing
    Add(add::AddArgs),
    /// Show stored metadata for a known string
    String(string::StringArgs),
}

/// Connection options shared by every subcommand.
#[derive(Args)]
pub struct ConnectionArgs {
    /// Service endpoint (or HASHDB_ENDPOINT env var)
    #[arg(long, env = "HASHDB_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Request timeout in seconds (or HASHDB_TIMEOUT env var)
    #[arg(long, env = "HASHDB_TIMEOUT")]
    pub timeout: Option<u64>,
}

impl ConnectionArgs {
    pub fn build_client(&self) -> Result<HashDbClient> {
        let config = Config::load()
            .unwrap_or_default()
            .build_client_config(self.endpoint.as_deref(), self.timeout);
        Ok(HashDbClient::new(config)?)
    }
}
