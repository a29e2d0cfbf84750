pub mod api;
pub mod cli;
pub mod client;
pub mod config;
pub mod output;
pub mod parse;

pub use client::{ApiResponse, ClientConfig, ClientError, HashDbClient};
pub use config::Config;
