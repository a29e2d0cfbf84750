use anyhow::Result;
use clap::{Args, ValueEnum};
use comfy_table::{presets::UTF8_FULL, Table};

use super::ConnectionArgs;
use crate::api::HuntHit;
use crate::parse;

#[derive(Args)]
pub struct HuntArgs {
    /// Hashes to hunt for across all known algorithms
    #[arg(required = true)]
    pub hashes: Vec<String>,

    /// Given hashes are in hex notation
    #[arg(long)]
    pub hex: bool,

    /// Dump the raw response body
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, default_value = "plain")]
    pub format: OutputFormat,

    #[command(flatten)]
    pub connection: ConnectionArgs,
}

#[derive(Clone, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
    Table,
}

pub fn run(args: HuntArgs) -> Result<()> {
    let hashes = parse::parse_hashes(&args.hashes, args.hex)?;
    let client = args.connection.build_client()?;
    let response = client.hunt(&hashes)?;

    if args.verbose {
        println!("{}", response.raw);
    }

    match args.format {
        OutputFormat::Plain => print_plain(&response.body.hits),
        OutputFormat::Json => print_json(&response.body.hits)?,
        OutputFormat::Table => print_table(&response.body.hits),
    }

    Ok(())
}

fn print_plain(hits: &[HuntHit]) {
    for hit in hits {
        println!("{}: {}", hit.algorithm, hit.count);
    }
}

fn print_json(hits: &[HuntHit]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(hits)?);
    Ok(())
}

fn print_table(hits: &[HuntHit]) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Algorithm", "Count"]);

    for hit in hits {
        table.add_row(vec![hit.algorithm.clone(), hit.count.to_string()]);
    }

    println!("{table}");
}
