use anyhow::Result;
use clap::{Args, ValueEnum};
use comfy_table::{presets::UTF8_FULL, Table};

use super::ConnectionArgs;
use crate::api::AlgorithmInfo;

#[derive(Args)]
pub struct AlgorithmsArgs {
    /// Show the description and type of each algorithm
    #[arg(short, long)]
    pub description: bool,

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

pub fn run(args: AlgorithmsArgs) -> Result<()> {
    let client = args.connection.build_client()?;
    let response = client.algorithms()?;

    match args.format {
        OutputFormat::Plain => print_plain(&response.body.algorithms, args.description),
        OutputFormat::Json => print_json(&response.body.algorithms)?,
        OutputFormat::Table => print_table(&response.body.algorithms),
    }

    Ok(())
}

fn print_plain(algorithms: &[AlgorithmInfo], description: bool) {
    for algo in algorithms {
        if description {
            let flattened = algo.description.replace('\n', " ");
            println!("{}\t\t{}({})", algo.algorithm, flattened, algo.kind);
        } else {
            println!("{}", algo.algorithm);
        }
    }
}

fn print_json(algorithms: &[AlgorithmInfo]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(algorithms)?);
    Ok(())
}

fn print_table(algorithms: &[AlgorithmInfo]) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Algorithm", "Type", "Description"]);

    for algo in algorithms {
        table.add_row(vec![
            algo.algorithm.clone(),
            algo.kind.clone(),
            algo.description.replace('\n', " "),
        ]);
    }

    println!("{table}");
}
