use anyhow::Result;
use clap::Parser;

use hashdb::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    hashdb::output::set_quiet(cli.quiet);

    match cli.command {
        Commands::Algorithms(args) => hashdb::cli::algorithms::run(args),
        Commands::Get(args) => hashdb::cli::get::run(args),
        Commands::Hunt(args) => hashdb::cli::hunt::run(args),
        Commands::Resolve(args) => hashdb::cli::resolve::run(args),
        Commands::Add(args) => hashdb::cli::add::run(args),
        Commands::String(args) => hashdb::cli::string::run(args),
    }
}
