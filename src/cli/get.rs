use anyhow::Result;
use clap::Args;

use super::ConnectionArgs;
use crate::parse;

#[derive(Args)]
pub struct GetArgs {
    /// The algorithm to use for lookup
    pub algorithm: String,

    /// Hashes to look up
    #[arg(required = true)]
    pub hashes: Vec<String>,

    /// Given hashes are in hex notation
    #[arg(long)]
    pub hex: bool,

    /// Dump the raw response bodies
    #[arg(short, long)]
    pub verbose: bool,

    #[command(flatten)]
    pub connection: ConnectionArgs,
}

pub fn run(args: GetArgs) -> Result<()> {
    let hashes = parse::parse_hashes(&args.hashes, args.hex)?;
    let client = args.connection.build_client()?;

    // One request per hash, sequentially, in input order.
    for hash in hashes {
        let response = client.get_strings(&args.algorithm, hash)?;

        if args.verbose {
            println!("{}", response.raw);
        }

        for result in &response.body.hashes {
            println!("{}: {}", result.hash, result.string.string);
        }
    }

    Ok(())
}
