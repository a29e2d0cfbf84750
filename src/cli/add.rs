use anyhow::Result;
use clap::Args;

use super::ConnectionArgs;
use crate::status;

#[derive(Args)]
pub struct AddArgs {
    /// String to submit for hashing and indexing
    pub string: String,

    /// Dump the raw response body
    #[arg(short, long)]
    pub verbose: bool,

    #[command(flatten)]
    pub connection: ConnectionArgs,
}

pub fn run(args: AddArgs) -> Result<()> {
    let client = args.connection.build_client()?;
    let response = client.add_string(&args.string)?;

    if args.verbose {
        println!("{}", response.raw);
    }

    // The service answers with the hashes it computed for the new string.
    for result in &response.body.hashes {
        println!("{}: {}", result.hash, result.string.string);
    }

    if response.is_success() {
        status!("Submitted '{}'.", args.string);
    }

    Ok(())
}
