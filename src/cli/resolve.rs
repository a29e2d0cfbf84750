use std::collections::BTreeSet;

use anyhow::Result;
use clap::Args;

use super::ConnectionArgs;
use crate::parse;

#[derive(Args)]
pub struct ResolveArgs {
    /// Hashes to resolve
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

/// Hunt for the given hashes, and when the hits name exactly one algorithm,
/// fetch the original string for each hash under it.
///
/// The ambiguity check is deliberately aggregate: hits are counted across
/// the whole input batch, so a batch mixing hashes from different
/// algorithms aborts the fetch phase entirely instead of resolving each
/// hash on its own.
pub fn run(args: ResolveArgs) -> Result<()> {
    let hashes = parse::parse_hashes(&args.hashes, args.hex)?;
    let client = args.connection.build_client()?;

    let hunted = client.hunt(&hashes)?;
    if args.verbose {
        println!("{}", hunted.raw);
    }

    let algorithms: BTreeSet<&str> = hunted
        .body
        .hits
        .iter()
        .map(|hit| hit.algorithm.as_str())
        .collect();

    let algorithm = match algorithms.len() {
        0 => {
            println!("No hash found.");
            return Ok(());
        }
        1 => algorithms
            .into_iter()
            .next()
            .unwrap_or_default()
            .to_string(),
        _ => {
            println!("Multiple algorithms produce this hash.");
            return Ok(());
        }
    };

    for hash in hashes {
        let response = client.get_strings(&algorithm, hash)?;

        if args.verbose {
            println!("{}", response.raw);
        }

        for result in &response.body.hashes {
            println!("{}: {}", result.hash, result.string.string);
        }
    }

    Ok(())
}
