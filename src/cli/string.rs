use anyhow::Result;
use clap::Args;

use super::ConnectionArgs;
use crate::api::StringRecord;

#[derive(Args)]
pub struct StringArgs {
    /// String to look up
    pub text: String,

    /// Dump the raw response body
    #[arg(short, long)]
    pub verbose: bool,

    #[command(flatten)]
    pub connection: ConnectionArgs,
}

pub fn run(args: StringArgs) -> Result<()> {
    let client = args.connection.build_client()?;
    let response = client.string_info(&args.text)?;

    if args.verbose {
        println!("{}", response.raw);
    }

    print_record(&args.text, &response.body.string);

    if !response.body.hashes.is_empty() {
        println!();
        for result in &response.body.hashes {
            println!("{}: {}", result.hash, result.string.string);
        }
    }

    Ok(())
}

fn print_record(requested: &str, record: &StringRecord) {
    let string = if record.string.is_empty() {
        requested
    } else {
        &record.string
    };

    println!("String:      {}", string);
    println!("API:         {}", or_dash(&record.api));
    println!("Permutation: {}", or_dash(&record.permutation));
    println!(
        "Modules:     {}",
        if record.modules.is_empty() {
            "-".to_string()
        } else {
            record.modules.join(", ")
        }
    );
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}
