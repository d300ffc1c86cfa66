use std::error::Error;

use clap::Args;
use serde::Serialize;

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Emit version metadata as JSON.
    #[arg(long)]
    pub long: bool,
}

#[derive(Debug, Serialize)]
struct VersionInfo {
    version: &'static str,
    schema_version: cayley_core::SchemaVersion,
    default_identity: char,
}

pub fn run(args: &VersionArgs) -> Result<(), Box<dyn Error>> {
    if !args.long {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    let info = VersionInfo {
        version: env!("CARGO_PKG_VERSION"),
        schema_version: cayley_core::SchemaVersion::default(),
        default_identity: cayley_core::DEFAULT_IDENTITY,
    };
    println!("{}", serde_json::to_string_pretty(&info)?);
    Ok(())
}
