use std::error::Error;

use cayley_group::{verify, VerifyOptions};
use clap::Args;

use super::GroupArgs;

#[derive(Args, Debug)]
pub struct VerifyArgs {
    #[command(flatten)]
    pub group: GroupArgs,
    /// Random triples checked for associativity.
    #[arg(long, default_value_t = 512)]
    pub samples: usize,
    /// Seed for the associativity sampler.
    #[arg(long, default_value_t = 0xCA7_1E7)]
    pub seed: u64,
}

pub fn run(args: &VerifyArgs) -> Result<(), Box<dyn Error>> {
    let group = args.group.build()?;
    let opts = VerifyOptions {
        associativity_samples: args.samples,
        seed: args.seed,
    };
    let report = verify(&group, &opts)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    if !report.passed() {
        return Err(format!(
            "group laws do not hold for {}",
            args.group.presentation
        )
        .into());
    }
    Ok(())
}
