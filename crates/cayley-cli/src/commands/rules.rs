use std::error::Error;

use cayley_core::Alphabet;
use cayley_rewrite::{normalize, rules_hash};
use clap::Args;

use super::GroupArgs;

#[derive(Args, Debug)]
pub struct RulesArgs {
    #[command(flatten)]
    pub group: GroupArgs,
}

/// Normalises the relations without enumerating elements, so it also works
/// for presentations whose search would not finish.
pub fn run(args: &RulesArgs) -> Result<(), Box<dyn Error>> {
    let config = args.group.config()?;
    config.validate()?;
    let parsed = cayley_group::parse_presentation(&args.group.presentation)?;
    let alphabet = Alphabet::new(parsed.generators.iter().copied(), config.identity)?;
    let rules = normalize(&alphabet, &parsed.relations, config.abelian)?;
    for line in rules.describe() {
        println!("{line}");
    }
    println!("hash: {}", rules_hash(&rules));
    Ok(())
}
