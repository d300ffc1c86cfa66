pub mod order;
pub mod rules;
pub mod table;
pub mod verify;
pub mod version;

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use cayley_group::{Group, GroupConfig};
use clap::Args;

/// Arguments shared by every command that builds a group.
#[derive(Args, Debug, Clone)]
pub struct GroupArgs {
    /// Presentation such as `<a,b|a^2=e,b^2=e,ab=ba>`.
    pub presentation: String,
    /// YAML file with construction parameters; flags below override it.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Identity character.
    #[arg(long)]
    pub identity: Option<char>,
    /// Add commutation relations for every pair of generators.
    #[arg(long)]
    pub abelian: bool,
    /// Longest word kept by the element search.
    #[arg(long)]
    pub limit: Option<usize>,
}

impl GroupArgs {
    /// Resolves the configuration from the YAML file and flags.
    pub fn config(&self) -> Result<GroupConfig, Box<dyn Error>> {
        let mut config = match &self.config {
            Some(path) => GroupConfig::from_yaml(&fs::read_to_string(path)?)?,
            None => GroupConfig::default(),
        };
        if let Some(identity) = self.identity {
            config.identity = identity;
        }
        if self.abelian {
            config.abelian = true;
        }
        if let Some(limit) = self.limit {
            config.word_length_limit = limit;
        }
        Ok(config)
    }

    /// Builds the group described by these arguments.
    pub fn build(&self) -> Result<Group, Box<dyn Error>> {
        let config = self.config()?;
        let group = Group::from_presentation(&self.presentation, config)?;
        tracing::info!(
            order = group.order(),
            saturated = group.saturated(),
            "computed group"
        );
        Ok(group)
    }
}
