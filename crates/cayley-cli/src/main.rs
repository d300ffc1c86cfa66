use std::error::Error;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    order::{self, OrderArgs},
    rules::{self, RulesArgs},
    table::{self, TableArgs},
    verify::{self, VerifyArgs},
    version::{self, VersionArgs},
};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "cayley", about = "Cayley tables of finitely presented groups")]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the multiplication table of a presentation.
    Table(TableArgs),
    /// Print the number of elements, or the order of one element.
    Order(OrderArgs),
    /// Print the normalised rewrite rules and their hash.
    Rules(RulesArgs),
    /// Check the group laws against the computed table.
    Verify(VerifyArgs),
    /// Print version information.
    Version(VersionArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    match cli.command {
        Command::Table(args) => table::run(&args),
        Command::Order(args) => order::run(&args),
        Command::Rules(args) => rules::run(&args),
        Command::Verify(args) => verify::run(&args),
        Command::Version(args) => version::run(&args),
    }
}
