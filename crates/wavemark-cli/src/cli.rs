use clap::{Parser, Subcommand};

use crate::commands::*;
use crate::CliResult;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Embed(embed::EmbedArgs),
    Extract(extract::ExtractArgs),
    Capacity(capacity::CapacityArgs),
}

impl Commands {
    pub fn run(self) -> CliResult<()> {
        match self {
            Commands::Embed(args) => args.run(),
            Commands::Extract(args) => args.run(),
            Commands::Capacity(args) => args.run(),
        }
    }
}
