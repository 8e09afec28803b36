mod cli;
mod commands;

use clap::Parser;

use crate::cli::CliArgs;

pub type CliResult<T> = wavemark_core::Result<T>;

fn main() -> CliResult<()> {
    env_logger::init();

    CliArgs::parse().command.run()
}
