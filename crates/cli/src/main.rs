use std::process::ExitCode;

use clap::Parser;

mod commands;
mod printer;

use commands::Command;
use syswrap_runtime::logging;

#[derive(Debug, Parser)]
#[command(
    name = "syswrap",
    version,
    about = "Inspect and manipulate files through the syswrap accessors",
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

fn main() -> ExitCode {
    logging::init().ok();

    let cli = Cli::parse();
    match cli.command {
        Command::Stat(args) => commands::stat::run(args),
        Command::List(args) => commands::list::run(args),
        Command::Touch(args) => commands::touch::run(args),
        Command::Mkdir(args) => commands::mkdir::run(args),
        Command::Remove(args) => commands::remove::run(args),
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
