mod commands;
mod domain;
mod services;
#[cfg(test)]
mod test_support;

use crate::commands::available_cmd::available_command;
use crate::commands::base_commands::{CliArgs, Commands};
use crate::commands::fee_cmd::fee_command;
use crate::commands::occupancy_cmd::occupancy_command;
use clap::{CommandFactory, Parser};
use clap_complete::generate;

fn main() {
    let args = CliArgs::parse();
    match args.command {
        cmd @ Commands::Occupancy { .. } => occupancy_command(cmd),
        cmd @ Commands::Available { .. } => available_command(cmd),
        cmd @ Commands::Fee { .. } => fee_command(cmd),
        Commands::Completions { shell } => {
            let mut cli = CliArgs::command();
            let name = cli.get_name().to_string();
            generate(shell, &mut cli, name, &mut std::io::stdout());
        }
    }
}
