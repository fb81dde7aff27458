//! pixedit - command line front end for the pixel transform engine.
//!
//! With a subcommand, runs that one operation and saves the result. Without
//! one, falls back to the interactive prompt.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use pixedit_core::decode::decode_file;

mod cli;
mod interactive;
mod logging;
mod operation;

use crate::cli::{Cli, Command, RunConfig};
use crate::operation::{save, Outcome};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = RunConfig::from(&cli);
    logging::init(config.log_level);
    debug!("{:?}", config);

    match cli.command {
        Some(command) => run_command(command, &config),
        None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            interactive::run_session(stdin.lock(), stdout.lock(), &config)
                .context("interactive session failed")?;
            Ok(())
        }
    }
}

fn run_command(command: Command, config: &RunConfig) -> Result<()> {
    let (input, operation) = command.into_parts();
    let image =
        decode_file(&input).with_context(|| format!("failed to load {}", input.display()))?;

    let mut stdout = io::stdout().lock();
    match operation.run(&image, &mut stdout)? {
        Outcome::Printed => {}
        Outcome::Image(result) => {
            save(&result, &config.output, config.quality)?;
            writeln!(stdout, "Output saved to: {}", config.output.display())?;
        }
    }
    Ok(())
}
