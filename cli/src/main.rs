//! morph CLI
//!
//! Reshapes JSON event records with line-oriented scripts.

use std::io;

use clap::Parser;

mod args;
mod logging;
mod run;

use args::{Cli, Command};

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    // Logs go to stderr so stdout is clean for records
    logging::init_logging(args.log_level)?;

    match args.command {
        Command::Run(run_args) => {
            let stats = run::execute_run(run_args)?;

            eprintln!();
            eprintln!("Session completed:");
            eprintln!("  Messages received:   {}", stats.received);
            eprintln!("  Records forwarded:   {}", stats.forwarded);
            eprintln!("  Payloads skipped:    {}", stats.skipped);
            eprintln!("  Missing scripts:     {}", stats.missing_scripts);
            eprintln!("  Commands skipped:    {}", stats.skipped_commands);
        }
        Command::Apply(apply_args) => run::execute_apply(apply_args, &mut io::stdout().lock())?,
        Command::Check(check_args) => run::execute_check(check_args, &mut io::stdout().lock())?,
    }

    Ok(())
}
