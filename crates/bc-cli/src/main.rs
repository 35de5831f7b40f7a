// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use anyhow::Result;
use bc_cli::{catalog, status, Cli, Commands, Parser, EXIT_DENIED};
use bc_guardrail::{Guardrail, Outcome};
use bc_logging::CliLogLevel;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = cli.logging.clone().init("brainctl", CliLogLevel::Warn) {
        eprintln!("warning: logging disabled: {err:#}");
    }

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            tracing::error!(error = %err, "Command failed");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let mut stdout = io::stdout().lock();

    match cli.command {
        Commands::Validate => {
            let runtime = cli.stack.resolve()?;
            eprintln!("{} is valid", runtime.app_path.display());
        }
        Commands::Show(args) => {
            let runtime = cli.stack.resolve()?;
            args.run(&runtime.app, &mut stdout)?;
        }
        Commands::Status => {
            let runtime = cli.stack.resolve()?;
            status::render(&runtime, &mut stdout)?;
        }
        Commands::Blueprints(args) => args.run(&mut stdout)?,
        Commands::Schema => catalog::print_schema(&mut stdout)?,
        Commands::Guard(args) => {
            let mut guardrail = Guardrail::standard();
            let outcome = args.run(&mut guardrail, &mut io::stderr())?;
            if let Outcome::Denied { .. } = outcome {
                return Ok(ExitCode::from(EXIT_DENIED));
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
