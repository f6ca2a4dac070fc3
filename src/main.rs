use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use keymatch::accelerator::{key_match, load_config_file, parse_accelerator};
use keymatch::config_paths;

mod cli;

use cli::{CliArgs, CliCommand};

fn main() -> ExitCode {
    let args = CliArgs::parse();
    keymatch::tracing::init(if args.verbose { "debug" } else { "warn" });

    match run(args.command) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

/// Run one subcommand. `Ok(false)` means "ran fine, nothing matched".
fn run(command: CliCommand) -> Result<bool> {
    match command {
        CliCommand::Check {
            pattern,
            event,
            platform,
        } => {
            let input = event.to_key_input();
            let matched = key_match(&input, &pattern, &platform)?;
            tracing::debug!(%pattern, event = %input, %platform, matched, "check");
            println!("{}", if matched { "match" } else { "no match" });
            Ok(matched)
        }

        CliCommand::Parse {
            pattern,
            platform,
            json,
        } => {
            let parsed = parse_accelerator(&pattern, &platform)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&parsed)?);
            } else if parsed.is_inert() {
                println!("(never matches)");
            } else {
                println!("{}", parsed);
            }
            Ok(true)
        }

        CliCommand::Dispatch { event, config } => {
            let path = match config {
                Some(path) => path,
                None => config_paths::shortcuts_file()
                    .context("No config directory available; pass --config")?,
            };
            let shortcuts = load_config_file(&path)
                .with_context(|| format!("Failed to load shortcuts from {}", path.display()))?;
            tracing::info!(
                "Loaded {} bindings from {}",
                shortcuts.bindings.len(),
                path.display()
            );

            let input = event.to_key_input();
            let commands = shortcuts.matching_commands(&input);
            for command in &commands {
                println!("{}", command);
            }
            Ok(!commands.is_empty())
        }
    }
}
