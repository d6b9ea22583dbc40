mod cli;
mod commands;
mod logging;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands};
use commands::CommandContext;
use tracing::debug;

fn main() -> anyhow::Result<()> {
    ctrlc::set_handler(|| {
        eprintln!("\n\nInterrupted by user (Ctrl+C)");
        std::process::exit(130); // Standard exit code for SIGINT
    })
    .context("Failed to set Ctrl+C handler")?;

    let cli = Cli::parse();

    logging::init_logging(cli.verbose)?;
    debug!(config = ?cli.config, no_config = cli.no_config, "verbose mode enabled");

    let ctx = CommandContext::load(cli.config.as_deref(), cli.no_config, cli.verbose)
        .context("Failed to load configuration")?;

    match &cli.command {
        Commands::Rules {
            rules,
            consolidate,
            force,
            target,
        } => {
            commands::Rules::execute(rules, *consolidate, *force, target, &ctx)
                .context("Failed to execute rules command")?;
        }
        Commands::Base => {
            commands::Base::execute(&ctx).context("Failed to generate base rules")?;
        }
        Commands::Init {
            tool,
            language,
            base_only,
            lang_only,
        } => {
            commands::Init::execute(
                tool.as_deref(),
                language.as_deref(),
                *base_only,
                *lang_only,
                &ctx,
            )
            .context("Failed to execute init command")?;
        }
        Commands::Status { target } => {
            commands::Status::execute(target, &ctx).context("Failed to execute status command")?;
        }
        Commands::List => {
            commands::List::execute(&ctx).context("Failed to execute list command")?;
        }
        Commands::Diff { rules, target } => {
            commands::Diff::execute(rules, target, &ctx)
                .context("Failed to execute diff command")?;
        }
        Commands::Config => {
            commands::Config::execute(&ctx).context("Failed to execute config command")?;
        }
    }

    Ok(())
}
