// mlchain-scaffold entry point

use std::{process::ExitCode, sync::Arc};

use anyhow::{Context, Result};
use clap::Parser;
use mlchain_scaffold::{ScaffoldConfig, ScaffoldGenerator, TemplateCatalog};
use mlchain_scaffold_cli::{
    commands::{ListCommand, NewCommand},
    logging,
    output::{self, OutputStyle},
    Cli, Commands,
};
use tracing::info;

#[tokio::main]
async fn main() -> ExitCode {
    match run(Cli::parse()).await {
        Ok(code) => code,
        Err(e) => {
            output::print_error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let config =
        ScaffoldConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    logging::init_logging(logging::effective_level(
        &config.log_level,
        cli.verbose,
        cli.quiet,
    ));

    let catalog = Arc::new(
        TemplateCatalog::load(&config.template_dirs).context("failed to load templates")?,
    );
    let style = OutputStyle::default();

    match cli.command {
        Commands::List { json } => {
            println!("{}", ListCommand::new(json).execute(&catalog, &style)?);
            Ok(ExitCode::SUCCESS)
        }
        Commands::New(args) => {
            let generator = Arc::new(ScaffoldGenerator::with_config(catalog, &config));
            let command = NewCommand::new(args);
            let reports = command.execute(generator).await?;
            println!("{}", command.render(&reports, &style)?);

            let failed: usize = reports.iter().map(|r| r.result.failed.len()).sum();
            info!(plugins = reports.len(), failed, "Scaffolding complete");
            Ok(if failed == 0 {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}
