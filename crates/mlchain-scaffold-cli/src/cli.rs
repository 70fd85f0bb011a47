// Argument parsing for the scaffolder

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use mlchain_scaffold::PluginCategory;

/// Scaffold starter projects for mlchain plugins
#[derive(Parser, Debug)]
#[command(name = "mlchain-scaffold")]
#[command(bin_name = "mlchain-scaffold")]
#[command(about = "Scaffold starter projects for mlchain plugins")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (default: <config dir>/mlchain-scaffold/config.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Generate one or more plugin scaffolds
    #[command(about = "Generate plugin scaffolds, one directory per name")]
    New(NewArgs),

    /// List registered category and language pairs
    #[command(about = "List the category and language pairs templates exist for")]
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug, Clone)]
pub struct NewArgs {
    /// Plugin names; each is generated into <output>/<name>
    #[arg(value_name = "NAME", required = true)]
    pub names: Vec<String>,

    /// Plugin category (tool, tool-provider, model-provider, agent-strategy)
    #[arg(short, long, default_value = "tool", value_parser = parse_category)]
    pub category: PluginCategory,

    /// Implementation language
    #[arg(short, long, default_value = "python")]
    pub language: String,

    /// Directory the plugin directories are created in
    #[arg(short, long, default_value = ".", value_name = "DIR")]
    pub output: PathBuf,

    /// Author written to the manifest
    #[arg(long)]
    pub author: Option<String>,

    /// Description written to the manifest
    #[arg(long)]
    pub description: Option<String>,

    /// Render and check conflicts without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,
}

fn parse_category(s: &str) -> Result<PluginCategory, String> {
    s.parse()
}
