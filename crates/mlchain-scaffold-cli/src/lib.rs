//! Command line front end for the mlchain plugin scaffolder
//!
//! Parses arguments into [`PluginSpec`](mlchain_scaffold::PluginSpec)
//! requests and hands them to the scaffolding engine.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod output;

pub use cli::{Cli, Commands, NewArgs};
