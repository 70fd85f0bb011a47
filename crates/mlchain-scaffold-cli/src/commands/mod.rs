// Command handlers for the scaffolder

pub mod list;
pub mod new;

pub use list::ListCommand;
pub use new::{NewCommand, PluginReport};
