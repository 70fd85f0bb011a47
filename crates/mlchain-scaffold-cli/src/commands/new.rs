// Generate plugin scaffolds

use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use mlchain_scaffold::{validate_plugin_name, GenerationResult, PluginSpec, ScaffoldGenerator};
use serde::Serialize;
use tokio::task::JoinSet;
use tracing::debug;

use crate::{cli::NewArgs, output::OutputStyle};

/// Outcome of generating one plugin
#[derive(Debug, Clone, Serialize)]
pub struct PluginReport {
    /// Plugin name as given on the command line
    pub name: String,
    /// Directory the plugin was generated into
    pub root: PathBuf,
    /// Generation outcome
    pub result: GenerationResult,
}

/// Generates every requested plugin concurrently
pub struct NewCommand {
    args: NewArgs,
}

impl NewCommand {
    pub fn new(args: NewArgs) -> Self {
        Self { args }
    }

    fn spec(&self, name: &str) -> PluginSpec {
        let mut spec = PluginSpec::new(name, self.args.category, self.args.language.clone());
        spec.author = self.args.author.clone();
        spec.description = self.args.description.clone();
        spec
    }

    /// Run generation, one blocking task per plugin name
    ///
    /// Reports come back in command line order. Every name and the
    /// category/language pair are checked before any task starts, so an
    /// invalid name or unsupported pair fails the command with nothing
    /// written.
    pub async fn execute(&self, generator: Arc<ScaffoldGenerator>) -> Result<Vec<PluginReport>> {
        self.preflight(&generator)?;

        let generator = if self.args.dry_run && !generator.is_dry_run() {
            Arc::new(generator.as_ref().clone().dry_run(true))
        } else {
            generator
        };
        let mut tasks = JoinSet::new();

        for (index, name) in self.args.names.iter().enumerate() {
            let generator = Arc::clone(&generator);
            let spec = self.spec(name);
            let root = self.args.output.join(name);
            debug!(name = %name, root = %root.display(), "Spawning generation task");

            tasks.spawn_blocking(move || {
                let result = generator
                    .generate(&spec, &root)
                    .with_context(|| format!("failed to generate plugin '{}'", spec.name));
                (index, spec.name, root, result)
            });
        }

        let mut reports = Vec::with_capacity(self.args.names.len());
        while let Some(joined) = tasks.join_next().await {
            let (index, name, root, result) = joined.context("generation task panicked")?;
            reports.push((
                index,
                PluginReport {
                    name,
                    root,
                    result: result?,
                },
            ));
        }

        reports.sort_by_key(|(index, _)| *index);
        Ok(reports.into_iter().map(|(_, report)| report).collect())
    }

    fn preflight(&self, generator: &ScaffoldGenerator) -> Result<()> {
        for name in &self.args.names {
            validate_plugin_name(name)
                .with_context(|| format!("failed to generate plugin '{}'", name))?;
        }
        generator
            .catalog()
            .resolve(self.args.category, &self.args.language)
            .context("failed to generate plugins")?;
        Ok(())
    }

    /// Render reports for the terminal or as JSON
    pub fn render(&self, reports: &[PluginReport], style: &OutputStyle) -> Result<String> {
        if self.args.json {
            return serde_json::to_string_pretty(reports).context("failed to serialize results");
        }

        let mut lines = Vec::new();
        for report in reports {
            let result = &report.result;
            let verb = if result.dry_run { "Would write" } else { "Wrote" };
            lines.push(style.header(&format!("{} ({})", report.name, report.root.display())));
            for path in &result.written_files {
                lines.push(style.success(&format!("{} {}", verb, path.display())));
            }
            for skipped in &result.skipped {
                lines.push(style.warning(&format!(
                    "Skipped {}: {}",
                    skipped.path.display(),
                    skipped.reason
                )));
            }
            for failed in &result.failed {
                lines.push(style.error(&format!(
                    "Failed {}: {}",
                    failed.path.display(),
                    failed.message
                )));
            }
        }
        Ok(lines.join("\n"))
    }
}
