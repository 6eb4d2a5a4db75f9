//! Sift.

mod cli;
mod config;
mod logging;
pub mod prelude;


use prelude::internal::*;
use prelude::*;

const DEFAULT_CONFIG_PATH: &str = "~/.config/sift/sift.toml";

/// Entry point for sift.
fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = match cli.parse_config() {
        Ok(config) => config,
        Err(e) => bail!("Failed to parse config:\n{e}"),
    };
    setup_logging(&cli, &config)?;

    let job = config.job(&cli)?;
    run(&job)
}

/// Run a single filter pass.
fn run(job: &Job) -> Result<()> {
    tracing::info!(
        "Filtering {} by category `{}`.",
        job.input.display(),
        job.category
    );
    let mut doc = FeedDocument::load(&job.input).with_context(|| {
        format!("Failed to read feed from {}", job.input.display())
    })?;
    let total = doc.entry_count();
    doc.retain_entries(&[include_category(job.category.clone())]);
    let kept = doc.entry_count();
    doc.write(&job.output).with_context(|| {
        format!("Failed to write feed to {}", job.output.display())
    })?;
    tracing::info!(
        "Wrote {} of {} entries to {}.",
        kept,
        total,
        job.output.display()
    );
    Ok(())
}
