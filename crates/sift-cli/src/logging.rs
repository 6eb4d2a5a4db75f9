//! Logging.

use super::*;

use std::fmt;

use colored::{ColoredString, Colorize};
use tracing::{Event, Level, Subscriber, level_filters::LevelFilter};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::fmt::{
    FmtContext,
    format::{self, FormatEvent, FormatFields},
};

/// Get string for a level.
fn get_level_string(level: Level) -> &'static str {
    match level {
        Level::TRACE => "TRC",
        Level::DEBUG => "DBG",
        Level::INFO => "INF",
        Level::WARN => "WRN",
        Level::ERROR => "ERR",
    }
}

/// Get string for a level, ANSI colored.
fn get_level_string_colored(level: Level) -> ColoredString {
    let level = match level {
        Level::TRACE => get_level_string(level).cyan(),
        Level::DEBUG => get_level_string(level).magenta(),
        Level::INFO => get_level_string(level).blue(),
        Level::WARN => get_level_string(level).yellow(),
        Level::ERROR => get_level_string(level).red(),
    };
    level.bold()
}

/// Formatter for the cli.
struct CliFormatter;

impl<S, N> FormatEvent<S, N> for CliFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: format::Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let metadata = event.metadata();
        write!(
            &mut writer,
            "{} :: ",
            get_level_string_colored(*metadata.level()),
        )?;

        let now_string =
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S").to_string();
        write!(&mut writer, "{} :: ", now_string.green())?;

        write!(&mut writer, "{} :: ", metadata.target().green().bold())?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)?;
        Ok(())
    }
}

/// Formatter for the log file.
struct FileFormatter;

impl<S, N> FormatEvent<S, N> for FileFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: format::Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let metadata = event.metadata();
        write!(&mut writer, "{} :: ", get_level_string(*metadata.level()),)?;

        let now_string =
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S").to_string();
        write!(&mut writer, "{} :: ", now_string)?;

        write!(&mut writer, "{} :: ", metadata.target())?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)?;
        Ok(())
    }
}

/// Setup logging.
pub fn setup_logging(cli: &Cli, config: &Config) -> Result<()> {
    let level = match cli.verbose {
        true => Level::TRACE,
        false => match cli.debug {
            true => Level::DEBUG,
            false => Level::INFO,
        },
    };
    let filter = tracing_subscriber::filter::Targets::new()
        .with_default(LevelFilter::OFF)
        .with_target("sift", level)
        .with_target("sift_feeds", level);

    // CLI layer (to stderr).
    let cli_layer = tracing_subscriber::fmt::layer()
        .event_format(CliFormatter)
        .with_writer(std::io::stderr)
        .with_filter(filter.clone());

    // File layer.
    let file_layer = match config.log.as_ref() {
        Some(log_file) => {
            let filename = match shellexpand::full(log_file) {
                Ok(filename) => filename.into_owned(),
                Err(e) => {
                    bail!("Unable to expand log file {}: {}", log_file, e)
                }
            };
            let path = PathBuf::from(&filename);
            if let Some(parent_dir) = path.parent() {
                if let Err(e) = std::fs::create_dir_all(parent_dir) {
                    bail!(
                        "Unable to initialize path for {}: {}",
                        filename,
                        e
                    );
                }
            }
            let file = match std::fs::OpenOptions::new()
                .append(true)
                .create(true)
                .open(&filename)
            {
                Ok(file) => file,
                Err(e) => {
                    bail!("Failed to create log file {}: {}", filename, e)
                }
            };
            Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(file)
                    .event_format(FileFormatter)
                    .with_filter(filter),
            )
        }
        None => None,
    };

    let subscriber = tracing_subscriber::Registry::default()
        .with(cli_layer)
        .with(file_layer);
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        bail!("Unable to initialize logging.");
    }

    Ok(())
}
