/*!
 * Command-line interface for projdump
 */

use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use projdump::config::{Args, Config};
use projdump::dumper::Dumper;
use projdump::report::{DumpReport, Reporter};

fn main() -> io::Result<()> {
    // Logs go to stderr; RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = Config::from_args(args);
    config.validate()?;

    let progress = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template(
        "{spinner:.green} {prefix:.bold.cyan} {pos} files {wide_msg:.dim.white} ⏱️  {elapsed_precise}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_spinner());
    progress.set_style(style);
    progress.enable_steady_tick(Duration::from_millis(100));
    progress.set_prefix("📂 Dumping");
    progress.set_message(config.root.display().to_string());

    let dumper = Dumper::new(config.clone()).with_progress(Arc::new(progress.clone()));

    let start_time = Instant::now();
    let result = dumper.dump();
    progress.finish_and_clear();
    let statistics = result?;

    let report = DumpReport {
        output_file: config.output.display().to_string(),
        duration: start_time.elapsed(),
        statistics,
    };
    Reporter::new().print_report(&report);

    Ok(())
}
