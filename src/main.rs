mod cli;
mod extractor;
mod fetcher;
mod graph;
mod navigator;
mod report;
mod stats;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use cli::Cli;
use fetcher::HttpFetcher;
use graph::GraphExporter;
use navigator::Navigator;
use std::ffi::OsString;
use std::io::{self, Write};
use std::time::Duration;

fn main() {
    env_logger::init();

    let cli = match parse_args(std::env::args_os(), &mut io::stdout()) {
        Ok(Some(cli)) => cli,
        Ok(None) => return,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// Returns `None` when there is nothing to walk: bad arguments get the usage
/// line, `--help` and `--version` get their usual text, all on `out`.
fn parse_args<I, T, W>(args: I, out: &mut W) -> io::Result<Option<Cli>>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Ok(Some(cli)),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            write!(out, "{}", e.render())?;
            Ok(None)
        }
        Err(e) => {
            log::debug!("Rejected arguments: {}", e);
            writeln!(out, "{}", Cli::command().render_usage())?;
            Ok(None)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    log::info!("Starting walk from {} (max {} hops)", cli.start_url, cli.max_hops);

    let navigator = Navigator::new(HttpFetcher::new()?)?
        .with_max_hops(cli.max_hops)
        .with_delay(Duration::from_millis(cli.delay_ms));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let navigation = navigator.run(&cli.start_url, &mut out)?;
    report::write_report(&navigation.outcome, &mut out).context("Failed to write report")?;
    out.flush()?;

    let exporter = GraphExporter::new(&navigation);
    if let Some(path) = &cli.export_dot {
        exporter.export_dot(path)?;
    }
    if let Some(path) = &cli.export_json {
        exporter.export_json(path)?;
    }

    Ok(())
}
