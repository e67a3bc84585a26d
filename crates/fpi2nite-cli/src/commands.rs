use crate::args::Cli;
use crate::handlers;
use crate::logging;
use anyhow::{Context, Result};
use fpi2nite_runtime::{Config, RunRequest, StreamSelection, connect};
use fpi2nite_streams::FailurePolicy;
use fpi2nite_types::TimeWindow;
use tracing::debug;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.verbose);

    let config = Config::load(cli.config.as_deref()).context("Failed to load config")?;
    let request = build_request(&cli, &config)?;
    debug!(
        start = %request.window.start,
        end = %request.window.end,
        streams = request.streams.len(),
        "resolved request"
    );

    let index = connect(&config)?;

    if cli.dry_run {
        return handlers::count::handle(&index, &request);
    }

    let ndays = resolve_ndays(&cli, &config);
    handlers::fetch::handle(&index, &request, cli.outcsv.as_deref(), cli.format, ndays)
}

fn resolve_ndays(cli: &Cli, config: &Config) -> u32 {
    cli.ndays.unwrap_or(config.extract.ndays)
}

fn build_request(cli: &Cli, config: &Config) -> Result<RunRequest> {
    let ndays = resolve_ndays(cli, config);
    let on_failure = if cli.skip_malformed {
        FailurePolicy::SkipPacket
    } else {
        config.extract.on_malformed
    };

    Ok(RunRequest {
        streams: StreamSelection::from_flags(cli.asassn, cli.fermi, cli.swift),
        window: TimeWindow::lookback(ndays, cli.ref_date)?,
        on_failure,
    })
}
