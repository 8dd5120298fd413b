use anyhow::{Context, Result};
use clap::Parser;
use cowguess::{build_report, reporter_for, Cli, Config, Session};
use std::io;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default = if verbose { "cowguess=debug" } else { "cowguess=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Load config and apply CLI overrides
    let mut config = Config::load_from(cli.config.as_deref())?;
    cli.apply_to_config(&mut config);
    config.validate().context("Invalid configuration")?;

    if cli.verbose {
        eprintln!("Configuration: {:?}", config);
    }

    if !cli.skip_bench {
        eprintln!(
            "Running benchmarks ({} iterations, {} rounds)...",
            config.benchmark.iterations, config.benchmark.rounds
        );
    }
    let report = build_report(&config, cli.skip_bench)?;
    if !report.self_check_passed() {
        tracing::warn!("detectors disagree with known answers");
    }

    reporter_for(&config.report)
        .report(&report)
        .context("Failed to write report")?;

    if cli.no_interactive {
        return Ok(());
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(config.report.explain)
        .run(stdin.lock(), &mut stdout.lock())
        .context("Failed to read guesses")?;

    Ok(())
}
