//! Formprobe - Main Entry Point
//!
//! Parses arguments, installs logging, wires the adapters into the suite
//! runner and maps the results to an exit status.

mod cli;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use formprobe_application::{Confirm, ProbeCase, RunSuite};
use formprobe_infrastructure::{
    AssumeYes, ConsoleReporter, ReqwestFormClient, StdinConfirm, SystemClock,
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, ProbeConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let config = ProbeConfig::from(Cli::parse());

    // Logs go to stderr so they never interleave with the report.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!(
        "formprobe v{} probing {}",
        env!("CARGO_PKG_VERSION"),
        config.target
    );

    let client = Arc::new(ReqwestFormClient::new()?);
    let probe = ProbeCase::new(client, config.target.clone()).with_timeout(config.timeout);
    let suite = RunSuite::new(probe, Arc::new(SystemClock::new()))
        .with_include_disabled(config.include_disabled);

    let confirm: Box<dyn Confirm> = if config.assume_yes {
        Box::new(AssumeYes)
    } else {
        Box::new(StdinConfirm::new())
    };
    let mut reporter = ConsoleReporter::stdout();

    let results = suite.run(confirm.as_ref(), &mut reporter).await?;

    if config.should_fail(&results) {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
