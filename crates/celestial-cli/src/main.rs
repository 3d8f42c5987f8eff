//! `celestial`: the terminal front end.

mod args;
mod commands;
mod error;
mod loading;
mod session;
mod terminal;

use std::io;
use std::process::ExitCode;

use celestial_adapters::gemini::GeminiGateway;
use celestial_adapters::geolocation::{DisabledLocator, IpGeolocator};
use celestial_core::clock::SystemClock;
use celestial_core::location::LocationProvider;
use clap::Parser;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

use crate::args::Args;
use crate::session::Session;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Logs go to stderr so they never interleave with the report on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .compact()
        .init();

    let gateway = GeminiGateway::new(args.gemini());
    let locator: Box<dyn LocationProvider> = match &args.location_lookup_url {
        Some(url) => Box::new(IpGeolocator::new(url.clone())),
        None => Box::new(DisabledLocator),
    };
    let session = Session {
        clock: &SystemClock,
        locator: locator.as_ref(),
        gateway: &gateway,
        probe_timeout: args.probe_timeout(),
    };

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = io::stdout().lock();
    match session.run(stdin, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "session ended");
            eprintln!("celestial: {e}");
            ExitCode::FAILURE
        }
    }
}
