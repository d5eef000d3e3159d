//! # `collector`: gather articles and stream them to the ingestion server
//!
//! Runs one ingestion session: every registered data source is fetched in
//! order and its articles are framed, sent, and acknowledged over the
//! server's Unix domain socket. Sources are separated on the wire by the
//! `NEXT` token; the session ends with `DONE`.
//!
//! ## Usage
//!
//! ```bash
//! collector [OPTIONS]
//!
//! # Example: default socket path, Guardian development key
//! collector
//!
//! # Example: explicit socket and a real API key from the environment
//! GUARDIAN_API_KEY=... collector --socket /run/newswire/uds_socket
//! ```
//!
//! Diagnostics go to stderr via `env_logger` (set `RUST_LOG=debug` for the
//! full exchange). The exit status is non-zero only for fatal conditions:
//! connection failure, socket I/O failure, or the server hanging up
//! mid-exchange. Skipped sources and dropped payloads are logged and counted
//! but do not fail the run.

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms, unused_qualifications)]

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use lib_newswire::collectors::guardian::GuardianCollector;
use lib_newswire::config::{
    DEFAULT_IO_TIMEOUT_SECS, DEFAULT_RETRY_BUDGET, DEFAULT_SOCKET_PATH,
};
use lib_newswire::{Collector, SessionDriver, Settings};

/// Command-line arguments for the collector binary.
#[derive(Parser, Debug)]
#[command(
    name = "collector",
    about = "Stream collected news articles to the ingestion server",
    version
)]
struct Args {
    /// Path of the ingestion server's Unix socket.
    #[arg(long, env = "NEWSWIRE_SOCKET", default_value = DEFAULT_SOCKET_PATH)]
    socket: PathBuf,

    /// Send attempts allowed per payload before it is dropped.
    #[arg(long, default_value_t = DEFAULT_RETRY_BUDGET)]
    retry_budget: u32,

    /// Socket read/write timeout, in seconds.
    #[arg(long, default_value_t = DEFAULT_IO_TIMEOUT_SECS)]
    io_timeout: u64,

    /// Guardian content API key. The public `test` key is fine for
    /// development traffic.
    #[arg(long, env = "GUARDIAN_API_KEY", default_value = "test")]
    guardian_key: String,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let args = Args::parse();
    let settings = Settings {
        socket_path: args.socket.clone(),
        retry_budget: args.retry_budget,
        io_timeout: Duration::from_secs(args.io_timeout),
    };

    // The ordered source registry for this run. Registration is process
    // configuration; one adapter instance per source per run.
    let mut registry: Vec<Box<dyn Collector>> =
        vec![Box::new(GuardianCollector::new(args.guardian_key))];

    let driver = SessionDriver::connect(&settings)
        .with_context(|| format!("connecting to {}", args.socket.display()))?;
    let report = driver.run(&mut registry).context("ingestion session failed")?;

    log::info!(
        "run finished: {} delivered, {} skipped, {} dropped",
        report.delivered,
        report.skipped,
        report.dropped
    );
    Ok(())
}
