#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod config;
mod session;
mod telemetry;

use std::io;
use std::process;

use anyhow::Context;

use crate::config::Cli;
use crate::session::{RecordSource, Session};

// Tracing target constants
pub const TRACING_TARGET_STARTUP: &str = "pagewin_cli::startup";
pub const TRACING_TARGET_SHUTDOWN: &str = "pagewin_cli::shutdown";
pub const TRACING_TARGET_CONFIG: &str = "pagewin_cli::config";
pub const TRACING_TARGET_SESSION: &str = "pagewin_cli::session";

fn main() {
    let Err(error) = run() else {
        tracing::info!(
            target: TRACING_TARGET_SHUTDOWN,
            "session finished"
        );
        process::exit(0);
    };

    if tracing::enabled!(tracing::Level::ERROR) {
        tracing::error!(
            target: TRACING_TARGET_SHUTDOWN,
            error = %error,
            "session terminated with error"
        );
    } else {
        eprintln!("Error: {error:#}");
    }

    process::exit(1);
}

/// Main application entry point.
fn run() -> anyhow::Result<()> {
    let cli = Cli::init();

    telemetry::init_tracing()?;
    cli.log();
    cli.validate()?;

    let source = RecordSource::new(&cli.records);
    let mut session =
        Session::open(cli.window, source).context("failed to open paging session")?;

    let input = io::stdin().lock();
    let mut output = io::stdout().lock();
    session.run(input, &mut output)?;

    tracing::debug!(
        target: TRACING_TARGET_SESSION,
        current_page = session.window().current_page(),
        page_size = session.window().page_size(),
        "final page window"
    );

    Ok(())
}
