mod config;
mod console;
mod models;
mod report;
mod storage;
mod store;
mod types;

use std::io::{stderr, stdin, stdout};

use anyhow::Result;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::config::Config;
use crate::console::Session;
use crate::storage::FileStorage;

fn main() -> Result<()> {
    let config = Config::from_args(std::env::args().skip(1));

    setup_logging(config.log_level);

    info!("Using ledger file {}", config.ledger_path.display());

    let storage = FileStorage::new(&config.ledger_path);
    let mut session = Session::new(storage, stdin().lock(), stdout().lock());

    session.load()?;
    session.run()?;

    Ok(())
}

fn setup_logging(level: LevelFilter) {
    //NOTE: The menu owns stdout, logging goes to stderr so the two never interleave on redirect
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
