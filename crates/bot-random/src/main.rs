use anyhow::Context;
use bot_random::{EngineConfig, RandomChooser, Session};
use std::fs::File;
use std::sync::Mutex;
use uci::stdio_engine;

/// Stdout carries the protocol, so logs go to a file truncated on start.
const LOG_FILE: &str = "uci.log";

fn main() -> anyhow::Result<()> {
    let log_file = File::create(LOG_FILE).with_context(|| format!("creating {}", LOG_FILE))?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();

    tracing::info!("Engine started");

    let config_path = EngineConfig::config_path();
    let config = EngineConfig::load_or_create(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;

    let mut session = Session::new(&config, RandomChooser::new());
    session.run(&mut stdio_engine())?;

    tracing::info!("Engine quit");
    Ok(())
}
