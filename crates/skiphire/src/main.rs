//! Skiphire: heavy waste skip selector.

use std::fs::File;
use std::sync::Mutex;

use anyhow::{Context, Result};
use skiphire_core::constants::exit_codes;
use skiphire_lib::{app, config};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Parse CLI args, then route logs away from the popup's terminal
    let config = config::AppConfig::parse();
    init_tracing(&config)?;

    let code = app::run(&config)?;
    if code != exit_codes::SUCCESS {
        std::process::exit(code);
    }
    Ok(())
}

fn env_filter() -> EnvFilter {
    EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
}

fn init_tracing(config: &config::AppConfig) -> Result<()> {
    if let Some(path) = &config.log_file {
        let file = File::create(path)
            .with_context(|| format!("cannot create log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else if config.is_interactive() {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_writer(std::io::sink)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_writer(std::io::stderr)
            .init();
    }
    Ok(())
}
