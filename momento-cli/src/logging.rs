use anyhow::{Context, Result};
use std::{fs::OpenOptions, io, path::Path, sync::Mutex};
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. `RUST_LOG` overrides the default level, which is
/// `info` for a log file and `warn` on stderr so progress output stays readable.
pub fn init_logging(log_file: Option<&Path>) -> Result<()> {
    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(default_level(true)))
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(default_level(false)))
                .with_writer(io::stderr)
                .init();
        }
    }
    Ok(())
}

fn default_level(to_file: bool) -> &'static str {
    if to_file { "info" } else { "warn" }
}

fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}
