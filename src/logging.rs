// File-based logging via tracing. The terminal belongs to the UI, so everything
// goes to <data dir>/tubegrid/tubegrid.log instead.

use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::rolling;
use tracing_subscriber::{filter::Directive, fmt, prelude::*, EnvFilter};

pub const LOG_FILE: &str = "tubegrid.log";

/// Directory holding the log file.
pub fn log_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tubegrid")
}

pub fn log_path() -> PathBuf {
    log_dir().join(LOG_FILE)
}

/// Crate-level directive for a configured level such as `"info"`.
/// `RUST_LOG` directives are layered on top of it.
pub fn crate_directive(level: &str) -> anyhow::Result<Directive> {
    let level = level.trim();
    format!("tubegrid={}", level)
        .parse()
        .with_context(|| format!("invalid log level {:?}", level))
}

pub fn init(level: &str) -> anyhow::Result<()> {
    let directive = crate_directive(level)?;
    let data_dir = log_dir();
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("creating log directory {}", data_dir.display()))?;

    let file_appender = rolling::never(&data_dir, LOG_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(false),
        )
        .with(EnvFilter::from_default_env().add_directive(directive))
        .init();

    // The guard must outlive the program; leak it so the file writer stays open.
    std::mem::forget(guard);
    tracing::info!(
        path = %log_path().display(),
        version = env!("CARGO_PKG_VERSION"),
        "logging initialised"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_file_lives_under_crate_dir() {
        let path = log_path();
        assert!(path.ends_with("tubegrid/tubegrid.log"));
    }

    #[test]
    fn configured_level_scopes_to_crate() {
        let directive = crate_directive(" info ").unwrap();
        assert_eq!(directive.to_string(), "tubegrid=info");
    }

    #[test]
    fn unknown_level_is_rejected() {
        assert!(crate_directive("loud").is_err());
    }
}
