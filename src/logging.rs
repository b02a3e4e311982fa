//! Tracing setup
//!
//! Filters come from `RUST_LOG`, falling back to `dawdle=info`. Events go to
//! stderr, or to a file when one is given (the TUI owns the terminal).

use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const DEFAULT_FILTER: &str = "dawdle=info";

fn filter_from(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

fn env_filter() -> EnvFilter {
    filter_from(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref())
}

/// Install the global subscriber
///
/// # Errors
/// Returns an error if the log file cannot be created.
pub fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let filter = env_filter();
    let directives = filter.to_string();
    let registry = tracing_subscriber::registry().with(filter);

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            registry
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .try_init()?;
        }
        None => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init()?,
    }

    debug!(filter = %directives, "tracing ready");
    Ok(())
}

/// Stderr logging for one-shot commands, nothing for the TUI unless a file is given
///
/// # Errors
/// Returns an error if the log file cannot be created.
pub fn init_for(interactive: bool, log_file: Option<&Path>) -> Result<()> {
    if interactive && log_file.is_none() {
        return Ok(());
    }
    init_tracing(log_file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_defaults_to_crate_info() {
        assert_eq!(filter_from(None).to_string().to_lowercase(), "dawdle=info");
        assert_eq!(
            filter_from(Some("dawdle=debug")).to_string().to_lowercase(),
            "dawdle=debug"
        );
    }
}
