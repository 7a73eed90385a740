use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

use crate::{Error, Result};

/// Filter directives in this variable win over the configured level.
pub const LOG_ENV: &str = "MERIDIAN_LOG";

/// Install the stderr subscriber. Stdout belongs to the dashboard itself.
pub fn init(level: &str) -> Result<()> {
    let filter = build_filter(std::env::var(LOG_ENV).ok(), level)?;
    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(true).with_filter(filter);

    tracing_subscriber::registry().with(stderr_layer).try_init().map_err(|e| Error::Logging(e.to_string()))?;

    tracing::debug!(target: "meridian::logging", level, "logging initialized");
    Ok(())
}

fn build_filter(env_directives: Option<String>, level: &str) -> Result<EnvFilter> {
    let directives = match env_directives {
        Some(directives) if !directives.trim().is_empty() => directives,
        _ => level.to_string(),
    };
    EnvFilter::try_new(&directives).map_err(|e| Error::Logging(format!("'{directives}': {e}")))
}

#[cfg(test)]
pub fn init_for_tests() {
    use std::sync::Once;

    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let filter = EnvFilter::from_default_env().add_directive("meridian=debug".parse().unwrap());

        tracing_subscriber::fmt().with_env_filter(filter).with_test_writer().init();
    });
}
