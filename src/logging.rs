//! Process-wide tracing setup.
//!
//! Logging starts before the config file is read so config loading itself
//! is logged. `RUST_LOG` wins when set; otherwise the filter starts at
//! `info` and is swapped for `app.log_level` once the config is loaded.

use tracing_subscriber::{fmt, prelude::*, reload, EnvFilter, Registry};

pub type LogHandle = reload::Handle<EnvFilter, Registry>;

/// Install the global subscriber. Returns a handle for later level changes
/// and whether `RUST_LOG` supplied the filter.
pub fn init() -> (LogHandle, bool) {
    let (filter, from_env) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, true),
        Err(_) => (EnvFilter::new("info"), false),
    };
    let (filter, handle) = reload::Layer::new(filter);
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
    (handle, from_env)
}

/// Replace the active filter with `level`.
pub fn set_level(handle: &LogHandle, level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(level)?;
    handle.reload(filter)?;
    Ok(())
}
