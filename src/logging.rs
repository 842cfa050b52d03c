// logging.rs - tracing subscriber setup
//
// Log level can be overridden with `LIFE_LOG`, e.g. `LIFE_LOG=conway_live=debug`
// to see every tick.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::Result;

pub const LOG_ENV: &str = "LIFE_LOG";
const DEFAULT_FILTER: &str = "conway_live=info";

pub fn init_logging() -> Result<()> {
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let console_layer = fmt::layer()
        .compact()
        .with_target(true)
        .with_thread_names(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .try_init()?;
    Ok(())
}
