// error.rs - Failures that can stop the app from starting

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LifeError {
    #[error("failed to start the async runtime: {0}")]
    Runtime(#[from] std::io::Error),

    #[error("window error: {0}")]
    Window(#[from] eframe::Error),

    #[error("failed to install log subscriber: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
}

pub type Result<T> = std::result::Result<T, LifeError>;
