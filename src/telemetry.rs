//! Tracing subscriber setup.
//!
//! `RUST_LOG` wins over the configured `log_level`. Production emits JSON
//! lines; every other environment gets the pretty human format.

use tracing_subscriber::prelude::*;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::ServerConfig;

/// Installs the global subscriber. Fails if one is already set.
pub fn init_tracing(server: &ServerConfig) -> Result<(), TryInitError> {
    let registry = tracing_subscriber::registry().with(env_filter(server));

    if server.is_production() {
        registry
            .with(fmt::layer().json().with_target(true).with_current_span(true))
            .try_init()
    } else {
        registry.with(fmt::layer().pretty().with_target(false)).try_init()
    }
}

fn env_filter(server: &ServerConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&server.log_level))
}
