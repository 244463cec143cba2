//! Tracing bootstrap for the assessment binaries.
//!
//! `RUST_LOG` wins outright when set. Otherwise the configured level applies
//! process-wide, with scoring always allowed through at `warn`: anomaly
//! warnings signal a violated bank invariant and must not be filtered out by
//! a quiet default level.

use crate::config::TelemetryConfig;
use std::fmt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

const SCORING_DIRECTIVE: &str = "verifit::workflows::big5::scoring=warn";

#[derive(Debug)]
pub enum TelemetryError {
    Filter { directive: String, source: ParseError },
    Init(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::Filter { directive, .. } => {
                write!(f, "invalid log filter directive '{directive}'")
            }
            TelemetryError::Init(err) => write!(f, "failed to install subscriber: {err}"),
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::Filter { source, .. } => Some(source),
            TelemetryError::Init(err) => Some(&**err),
        }
    }
}

pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => base_directives(&config.log_level)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Init)
}

/// Builds the fallback filter from the configured level plus the pinned
/// scoring directive.
fn base_directives(level: &str) -> Result<EnvFilter, TelemetryError> {
    let directive = format!("{level},{SCORING_DIRECTIVE}");
    EnvFilter::try_new(&directive).map_err(|source| TelemetryError::Filter { directive, source })
}
