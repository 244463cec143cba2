//! Domain library for the VeriFit recruiting platform's assessment backend.
//!
//! The `workflows::big5` module tree owns the Big Five inventory, response
//! collection, scoring, interpretation, and chart geometry. Process-level
//! concerns (configuration, telemetry, HTTP error mapping) live alongside it
//! so service binaries only wire adapters together.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
