//! Error types for the solar clock computation

use thiserror::Error;

/// Errors detected while validating trip input or building the route.
///
/// The whole pipeline is a pure deterministic computation, so none of these
/// are retryable; any of them aborts the run before a partial result is
/// produced.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("invalid coordinate: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    #[error("departure and arrival are antipodal; the great circle between them is ambiguous")]
    AntipodalRoute,

    #[error("flying time must be positive, got {0} minutes")]
    NonPositiveDuration(f64),
}
