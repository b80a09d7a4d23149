//! Error types for the event search engine.

use std::error::Error;
use std::fmt::{Display, Formatter};

use soluna_ephem::EphemError;

/// Errors from search-boundary validation or exhausted refinement.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    /// Observer location failed validation before the search started.
    InvalidLocation(&'static str),
    /// Malformed search parameter (window limit, custom angle).
    InvalidParameter(&'static str),
    /// The scan cap was reached without locating the requested event.
    NoConvergence(&'static str),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
            Self::InvalidParameter(msg) => write!(f, "invalid parameter: {msg}"),
            Self::NoConvergence(msg) => write!(f, "no convergence: {msg}"),
        }
    }
}

impl Error for SearchError {}

impl From<EphemError> for SearchError {
    fn from(e: EphemError) -> Self {
        match e {
            EphemError::InvalidLocation(msg) => Self::InvalidLocation(msg),
        }
    }
}
