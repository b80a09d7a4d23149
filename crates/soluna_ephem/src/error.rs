//! Error types for the position oracle.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from observer-geometry validation.
#[derive(Debug, Clone, PartialEq)]
pub enum EphemError {
    /// Latitude or longitude is missing, non-finite, or out of range.
    InvalidLocation(&'static str),
}

impl Display for EphemError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
        }
    }
}

impl Error for EphemError {}
