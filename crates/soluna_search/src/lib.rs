//! Event search engine for Sun/Moon phenomena.
//!
//! This crate provides:
//! - [`QuadraticFit`]: three-sample parabola fitting with tagged zero
//!   crossings and extrema
//! - [`SearchWindow`]: directed, optionally bounded scan descriptors
//! - [`compute_times`]: rise/set/noon/nadir with circumpolar detection
//! - [`compute_phase`] / [`next_phase`] / [`prev_phase`]: lunar phase
//!   instants by target elongation
//!
//! The engine treats `soluna_ephem`'s position oracle as an opaque scalar
//! function of time: nothing here knows how altitudes are produced, only
//! that they are smooth enough for quadratic bracketing.

pub mod error;
pub mod interpolator;
pub mod phase;
pub mod phase_types;
pub mod riseset;
pub mod riseset_types;
pub mod window;

pub use error::SearchError;
pub use interpolator::{Crossing, CrossingKind, Extremum, ExtremumKind, QuadraticFit};
pub use phase::{compute_phase, next_phase, prev_phase};
pub use phase_types::{PhaseAngle, PhaseEvent};
pub use riseset::compute_times;
pub use riseset_types::{DayState, EventTimes, Target};
pub use window::{Direction, SearchWindow, WindowLimit};
