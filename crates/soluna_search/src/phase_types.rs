//! Types for lunar phase searches.

use soluna_ephem::Instant;

/// Target Sun–Moon elongation for a phase search, in degrees of ecliptic
/// longitude difference (Moon − Sun, normalized to [0, 360)).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PhaseAngle {
    /// Elongation 0° (conjunction).
    NewMoon,
    /// Elongation 90° (waxing quarter).
    FirstQuarter,
    /// Elongation 180° (opposition).
    FullMoon,
    /// Elongation 270° (waning quarter).
    LastQuarter,
    /// Any elongation in degrees; normalized to [0, 360).
    Custom(f64),
}

impl PhaseAngle {
    /// The target elongation in [0, 360) degrees.
    pub fn angle_deg(&self) -> f64 {
        match self {
            Self::NewMoon => 0.0,
            Self::FirstQuarter => 90.0,
            Self::FullMoon => 180.0,
            Self::LastQuarter => 270.0,
            Self::Custom(deg) => deg.rem_euclid(360.0),
        }
    }
}

/// A resolved phase event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseEvent {
    /// Time of the event.
    pub instant: Instant,
    /// The elongation that was matched, in [0, 360) degrees.
    pub angle_deg: f64,
    /// Geocentric ecliptic longitude of the Moon at the event, degrees.
    pub moon_longitude_deg: f64,
    /// Geocentric ecliptic longitude of the Sun at the event, degrees.
    pub sun_longitude_deg: f64,
}
