//! Types for rise/set and culmination searches.

use soluna_ephem::Instant;

/// Horizon definition for a rise/set search.
///
/// Each variant maps to a reference altitude the body's center must cross.
/// The two `Visual*` variants additionally account for the body's apparent
/// semidiameter and the observer's horizon dip; the fixed-angle variants
/// ignore both, matching the usual twilight definitions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Target {
    /// Upper limb touches the visible horizon (center at −semidiameter − dip).
    Visual,
    /// Lower limb touches the visible horizon (center at +semidiameter − dip).
    VisualLower,
    /// Geometric center at 0°.
    Horizon,
    /// Center at −6° (civil twilight).
    Civil,
    /// Center at −12° (nautical twilight).
    Nautical,
    /// Center at −18° (astronomical twilight).
    Astronomical,
    /// Center at +6° (photographic golden hour boundary).
    GoldenHour,
    /// Center at −4° (photographic blue hour boundary).
    BlueHour,
    /// Center at a caller-chosen altitude in degrees.
    Custom(f64),
}

impl Target {
    /// Reference altitude the body's center must cross, in degrees.
    ///
    /// `semidiameter_deg` is the apparent semidiameter at the evaluated
    /// instant; `dip_deg` the horizon dip for the observer's elevation.
    /// Both only enter for the `Visual*` variants.
    pub fn reference_altitude_deg(&self, semidiameter_deg: f64, dip_deg: f64) -> f64 {
        match self {
            Self::Visual => -semidiameter_deg - dip_deg,
            Self::VisualLower => semidiameter_deg - dip_deg,
            Self::Horizon => 0.0,
            Self::Civil => -6.0,
            Self::Nautical => -12.0,
            Self::Astronomical => -18.0,
            Self::GoldenHour => 6.0,
            Self::BlueHour => -4.0,
            Self::Custom(deg) => *deg,
        }
    }

    /// True for targets tied to the visible horizon rather than a fixed
    /// geometric altitude.
    pub fn uses_limb(&self) -> bool {
        matches!(self, Self::Visual | Self::VisualLower)
    }
}

/// Horizon-crossing behavior over the first scanned day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayState {
    /// The altitude crossed the reference at least once; rise/set are
    /// meaningful.
    Normal,
    /// The body stayed above the reference all day (polar day).
    AlwaysAbove,
    /// The body stayed below the reference all day (polar night).
    AlwaysBelow,
}

/// Results of a rise/set/culmination search.
///
/// Any event may be absent: a bounded window can end before an event is
/// reached, and under `AlwaysAbove`/`AlwaysBelow` no crossing exists at all
/// while noon and nadir are still reported.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventTimes {
    /// First upward crossing of the reference altitude in scan direction.
    pub rise: Option<Instant>,
    /// First downward crossing of the reference altitude in scan direction.
    pub set: Option<Instant>,
    /// Altitude maximum (upper culmination).
    pub noon: Option<Instant>,
    /// Altitude minimum (lower culmination).
    pub nadir: Option<Instant>,
    /// Classification of the first scanned day.
    pub day_state: DayState,
}

impl EventTimes {
    pub(crate) fn empty(day_state: DayState) -> Self {
        Self {
            rise: None,
            set: None,
            noon: None,
            nadir: None,
            day_state,
        }
    }

    /// True once every requested slot is filled.
    pub fn is_complete(&self) -> bool {
        self.rise.is_some() && self.set.is_some() && self.noon.is_some() && self.nadir.is_some()
    }
}
