//! Low-precision solar position.
//!
//! Truncated series from Montenbruck & Pfleger, *Astronomy on the Personal
//! Computer*. Accuracy is on the order of an arcminute, which keeps derived
//! event times within the minute class.

use std::f64::consts::TAU;

/// One astronomical unit in kilometers.
pub const AU_KM: f64 = 149_597_870.7;

/// IAU 2015 nominal solar radius in km (Resolution B3).
pub const SUN_RADIUS_KM: f64 = 696_000.0;

/// Geocentric ecliptic position of a body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipticPos {
    /// Ecliptic longitude in radians, [0, 2π).
    pub lon_rad: f64,
    /// Ecliptic latitude in radians.
    pub lat_rad: f64,
    /// Distance from Earth's center in km.
    pub distance_km: f64,
}

/// Fractional part, kept in [0, 1).
pub(crate) fn frac(x: f64) -> f64 {
    x - x.floor()
}

/// Geocentric ecliptic position of the Sun at `t` Julian centuries TT.
pub fn sun_position(t: f64) -> EclipticPos {
    // Mean anomaly and ecliptic longitude with the two largest
    // equation-of-center terms
    let m = TAU * frac(0.993133 + 99.997361 * t);
    let lon = TAU
        * frac(
            0.7859453
                + m / TAU
                + (6893.0 * m.sin() + 72.0 * (2.0 * m).sin() + 6191.2 * t) / 1_296.0e3,
        );

    // Radius vector from the eccentricity expansion
    let r_au = 1.000140 - 0.016708 * m.cos() - 0.000139 * (2.0 * m).cos();

    EclipticPos {
        lon_rad: lon,
        lat_rad: 0.0,
        distance_km: r_au * AU_KM,
    }
}
