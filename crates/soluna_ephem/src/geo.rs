//! Geographic observer location.

use std::f64::consts::PI;

use crate::error::EphemError;

/// Mean Earth radius in meters (IAU nominal, for geometric dip).
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Geographic location on Earth's surface.
///
/// Immutable once constructed; shared by reference among the computations
/// of one search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
    /// Elevation above mean sea level in meters. Never negative.
    pub elevation_m: f64,
}

impl GeoLocation {
    /// Create a validated location.
    ///
    /// Negative elevations are clamped to sea level. Non-finite or
    /// out-of-range latitude/longitude is rejected.
    pub fn new(latitude_deg: f64, longitude_deg: f64, elevation_m: f64) -> Result<Self, EphemError> {
        let loc = Self {
            latitude_deg,
            longitude_deg,
            elevation_m: elevation_m.max(0.0),
        };
        loc.validate()?;
        Ok(loc)
    }

    /// Re-check the invariants (fields are public, so boundaries re-validate).
    pub fn validate(&self) -> Result<(), EphemError> {
        if !self.latitude_deg.is_finite() || !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err(EphemError::InvalidLocation(
                "latitude must be finite and within [-90, 90] degrees",
            ));
        }
        if !self.longitude_deg.is_finite() || !(-180.0..=180.0).contains(&self.longitude_deg) {
            return Err(EphemError::InvalidLocation(
                "longitude must be finite and within [-180, 180] degrees",
            ));
        }
        if !self.elevation_m.is_finite() || self.elevation_m < 0.0 {
            return Err(EphemError::InvalidLocation(
                "elevation must be finite and non-negative",
            ));
        }
        Ok(())
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    /// Longitude in radians (east positive).
    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }
}

/// Geometric dip of the horizon for an elevated observer, in degrees.
///
/// Approximation: `dip = sqrt(2h/R)` radians.
pub fn dip_deg(elevation_m: f64) -> f64 {
    if elevation_m <= 0.0 {
        return 0.0;
    }
    (2.0 * elevation_m / EARTH_RADIUS_M).sqrt() * (180.0 / PI)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_location() {
        let loc = GeoLocation::new(28.6139, 77.209, 216.0).unwrap();
        assert!((loc.latitude_rad() - 28.6139_f64.to_radians()).abs() < 1e-15);
        assert!((loc.longitude_rad() - 77.209_f64.to_radians()).abs() < 1e-15);
    }

    #[test]
    fn negative_elevation_clamped() {
        let loc = GeoLocation::new(0.0, 0.0, -430.0).unwrap();
        assert_eq!(loc.elevation_m, 0.0);
    }

    #[test]
    fn latitude_out_of_range_rejected() {
        assert!(GeoLocation::new(90.5, 0.0, 0.0).is_err());
        assert!(GeoLocation::new(f64::NAN, 0.0, 0.0).is_err());
    }

    #[test]
    fn longitude_out_of_range_rejected() {
        assert!(GeoLocation::new(0.0, 181.0, 0.0).is_err());
        assert!(GeoLocation::new(0.0, f64::INFINITY, 0.0).is_err());
    }

    #[test]
    fn dip_sea_level_zero() {
        assert_eq!(dip_deg(0.0), 0.0);
    }

    #[test]
    fn dip_1000m() {
        // sqrt(2*1000/6371000) ≈ 0.01772 rad ≈ 1.015 deg
        let d = dip_deg(1000.0);
        assert!((d - 1.015).abs() < 0.05, "dip = {d}");
    }
}
