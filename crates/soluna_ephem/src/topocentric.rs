//! Topocentric altitude/azimuth: the position-oracle surface.
//!
//! Converts the geocentric ecliptic positions from [`crate::sun`] and
//! [`crate::moon`] into the apparent altitude and azimuth seen by an
//! observer, applying diurnal parallax and atmospheric refraction.
//!
//! Standard spherical astronomy (Meeus ch. 13/22; Montenbruck & Pfleger).

use crate::geo::GeoLocation;
use crate::instant::Instant;
use crate::julian::{J2000_JD, jd_to_centuries};
use crate::moon::{MOON_RADIUS_KM, moon_position};
use crate::sun::{EclipticPos, SUN_RADIUS_KM, sun_position};

/// Mean Earth radius in km, for diurnal parallax.
const EARTH_RADIUS_KM: f64 = 6_371.0;

/// Celestial body handled by the oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Sun,
    Moon,
}

impl Body {
    /// Physical radius, for apparent-semidiameter computation.
    pub fn radius_km(self) -> f64 {
        match self {
            Self::Sun => SUN_RADIUS_KM,
            Self::Moon => MOON_RADIUS_KM,
        }
    }

    /// Geocentric ecliptic position at `t` Julian centuries TT.
    pub fn ecliptic_position(self, t: f64) -> EclipticPos {
        match self {
            Self::Sun => sun_position(t),
            Self::Moon => moon_position(t),
        }
    }
}

/// One evaluation of a body's apparent place. Never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AltitudeSample {
    /// The instant this sample was taken for.
    pub instant: Instant,
    /// Apparent altitude above the horizon in degrees, negative below.
    pub altitude_deg: f64,
    /// Azimuth in degrees, [0, 360), measured from north through east.
    pub azimuth_deg: f64,
    /// Distance from Earth's center in km.
    pub distance_km: f64,
}

/// Oracle corrections. Defaults apply both.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OracleConfig {
    /// Apply Sæmundsson atmospheric refraction to the altitude.
    pub refraction: bool,
    /// Apply diurnal parallax (lowers the topocentric altitude; ~57' for
    /// the Moon, negligible for the Sun).
    pub parallax: bool,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            refraction: true,
            parallax: true,
        }
    }
}

/// Stateless position oracle: a pure function of (instant, location, body).
///
/// Holds only read-only configuration, so one instance may be shared by any
/// number of concurrent searches.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionOracle {
    config: OracleConfig,
}

impl PositionOracle {
    pub fn new(config: OracleConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OracleConfig {
        &self.config
    }

    /// Apparent altitude/azimuth of `body` for an observer at `location`.
    ///
    /// Total and deterministic: identical inputs yield identical samples.
    pub fn evaluate(&self, instant: Instant, location: &GeoLocation, body: Body) -> AltitudeSample {
        let t = instant.julian_century_tt();
        let ecl = body.ecliptic_position(t);
        let (ra_rad, dec_rad) = ecliptic_to_equatorial(ecl.lon_rad, ecl.lat_rad, t);

        let lst_deg = gmst_deg(instant.jd()) + location.longitude_deg;
        let tau = (lst_deg - ra_rad.to_degrees()).to_radians();

        let phi = location.latitude_rad();
        let (sin_phi, cos_phi) = (phi.sin(), phi.cos());
        let (sin_dec, cos_dec) = (dec_rad.sin(), dec_rad.cos());

        let mut alt = (sin_phi * sin_dec + cos_phi * cos_dec * tau.cos()).asin();
        // Azimuth from south, westward positive; shift to north-based
        let az_south = tau.sin().atan2(tau.cos() * sin_phi - dec_rad.tan() * cos_phi);
        let azimuth_deg = (az_south.to_degrees() + 180.0).rem_euclid(360.0);

        if self.config.parallax {
            let p = (EARTH_RADIUS_KM / ecl.distance_km).asin();
            alt -= p * alt.cos();
        }

        let mut altitude_deg = alt.to_degrees();
        if self.config.refraction {
            altitude_deg += refraction_deg(altitude_deg);
        }

        AltitudeSample {
            instant,
            altitude_deg,
            azimuth_deg,
            distance_km: ecl.distance_km,
        }
    }
}

/// Mean obliquity of the ecliptic in radians at `t` Julian centuries TT.
fn mean_obliquity_rad(t: f64) -> f64 {
    (23.439_2911 - 0.013_0042 * t).to_radians()
}

/// Ecliptic (λ, β) to equatorial (RA, Dec), both in radians.
fn ecliptic_to_equatorial(lon_rad: f64, lat_rad: f64, t: f64) -> (f64, f64) {
    let eps = mean_obliquity_rad(t);
    let ra = (lon_rad.sin() * eps.cos() - lat_rad.tan() * eps.sin()).atan2(lon_rad.cos());
    let dec = (lat_rad.sin() * eps.cos() + lat_rad.cos() * eps.sin() * lon_rad.sin()).asin();
    (ra, dec)
}

/// Greenwich mean sidereal time in degrees, [0, 360), for a JD UT.
pub fn gmst_deg(jd_ut: f64) -> f64 {
    let t = jd_to_centuries(jd_ut);
    (280.460_618_37 + 360.985_647_366_29 * (jd_ut - J2000_JD)
        + t * t * (0.000_387_933 - t / 38_710_000.0))
        .rem_euclid(360.0)
}

/// Sæmundsson refraction in degrees for a geometric altitude in degrees.
///
/// Guarded below −5°: the expression has a pole at −5.11° and real
/// refraction is negligible there, so it tapers to zero to keep the sampled
/// altitude function continuous for the interpolator.
pub fn refraction_deg(altitude_deg: f64) -> f64 {
    if altitude_deg <= -5.0 {
        return 0.0;
    }
    let arg = (altitude_deg + 10.3 / (altitude_deg + 5.11)).to_radians();
    (1.02 / arg.tan()).max(0.0) / 60.0
}

/// Apparent angular semidiameter in degrees for a body radius and distance.
pub fn semidiameter_deg(radius_km: f64, distance_km: f64) -> f64 {
    (radius_km / distance_km).asin().to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn greenwich() -> GeoLocation {
        GeoLocation::new(51.4769, 0.0, 0.0).unwrap()
    }

    #[test]
    fn gmst_at_j2000() {
        let g = gmst_deg(J2000_JD);
        assert!((g - 280.460_618_37).abs() < 1e-9, "gmst = {g}");
    }

    #[test]
    fn gmst_advances_past_one_day() {
        // Sidereal day is ~3m56s shorter than a solar day
        let g0 = gmst_deg(J2000_JD);
        let g1 = gmst_deg(J2000_JD + 1.0);
        let advance = (g1 - g0).rem_euclid(360.0);
        assert!((advance - 0.9856).abs() < 0.001, "advance = {advance}");
    }

    #[test]
    fn refraction_at_horizon() {
        // Canonical ~34 arcmin at the horizon
        let r = refraction_deg(0.0) * 60.0;
        assert!((r - 29.0).abs() < 6.0, "refraction = {r}'");
    }

    #[test]
    fn refraction_vanishes_below_minus_five() {
        assert_eq!(refraction_deg(-5.0), 0.0);
        assert_eq!(refraction_deg(-30.0), 0.0);
        // Near the guard the formula itself is already tiny
        assert!(refraction_deg(-4.9) < 0.05);
    }

    #[test]
    fn refraction_decreases_with_altitude() {
        assert!(refraction_deg(0.0) > refraction_deg(10.0));
        assert!(refraction_deg(10.0) > refraction_deg(45.0));
        assert!(refraction_deg(45.0) > 0.0);
    }

    #[test]
    fn solar_semidiameter_about_16_arcmin() {
        let sd = semidiameter_deg(SUN_RADIUS_KM, 149_597_870.7) * 60.0;
        assert!((sd - 16.0).abs() < 0.5, "semidiameter = {sd}'");
    }

    #[test]
    fn lunar_semidiameter_about_16_arcmin() {
        let sd = semidiameter_deg(MOON_RADIUS_KM, 385_000.0) * 60.0;
        assert!((sd - 15.5).abs() < 1.0, "semidiameter = {sd}'");
    }

    #[test]
    fn noon_sun_altitude_near_equinox() {
        // Greenwich, 2024-03-20, local apparent noon ~12:07 UTC.
        // Declination ~0 → altitude ≈ 90 − latitude.
        let oracle = PositionOracle::default();
        let s = oracle.evaluate(
            Instant::from_utc(2024, 3, 20, 12, 7, 0.0),
            &greenwich(),
            Body::Sun,
        );
        assert!((s.altitude_deg - 38.5).abs() < 1.0, "alt = {}", s.altitude_deg);
        assert!((s.azimuth_deg - 180.0).abs() < 5.0, "az = {}", s.azimuth_deg);
    }

    #[test]
    fn midnight_sun_below_horizon() {
        let oracle = PositionOracle::default();
        let s = oracle.evaluate(
            Instant::from_utc(2024, 3, 20, 0, 0, 0.0),
            &greenwich(),
            Body::Sun,
        );
        assert!(s.altitude_deg < -30.0, "alt = {}", s.altitude_deg);
    }

    #[test]
    fn parallax_lowers_moon() {
        let instant = Instant::from_utc(2024, 3, 20, 22, 0, 0.0);
        let loc = greenwich();
        let with = PositionOracle::new(OracleConfig {
            refraction: false,
            parallax: true,
        })
        .evaluate(instant, &loc, Body::Moon);
        let without = PositionOracle::new(OracleConfig {
            refraction: false,
            parallax: false,
        })
        .evaluate(instant, &loc, Body::Moon);
        assert!(with.altitude_deg < without.altitude_deg);
        // Horizontal parallax of the Moon is ~0.95 deg at most
        assert!((without.altitude_deg - with.altitude_deg).abs() < 1.0);
    }

    #[test]
    fn evaluate_is_deterministic() {
        let oracle = PositionOracle::default();
        let instant = Instant::from_utc(2024, 5, 5, 5, 5, 5.0);
        let loc = greenwich();
        let a = oracle.evaluate(instant, &loc, Body::Moon);
        let b = oracle.evaluate(instant, &loc, Body::Moon);
        assert_eq!(a, b);
    }
}
