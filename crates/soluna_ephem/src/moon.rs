//! Low-precision lunar position.
//!
//! Truncated ELP-derived series from Montenbruck & Pfleger, *Astronomy on
//! the Personal Computer*: the dominant perturbation terms in longitude
//! (dL), latitude (S, N), and a four-term distance expansion. Accuracy is a
//! few arcminutes in longitude, sufficient for minute-class event timing.

use std::f64::consts::{PI, TAU};

use crate::sun::{EclipticPos, frac, sun_position};

/// Arcseconds per radian.
const ARCS: f64 = 3_600.0 * 180.0 / PI;

/// Mean lunar radius in km.
pub const MOON_RADIUS_KM: f64 = 1_737.4;

/// Geocentric ecliptic position of the Moon at `t` Julian centuries TT.
pub fn moon_position(t: f64) -> EclipticPos {
    // Mean elements (revolutions resp. radians)
    let l0 = frac(0.606433 + 1336.855225 * t); // mean longitude
    let l = TAU * frac(0.374897 + 1325.552410 * t); // mean anomaly Moon
    let ls = TAU * frac(0.993133 + 99.997361 * t); // mean anomaly Sun
    let d = TAU * frac(0.827361 + 1236.853086 * t); // mean elongation
    let f = TAU * frac(0.259086 + 1342.227825 * t); // argument of latitude

    // Perturbations in longitude (arcsec)
    let dl = 22_640.0 * l.sin() - 4_586.0 * (l - 2.0 * d).sin() + 2_370.0 * (2.0 * d).sin()
        + 769.0 * (2.0 * l).sin()
        - 668.0 * ls.sin()
        - 412.0 * (2.0 * f).sin()
        - 212.0 * (2.0 * l - 2.0 * d).sin()
        - 206.0 * (l + ls - 2.0 * d).sin()
        + 192.0 * (l + 2.0 * d).sin()
        - 165.0 * (ls - 2.0 * d).sin()
        - 125.0 * d.sin()
        - 110.0 * (l + ls).sin()
        + 148.0 * (l - ls).sin()
        - 55.0 * (2.0 * f - 2.0 * d).sin();

    // Perturbations in latitude
    let s = f + (dl + 412.0 * (2.0 * f).sin() + 541.0 * ls.sin()) / ARCS;
    let h = f - 2.0 * d;
    let n = -526.0 * h.sin() + 44.0 * (l + h).sin() - 31.0 * (-l + h).sin()
        - 23.0 * (ls + h).sin()
        + 11.0 * (-ls + h).sin()
        - 25.0 * (-2.0 * l + f).sin()
        + 21.0 * (-l + f).sin();

    let lon = TAU * frac(l0 + dl / 1_296.0e3);
    let lat = (18_520.0 * s.sin() + n) / ARCS;

    // Distance expansion (km)
    let distance_km = 385_000.5584 - 20_905.3550 * l.cos() - 3_699.1109 * (2.0 * d - l).cos()
        - 2_955.9676 * (2.0 * d).cos()
        - 569.9251 * (2.0 * l).cos();

    EclipticPos {
        lon_rad: lon,
        lat_rad: lat,
        distance_km,
    }
}

/// Moon−Sun elongation in degrees, [0, 360), at `t` Julian centuries TT.
///
/// 0° = new moon, 90° = first quarter, 180° = full moon, 270° = last
/// quarter. Strictly increasing modulo 360° with a ~29.53-day cycle.
pub fn elongation_deg(t: f64) -> f64 {
    let moon = moon_position(t);
    let sun = sun_position(t);
    (moon.lon_rad.to_degrees() - sun.lon_rad.to_degrees()).rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instant::Instant;

    #[test]
    fn distance_stays_in_orbit_range() {
        for day in 0..30 {
            let t = Instant::from_utc(2024, 3, 1, 0, 0, 0.0)
                .add_days(day as f64)
                .julian_century_tt();
            let d = moon_position(t).distance_km;
            assert!((350_000.0..412_000.0).contains(&d), "day {day}: d = {d}");
        }
    }

    #[test]
    fn latitude_within_orbit_inclination() {
        for day in 0..30 {
            let t = Instant::from_utc(2024, 6, 1, 0, 0, 0.0)
                .add_days(day as f64)
                .julian_century_tt();
            let b = moon_position(t).lat_rad.to_degrees();
            assert!(b.abs() < 5.4, "day {day}: lat = {b}");
        }
    }

    #[test]
    fn elongation_near_180_at_known_full_moon() {
        // NASA: Full Moon 2024-Jan-25 17:54 UTC
        let t = Instant::from_utc(2024, 1, 25, 17, 54, 0.0).julian_century_tt();
        let e = elongation_deg(t);
        assert!((e - 180.0).abs() < 0.5, "elongation = {e}");
    }

    #[test]
    fn elongation_near_zero_at_known_new_moon() {
        // NASA: New Moon 2024-Jan-11 11:57 UTC
        let t = Instant::from_utc(2024, 1, 11, 11, 57, 0.0).julian_century_tt();
        let e = elongation_deg(t);
        let dist = e.min(360.0 - e);
        assert!(dist < 0.5, "elongation = {e}");
    }

    #[test]
    fn elongation_advances_about_12_deg_per_day() {
        let t0 = Instant::from_utc(2024, 4, 2, 0, 0, 0.0);
        let e0 = elongation_deg(t0.julian_century_tt());
        let e1 = elongation_deg(t0.add_days(1.0).julian_century_tt());
        let step = (e1 - e0).rem_euclid(360.0);
        assert!((10.0..15.0).contains(&step), "daily step = {step}");
    }
}
