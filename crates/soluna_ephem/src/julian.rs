//! Julian Date ↔ calendar conversions.
//!
//! Standard Gregorian-calendar algorithms (Meeus, Astronomical Algorithms
//! ch. 7). Julian Dates here carry no time-scale tag; callers track whether
//! a value is UT or TT.

/// Julian Date of the J2000.0 epoch (2000-Jan-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Days per Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Convert a Gregorian calendar date to a Julian Date.
///
/// `day_frac` is the day of month plus the fraction of the day
/// (e.g. 15.5 = the 15th at 12:00).
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let a = (y as f64 / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y as f64 + 4716.0)).floor() + (30.6001 * (m as f64 + 1.0)).floor() + day_frac + b
        - 1524.5
}

/// Convert a Julian Date to a Gregorian calendar date.
///
/// Returns `(year, month, day_frac)` with `day_frac` as in [`calendar_to_jd`].
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;
    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day_frac = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 } as u32;
    let year = if month > 2 { c - 4716.0 } else { c - 4715.0 } as i32;
    (year, month, day_frac)
}

/// Julian centuries since J2000.0 for a Julian Date.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_epoch() {
        let jd = calendar_to_jd(2000, 1, 1.5);
        assert!((jd - J2000_JD).abs() < 1e-9, "jd = {jd}");
    }

    #[test]
    fn meeus_sputnik_example() {
        // Meeus example 7.a: 1957 Oct 4.81 = JD 2436116.31
        let jd = calendar_to_jd(1957, 10, 4.81);
        assert!((jd - 2_436_116.31).abs() < 1e-6, "jd = {jd}");
    }

    #[test]
    fn roundtrip_modern_date() {
        let jd = calendar_to_jd(2024, 3, 20.75);
        let (y, m, d) = jd_to_calendar(jd);
        assert_eq!(y, 2024);
        assert_eq!(m, 3);
        assert!((d - 20.75).abs() < 1e-9, "day_frac = {d}");
    }

    #[test]
    fn roundtrip_january() {
        // January exercises the month <= 2 branch
        let jd = calendar_to_jd(2023, 1, 11.25);
        let (y, m, d) = jd_to_calendar(jd);
        assert_eq!(y, 2023);
        assert_eq!(m, 1);
        assert!((d - 11.25).abs() < 1e-9);
    }

    #[test]
    fn centuries_at_epoch() {
        assert_eq!(jd_to_centuries(J2000_JD), 0.0);
        let t = jd_to_centuries(J2000_JD + DAYS_PER_CENTURY);
        assert!((t - 1.0).abs() < 1e-12);
    }
}
