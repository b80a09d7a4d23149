//! ΔT (TT − UT) estimation.
//!
//! Polynomial expressions fitted by Espenak & Meeus (NASA Five Millennium
//! Canon of Solar Eclipses), one segment per historical interval. Accuracy
//! is a few seconds in the modern era, ample for minute-class event timing.

/// ΔT in seconds for a decimal year (e.g. 2024.25).
pub fn delta_t_seconds(year: f64) -> f64 {
    if year < 1900.0 || year >= 2150.0 {
        // Long-term parabola
        let u = (year - 1820.0) / 100.0;
        return -20.0 + 32.0 * u * u;
    }
    if year < 1920.0 {
        let t = year - 1900.0;
        return -2.79 + 1.494119 * t - 0.0598939 * t * t + 0.0061966 * t * t * t
            - 0.000197 * t * t * t * t;
    }
    if year < 1941.0 {
        let t = year - 1920.0;
        return 21.20 + 0.84493 * t - 0.076100 * t * t + 0.0020936 * t * t * t;
    }
    if year < 1961.0 {
        let t = year - 1950.0;
        return 29.07 + 0.407 * t - t * t / 233.0 + t * t * t / 2547.0;
    }
    if year < 1986.0 {
        let t = year - 1975.0;
        return 45.45 + 1.067 * t - t * t / 260.0 - t * t * t / 718.0;
    }
    if year < 2005.0 {
        let t = year - 2000.0;
        return 63.86 + 0.3345 * t - 0.060374 * t * t + 0.0017275 * t * t * t
            + 0.000651814 * t * t * t * t
            + 0.00002373599 * t * t * t * t * t;
    }
    if year < 2050.0 {
        let t = year - 2000.0;
        return 62.92 + 0.32217 * t + 0.005589 * t * t;
    }
    // 2050..2150
    let u = (year - 1820.0) / 100.0;
    -20.0 + 32.0 * u * u - 0.5628 * (2150.0 - year)
}
