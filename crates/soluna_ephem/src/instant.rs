//! Absolute instants on a continuous time axis.
//!
//! An [`Instant`] is a Julian Date on the UT axis plus a presentation-only
//! timezone offset. All arithmetic ignores the offset; it only affects how
//! the instant is formatted.

use crate::delta_t::delta_t_seconds;
use crate::julian::{
    DAYS_PER_CENTURY, J2000_JD, SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar,
};

/// An absolute point in time. Immutable once produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Instant {
    jd_ut: f64,
    tz_offset_min: i32,
}

impl Instant {
    /// Create an instant from a UTC calendar date and time.
    pub fn from_utc(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        let day_frac = day as f64
            + hour as f64 / 24.0
            + minute as f64 / 1440.0
            + second / SECONDS_PER_DAY;
        Self {
            jd_ut: calendar_to_jd(year, month, day_frac),
            tz_offset_min: 0,
        }
    }

    /// Create an instant directly from a Julian Date (UT).
    pub fn from_jd(jd_ut: f64) -> Self {
        Self {
            jd_ut,
            tz_offset_min: 0,
        }
    }

    /// Julian Date on the UT axis.
    pub fn jd(&self) -> f64 {
        self.jd_ut
    }

    /// Presentation timezone offset in minutes east of UTC.
    pub fn tz_offset_min(&self) -> i32 {
        self.tz_offset_min
    }

    /// Same instant with a different presentation offset.
    pub fn with_tz_offset(self, tz_offset_min: i32) -> Self {
        Self {
            tz_offset_min,
            ..self
        }
    }

    /// The instant shifted by a (possibly negative) number of days.
    pub fn add_days(self, days: f64) -> Self {
        Self {
            jd_ut: self.jd_ut + days,
            ..self
        }
    }

    /// Signed distance to another instant in days.
    pub fn days_until(&self, other: Instant) -> f64 {
        other.jd_ut - self.jd_ut
    }

    /// Julian centuries since J2000.0 on the TT axis.
    ///
    /// Applies the ΔT estimate so the body series are evaluated on the
    /// uniform dynamical timescale while the public API stays on UT.
    pub fn julian_century_tt(&self) -> f64 {
        let year = 2000.0 + (self.jd_ut - J2000_JD) / 365.25;
        let jd_tt = self.jd_ut + delta_t_seconds(year) / SECONDS_PER_DAY;
        (jd_tt - J2000_JD) / DAYS_PER_CENTURY
    }
}

impl std::fmt::Display for Instant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let local_jd = self.jd_ut + self.tz_offset_min as f64 / 1440.0;
        let (year, month, day_frac) = jd_to_calendar(local_jd);
        let day = day_frac.floor() as u32;
        // Round to whole seconds for presentation
        let mut total_seconds = (day_frac.fract() * SECONDS_PER_DAY).round();
        if total_seconds >= SECONDS_PER_DAY {
            total_seconds = SECONDS_PER_DAY - 1.0;
        }
        let hour = (total_seconds / 3600.0).floor() as u32;
        let minute = ((total_seconds % 3600.0) / 60.0).floor() as u32;
        let second = (total_seconds % 60.0) as u32;
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            year, month, day, hour, minute, second
        )?;
        if self.tz_offset_min == 0 {
            write!(f, "Z")
        } else {
            let sign = if self.tz_offset_min < 0 { '-' } else { '+' };
            let abs = self.tz_offset_min.unsigned_abs();
            write!(f, "{}{:02}:{:02}", sign, abs / 60, abs % 60)
        }
    }
}
