//! Rise/set and culmination search for the Sun and Moon.
//!
//! The altitude of a body relative to a reference altitude is treated as a
//! smooth scalar function of time and scanned in two-hour intervals. Each
//! interval is sampled at its start, midpoint, and end, fitted with a
//! parabola, and mined for zero crossings (rise/set) and the vertex
//! (culminations). Crossing direction comes from the fitted slope, so a
//! reverse scan still labels rises and sets correctly.
//!
//! Sources: quadratic event bracketing after Montenbruck & Pfleger,
//! "Astronomy on the Personal Computer", ch. 3.

use soluna_ephem::{Body, GeoLocation, Instant, PositionOracle, dip_deg, semidiameter_deg};

use crate::error::SearchError;
use crate::interpolator::{CrossingKind, ExtremumKind, QuadraticFit};
use crate::riseset_types::{DayState, EventTimes, Target};
use crate::window::{Direction, SearchWindow};

/// Half-width of one scan interval in days (1 hour).
const HALF_WIDTH_DAYS: f64 = 1.0 / 24.0;

/// Two-hour intervals per calendar day.
const INTERVALS_PER_DAY: usize = 12;

/// Defensive cap for unbounded scans. Sun and Moon events recur within
/// days wherever they occur at all, and circumpolar geometry is detected
/// after the first scanned day, so an honest search never gets near this.
const MAX_SCAN_DAYS: usize = 366;

/// Roots closer than this (~1 s) are the same crossing seen from two
/// adjacent intervals sharing a boundary sample. Must dominate f64 rounding
/// at JD magnitudes (one ulp of a modern JD is ~5e-10 days).
const BOUNDARY_EPS_DAYS: f64 = 1.0e-5;

/// Altitude of the body's center above the event's reference altitude, in
/// degrees. Zero crossings of this function are rise/set events; its
/// extrema are the culminations.
fn altitude_delta(
    oracle: &PositionOracle,
    body: Body,
    target: Target,
    location: &GeoLocation,
    jd: f64,
) -> f64 {
    let sample = oracle.evaluate(Instant::from_jd(jd), location, body);
    let (sd, dip) = if target.uses_limb() {
        (
            semidiameter_deg(body.radius_km(), sample.distance_km),
            dip_deg(location.elevation_m),
        )
    } else {
        (0.0, 0.0)
    };
    sample.altitude_deg - target.reference_altitude_deg(sd, dip)
}

/// Search a window for rise, set, upper and lower culmination of `body`
/// relative to `target`.
///
/// Events are reported in scan order: a forward window yields the first
/// rise at or after the anchor, a reverse window the last rise at or
/// before it. Each slot of [`EventTimes`] is filled at most once; the
/// scan stops as soon as all four are filled, the window bound is
/// exhausted, or the first scanned day turns out to be circumpolar.
///
/// Circumpolar classification is terminal: when the body stays entirely
/// above or below the reference for the whole first scanned day, the
/// result carries [`DayState::AlwaysAbove`] or [`DayState::AlwaysBelow`]
/// with no rise/set, and the culminations found on that day. The search
/// does not skip ahead to the end of the polar season.
pub fn compute_times(
    oracle: &PositionOracle,
    body: Body,
    target: Target,
    location: &GeoLocation,
    window: SearchWindow,
) -> Result<EventTimes, SearchError> {
    location.validate()?;
    if let Target::Custom(deg) = target {
        if !deg.is_finite() {
            return Err(SearchError::InvalidParameter("custom target altitude is not finite"));
        }
    }
    let window = window.normalized()?;

    let start_jd = window.start.jd();
    let tz = window.start.tz_offset_min();
    let dir_sign = match window.direction {
        Direction::Forward => 1.0,
        Direction::Reverse => -1.0,
    };
    let h = HALF_WIDTH_DAYS;
    let delta = |jd: f64| altitude_delta(oracle, body, target, location, jd);

    let mut events = EventTimes::empty(DayState::Normal);
    let mut last_crossing_jd = f64::NAN;
    let mut first_day_min = f64::INFINITY;
    let mut first_day_max = f64::NEG_INFINITY;
    let mut first_day_crossed = false;

    for k in 0..(MAX_SCAN_DAYS * INTERVALS_PER_DAY) {
        let elapsed_days = k as f64 * 2.0 * h;
        if !window.should_continue(elapsed_days) {
            break;
        }

        // Interval k spans [2kh, 2(k+1)h] from the anchor, on the scan side.
        let center = start_jd + dir_sign * (2 * k + 1) as f64 * h;
        let y_minus = delta(center - h);
        let y0 = delta(center);
        let y_plus = delta(center + h);

        if k < INTERVALS_PER_DAY {
            first_day_min = first_day_min.min(y_minus.min(y0).min(y_plus));
            first_day_max = first_day_max.max(y_minus.max(y0).max(y_plus));
        }

        let fit = QuadraticFit::new(center, h, y_minus, y0, y_plus);

        let mut crossings = fit.crossings();
        if window.direction == Direction::Reverse {
            crossings.reverse();
        }
        for crossing in crossings {
            if k < INTERVALS_PER_DAY {
                first_day_crossed = true;
            }
            if !window.accepts(crossing.jd) {
                continue;
            }
            if !last_crossing_jd.is_nan()
                && (crossing.jd - last_crossing_jd).abs() < BOUNDARY_EPS_DAYS
            {
                continue;
            }
            last_crossing_jd = crossing.jd;
            let slot = match crossing.kind {
                CrossingKind::Rising => &mut events.rise,
                CrossingKind::Falling => &mut events.set,
            };
            if slot.is_none() {
                *slot = Some(Instant::from_jd(crossing.jd).with_tz_offset(tz));
            }
        }

        if let Some(extremum) = fit.extremum() {
            // Edge-tolerant vertices can land marginally past the anchor on
            // the wrong side; keep only the scan side.
            if window.accepts(extremum.jd) && (extremum.jd - start_jd) * dir_sign >= 0.0 {
                let slot = match extremum.kind {
                    ExtremumKind::Maximum => &mut events.noon,
                    ExtremumKind::Minimum => &mut events.nadir,
                };
                if slot.is_none() {
                    *slot = Some(Instant::from_jd(extremum.jd).with_tz_offset(tz));
                }
            }
        }

        if events.is_complete() {
            break;
        }

        if k + 1 == INTERVALS_PER_DAY && !first_day_crossed {
            // A full day without a crossing. A grazing day (samples on
            // both sides of zero but no reported crossing) keeps scanning.
            if first_day_min >= 0.0 {
                events.day_state = DayState::AlwaysAbove;
                return Ok(events);
            }
            if first_day_max <= 0.0 {
                events.day_state = DayState::AlwaysBelow;
                return Ok(events);
            }
        }
    }

    Ok(events)
}
