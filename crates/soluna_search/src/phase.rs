//! Lunar phase search.
//!
//! Finds the instants when the Moon–Sun elongation in ecliptic longitude
//! equals a target angle. The elongation deficit is scanned in one-day
//! steps for a genuine sign change (elongation moves ~12–13°/day, so the
//! ±180° wrap of the deficit is easy to tell from a real crossing), then
//! refined by repeated quadratic fits over a shrinking bracket.

use soluna_ephem::{Instant, elongation_deg, moon_position, sun_position};

use crate::error::SearchError;
use crate::interpolator::QuadraticFit;
use crate::phase_types::{PhaseAngle, PhaseEvent};
use crate::window::{Direction, SearchWindow};

/// Coarse scan step in days.
const STEP_DAYS: f64 = 1.0;

/// One lunation is ~29.53 days; a crossing of any elongation must appear
/// within this many days or something is wrong.
const MAX_SCAN_DAYS: f64 = 40.0;

/// Refinement bracket half-width below this (~0.086 s) is converged.
const CONVERGENCE_DAYS: f64 = 1.0e-6;

/// Maximum quadratic refinement passes.
const MAX_ITERATIONS: usize = 12;

/// Normalize an angle to (-180, 180] degrees.
fn normalize_to_pm180(deg: f64) -> f64 {
    let d = deg.rem_euclid(360.0);
    if d > 180.0 { d - 360.0 } else { d }
}

/// Signed deficit between the current elongation and the target, in
/// (-180, 180] degrees. The phase event is a zero of this function.
fn elongation_deficit(jd_ut: f64, target_deg: f64) -> f64 {
    let t = Instant::from_jd(jd_ut).julian_century_tt();
    normalize_to_pm180(elongation_deg(t) - target_deg)
}

/// A sign change is a wrap-around of the ±180° seam, not a crossing, when
/// the jump is large. A genuine crossing moves by at most a day's worth
/// of elongation change (~13°).
fn is_genuine_crossing(f_a: f64, f_b: f64) -> bool {
    f_a * f_b < 0.0 && (f_a - f_b).abs() < 270.0
}

/// Shrink a one-day bracket around the crossing with repeated quadratic
/// fits until the half-width is below [`CONVERGENCE_DAYS`].
fn refine_crossing(jd_a: f64, jd_b: f64, target_deg: f64) -> f64 {
    let mut tc = 0.5 * (jd_a + jd_b);
    let mut h = 0.5 * (jd_b - jd_a);
    for _ in 0..MAX_ITERATIONS {
        let fit = QuadraticFit::new(
            tc,
            h,
            elongation_deficit(tc - h, target_deg),
            elongation_deficit(tc, target_deg),
            elongation_deficit(tc + h, target_deg),
        );
        if let Some(crossing) = fit.crossings().first() {
            tc = crossing.jd;
        }
        if h < CONVERGENCE_DAYS {
            break;
        }
        h *= 0.25;
    }
    tc
}

fn event_at(jd: f64, tz_offset_min: i32, target_deg: f64) -> PhaseEvent {
    let t = Instant::from_jd(jd).julian_century_tt();
    let moon = moon_position(t);
    let sun = sun_position(t);
    PhaseEvent {
        instant: Instant::from_jd(jd).with_tz_offset(tz_offset_min),
        angle_deg: target_deg,
        moon_longitude_deg: moon.lon_rad.to_degrees().rem_euclid(360.0),
        sun_longitude_deg: sun.lon_rad.to_degrees().rem_euclid(360.0),
    }
}

/// Search a window for the nearest instant (in scan direction) where the
/// Moon–Sun elongation equals `target`.
///
/// Returns `Ok(None)` when a bounded window ends before the event. An
/// unbounded window always finds one within a lunation.
pub fn compute_phase(
    target: PhaseAngle,
    window: SearchWindow,
) -> Result<Option<PhaseEvent>, SearchError> {
    if let PhaseAngle::Custom(deg) = target {
        if !deg.is_finite() {
            return Err(SearchError::InvalidParameter("custom phase angle is not finite"));
        }
    }
    let window = window.normalized()?;
    let target_deg = target.angle_deg();

    let step = match window.direction {
        Direction::Forward => STEP_DAYS,
        Direction::Reverse => -STEP_DAYS,
    };
    let max_steps = (MAX_SCAN_DAYS / STEP_DAYS).ceil() as usize;

    let start_jd = window.start.jd();
    let tz = window.start.tz_offset_min();
    let mut t_prev = start_jd;
    let mut f_prev = elongation_deficit(t_prev, target_deg);

    for k in 0..max_steps {
        if !window.should_continue(k as f64 * STEP_DAYS) {
            return Ok(None);
        }
        let t_curr = t_prev + step;
        let f_curr = elongation_deficit(t_curr, target_deg);

        if is_genuine_crossing(f_prev, f_curr) {
            let (jd_a, jd_b) = if t_prev < t_curr {
                (t_prev, t_curr)
            } else {
                (t_curr, t_prev)
            };
            let jd = refine_crossing(jd_a, jd_b, target_deg);
            if !window.accepts(jd) {
                return Ok(None);
            }
            return Ok(Some(event_at(jd, tz, target_deg)));
        }

        t_prev = t_curr;
        f_prev = f_curr;
    }

    Err(SearchError::NoConvergence(
        "no elongation crossing within a lunation",
    ))
}

/// Next occurrence of the phase at or after `start`.
pub fn next_phase(target: PhaseAngle, start: Instant) -> Result<PhaseEvent, SearchError> {
    compute_phase(target, SearchWindow::forward_from(start))?
        .ok_or(SearchError::NoConvergence("phase search window exhausted"))
}

/// Most recent occurrence of the phase at or before `start`.
pub fn prev_phase(target: PhaseAngle, start: Instant) -> Result<PhaseEvent, SearchError> {
    compute_phase(target, SearchWindow::reverse_from(start))?
        .ok_or(SearchError::NoConvergence("phase search window exhausted"))
}
