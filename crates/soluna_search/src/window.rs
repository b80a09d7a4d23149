//! Search window descriptors.
//!
//! A [`SearchWindow`] anchors a scan at a start instant, gives it a
//! direction, and optionally bounds how far from the anchor the scan may
//! wander. Bounds are measured as |event − start| in days, so a bounded
//! reverse window accepts events up to the limit before the anchor.

use soluna_ephem::Instant;

use crate::error::SearchError;

/// Scan direction relative to the anchor instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Scan toward later times.
    Forward,
    /// Scan toward earlier times.
    Reverse,
}

/// How far from the anchor the scan may reach.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindowLimit {
    /// Accept events with |event − start| ≤ the given number of days.
    Bounded(f64),
    /// Scan until found or the defensive cap trips.
    Unbounded,
}

/// A directed, optionally bounded search window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchWindow {
    pub start: Instant,
    pub direction: Direction,
    pub limit: WindowLimit,
}

impl SearchWindow {
    /// Unbounded forward window from `start`.
    pub fn forward_from(start: Instant) -> Self {
        Self {
            start,
            direction: Direction::Forward,
            limit: WindowLimit::Unbounded,
        }
    }

    /// Unbounded reverse window from `start`.
    pub fn reverse_from(start: Instant) -> Self {
        Self {
            start,
            direction: Direction::Reverse,
            limit: WindowLimit::Unbounded,
        }
    }

    /// Bounded forward window. A negative `days` flips the direction and
    /// bounds the scan by |days| before the anchor.
    pub fn bounded_days(start: Instant, days: f64) -> Self {
        Self {
            start,
            direction: if days < 0.0 {
                Direction::Reverse
            } else {
                Direction::Forward
            },
            limit: WindowLimit::Bounded(days.abs()),
        }
    }

    /// Bounded window expressed in hours. Negative hours scan backward.
    pub fn bounded_hours(start: Instant, hours: f64) -> Self {
        Self::bounded_days(start, hours / 24.0)
    }

    /// Validate the window, folding a signed bound into direction + |bound|.
    pub fn normalized(self) -> Result<Self, SearchError> {
        if !self.start.jd().is_finite() {
            return Err(SearchError::InvalidParameter("start instant is not finite"));
        }
        match self.limit {
            WindowLimit::Unbounded => Ok(self),
            WindowLimit::Bounded(days) => {
                if !days.is_finite() {
                    return Err(SearchError::InvalidParameter("window limit is not finite"));
                }
                if days < 0.0 {
                    let flipped = match self.direction {
                        Direction::Forward => Direction::Reverse,
                        Direction::Reverse => Direction::Forward,
                    };
                    Ok(Self {
                        start: self.start,
                        direction: flipped,
                        limit: WindowLimit::Bounded(-days),
                    })
                } else {
                    Ok(self)
                }
            }
        }
    }

    /// True if a scan interval starting `elapsed_days` from the anchor may
    /// still be opened. Individual roots are filtered against the limit
    /// separately, so an interval straddling the boundary still runs.
    pub fn should_continue(&self, elapsed_days: f64) -> bool {
        match self.limit {
            WindowLimit::Unbounded => true,
            WindowLimit::Bounded(days) => elapsed_days < days,
        }
    }

    /// True if an event at `jd` lies within the window bound.
    pub fn accepts(&self, jd: f64) -> bool {
        match self.limit {
            WindowLimit::Unbounded => true,
            WindowLimit::Bounded(days) => (jd - self.start.jd()).abs() <= days,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t0() -> Instant {
        Instant::from_jd(2_460_000.0)
    }

    #[test]
    fn negative_bound_flips_direction() {
        let w = SearchWindow::bounded_days(t0(), -3.0);
        assert_eq!(w.direction, Direction::Reverse);
        assert_eq!(w.limit, WindowLimit::Bounded(3.0));
    }

    #[test]
    fn normalized_folds_signed_bound() {
        let w = SearchWindow {
            start: t0(),
            direction: Direction::Forward,
            limit: WindowLimit::Bounded(-2.0),
        };
        let n = w.normalized().unwrap();
        assert_eq!(n.direction, Direction::Reverse);
        assert_eq!(n.limit, WindowLimit::Bounded(2.0));
    }

    #[test]
    fn non_finite_bound_rejected() {
        let w = SearchWindow {
            start: t0(),
            direction: Direction::Forward,
            limit: WindowLimit::Bounded(f64::NAN),
        };
        assert!(matches!(
            w.normalized(),
            Err(SearchError::InvalidParameter(_))
        ));
    }

    #[test]
    fn zero_bound_opens_no_interval() {
        let w = SearchWindow::bounded_days(t0(), 0.0);
        assert_eq!(w.direction, Direction::Forward);
        assert!(!w.should_continue(0.0));
    }

    #[test]
    fn accepts_is_symmetric_in_sign() {
        let w = SearchWindow::bounded_days(t0(), 1.0);
        assert!(w.accepts(t0().jd() + 0.9));
        assert!(w.accepts(t0().jd() - 0.9));
        assert!(!w.accepts(t0().jd() + 1.1));
    }

    #[test]
    fn unbounded_always_continues() {
        let w = SearchWindow::forward_from(t0());
        assert!(w.should_continue(1.0e6));
        assert!(w.accepts(0.0));
    }

    #[test]
    fn bounded_hours_converts() {
        let w = SearchWindow::bounded_hours(t0(), -12.0);
        assert_eq!(w.direction, Direction::Reverse);
        assert_eq!(w.limit, WindowLimit::Bounded(0.5));
    }
}
