//! Quadratic sample interpolation.
//!
//! Fits a parabola through three equally spaced samples of a scalar
//! function of time and extracts its zero crossings and extremum inside the
//! sampled interval. This is the accuracy/cost tradeoff of the whole
//! engine: a handful of samples per day resolve sub-sample crossings to
//! minute-class precision without dense evaluation.

/// Curvature below this is treated as a straight segment.
const CURVATURE_EPS: f64 = 1e-12;

/// Roots with |slope| below this are tangencies, not crossings.
const TANGENT_SLOPE_EPS: f64 = 1e-9;

/// Vertices up to this far beyond x = ±1 are still reported. The fit of a
/// cosine-like curve misplaces the vertex by a few minutes, so an extremum
/// hugging a shared interval boundary can land marginally outside both
/// adjacent intervals and would otherwise be lost by each.
const VERTEX_EDGE_TOL: f64 = 0.2;

/// Direction of a zero crossing, by the sign of the fitted slope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossingKind {
    /// The function passes through zero with positive slope.
    Rising,
    /// The function passes through zero with negative slope.
    Falling,
}

/// A zero crossing inside a sampled interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crossing {
    /// Julian Date (UT) of the crossing.
    pub jd: f64,
    pub kind: CrossingKind,
}

/// Kind of a local extremum, by the sign of the curvature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtremumKind {
    Maximum,
    Minimum,
}

/// A local extremum inside a sampled interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extremum {
    /// Julian Date (UT) of the extremum.
    pub jd: f64,
    /// Fitted function value at the extremum.
    pub value: f64,
    pub kind: ExtremumKind,
}

/// Parabola `y = a·x² + b·x + c` fitted through three samples at
/// `x = -1, 0, +1`, where `x` maps to `[center − Δ, center + Δ]` on the
/// time axis.
///
/// The three samples must be chronological (Δ > 0) and equally spaced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticFit {
    a: f64,
    b: f64,
    c: f64,
    center_jd: f64,
    half_width_days: f64,
}

impl QuadraticFit {
    /// Fit through `(center−Δ, y_minus)`, `(center, y0)`, `(center+Δ, y_plus)`.
    pub fn new(center_jd: f64, half_width_days: f64, y_minus: f64, y0: f64, y_plus: f64) -> Self {
        debug_assert!(half_width_days > 0.0);
        Self {
            a: 0.5 * (y_plus + y_minus) - y0,
            b: 0.5 * (y_plus - y_minus),
            c: y0,
            center_jd,
            half_width_days,
        }
    }

    fn x_to_jd(&self, x: f64) -> f64 {
        self.center_jd + x * self.half_width_days
    }

    /// Fitted value at normalized coordinate `x`.
    pub fn value_at(&self, x: f64) -> f64 {
        (self.a * x + self.b) * x + self.c
    }

    /// Zero crossings inside the interval, ascending in time, tagged by
    /// slope sign. Zero, one, or two results.
    ///
    /// Near-linear segments fall back to the single linear root; tangent
    /// contacts (discriminant ≈ 0, slope ≈ 0) are not reported, since the
    /// function does not actually change side there.
    pub fn crossings(&self) -> Vec<Crossing> {
        let mut out = Vec::with_capacity(2);

        if self.a.abs() < CURVATURE_EPS {
            // Degenerate parabola: linear fallback
            if self.b.abs() < TANGENT_SLOPE_EPS {
                return out;
            }
            let x = -self.c / self.b;
            if (-1.0..=1.0).contains(&x) {
                out.push(Crossing {
                    jd: self.x_to_jd(x),
                    kind: if self.b > 0.0 {
                        CrossingKind::Rising
                    } else {
                        CrossingKind::Falling
                    },
                });
            }
            return out;
        }

        let discriminant = self.b * self.b - 4.0 * self.a * self.c;
        if discriminant < 0.0 {
            return out;
        }
        let sq = discriminant.sqrt();
        let mut roots = [
            (-self.b - sq) / (2.0 * self.a),
            (-self.b + sq) / (2.0 * self.a),
        ];
        if roots[0] > roots[1] {
            roots.swap(0, 1);
        }
        let mut last_x = f64::NAN;
        for x in roots {
            if !(-1.0..=1.0).contains(&x) || x == last_x {
                continue;
            }
            last_x = x;
            let slope = 2.0 * self.a * x + self.b;
            if slope.abs() < TANGENT_SLOPE_EPS {
                continue;
            }
            out.push(Crossing {
                jd: self.x_to_jd(x),
                kind: if slope > 0.0 {
                    CrossingKind::Rising
                } else {
                    CrossingKind::Falling
                },
            });
        }
        out
    }

    /// Vertex of the parabola, if it lies inside the interval or within
    /// [`VERTEX_EDGE_TOL`] of its edges.
    pub fn extremum(&self) -> Option<Extremum> {
        if self.a.abs() < CURVATURE_EPS {
            return None;
        }
        let xe = -self.b / (2.0 * self.a);
        if xe.abs() > 1.0 + VERTEX_EDGE_TOL {
            return None;
        }
        Some(Extremum {
            jd: self.x_to_jd(xe),
            value: self.value_at(xe),
            kind: if self.a < 0.0 {
                ExtremumKind::Maximum
            } else {
                ExtremumKind::Minimum
            },
        })
    }
}
