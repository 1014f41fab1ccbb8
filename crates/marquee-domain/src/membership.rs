//! Membership functions
//!
//! A membership function maps a crisp value to the degree (0..=1) to which it
//! belongs to a linguistic term. All shapes are pure and reentrant.

/// Shape of a linguistic term's membership function
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MembershipFunction {
    /// Triangle with feet at `a` and `c` and its peak at `b` (a <= b <= c)
    Triangular(f64, f64, f64),

    /// Trapezoid with feet at `a` and `d` and a plateau on [b, c] (a <= b <= c <= d)
    Trapezoidal(f64, f64, f64, f64),

    /// Gaussian bell: (mean, standard deviation)
    Gaussian(f64, f64),

    /// Full membership at exactly one point
    Singleton(f64),
}

impl MembershipFunction {
    /// Degree of membership of `x`, always in [0, 1]
    ///
    /// Degenerate ramps (`a == b` or `b == c`) behave as steps instead of
    /// dividing by zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use marquee_domain::MembershipFunction;
    ///
    /// let mf = MembershipFunction::Triangular(0.0, 5.0, 10.0);
    /// assert_eq!(mf.evaluate(5.0), 1.0);
    /// assert_eq!(mf.evaluate(2.5), 0.5);
    /// assert_eq!(mf.evaluate(10.0), 0.0);
    /// ```
    pub fn evaluate(&self, x: f64) -> f64 {
        let degree = match *self {
            MembershipFunction::Triangular(a, b, c) => trapezoid(x, a, b, b, c),
            MembershipFunction::Trapezoidal(a, b, c, d) => trapezoid(x, a, b, c, d),
            MembershipFunction::Gaussian(mean, stdev) => {
                let z = (x - mean) / stdev;
                (-0.5 * z * z).exp()
            }
            MembershipFunction::Singleton(point) => {
                if x == point {
                    1.0
                } else {
                    0.0
                }
            }
        };

        // NaN input yields zero membership rather than propagating
        if degree.is_nan() {
            0.0
        } else {
            degree.clamp(0.0, 1.0)
        }
    }

    /// Check the shape parameters
    ///
    /// Returns a description of the problem when the parameters are not
    /// finite, out of order, or (for Gaussians) have a non-positive spread.
    pub fn validate(&self) -> Result<(), String> {
        let params: Vec<f64> = match *self {
            MembershipFunction::Triangular(a, b, c) => vec![a, b, c],
            MembershipFunction::Trapezoidal(a, b, c, d) => vec![a, b, c, d],
            MembershipFunction::Gaussian(mean, stdev) => vec![mean, stdev],
            MembershipFunction::Singleton(point) => vec![point],
        };

        if params.iter().any(|p| !p.is_finite()) {
            return Err(format!("parameters {:?} must be finite", params));
        }

        match self {
            MembershipFunction::Triangular(..) | MembershipFunction::Trapezoidal(..) => {
                if params.windows(2).any(|w| w[0] > w[1]) {
                    return Err(format!("parameters {:?} must be non-decreasing", params));
                }
            }
            MembershipFunction::Gaussian(_, stdev) if *stdev <= 0.0 => {
                return Err(format!("standard deviation {} must be positive", stdev));
            }
            _ => {}
        }

        Ok(())
    }

    /// Interval where membership is non-zero, if bounded
    pub fn support(&self) -> Option<(f64, f64)> {
        match *self {
            MembershipFunction::Triangular(a, _, c) => Some((a, c)),
            MembershipFunction::Trapezoidal(a, _, _, d) => Some((a, d)),
            MembershipFunction::Singleton(point) => Some((point, point)),
            MembershipFunction::Gaussian(..) => None,
        }
    }

    /// Short name of the shape
    pub fn shape_name(&self) -> &'static str {
        match self {
            MembershipFunction::Triangular(..) => "triangular",
            MembershipFunction::Trapezoidal(..) => "trapezoidal",
            MembershipFunction::Gaussian(..) => "gaussian",
            MembershipFunction::Singleton(..) => "singleton",
        }
    }
}

impl std::fmt::Display for MembershipFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MembershipFunction::Triangular(a, b, c) => write!(f, "triangular({a}, {b}, {c})"),
            MembershipFunction::Trapezoidal(a, b, c, d) => {
                write!(f, "trapezoidal({a}, {b}, {c}, {d})")
            }
            MembershipFunction::Gaussian(mean, stdev) => write!(f, "gaussian({mean}, {stdev})"),
            MembershipFunction::Singleton(point) => write!(f, "singleton({point})"),
        }
    }
}

/// Piecewise-linear trapezoid; a triangle is the case `b == c`
fn trapezoid(x: f64, a: f64, b: f64, c: f64, d: f64) -> f64 {
    if x < a || x > d {
        0.0
    } else if x < b {
        // x >= a and x < b imply b > a
        (x - a) / (b - a)
    } else if x <= c {
        1.0
    } else if x < d {
        (d - x) / (d - c)
    } else {
        0.0
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn sorted3() -> impl Strategy<Value = (f64, f64, f64)> {
        prop::array::uniform3(-100.0f64..100.0).prop_map(|mut p| {
            p.sort_by(|a, b| a.total_cmp(b));
            (p[0], p[1], p[2])
        })
    }

    fn sorted4() -> impl Strategy<Value = (f64, f64, f64, f64)> {
        prop::array::uniform4(-100.0f64..100.0).prop_map(|mut p| {
            p.sort_by(|a, b| a.total_cmp(b));
            (p[0], p[1], p[2], p[3])
        })
    }

    proptest! {
        /// Property: Every shape returns a degree in [0, 1], for any input
        #[test]
        fn test_degree_is_clamped(
            (a, b, c) in sorted3(),
            (p, q, r, s) in sorted4(),
            mean in -100.0f64..100.0,
            stdev in 0.001f64..50.0,
            x in prop::num::f64::ANY,
        ) {
            let shapes = [
                MembershipFunction::Triangular(a, b, c),
                MembershipFunction::Trapezoidal(p, q, r, s),
                MembershipFunction::Gaussian(mean, stdev),
                MembershipFunction::Singleton(a),
            ];

            for mf in shapes {
                let degree = mf.evaluate(x);
                prop_assert!((0.0..=1.0).contains(&degree), "{} gave {} at {}", mf, degree, x);
            }
        }

        /// Property: A triangle is zero outside [a, c] and one at its peak
        #[test]
        fn test_triangle_boundaries(
            (a, b, c) in sorted3(),
            offset in 0.001f64..1e6,
        ) {
            let mf = MembershipFunction::Triangular(a, b, c);
            prop_assert_eq!(mf.evaluate(a - offset), 0.0);
            prop_assert_eq!(mf.evaluate(c + offset), 0.0);
            prop_assert_eq!(mf.evaluate(b), 1.0);
        }
    }
}
