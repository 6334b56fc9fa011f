// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time test.
//!
//! A complex number `c` is in the Mandelbrot set if the sequence
//! `z(n+1) = z(n)^2 + c` never goes to infinity.  Once any value of
//! the sequence is more than 2 away from the origin it is guaranteed
//! to diverge, so we iterate until that happens or until we run out
//! of budget, and report how many steps it took.

use num::Complex;

/// Any orbit that gets further than this from the origin diverges.
pub const BOUND: f64 = 2.0;

/// The outcome of testing a single point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Escape {
    /// True if the orbit stayed inside the bound for the whole budget.
    pub in_set: bool,
    /// How many times the orbit was advanced before it escaped, or the
    /// whole budget if it never did.
    pub iterations: usize,
}

/// Runs the escape-time test against a fixed escape radius.
#[derive(Copy, Clone, Debug)]
pub struct Evaluator {
    bound: f64,
}

impl Default for Evaluator {
    fn default() -> Self {
        Evaluator { bound: BOUND }
    }
}

impl Evaluator {
    /// An evaluator with a non-standard escape radius.  Anything
    /// smaller than 2 misclassifies points near the boundary.
    pub fn with_bound(bound: f64) -> Self {
        Evaluator { bound }
    }

    /// The escape radius in use.
    pub fn bound(&self) -> f64 {
        self.bound
    }

    /// Count how many iterations `c` survives, up to `max_iterations`.
    /// The orbit starts at `c` itself rather than at zero, which saves
    /// one trivial step.
    #[inline]
    pub fn evaluate(&self, c: Complex<f64>, max_iterations: usize) -> usize {
        let mut z = c;
        for i in 0..max_iterations {
            if z.norm_sqr().sqrt() > self.bound {
                return i;
            }
            z = z * z + c;
        }
        max_iterations
    }

    /// As `evaluate`, but also says whether the point is in the set.
    pub fn escape(&self, c: Complex<f64>, max_iterations: usize) -> Escape {
        let iterations = self.evaluate(c, max_iterations);
        Escape {
            in_set: iterations == max_iterations,
            iterations,
        }
    }
}

/// `Evaluator::default().evaluate(c, max_iterations)`.
pub fn evaluate(c: Complex<f64>, max_iterations: usize) -> usize {
    Evaluator::default().evaluate(c, max_iterations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn far_points_escape_immediately() {
        assert_eq!(evaluate(Complex::new(3.0, 0.0), 100), 0);
        assert_eq!(evaluate(Complex::new(0.0, -2.5), 100), 0);
        assert_eq!(evaluate(Complex::new(1.5, 1.5), 1), 0);
    }

    #[test]
    fn origin_never_escapes() {
        for max in 1..50 {
            assert_eq!(evaluate(Complex::new(0.0, 0.0), max), max);
        }
    }

    #[test]
    fn known_escape_counts() {
        // 0.5+i -> -0.25+2i, which is just outside the radius.
        assert_eq!(evaluate(Complex::new(0.5, 1.0), 10), 1);
        // 0.5 -> 0.75 -> 1.0625 -> 1.62890625 -> 3.15...
        assert_eq!(evaluate(Complex::new(0.5, 0.0), 10), 4);
        // -0.5+i -> -1.25 -> 1.0625+i -> -0.37109375+3.125i
        assert_eq!(evaluate(Complex::new(-0.5, 1.0), 10), 3);
    }

    #[test]
    fn radius_two_is_inside() {
        // -2 is a fixed point after one step: 4 - 2 = 2.
        assert_eq!(evaluate(Complex::new(-2.0, 0.0), 20), 20);
    }

    #[test]
    fn budget_caps_the_count() {
        assert_eq!(evaluate(Complex::new(0.5, 0.0), 3), 3);
        let e = Evaluator::default().escape(Complex::new(0.5, 0.0), 3);
        assert!(e.in_set);
    }

    #[test]
    fn zero_budget_is_in_set() {
        let e = Evaluator::default().escape(Complex::new(3.0, 0.0), 0);
        assert_eq!(e, Escape { in_set: true, iterations: 0 });
    }

    #[test]
    fn escape_reports_membership() {
        let ev = Evaluator::default();
        assert_eq!(
            ev.escape(Complex::new(-0.5, 0.0), 10),
            Escape { in_set: true, iterations: 10 }
        );
        assert_eq!(
            ev.escape(Complex::new(0.5, 0.0), 10),
            Escape { in_set: false, iterations: 4 }
        );
    }

    #[test]
    fn large_budgets_do_not_recurse() {
        assert_eq!(evaluate(Complex::new(-0.1, 0.1), 1_000_000), 1_000_000);
    }

    #[test]
    fn smaller_bound_escapes_sooner() {
        let ev = Evaluator::with_bound(1.0);
        assert_eq!(ev.bound(), 1.0);
        assert_eq!(ev.evaluate(Complex::new(0.5, 0.0), 10), 2);
    }
}
