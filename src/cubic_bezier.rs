use num_traits::NumCast;

use super::*;

/// A 2d cubic Bezier curve defined by four points: the starting point, two successive
/// control points and the ending point.
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)³ * start + 3 * (1 - t)² * t * ctrl1 + 3 * t² * (1 - t) * ctrl2 + t³ * end```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CubicBezier<F> {
    pub(crate) start: Point2<F>,
    pub(crate) ctrl1: Point2<F>,
    pub(crate) ctrl2: Point2<F>,
    pub(crate) end: Point2<F>,
}

impl<F> CubicBezier<F>
where
    F: Float + Default,
{
    pub fn new(start: Point2<F>, ctrl1: Point2<F>, ctrl2: Point2<F>, end: Point2<F>) -> Self {
        CubicBezier {
            start,
            ctrl1,
            ctrl2,
            end,
        }
    }

    pub fn start(&self) -> Point2<F> {
        self.start
    }

    pub fn ctrl1(&self) -> Point2<F> {
        self.ctrl1
    }

    pub fn ctrl2(&self) -> Point2<F> {
        self.ctrl2
    }

    pub fn end(&self) -> Point2<F> {
        self.end
    }

    /// Evaluate a CubicBezier curve at t by direct evaluation of the Bernstein polynomials.
    /// t is expected in [0, 1] but not checked.
    pub fn eval(&self, t: F) -> Point2<F> {
        Point2::new(self.axis(t, 0), self.axis(t, 1))
    }

    /// Returns the coordinate on `axis` (0 -> x, 1 -> y) of the curve evaluated at t
    pub fn axis(&self, t: F, axis: usize) -> F {
        let three = F::one() + F::one() + F::one();
        let one_t = F::one() - t;
        one_t * one_t * one_t * self.start.axis(axis)
            + three * one_t * one_t * t * self.ctrl1.axis(axis)
            + three * one_t * t * t * self.ctrl2.axis(axis)
            + t * t * t * self.end.axis(axis)
    }

    /// Approximates the arc length of the curve by flattening it with straight line segments.
    /// This approximation is unfeasable if desired accuracy is greater than ~2-3 decimal places
    pub fn arclen(&self, nsteps: usize) -> F {
        let n = <F as NumCast>::from(nsteps).unwrap_or_else(F::one);
        let mut arclen = F::zero();
        let mut prev = self.start;
        for i in 1..=nsteps {
            let t = <F as NumCast>::from(i).unwrap_or_else(F::zero) / n;
            let p = self.eval(t);
            arclen = arclen + prev.distance(p);
            prev = p;
        }
        arclen
    }

    pub fn baseline(&self) -> LineSegment<F> {
        LineSegment {
            start: self.start,
            end: self.end,
        }
    }

    /// True if both control points lie on the baseline within `tolerance`.
    pub fn is_linear(&self, tolerance: F) -> bool {
        let line = self.baseline();
        line.distance_to_point(self.ctrl1) <= tolerance
            && line.distance_to_point(self.ctrl2) <= tolerance
    }

    /// Coefficients (a, b, c) of the derivative along `axis`, divided by 3:
    /// B'(t) / 3 = a*t^2 + b*t + c
    fn derivative_coefficients(&self, axis: usize) -> (F, F, F) {
        let two = F::one() + F::one();
        let three = two + F::one();
        let four = two + two;
        let p0 = self.start.axis(axis);
        let p1 = self.ctrl1.axis(axis);
        let p2 = self.ctrl2.axis(axis);
        let p3 = self.end.axis(axis);

        let a = -p0 + three * p1 - three * p2 + p3;
        let b = two * p0 - four * p1 + two * p2;
        let c = -p0 + p1;
        (a, b, c)
    }

    /// Return the tight bounding box of the curve.
    ///
    /// The box starts out with the end points only, as intermediate control points
    /// are generally not on the curve. The extrema of each axis are the roots of the
    /// derivative in [0, 1]; the full curve point is evaluated at every root.
    pub fn bounding_box(&self) -> Bounds<F> {
        let mut bounds = self.baseline().bounding_box();
        for axis in 0..2 {
            let (a, b, c) = self.derivative_coefficients(axis);
            for t in solve_quadratic(a, b, c) {
                bounds.include(self.eval(t));
            }
        }
        bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quarter_circles(c: f64) -> [CubicBezier<f64>; 4] {
        [
            CubicBezier::new(
                Point2::new(0f64, 1f64),
                Point2::new(c, 1f64),
                Point2::new(1f64, c),
                Point2::new(1f64, 0f64),
            ),
            CubicBezier::new(
                Point2::new(1f64, 0f64),
                Point2::new(1f64, -c),
                Point2::new(c, -1f64),
                Point2::new(0f64, -1f64),
            ),
            CubicBezier::new(
                Point2::new(0f64, -1f64),
                Point2::new(-c, -1f64),
                Point2::new(-1f64, -c),
                Point2::new(-1f64, 0f64),
            ),
            CubicBezier::new(
                Point2::new(-1f64, 0f64),
                Point2::new(-1f64, c),
                Point2::new(-c, 1f64),
                Point2::new(0f64, 1f64),
            ),
        ]
    }

    #[test]
    fn circle_approximation_error() {
        // control points are chosen for minimum radial distance error
        // according to: http://spencermortensen.com/articles/bezier-circle/
        let c = 0.551915024494;
        let max_drift_perc = 0.019608; // radial drift percent
        let max_error = max_drift_perc * 0.01; // absolute max radial error

        let nsteps = 1000;
        for quadrant in quarter_circles(c) {
            for t in 0..=nsteps {
                let t = t as f64 * 1f64 / (nsteps as f64);
                let contour = quadrant.eval(t).abs() - 1f64;
                assert!(contour.abs() <= max_error);
            }
        }
    }

    #[test]
    fn circle_circumference_approximation() {
        // remember arclen also works by linear approximation, not the true integral
        let c = 0.551915024494;
        let max_error = 1e-2;
        let nsteps = 1000;
        let circumference: f64 = quarter_circles(c).iter().map(|q| q.arclen(nsteps)).sum();
        assert!((circumference - core::f64::consts::TAU).abs() < max_error);
    }

    #[test]
    fn bounding_box_contains() {
        // check if bounding box for a curve contains all points (with some approximation error)
        let bezier = CubicBezier::new(
            Point2::new(0f64, 1.77f64),
            Point2::new(2.9f64, 0f64),
            Point2::new(4.3f64, -3f64),
            Point2::new(3.2f64, 4f64),
        );
        let bounds = bezier.bounding_box();

        let nsteps: usize = 1000;
        for t in 0..=nsteps {
            let t = t as f64 * 1f64 / (nsteps as f64);
            assert!(bounds.contains(bezier.eval(t), 1e-9));
        }
    }

    #[test]
    fn bounding_box_is_tight() {
        // the curve bulges beyond both end points on x, the box must reach the extremum
        // but not the control points
        let bezier = CubicBezier::new(
            Point2::new(0f64, 0f64),
            Point2::new(4f64, 1f64),
            Point2::new(4f64, 2f64),
            Point2::new(0f64, 3f64),
        );
        let bounds = bezier.bounding_box();
        // x(t) = 12t(1-t), maximum 3 at t = 0.5
        assert!((bounds.max_x - 3.0).abs() < EPSILON);
        assert!(bounds.min_x.abs() < EPSILON);
        assert_eq!((bounds.min_y, bounds.max_y), (0.0, 3.0));

        // sampled maximum never exceeds the analytic one
        let nsteps = 1000;
        let sampled = (0..=nsteps)
            .map(|i| bezier.eval(i as f64 / nsteps as f64).x)
            .fold(f64::NEG_INFINITY, f64::max);
        assert!(sampled <= bounds.max_x + EPSILON);
        assert!(bounds.max_x - sampled < 1e-5);
    }

    #[test]
    fn straight_curve_is_linear() {
        let a = Point2::new(1f64, 1f64);
        let b = Point2::new(5f64, 3f64);
        let bezier = CubicBezier::new(a, a + (b - a) * 0.25, a + (b - a) * 0.75, b);
        assert!(bezier.is_linear(EPSILON));
        let bounds = bezier.bounding_box();
        assert_eq!(bounds, Bounds::new(1.0, 5.0, 1.0, 3.0));
    }
}
