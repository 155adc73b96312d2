use super::*;

/// LineSegment defined by a start and an endpoint, evaluatable
/// anywhere inbetween using interpolation parameter t: [0,1] in eval()
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LineSegment<F> {
    pub(crate) start: Point2<F>,
    pub(crate) end: Point2<F>,
}

impl<F> LineSegment<F>
where
    F: Float + Default,
{
    pub fn new(start: Point2<F>, end: Point2<F>) -> Self {
        LineSegment { start, end }
    }

    pub fn start(&self) -> Point2<F> {
        self.start
    }

    pub fn end(&self) -> Point2<F> {
        self.end
    }

    pub fn eval(&self, t: F) -> Point2<F> {
        self.start + (self.end - self.start) * t
    }

    pub fn length(&self) -> F {
        self.start.distance(self.end)
    }

    /// Return the distance from the LineSegment to Point p by calculating the projection
    pub fn distance_to_point(&self, p: Point2<F>) -> F {
        let v = self.end - self.start;
        let l2 = v.squared_length();
        // if start and endpoint are approx the same, return the distance to either
        if l2 < F::epsilon() {
            return self.start.distance(p);
        }
        let t = ((p - self.start).dot(v) / l2).max(F::zero()).min(F::one());
        let projection = self.start + v * t;
        p.distance(projection)
    }

    /// Return the bounding box of the segment (its two end points).
    pub fn bounding_box(&self) -> Bounds<F> {
        let mut bounds = Bounds::empty();
        bounds.include(self.start);
        bounds.include(self.end);
        bounds
    }
}
