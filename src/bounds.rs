//! Axis-aligned bounding rectangles and fitting them onto a target size.

use super::*;

/// Axis-aligned bounding rectangle.
///
/// Starts out as [`Bounds::empty()`], the identity for min/max accumulation,
/// and is only meaningful after at least one point or rectangle was included.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds<F> {
    pub min_x: F,
    pub max_x: F,
    pub min_y: F,
    pub max_y: F,
}

impl<F> Bounds<F>
where
    F: Float,
{
    pub fn empty() -> Self {
        Bounds {
            min_x: F::infinity(),
            max_x: F::neg_infinity(),
            min_y: F::infinity(),
            max_y: F::neg_infinity(),
        }
    }

    pub fn new(min_x: F, max_x: F, min_y: F, max_y: F) -> Self {
        Bounds {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Smallest bounds containing all `points`.
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Point2<F>>,
    {
        let mut bounds = Self::empty();
        for p in points {
            bounds.include(p);
        }
        bounds
    }

    /// True until a point has been accumulated.
    pub fn is_empty(&self) -> bool {
        !(self.min_x <= self.max_x && self.min_y <= self.max_y)
    }

    pub fn include(&mut self, p: Point2<F>) {
        self.min_x = self.min_x.min(p.x);
        self.max_x = self.max_x.max(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_y = self.max_y.max(p.y);
    }

    pub fn union(&self, other: &Self) -> Self {
        Bounds {
            min_x: self.min_x.min(other.min_x),
            max_x: self.max_x.max(other.max_x),
            min_y: self.min_y.min(other.min_y),
            max_y: self.max_y.max(other.max_y),
        }
    }

    pub fn width(&self) -> F {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> F {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> Point2<F> {
        let two = F::one() + F::one();
        Point2::new(
            (self.min_x + self.max_x) / two,
            (self.min_y + self.max_y) / two,
        )
    }

    /// True if `p` lies inside the bounds grown by `tolerance` on each side.
    pub fn contains(&self, p: Point2<F>, tolerance: F) -> bool {
        p.x >= self.min_x - tolerance
            && p.x <= self.max_x + tolerance
            && p.y >= self.min_y - tolerance
            && p.y <= self.max_y + tolerance
    }

    /// Scale and offset that map these bounds onto `[0, width] x [0, height]`.
    pub fn fit(&self, width: F, height: F, fit: Fit) -> FitTransform<F> {
        let scale_x = width / self.width();
        let scale_y = height / self.height();
        match fit {
            Fit::Stretch => FitTransform {
                scale: Point2::new(scale_x, scale_y),
                offset: Point2::new(-self.min_x * scale_x, -self.min_y * scale_y),
            },
            Fit::Contain => {
                let two = F::one() + F::one();
                let scale = scale_x.min(scale_y);
                FitTransform {
                    scale: Point2::new(scale, scale),
                    offset: Point2::new(
                        -self.min_x * scale + (width - self.width() * scale) / two,
                        -self.min_y * scale + (height - self.height() * scale) / two,
                    ),
                }
            }
        }
    }
}

/// How computed shape bounds are mapped onto the target rectangle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Fit {
    /// Independent scale per axis, the shape touches all four edges.
    #[default]
    Stretch,
    /// One uniform scale, the shape is centered and touches two opposite edges.
    Contain,
}

/// Per-axis affine map `p * scale + offset`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FitTransform<F> {
    pub scale: Point2<F>,
    pub offset: Point2<F>,
}

impl<F> FitTransform<F>
where
    F: Float,
{
    pub fn apply(&self, p: Point2<F>) -> Point2<F> {
        p.scale_offset(self.scale, self.offset)
    }
}
