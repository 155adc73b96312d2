use core::ops::{Add, Mul, Neg, Sub};

use super::*;

/// A 2D coordinate generic over its float type.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2<F> {
    pub x: F,
    pub y: F,
}

impl<F> Point2<F>
where
    F: Float,
{
    pub fn new(x: F, y: F) -> Self {
        Point2 { x, y }
    }

    /// Point at `angle` radians on a circle of `radius` around the origin.
    pub fn polar(radius: F, angle: F) -> Self {
        Point2 {
            x: angle.cos() * radius,
            y: angle.sin() * radius,
        }
    }

    /// Returns the component on `axis` (0 -> x, 1 -> y).
    pub fn axis(&self, axis: usize) -> F {
        match axis {
            0 => self.x,
            _ => self.y,
        }
    }

    pub fn squared_length(&self) -> F {
        self.x * self.x + self.y * self.y
    }

    /// Interprets the point as a vector and returns its norm.
    pub fn abs(&self) -> F {
        self.x.hypot(self.y)
    }

    /// Returns the distance between self and other
    pub fn distance(&self, other: Self) -> F {
        (*self - other).abs()
    }

    pub fn dot(&self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    /// z component of the 3D cross product, i.e. twice the signed area
    /// spanned by the two vectors.
    pub fn cross(&self, other: Self) -> F {
        self.x * other.y - self.y * other.x
    }

    /// Counter-clockwise perpendicular (in y-up terms) of the same length.
    pub fn perpendicular(&self) -> Self {
        Point2 {
            x: -self.y,
            y: self.x,
        }
    }

    /// Unit vector in the same direction. Zero length vectors yield NaN components.
    pub fn normalize(&self) -> Self {
        let len = self.abs();
        Point2 {
            x: self.x / len,
            y: self.y / len,
        }
    }

    /// Applies an independent scale and offset per axis.
    pub fn scale_offset(&self, scale: Self, offset: Self) -> Self {
        Point2 {
            x: self.x * scale.x + offset.x,
            y: self.y * scale.y + offset.y,
        }
    }
}

impl<F> Add for Point2<F>
where
    F: Add<Output = F>,
{
    type Output = Self;

    fn add(self, other: Point2<F>) -> Point2<F> {
        Point2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl<F> Sub for Point2<F>
where
    F: Sub<Output = F>,
{
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Point2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl<F> Mul<F> for Point2<F>
where
    // Scalar multiplication F * F => F, the point is always the left operand.
    F: Mul<F, Output = F> + Copy,
{
    type Output = Point2<F>;

    fn mul(self, rhs: F) -> Point2<F> {
        Point2 {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl<F> Neg for Point2<F>
where
    F: Neg<Output = F>,
{
    type Output = Self;

    fn neg(self) -> Self {
        Point2 {
            x: -self.x,
            y: -self.y,
        }
    }
}
