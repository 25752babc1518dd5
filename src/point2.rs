use core::ops::{Add, Mul, Sub};

use num_traits::Float;

use super::*;

/// A 2D point (or vector, the distinction is contextual) with scalar type `T`.
///
/// Kept deliberately small: the curve modules only need component access and
/// the usual vector arithmetic, so wrapping another library's point type is a
/// matter of converting through `(T, T)` tuples.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Point2<T> {
    pub x: T,
    pub y: T,
}

impl<T> Point2<T>
where
    T: Float,
{
    pub fn new(x: T, y: T) -> Self {
        Point2 { x, y }
    }

    /// Dot product of self and other interpreted as vectors.
    pub fn dot(&self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Squared L2 norm. Cheaper than `length()`, preferred on hot paths.
    pub fn squared_length(&self) -> T {
        self.x * self.x + self.y * self.y
    }

    /// L2 norm of the point interpreted as a vector.
    pub fn length(&self) -> T {
        self.squared_length().sqrt()
    }

    /// Returns the distance between self and other.
    pub fn distance(&self, other: Self) -> T {
        (*self - other).length()
    }

    /// Returns the squared distance between self and other.
    pub fn distance_squared(&self, other: Self) -> T {
        (*self - other).squared_length()
    }

    /// Returns the unit-length version of self, or `None` if the vector is
    /// too short to carry a direction.
    pub fn normalize(&self) -> Option<Self> {
        let squared = self.squared_length();
        if squared < T::from(EPSILON).unwrap() {
            return None;
        }
        let inverse = squared.sqrt().recip();
        Some(*self * inverse)
    }

    /// Rotates the vector by 90 degrees counter-clockwise.
    /// Applied to a unit tangent this yields the curve normal.
    pub fn perp(&self) -> Self {
        Point2 {
            x: -self.y,
            y: self.x,
        }
    }
}

impl<T> Default for Point2<T>
where
    T: Float,
{
    fn default() -> Self {
        Point2 {
            x: T::zero(),
            y: T::zero(),
        }
    }
}

impl<T> Add for Point2<T>
where
    T: Float,
{
    type Output = Self;

    fn add(self, other: Point2<T>) -> Point2<T> {
        Point2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl<T> Sub for Point2<T>
where
    T: Float,
{
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Point2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl<T> Mul<T> for Point2<T>
where
    T: Float,
{
    type Output = Point2<T>;

    fn mul(self, rhs: T) -> Point2<T> {
        Point2 {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl<T> From<(T, T)> for Point2<T> {
    fn from(tuple: (T, T)) -> Self {
        Point2 {
            x: tuple.0,
            y: tuple.1,
        }
    }
}

impl<T> From<Point2<T>> for (T, T) {
    fn from(point: Point2<T>) -> (T, T) {
        (point.x, point.y)
    }
}
