//! 3D vector value type shared by vertices, planes and polygons.

use std::ops::{Add, Div, Mul, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point or direction in 3D space.
///
/// Pure value type: every operation returns a new `Vector` rather than
/// mutating in place, and there is no notion of identity beyond the
/// three components.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Vector { x, y, z }
    }

    pub fn zero() -> Self {
        Vector::new(0.0, 0.0, 0.0)
    }

    pub fn dot(self, other: Vector) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(self, other: Vector) -> Vector {
        Vector::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Returns `self` scaled to unit length.
    ///
    /// A zero (or near-zero) vector has no well-defined direction; rather
    /// than propagate a `NaN` from dividing by zero, this logs and returns
    /// the zero vector. Callers that fed in collinear points for a plane
    /// normal will see an inert all-zero normal rather than a silently
    /// corrupt one.
    pub fn unit(self) -> Vector {
        let len = self.length();
        if len <= f64::EPSILON {
            log::warn!("normalizing a zero-length vector; returning zero vector");
            return Vector::zero();
        }
        self.divided_by(len)
    }

    pub fn divided_by(self, scalar: f64) -> Vector {
        Vector::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }

    pub fn scale(self, factor: f64) -> Vector {
        Vector::new(self.x * factor, self.y * factor, self.z * factor)
    }

    /// Linearly interpolates towards `other` by `t` (`t = 0` yields `self`,
    /// `t = 1` yields `other`).
    pub fn lerp(self, other: Vector, t: f64) -> Vector {
        self + (other - self) * t
    }
}

impl Add for Vector {
    type Output = Vector;
    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector {
    type Output = Vector;
    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;
    fn mul(self, rhs: f64) -> Vector {
        self.scale(rhs)
    }
}

impl Div<f64> for Vector {
    type Output = Vector;
    fn div(self, rhs: f64) -> Vector {
        self.divided_by(rhs)
    }
}

impl Neg for Vector {
    type Output = Vector;
    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y, -self.z)
    }
}
