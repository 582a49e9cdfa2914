//! Vertex: a position plus the orientation-carrying normal attached to it.

use crate::vector::Vector;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single point of a polygon loop, carrying the normal used for flipping
/// and shading.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vertex {
    pub pos: Vector,
    pub normal: Vector,
}

impl Vertex {
    pub fn new(pos: Vector, normal: Vector) -> Self {
        Vertex { pos, normal }
    }

    /// Reverses orientation in place by negating the normal. Position is
    /// untouched — flipping a polygon reverses the vertex *order* separately.
    pub fn flip(&mut self) {
        self.normal = -self.normal;
    }

    /// Returns a new vertex whose position and normal are each linearly
    /// interpolated towards `other` by `t`.
    ///
    /// Any additional per-vertex attribute (UVs, colors, ...) added to this
    /// type in the future must be interpolated here too, or fragments
    /// produced by a plane split will discontinuously jump at the cut.
    pub fn interpolate(&self, other: &Vertex, t: f64) -> Vertex {
        Vertex::new(self.pos.lerp(other.pos, t), self.normal.lerp(other.normal, t))
    }
}
