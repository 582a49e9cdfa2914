//! Oriented planes and the convex-polygon splitting predicate.

use crate::polygon::Polygon;
use crate::vector::Vector;
use crate::EPSILON;
use std::ops::BitOr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Per-vertex (and per-polygon) classification against a plane.
///
/// The four values form a two-bit lattice: `FRONT | BACK == SPANNING` and
/// `COPLANAR | x == x`. This is more than cosmetic — `split_polygon`'s
/// edge-crossing test is literally `(class(vi) | class(vj)) == SPANNING`,
/// so the bit pattern below is load-bearing, not an implementation detail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PolygonClass(u8);

impl PolygonClass {
    pub const COPLANAR: PolygonClass = PolygonClass(0);
    pub const FRONT: PolygonClass = PolygonClass(1);
    pub const BACK: PolygonClass = PolygonClass(2);
    pub const SPANNING: PolygonClass = PolygonClass(3);
}

impl BitOr for PolygonClass {
    type Output = PolygonClass;
    fn bitor(self, rhs: PolygonClass) -> PolygonClass {
        PolygonClass(self.0 | rhs.0)
    }
}

/// An oriented plane `{ p : normal . p = w }`.
///
/// `normal` is unit length up to numerical error; flipping negates both
/// fields, which reverses orientation while keeping the same point set.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Plane {
    pub normal: Vector,
    pub w: f64,
}

impl Plane {
    pub fn new(normal: Vector, w: f64) -> Self {
        Plane { normal, w }
    }

    /// Derives a plane from three non-collinear points, CCW winding facing
    /// the normal. Collinear inputs drive `Vector::unit` into its
    /// zero-normal fallback (logged there) rather than NaN here.
    pub fn from_points(a: Vector, b: Vector, c: Vector) -> Self {
        let n = (b - a).cross(c - a).unit();
        Plane::new(n, n.dot(a))
    }

    pub fn flip(&mut self) {
        self.normal = -self.normal;
        self.w = -self.w;
    }

    fn signed_distance(&self, point: Vector) -> f64 {
        self.normal.dot(point) - self.w
    }

    fn classify_point(&self, point: Vector) -> PolygonClass {
        let t = self.signed_distance(point);
        if t < -EPSILON {
            PolygonClass::BACK
        } else if t > EPSILON {
            PolygonClass::FRONT
        } else {
            PolygonClass::COPLANAR
        }
    }

    /// Classifies `polygon` against this plane and routes it (or the
    /// fragments produced by splitting it) into the four caller-supplied
    /// bins. Bins are reused across calls by the BSP builder/clipper, so
    /// this never allocates its own output containers.
    pub fn split_polygon(
        &self,
        polygon: &Polygon,
        coplanar_front: &mut Vec<Polygon>,
        coplanar_back: &mut Vec<Polygon>,
        front: &mut Vec<Polygon>,
        back: &mut Vec<Polygon>,
    ) {
        let vertices = polygon.vertices();
        let n = vertices.len();
        let mut polygon_class = PolygonClass::COPLANAR;
        let mut vertex_classes = Vec::with_capacity(n);
        for v in vertices {
            let class = self.classify_point(v.pos);
            polygon_class = polygon_class | class;
            vertex_classes.push(class);
        }

        match polygon_class {
            PolygonClass::COPLANAR => {
                if self.normal.dot(polygon.plane().normal) > 0.0 {
                    coplanar_front.push(polygon.clone());
                } else {
                    coplanar_back.push(polygon.clone());
                }
            }
            PolygonClass::FRONT => front.push(polygon.clone()),
            PolygonClass::BACK => back.push(polygon.clone()),
            _ => {
                let mut f = Vec::new();
                let mut b = Vec::new();
                for i in 0..n {
                    let j = (i + 1) % n;
                    let (ti, tj) = (vertex_classes[i], vertex_classes[j]);
                    let (vi, vj) = (vertices[i], vertices[j]);

                    if ti != PolygonClass::BACK {
                        f.push(vi);
                    }
                    if ti != PolygonClass::FRONT {
                        b.push(vi);
                    }

                    if (ti | tj) == PolygonClass::SPANNING {
                        let t = (self.w - self.normal.dot(vi.pos))
                            / self.normal.dot(vj.pos - vi.pos);
                        let v = vi.interpolate(&vj, t);
                        f.push(v);
                        b.push(v);
                    }
                }
                if f.len() >= 3 {
                    front.push(Polygon::new(f, polygon.shared()));
                } else if !f.is_empty() {
                    log::trace!("dropped degenerate front fragment with {} vertices", f.len());
                }
                if b.len() >= 3 {
                    back.push(Polygon::new(b, polygon.shared()));
                } else if !b.is_empty() {
                    log::trace!("dropped degenerate back fragment with {} vertices", b.len());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polygon::Polygon;
    use crate::vertex::Vertex;

    fn axis_up(p: Vector) -> Vertex {
        Vertex::new(p, Vector::new(0.0, 0.0, 1.0))
    }

    #[test]
    fn coplanar_x_plus_back_lattice() {
        assert_eq!(
            PolygonClass::FRONT | PolygonClass::BACK,
            PolygonClass::SPANNING
        );
        assert_eq!(
            PolygonClass::COPLANAR | PolygonClass::FRONT,
            PolygonClass::FRONT
        );
    }

    #[test]
    fn spanning_triangle_splits_into_front_and_back() {
        // S5 from the spec: triangle straddling the y-z plane.
        let tri = Polygon::new(
            vec![
                axis_up(Vector::new(-1.0, 0.0, 0.0)),
                axis_up(Vector::new(1.0, 0.0, 0.0)),
                axis_up(Vector::new(0.0, 1.0, 0.0)),
            ],
            None,
        );
        let plane = Plane::new(Vector::new(1.0, 0.0, 0.0), 0.0);

        let (mut cf, mut cb, mut front, mut back) = (Vec::new(), Vec::new(), Vec::new(), Vec::new());
        plane.split_polygon(&tri, &mut cf, &mut cb, &mut front, &mut back);

        assert!(cf.is_empty() && cb.is_empty());
        assert_eq!(front.len(), 1);
        assert_eq!(back.len(), 1);

        let front_positions: Vec<Vector> = front[0].vertices().iter().map(|v| v.pos).collect();
        assert_eq!(
            front_positions,
            vec![
                Vector::new(0.0, 0.0, 0.0),
                Vector::new(1.0, 0.0, 0.0),
                Vector::new(0.0, 1.0, 0.0)
            ]
        );

        let back_positions: Vec<Vector> = back[0].vertices().iter().map(|v| v.pos).collect();
        assert_eq!(
            back_positions,
            vec![
                Vector::new(-1.0, 0.0, 0.0),
                Vector::new(0.0, 0.0, 0.0),
                Vector::new(0.0, 1.0, 0.0)
            ]
        );
    }

    #[test]
    fn coplanar_polygon_never_lands_in_front_or_back_bins() {
        let square = Polygon::new(
            vec![
                axis_up(Vector::new(0.0, 0.0, 0.0)),
                axis_up(Vector::new(1.0, 0.0, 0.0)),
                axis_up(Vector::new(1.0, 1.0, 0.0)),
                axis_up(Vector::new(0.0, 1.0, 0.0)),
            ],
            None,
        );
        let plane = Plane::new(Vector::new(0.0, 0.0, 1.0), 0.0);

        let (mut cf, mut cb, mut front, mut back) = (Vec::new(), Vec::new(), Vec::new(), Vec::new());
        plane.split_polygon(&square, &mut cf, &mut cb, &mut front, &mut back);

        assert!(front.is_empty());
        assert!(back.is_empty());
        assert_eq!(cf.len() + cb.len(), 1);
    }

    #[test]
    fn exact_zero_orientation_tie_breaks_to_coplanar_back() {
        // Collinear leading vertices drive the polygon's own derived plane
        // normal to zero (Vector::unit's degenerate fallback). All three
        // points still lie on the z=0 splitting plane, so classification
        // is COPLANAR, but `self.normal.dot(polygon.plane.normal)` is
        // exactly zero rather than strictly positive or negative.
        let collinear = Polygon::new(
            vec![
                axis_up(Vector::new(0.0, 0.0, 0.0)),
                axis_up(Vector::new(1.0, 0.0, 0.0)),
                axis_up(Vector::new(2.0, 0.0, 0.0)),
            ],
            None,
        );
        assert_eq!(collinear.plane().normal, Vector::zero());

        let plane = Plane::new(Vector::new(0.0, 0.0, 1.0), 0.0);

        let (mut cf, mut cb, mut front, mut back) = (Vec::new(), Vec::new(), Vec::new(), Vec::new());
        plane.split_polygon(&collinear, &mut cf, &mut cb, &mut front, &mut back);

        assert!(front.is_empty() && back.is_empty());
        assert_eq!(cf.len(), 0);
        assert_eq!(cb.len(), 1);
    }
}
