//! Minimal convex-solid fixtures for exercising the boolean engine.
//!
//! These are deliberately not the primitive-shape tessellators the crate
//! treats as an external collaborator (see `lib.rs` docs) — just enough
//! geometry, built by hand, to drive `union`/`subtract`/`intersect` with
//! known expected outcomes.

use csg_core::{Polygon, Solid, Vector, Vertex};

fn quad(n: Vector, a: Vector, b: Vector, c: Vector, d: Vector) -> Polygon {
    Polygon::new(
        vec![
            Vertex::new(a, n),
            Vertex::new(b, n),
            Vertex::new(c, n),
            Vertex::new(d, n),
        ],
        None,
    )
}

/// Axis-aligned cube, `radius` being the half-extent along each axis.
pub fn cube(center: Vector, radius: f64) -> Solid {
    let corner = |sx: f64, sy: f64, sz: f64| {
        Vector::new(
            center.x + sx * radius,
            center.y + sy * radius,
            center.z + sz * radius,
        )
    };

    let polys = vec![
        quad(
            Vector::new(-1.0, 0.0, 0.0),
            corner(-1.0, -1.0, -1.0),
            corner(-1.0, -1.0, 1.0),
            corner(-1.0, 1.0, 1.0),
            corner(-1.0, 1.0, -1.0),
        ),
        quad(
            Vector::new(1.0, 0.0, 0.0),
            corner(1.0, -1.0, 1.0),
            corner(1.0, -1.0, -1.0),
            corner(1.0, 1.0, -1.0),
            corner(1.0, 1.0, 1.0),
        ),
        quad(
            Vector::new(0.0, -1.0, 0.0),
            corner(-1.0, -1.0, -1.0),
            corner(1.0, -1.0, -1.0),
            corner(1.0, -1.0, 1.0),
            corner(-1.0, -1.0, 1.0),
        ),
        quad(
            Vector::new(0.0, 1.0, 0.0),
            corner(-1.0, 1.0, 1.0),
            corner(1.0, 1.0, 1.0),
            corner(1.0, 1.0, -1.0),
            corner(-1.0, 1.0, -1.0),
        ),
        quad(
            Vector::new(0.0, 0.0, -1.0),
            corner(-1.0, 1.0, -1.0),
            corner(1.0, 1.0, -1.0),
            corner(1.0, -1.0, -1.0),
            corner(-1.0, -1.0, -1.0),
        ),
        quad(
            Vector::new(0.0, 0.0, 1.0),
            corner(-1.0, -1.0, 1.0),
            corner(1.0, -1.0, 1.0),
            corner(1.0, 1.0, 1.0),
            corner(-1.0, 1.0, 1.0),
        ),
    ];
    Solid::new(polys)
}

/// Bounding-box corners of a solid, assuming axis-aligned convex faces
/// (true for the fixtures in this module).
pub fn bounds(solid: &Solid) -> (Vector, Vector) {
    let mut min = Vector::new(f64::INFINITY, f64::INFINITY, f64::INFINITY);
    let mut max = Vector::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY);
    for poly in solid.polygons() {
        for v in poly.vertices() {
            min.x = min.x.min(v.pos.x);
            min.y = min.y.min(v.pos.y);
            min.z = min.z.min(v.pos.z);
            max.x = max.x.max(v.pos.x);
            max.y = max.y.max(v.pos.y);
            max.z = max.z.max(v.pos.z);
        }
    }
    (min, max)
}
