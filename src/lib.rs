//! BSP-tree boolean set operations over convex-polygon solids.
//!
//! Implements the Naylor/Thibault/Amanatides approach: a [`Solid`] is a
//! flat list of convex, coplanar polygons; Boolean operations build a BSP
//! tree per operand and express `union`/`subtract`/`intersect` as fixed
//! sequences of two primitives, tree inversion and tree clipping. See
//! [`Solid`] for the public surface; [`Plane::split_polygon`] for the
//! tolerance-aware predicate everything else is built on.
//!
//! Producing polygon lists from primitive shapes (cuboids, spheres, ...),
//! rendering, mesh export/import, and any GUI/CLI/FFI binding layer are
//! all out of scope for this crate — it consumes and produces plain
//! [`Polygon`] lists and nothing else.

mod bsp;
mod error;
mod plane;
mod polygon;
mod solid;
mod vector;
mod vertex;

pub use error::CsgError;
pub use plane::{Plane, PolygonClass};
pub use polygon::{Polygon, SharedTag};
pub use solid::Solid;
pub use vector::Vector;
pub use vertex::Vertex;

/// Tolerance used by [`Plane::split_polygon`] to classify a vertex as
/// coplanar rather than strictly front/back. Fixed rather than
/// configurable: the Boolean choreography in [`Solid`] assumes every split
/// within one operation uses the same epsilon.
pub const EPSILON: f64 = 1e-5;
