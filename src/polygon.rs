//! Convex, coplanar polygon loops and the opaque tag carried through splits.

use crate::error::CsgError;
use crate::plane::Plane;
use crate::vertex::Vertex;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// An opaque, cheaply-cloneable handle forwarded unchanged to every
/// fragment and clone of the polygon that carries it.
///
/// The engine never inspects the payload; it exists purely so a caller can
/// round-trip arbitrary per-polygon data (a material id, a source face
/// index, ...) through Boolean operations. Reference-counted rather than
/// deep-copied, and `Send + Sync` so a `Solid` can be shared read-only
/// across threads (see the engine's concurrency notes).
#[derive(Clone)]
pub struct SharedTag(Arc<dyn Any + Send + Sync>);

impl SharedTag {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        SharedTag(Arc::new(value))
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref()
    }
}

impl fmt::Debug for SharedTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedTag").field(&Arc::as_ptr(&self.0)).finish()
    }
}

/// A convex, planar, CCW vertex loop.
///
/// The plane is derived once from the first three vertices at
/// construction and never recomputed except when a fragment is produced by
/// splitting (§4.3) or the whole polygon is flipped.
#[derive(Clone, Debug)]
pub struct Polygon {
    vertices: Vec<Vertex>,
    plane: Plane,
    shared: Option<SharedTag>,
}

impl Polygon {
    /// Builds a polygon, deriving its plane from the first three vertices.
    ///
    /// Panics if `vertices.len() < 3` — prefer [`Polygon::try_new`] at any
    /// boundary where vertex counts aren't already guaranteed by the
    /// caller (e.g. external input). Internal call sites (split fragments,
    /// which have already checked `len() >= 3`) use this directly.
    pub fn new(vertices: Vec<Vertex>, shared: Option<SharedTag>) -> Self {
        Self::try_new(vertices, shared).expect("Polygon::new requires at least 3 vertices")
    }

    /// Fallible constructor enforcing the one caller-contract invariant
    /// this crate checks cheaply: at least 3 vertices. Convexity,
    /// coplanarity and winding (§3 invariants ii-iv) are not verified here.
    pub fn try_new(vertices: Vec<Vertex>, shared: Option<SharedTag>) -> Result<Self, CsgError> {
        if vertices.len() < 3 {
            return Err(CsgError::TooFewVertices {
                found: vertices.len(),
            });
        }
        let plane = Plane::from_points(vertices[0].pos, vertices[1].pos, vertices[2].pos);
        Ok(Polygon {
            vertices,
            plane,
            shared,
        })
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn plane(&self) -> Plane {
        self.plane
    }

    pub fn shared(&self) -> Option<SharedTag> {
        self.shared.clone()
    }

    /// Reverses winding order and flips every vertex and the plane,
    /// producing the same point set with opposite orientation.
    pub fn flip(&mut self) {
        self.vertices.reverse();
        for v in &mut self.vertices {
            v.flip();
        }
        self.plane.flip();
    }

    pub fn flipped(&self) -> Polygon {
        let mut p = self.clone();
        p.flip();
        p
    }
}
