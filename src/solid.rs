//! `Solid`: the public Boolean-operation API over a polygon list.

use crate::bsp::BspNode;
use crate::polygon::Polygon;

/// A boundary mesh of convex polygons, with Boolean set operations
/// expressed as choreographies over two freshly built BSP trees.
///
/// Every operation here deep-clones its operands' polygon lists before
/// building a tree from them, so `Solid` itself has pure value semantics:
/// none of `union`, `subtract`, `intersect`, `inverse` mutate `self` or
/// their argument.
#[derive(Clone, Debug)]
pub struct Solid {
    polygons: Vec<Polygon>,
}

impl Solid {
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Solid { polygons }
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn into_polygons(self) -> Vec<Polygon> {
        self.polygons
    }

    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// `A ∪ B`. The trailing `invert/clip/invert` on `b` removes the
    /// duplicated coplanar overlap that survives the first two clips,
    /// keeping those coplanar faces in `a`'s tree only — drop it and
    /// overlapping solids come out with doubled coincident faces.
    pub fn union(&self, other: &Solid) -> Solid {
        let mut a = BspNode::from_polygons(self.polygons.clone());
        let mut b = BspNode::from_polygons(other.polygons.clone());

        a.clip_to(&b);
        b.clip_to(&a);
        b.invert();
        b.clip_to(&a);
        b.invert();
        a.build(b.all_polygons());

        Solid::new(a.all_polygons())
    }

    /// `A − B`, derived from `A − B = ¬(¬A ∪ B)`.
    pub fn subtract(&self, other: &Solid) -> Solid {
        let mut a = BspNode::from_polygons(self.polygons.clone());
        let mut b = BspNode::from_polygons(other.polygons.clone());

        a.invert();
        a.clip_to(&b);
        b.clip_to(&a);
        b.invert();
        b.clip_to(&a);
        b.invert();
        a.build(b.all_polygons());
        a.invert();

        Solid::new(a.all_polygons())
    }

    /// `A ∩ B`, derived from `A ∩ B = ¬(¬A ∪ ¬B)`.
    pub fn intersect(&self, other: &Solid) -> Solid {
        let mut a = BspNode::from_polygons(self.polygons.clone());
        let mut b = BspNode::from_polygons(other.polygons.clone());

        a.invert();
        b.clip_to(&a);
        b.invert();
        a.clip_to(&b);
        b.clip_to(&a);
        a.build(b.all_polygons());
        a.invert();

        Solid::new(a.all_polygons())
    }

    /// Complement: flips every polygon's orientation without touching any
    /// BSP tree, since only the polygon set is ever exported.
    pub fn inverse(&self) -> Solid {
        Solid::new(self.polygons.iter().map(Polygon::flipped).collect())
    }
}
