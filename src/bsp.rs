//! The recursive BSP tree: construction, inversion, and clipping.
//!
//! `BspNode` is a private implementation detail — only [`crate::Solid`] is
//! public, so the "clone inputs at the public boundary, mutate freely
//! inside" discipline can't be bypassed by a caller reaching into a node
//! directly.

use crate::plane::Plane;
use crate::polygon::Polygon;

pub(crate) struct BspNode {
    plane: Option<Plane>,
    front: Option<Box<BspNode>>,
    back: Option<Box<BspNode>>,
    polygons: Vec<Polygon>,
}

impl BspNode {
    pub(crate) fn new() -> Self {
        BspNode {
            plane: None,
            front: None,
            back: None,
            polygons: Vec::new(),
        }
    }

    pub(crate) fn from_polygons(polygons: Vec<Polygon>) -> Self {
        let mut node = BspNode::new();
        node.build(polygons);
        node
    }

    /// Inserts `polygons` into the tree, adopting the first polygon's
    /// plane as the splitter if this node doesn't have one yet. Safe to
    /// call repeatedly on an already-built tree to insert more polygons at
    /// the bottom.
    pub(crate) fn build(&mut self, polygons: Vec<Polygon>) {
        if polygons.is_empty() {
            return;
        }
        if self.plane.is_none() {
            self.plane = Some(polygons[0].plane());
        }
        let plane = self.plane.unwrap();

        let mut front = Vec::new();
        let mut back = Vec::new();
        for poly in polygons {
            // Coplanar fragments from both orientations accumulate into
            // this node's own polygon list — the builder has only one
            // sink for them, unlike the clipper below. `split_polygon`
            // takes four distinct `&mut Vec` bins, so a pair of scratch
            // vectors is used per polygon and drained into `self.polygons`
            // right away rather than aliasing it twice in one call.
            let mut coplanar_front = Vec::new();
            let mut coplanar_back = Vec::new();
            plane.split_polygon(&poly, &mut coplanar_front, &mut coplanar_back, &mut front, &mut back);
            self.polygons.append(&mut coplanar_front);
            self.polygons.append(&mut coplanar_back);
        }

        if !front.is_empty() {
            self.front.get_or_insert_with(|| Box::new(BspNode::new())).build(front);
        }
        if !back.is_empty() {
            self.back.get_or_insert_with(|| Box::new(BspNode::new())).build(back);
        }
    }

    /// Swaps solid and empty space: flips every polygon and the splitting
    /// plane at every node, then swaps each node's front/back children.
    pub(crate) fn invert(&mut self) {
        for poly in &mut self.polygons {
            poly.flip();
        }
        if let Some(plane) = &mut self.plane {
            plane.flip();
        }
        if let Some(front) = &mut self.front {
            front.invert();
        }
        if let Some(back) = &mut self.back {
            back.invert();
        }
        std::mem::swap(&mut self.front, &mut self.back);
    }

    /// Removes, from `polygons`, every fragment that lies inside the solid
    /// this node represents. Does not mutate `self`.
    pub(crate) fn clip_polygons(&self, polygons: &[Polygon]) -> Vec<Polygon> {
        let Some(plane) = self.plane else {
            return polygons.to_vec();
        };

        let mut front = Vec::new();
        let mut back = Vec::new();
        for poly in polygons {
            // Here, unlike `build`, coplanar fragments merge into front or
            // back by their geometric side rather than this node's own
            // list — same scratch-and-drain dance to avoid aliasing `front`
            // and `back` mutably twice in a single `split_polygon` call.
            let mut coplanar_front = Vec::new();
            let mut coplanar_back = Vec::new();
            plane.split_polygon(poly, &mut coplanar_front, &mut coplanar_back, &mut front, &mut back);
            front.append(&mut coplanar_front);
            back.append(&mut coplanar_back);
        }

        let mut front = match &self.front {
            Some(node) => node.clip_polygons(&front),
            None => front,
        };

        // Back-of-plane with no back subtree means "inside the solid" —
        // those polygons are discarded rather than kept.
        let back = match &self.back {
            Some(node) => node.clip_polygons(&back),
            None => Vec::new(),
        };

        front.extend(back);
        front
    }

    /// Replaces this node's own polygons with `other.clip_polygons(..)`
    /// and recurses into both children, so that afterwards no fragment of
    /// this tree lies inside `other`.
    pub(crate) fn clip_to(&mut self, other: &BspNode) {
        self.polygons = other.clip_polygons(&self.polygons);
        if let Some(front) = &mut self.front {
            front.clip_to(other);
        }
        if let Some(back) = &mut self.back {
            back.clip_to(other);
        }
    }

    /// Flattens the tree into a single polygon list, depth-first
    /// (self, front, back).
    pub(crate) fn all_polygons(&self) -> Vec<Polygon> {
        let mut result = self.polygons.clone();
        if let Some(front) = &self.front {
            result.extend(front.all_polygons());
        }
        if let Some(back) = &self.back {
            result.extend(back.all_polygons());
        }
        result
    }
}

impl Clone for BspNode {
    fn clone(&self) -> Self {
        BspNode {
            plane: self.plane,
            front: self.front.clone(),
            back: self.back.clone(),
            polygons: self.polygons.clone(),
        }
    }
}
