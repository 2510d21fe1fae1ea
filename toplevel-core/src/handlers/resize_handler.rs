use super::{TiledEdgesWriter, WriteToken};
use crate::models::{anchor_to_gravity, Dimensions, Edges, Geometry, Point, Toplevel};

/// An interactive resize, from the button press on a frame edge to its release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeGrab {
    start: Geometry,
    edges: Edges,
}

impl ResizeGrab {
    /// Start resizing `toplevel` by the grabbed `edges`.
    ///
    /// The opposite edges become the gravity, and the toplevel leaves any tiled layout it was
    /// in.
    pub fn begin(toplevel: &mut Toplevel, edges: Edges) -> Self {
        let grab = Self {
            start: toplevel.pending().geometry,
            edges,
        };
        let pending = toplevel.pending_mut();
        pending.gravity = grab.gravity();
        grab.write_tiled_edges(pending, Edges::empty(), WriteToken(()));
        tracing::debug!("Resize grab on {:?} starting at {}", edges, grab.start);
        grab
    }

    #[must_use]
    pub const fn start(&self) -> Geometry {
        self.start
    }

    #[must_use]
    pub const fn edges(&self) -> Edges {
        self.edges
    }

    /// The edges that stay put during this grab.
    #[must_use]
    pub fn gravity(&self) -> Edges {
        let horizontal = if self.edges.contains(Edges::LEFT) {
            Edges::RIGHT
        } else {
            Edges::LEFT
        };
        let vertical = if self.edges.contains(Edges::TOP) {
            Edges::BOTTOM
        } else {
            Edges::TOP
        };
        horizontal | vertical
    }

    /// The pointer moved by `offset` since the grab began.
    pub fn motion(&self, toplevel: &mut Toplevel, offset: Point) {
        let mut width = self.start.width;
        let mut height = self.start.height;
        if self.edges.contains(Edges::LEFT) {
            width -= offset.x;
        } else if self.edges.contains(Edges::RIGHT) {
            width += offset.x;
        }
        if self.edges.contains(Edges::TOP) {
            height -= offset.y;
        } else if self.edges.contains(Edges::BOTTOM) {
            height += offset.y;
        }
        let size = constrain(
            Dimensions::new(width, height),
            toplevel.min_size(),
            toplevel.max_size(),
        );
        toplevel.pending_mut().geometry = anchor_to_gravity(self.start, size, self.gravity());
    }
}

// A zero hint means the client did not ask for a bound in that dimension.
fn constrain(size: Dimensions, min: Dimensions, max: Dimensions) -> Dimensions {
    let bound = |value: i32, min: i32, max: i32| {
        let value = value.max(min.max(1));
        if max > 0 { value.min(max) } else { value }
    };
    Dimensions::new(
        bound(size.width, min.width, max.width),
        bound(size.height, min.height, max.height),
    )
}
