use super::{TiledEdgesWriter, WriteToken};
use crate::models::{Edges, Geometry, Toplevel};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitDirection {
    /// Children side by side.
    Horizontal,
    /// Children stacked on top of each other.
    Vertical,
}

/// A tile of the tiling engine's layout. A toplevel attached to a tile fills it and is tiled on
/// every edge.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileNode {
    pub geometry: Geometry,
}

impl TileNode {
    #[must_use]
    pub const fn new(geometry: Geometry) -> Self {
        Self { geometry }
    }

    /// Cut the tile in two. `ratio` is the share of the first child and is clamped to `0..=1`.
    #[must_use]
    pub fn split(&self, direction: SplitDirection, ratio: f64) -> (Self, Self) {
        let ratio = ratio.clamp(0.0, 1.0);
        let g = self.geometry;
        match direction {
            SplitDirection::Horizontal => {
                let first = (f64::from(g.width) * ratio).round() as i32;
                (
                    Self::new(Geometry::new(g.x, g.y, first, g.height)),
                    Self::new(Geometry::new(g.x + first, g.y, g.width - first, g.height)),
                )
            }
            SplitDirection::Vertical => {
                let first = (f64::from(g.height) * ratio).round() as i32;
                (
                    Self::new(Geometry::new(g.x, g.y, g.width, first)),
                    Self::new(Geometry::new(g.x, g.y + first, g.width, g.height - first)),
                )
            }
        }
    }

    /// Put `toplevel` into this tile.
    pub fn attach(&self, toplevel: &mut Toplevel) {
        tracing::debug!("Tiling toplevel into {}", self.geometry);
        let pending = toplevel.pending_mut();
        pending.geometry = self.geometry;
        self.write_tiled_edges(pending, Edges::ALL, WriteToken(()));
    }

    /// Take `toplevel` out of the layout and let it float at `floating`.
    pub fn detach(&self, toplevel: &mut Toplevel, floating: Geometry) {
        tracing::debug!("Untiling toplevel from {} to {}", self.geometry, floating);
        let pending = toplevel.pending_mut();
        pending.geometry = floating;
        self.write_tiled_edges(pending, Edges::empty(), WriteToken(()));
    }
}
