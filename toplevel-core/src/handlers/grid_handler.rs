use super::{TiledEdgesWriter, WriteToken};
use crate::models::{Edges, Geometry, Toplevel};
use serde::{Deserialize, Serialize};

/// A snapping position laid out like a numeric keypad over the work area:
///
/// ```text
/// 7 8 9
/// 4 5 6
/// 1 2 3
/// ```
///
/// Slot 5 covers the whole work area, the others its halves and quarters. Slot 0 means "not
/// snapped".
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSlot(u8);

impl GridSlot {
    pub const NONE: Self = Self(0);
    pub const MAXIMIZED: Self = Self(5);

    /// `None` for slots above 9.
    #[must_use]
    pub const fn new(slot: u8) -> Option<Self> {
        if slot <= 9 { Some(Self(slot)) } else { None }
    }

    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Edges that touch the border of the work area in this slot.
    #[must_use]
    pub fn tiled_edges(self) -> Edges {
        let slot = self.0;
        if slot == 0 {
            return Edges::empty();
        }
        let mut edges = Edges::ALL;
        match slot % 3 {
            0 => edges.remove(Edges::LEFT),
            1 => edges.remove(Edges::RIGHT),
            _ => {}
        }
        if slot <= 3 {
            edges.remove(Edges::TOP);
        }
        if slot >= 7 {
            edges.remove(Edges::BOTTOM);
        }
        edges
    }

    /// Part of `workarea` covered by this slot. Slot 0 covers nothing.
    #[must_use]
    pub const fn geometry(self, workarea: Geometry) -> Geometry {
        let slot = self.0;
        if slot == 0 {
            return Geometry::new(workarea.x, workarea.y, 0, 0);
        }
        let half_width = workarea.width / 2;
        let half_height = workarea.height / 2;
        let mut geometry = workarea;
        match slot % 3 {
            1 => geometry.width = half_width,
            0 => {
                geometry.x += half_width;
                geometry.width -= half_width;
            }
            _ => {}
        }
        if slot >= 7 {
            geometry.height = half_height;
        } else if slot <= 3 {
            geometry.y += half_height;
            geometry.height -= half_height;
        }
        geometry
    }

    /// Snap `toplevel` into this slot of `workarea`. Slot 0 puts it back at `restore`, untiled.
    pub fn apply(self, toplevel: &mut Toplevel, workarea: Geometry, restore: Geometry) {
        let geometry = if self.0 == 0 {
            restore
        } else {
            self.geometry(workarea)
        };
        tracing::debug!("Snapping toplevel to grid slot {} at {}", self.0, geometry);
        let pending = toplevel.pending_mut();
        pending.geometry = geometry;
        self.write_tiled_edges(pending, self.tiled_edges(), WriteToken(()));
    }
}
