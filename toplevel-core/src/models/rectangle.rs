use super::{Edges, Geometry};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two corner form of a box: `(x1, y1)` is the inclusive top left corner and `(x2, y2)`
/// lies one pixel past the bottom right corner.
///
/// Converts losslessly to and from [`Geometry`].
#[derive(Serialize, Deserialize, Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rectangle {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Rectangle {
    #[must_use]
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Merge two candidate boxes edge by edge: edges in `edges` come from `active`, the others
    /// from `inactive`.
    #[must_use]
    pub fn switch_if(edges: Edges, active: &Self, inactive: &Self) -> Self {
        Self {
            x1: if edges.contains(Edges::LEFT) {
                active.x1
            } else {
                inactive.x1
            },
            y1: if edges.contains(Edges::TOP) {
                active.y1
            } else {
                inactive.y1
            },
            x2: if edges.contains(Edges::RIGHT) {
                active.x2
            } else {
                inactive.x2
            },
            y2: if edges.contains(Edges::BOTTOM) {
                active.y2
            } else {
                inactive.y2
            },
        }
    }
}

impl From<Geometry> for Rectangle {
    fn from(geometry: Geometry) -> Self {
        Self {
            x1: geometry.x,
            y1: geometry.y,
            x2: geometry.right(),
            y2: geometry.bottom(),
        }
    }
}

impl From<Rectangle> for Geometry {
    fn from(rectangle: Rectangle) -> Self {
        Self {
            x: rectangle.x1,
            y: rectangle.y1,
            width: rectangle.x2 - rectangle.x1,
            height: rectangle.y2 - rectangle.y1,
        }
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{} -> {},{})", self.x1, self.y1, self.x2, self.y2)
    }
}
