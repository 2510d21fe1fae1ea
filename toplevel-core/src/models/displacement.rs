use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Neg;

/// An outward displacement of each edge of a box.
///
/// Adding a displacement to a [`Geometry`](super::Geometry) moves every edge outward by the
/// matching field; negative values move the edge inward. Subtracting two geometries yields the
/// displacement between them, so `from + (to - from) == to` always holds.
#[derive(Serialize, Deserialize, Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Displacement {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

/// Thickness of the server side decoration frame around a toplevel.
pub type Margins = Displacement;

impl Displacement {
    #[must_use]
    pub const fn new(left: i32, right: i32, top: i32, bottom: i32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    #[must_use]
    pub const fn uniform(size: i32) -> Self {
        Self::new(size, size, size, size)
    }

    #[must_use]
    pub const fn from_pair(top_and_bottom: i32, left_and_right: i32) -> Self {
        Self {
            left: left_and_right,
            right: left_and_right,
            top: top_and_bottom,
            bottom: top_and_bottom,
        }
    }

    #[must_use]
    pub const fn from_triple(top: i32, left_and_right: i32, bottom: i32) -> Self {
        Self {
            left: left_and_right,
            right: left_and_right,
            top,
            bottom,
        }
    }

    /// Total change in width.
    #[must_use]
    pub const fn horizontal(&self) -> i32 {
        self.left + self.right
    }

    /// Total change in height.
    #[must_use]
    pub const fn vertical(&self) -> i32 {
        self.top + self.bottom
    }

    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.left == 0 && self.right == 0 && self.top == 0 && self.bottom == 0
    }
}

impl Neg for Displacement {
    type Output = Self;
    fn neg(self) -> Self {
        Self {
            left: -self.left,
            right: -self.right,
            top: -self.top,
            bottom: -self.bottom,
        }
    }
}

impl fmt::Display for Displacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(l={} r={} t={} b={})",
            self.left, self.right, self.top, self.bottom
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negation_is_an_involution() {
        let d = Displacement::new(10, -3, 5, 0);
        assert_eq!(-d, Displacement::new(-10, 3, -5, 0));
        assert_eq!(-(-d), d);
    }

    #[test]
    fn shorthand_constructors_fill_the_right_sides() {
        assert_eq!(Displacement::uniform(2), Displacement::new(2, 2, 2, 2));
        assert_eq!(Displacement::from_pair(1, 7), Displacement::new(7, 7, 1, 1));
        assert_eq!(
            Displacement::from_triple(30, 4, 6),
            Displacement::new(4, 4, 30, 6)
        );
    }

    #[test]
    fn sums_per_axis() {
        let d = Displacement::new(1, 2, 3, 4);
        assert_eq!(d.horizontal(), 3);
        assert_eq!(d.vertical(), 7);
        assert!(!d.is_zero());
        assert!(Displacement::default().is_zero());
    }
}
