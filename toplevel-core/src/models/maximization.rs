//! Maximization state derived from tiled edges.
use super::{Displacement, Edges, Geometry, Margins};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::ops::Not;

/// How far a toplevel is maximized.
///
/// A toplevel is maximized in a direction when both of its edges in that direction are tiled.
/// The states are ordered by inclusion: `Full` is at least as maximized as every other state,
/// while `Horizontal` and `Vertical` cannot be compared with each other. Use
/// [`Maximization::contains`] to ask "is it maximized at least this much".
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Maximization {
    #[default]
    None,
    Vertical,
    Horizontal,
    Full,
}

const VERTICAL_BIT: u8 = 1;
const HORIZONTAL_BIT: u8 = 1 << 1;

impl Maximization {
    const fn mask(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Vertical => VERTICAL_BIT,
            Self::Horizontal => HORIZONTAL_BIT,
            Self::Full => VERTICAL_BIT | HORIZONTAL_BIT,
        }
    }

    const fn from_mask(mask: u8) -> Self {
        match mask & (VERTICAL_BIT | HORIZONTAL_BIT) {
            0 => Self::None,
            VERTICAL_BIT => Self::Vertical,
            HORIZONTAL_BIT => Self::Horizontal,
            _ => Self::Full,
        }
    }

    /// Classify a tiled edge mask. A lone edge does not count as maximized.
    #[must_use]
    pub fn from_bitmask(edges: Edges) -> Self {
        let mut mask = 0;
        if edges.contains(Edges::VERTICAL) {
            mask |= VERTICAL_BIT;
        }
        if edges.contains(Edges::HORIZONTAL) {
            mask |= HORIZONTAL_BIT;
        }
        Self::from_mask(mask)
    }

    /// The tiled edges that express this state.
    #[must_use]
    pub const fn to_bitmask(self) -> Edges {
        match self {
            Self::None => Edges::empty(),
            Self::Vertical => Edges::VERTICAL,
            Self::Horizontal => Edges::HORIZONTAL,
            Self::Full => Edges::ALL,
        }
    }

    /// Every direction maximized in `other` is maximized in `self` too.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.mask() & other.mask() == other.mask()
    }

    /// No direction maximized in `other` is maximized in `self`.
    #[must_use]
    pub const fn excludes(self, other: Self) -> bool {
        self.mask() & other.mask() == 0
    }

    /// Add the directions of `other`.
    pub fn insert(&mut self, other: Self) {
        *self = Self::from_mask(self.mask() | other.mask());
    }

    /// Drop the directions of `other`.
    pub fn remove(&mut self, other: Self) {
        *self = Self::from_mask(self.mask() & !other.mask());
    }

    /// Flip the directions of `other`.
    pub fn toggle(&mut self, other: Self) {
        *self = Self::from_mask(self.mask() ^ other.mask());
    }
}

impl Not for Maximization {
    type Output = Self;
    fn not(self) -> Self {
        Self::from_mask(self.mask() ^ Self::Full.mask())
    }
}

impl PartialOrd for Maximization {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else if self.contains(*other) {
            Some(Ordering::Greater)
        } else if other.contains(*self) {
            Some(Ordering::Less)
        } else {
            None
        }
    }
}

/// Grow a surface geometry into its frame geometry, leaving maximized directions untouched.
#[must_use]
pub fn expand_by_margins(
    geometry: Geometry,
    margins: &Margins,
    maximization: Maximization,
) -> Geometry {
    geometry.expand_if(maximization.to_bitmask(), &Displacement::default(), margins)
}

/// Inverse of [`expand_by_margins`].
#[must_use]
pub fn shrink_by_margins(
    geometry: Geometry,
    margins: &Margins,
    maximization: Maximization,
) -> Geometry {
    geometry.expand_if(maximization.to_bitmask(), &Displacement::default(), &-*margins)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_from_edges() {
        assert_eq!(Maximization::from_bitmask(Edges::empty()), Maximization::None);
        assert_eq!(Maximization::from_bitmask(Edges::ALL), Maximization::Full);
        assert_eq!(
            Maximization::from_bitmask(Edges::HORIZONTAL),
            Maximization::Horizontal
        );
        assert_eq!(
            Maximization::from_bitmask(Edges::VERTICAL | Edges::LEFT),
            Maximization::Vertical
        );
        assert_eq!(
            Maximization::from_bitmask(Edges::TOP | Edges::LEFT),
            Maximization::None
        );
    }

    #[test]
    fn full_round_trips_through_the_bitmask() {
        assert_eq!(Maximization::Full.to_bitmask(), Edges::ALL);
        for state in [
            Maximization::None,
            Maximization::Vertical,
            Maximization::Horizontal,
            Maximization::Full,
        ] {
            assert_eq!(Maximization::from_bitmask(state.to_bitmask()), state);
        }
    }

    #[test]
    fn ordering_is_by_inclusion() {
        assert!(Maximization::Full >= Maximization::Horizontal);
        assert!(Maximization::Full >= Maximization::Vertical);
        assert!(Maximization::Horizontal > Maximization::None);
        assert!(Maximization::Vertical >= Maximization::None);
        assert!(!(Maximization::Horizontal >= Maximization::Vertical));
        assert!(!(Maximization::Horizontal <= Maximization::Vertical));
        assert_ne!(Maximization::Horizontal, Maximization::Vertical);
    }

    #[test]
    fn contains_and_excludes() {
        assert!(Maximization::Full.contains(Maximization::Vertical));
        assert!(!Maximization::Vertical.contains(Maximization::Full));
        assert!(Maximization::Vertical.excludes(Maximization::Horizontal));
        assert!(!Maximization::Full.excludes(Maximization::Horizontal));
        assert!(Maximization::None.excludes(Maximization::Full));
    }

    #[test]
    fn insert_remove_toggle_and_invert() {
        let mut state = Maximization::None;
        state.insert(Maximization::Vertical);
        assert_eq!(state, Maximization::Vertical);
        state.insert(Maximization::Horizontal);
        assert_eq!(state, Maximization::Full);
        state.remove(Maximization::Vertical);
        assert_eq!(state, Maximization::Horizontal);
        state.toggle(Maximization::Full);
        assert_eq!(state, Maximization::Vertical);
        assert_eq!(!state, Maximization::Horizontal);
        assert_eq!(!Maximization::None, Maximization::Full);
    }

    #[test]
    fn margins_are_suppressed_in_maximized_directions() {
        let surface = Geometry::new(100, 100, 400, 300);
        let margins = Margins::from_triple(30, 4, 4);
        assert_eq!(
            expand_by_margins(surface, &margins, Maximization::None),
            Geometry::new(96, 70, 408, 334)
        );
        assert_eq!(
            expand_by_margins(surface, &margins, Maximization::Horizontal),
            Geometry::new(100, 70, 400, 334)
        );
        assert_eq!(
            expand_by_margins(surface, &margins, Maximization::Full),
            surface
        );
    }

    #[test]
    fn shrink_undoes_expand() {
        let surface = Geometry::new(0, 0, 640, 480);
        let margins = Margins::new(1, 2, 3, 4);
        for state in [
            Maximization::None,
            Maximization::Vertical,
            Maximization::Horizontal,
            Maximization::Full,
        ] {
            let frame = expand_by_margins(surface, &margins, state);
            assert_eq!(shrink_by_margins(frame, &margins, state), surface);
        }
    }
}
