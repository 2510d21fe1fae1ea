use super::Margins;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A width and height pair.
#[derive(Serialize, Deserialize, Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub width: i32,
    pub height: i32,
}

impl Dimensions {
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Size of the frame around a surface of this size.
    #[must_use]
    pub const fn expand_by_margins(self, margins: &Margins) -> Self {
        Self {
            width: self.width + margins.horizontal(),
            height: self.height + margins.vertical(),
        }
    }

    /// Size of the surface inside a frame of this size.
    #[must_use]
    pub const fn shrink_by_margins(self, margins: &Margins) -> Self {
        Self {
            width: self.width - margins.horizontal(),
            height: self.height - margins.vertical(),
        }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
