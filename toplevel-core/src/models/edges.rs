use bitflags::bitflags;
use serde::{de::Visitor, Deserialize, Serialize};

use crate::errors::{CoreError, Result};

bitflags! {
    /// A set of box edges.
    ///
    /// The bit values match the edge encoding used by clients and surfaces, so a mask can be
    /// passed across that boundary without translation.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Edges: u32 {
        const TOP = 1;
        const BOTTOM = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
        /// Both vertical edges, a vertically maximized toplevel.
        const VERTICAL = Self::TOP.bits() | Self::BOTTOM.bits();
        /// Both horizontal edges, a horizontally maximized toplevel.
        const HORIZONTAL = Self::LEFT.bits() | Self::RIGHT.bits();
        const ALL = Self::VERTICAL.bits() | Self::HORIZONTAL.bits();
    }
}

impl Default for Edges {
    fn default() -> Self {
        Self::empty()
    }
}

/// Build an edge mask out of edge names, as found in the config.
///
/// # Errors
///
/// Returns [`CoreError::InvalidEdge`] for a name that is not one of
/// `top`, `bottom`, `left` or `right`.
pub fn into_edges(names: &[String]) -> Result<Edges> {
    let mut edges = Edges::empty();
    for name in names {
        edges |= into_edge(name)?;
    }
    Ok(edges)
}

/// # Errors
///
/// Returns [`CoreError::InvalidEdge`] when `name` is not an edge.
pub fn into_edge(name: &str) -> Result<Edges> {
    match name.to_ascii_lowercase().as_str() {
        "top" => Ok(Edges::TOP),
        "bottom" => Ok(Edges::BOTTOM),
        "left" => Ok(Edges::LEFT),
        "right" => Ok(Edges::RIGHT),
        _ => Err(CoreError::InvalidEdge(name.to_owned())),
    }
}

// serde impls (derive is not working with the bitflags macro)

impl Serialize for Edges {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u32(self.bits())
    }
}

impl<'de> Deserialize<'de> for Edges {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct EdgesVisitor;

        impl Visitor<'_> for EdgesVisitor {
            type Value = Edges;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("an edge bitfield")
            }

            fn visit_u32<E>(self, v: u32) -> std::result::Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(Edges::from_bits_truncate(v))
            }

            fn visit_u64<E>(self, v: u64) -> std::result::Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                u32::try_from(v)
                    .map(Edges::from_bits_truncate)
                    .map_err(|_| E::custom("edge bitfield out of range"))
            }

            fn visit_i64<E>(self, v: i64) -> std::result::Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                u32::try_from(v)
                    .map(Edges::from_bits_truncate)
                    .map_err(|_| E::custom("edge bitfield out of range"))
            }
        }

        deserializer.deserialize_u32(EdgesVisitor)
    }
}
