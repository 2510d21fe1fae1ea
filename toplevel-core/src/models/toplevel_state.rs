use super::{Edges, Geometry, Margins, Maximization};
use serde::{Deserialize, Serialize};

/// One snapshot of a toplevel's window management state.
///
/// A [`Toplevel`](super::Toplevel) keeps three of these: the pending state plugins write to,
/// the committed state last requested from the client and the current state the client is
/// actually presenting.
///
/// Tiled edges cannot be set from a struct literal:
///
/// ```compile_fail
/// use toplevel_core::models::{Edges, ToplevelState};
///
/// let state = ToplevelState {
///     tiled_edges: Edges::ALL,
///     ..ToplevelState::default()
/// };
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToplevelState {
    /// Mapped toplevels have content, are presented and take part in input.
    pub mapped: bool,
    /// Window manager geometry: includes decorations, excludes shadows and subsurfaces
    /// sticking out of the main surface.
    pub geometry: Geometry,
    /// The edge or corner that stays put when the client picks a size other than the one
    /// requested.
    pub gravity: Edges,
    /// Edges aligned to something else (an output edge, a neighbouring toplevel, ...).
    /// Written only through [`TiledEdgesWriter`](crate::handlers::TiledEdgesWriter) or
    /// [`ToplevelState::set_maximization`]. Deserialized states always start untiled.
    #[serde(skip_deserializing)]
    tiled_edges: Edges,
    pub fullscreen: bool,
    /// Thickness of the server side decorations. Decoration producers fill this in right
    /// before a commit, so the pending value is not final until then.
    pub margins: Margins,
}

impl Default for ToplevelState {
    fn default() -> Self {
        Self {
            mapped: false,
            geometry: Geometry::new(100, 100, 0, 0),
            gravity: Edges::TOP | Edges::LEFT,
            tiled_edges: Edges::empty(),
            fullscreen: false,
            margins: Margins::default(),
        }
    }
}

impl ToplevelState {
    #[must_use]
    pub const fn tiled_edges(&self) -> Edges {
        self.tiled_edges
    }

    pub(crate) fn set_tiled_edges(&mut self, edges: Edges) {
        self.tiled_edges = edges;
    }

    #[must_use]
    pub fn maximization(&self) -> Maximization {
        Maximization::from_bitmask(self.tiled_edges)
    }

    /// Replace the tiled edges with the ones expressing `maximization`.
    pub fn set_maximization(&mut self, maximization: Maximization) {
        self.tiled_edges = maximization.to_bitmask();
    }

    /// Geometry of the client surface: the window manager geometry without decorations.
    #[must_use]
    pub fn surface_geometry(&self) -> Geometry {
        self.geometry - self.margins
    }
}
