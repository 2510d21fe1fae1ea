//! Collaborators that reshape toplevels: the tiling engine, grid snapping, interactive resize
//! and the decoration frame.
//!
//! Tiled edges decide how the whole layout treats a toplevel, so they are not writable from
//! arbitrary code. The only ways to change them are [`ToplevelState::set_maximization`] and the
//! collaborators implementing [`TiledEdgesWriter`], which is sealed to this module.
mod decoration_handler;
mod grid_handler;
mod resize_handler;
mod tile_handler;

use crate::models::{Edges, ToplevelState};

pub use decoration_handler::Decorator;
pub use grid_handler::GridSlot;
pub use resize_handler::ResizeGrab;
pub use tile_handler::{SplitDirection, TileNode};

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::GridSlot {}
    impl Sealed for super::ResizeGrab {}
    impl Sealed for super::TileNode {}
}

/// Proof that a tiled edges write comes from inside this module. Only the collaborators here
/// can make one.
#[derive(Debug)]
pub struct WriteToken(());

/// A collaborator trusted with a toplevel's tiled edges.
///
/// Implementing the trait is limited to the collaborators in this module, and so is calling it:
/// the write needs a [`WriteToken`], which outside code cannot build. Going through the public
/// operations of the collaborators is the only way in.
///
/// ```compile_fail
/// use toplevel_core::handlers::{TileNode, TiledEdgesWriter, WriteToken};
/// use toplevel_core::models::{Edges, Geometry};
/// use toplevel_core::Toplevel;
///
/// let mut toplevel = Toplevel::default();
/// TileNode::new(Geometry::default()).write_tiled_edges(
///     toplevel.pending_mut(),
///     Edges::ALL,
///     WriteToken(()),
/// );
/// ```
///
/// ```compile_fail
/// use toplevel_core::handlers::{TileNode, TiledEdgesWriter};
/// use toplevel_core::models::{Edges, Geometry};
/// use toplevel_core::Toplevel;
///
/// let mut toplevel = Toplevel::default();
/// TileNode::new(Geometry::default()).write_tiled_edges(toplevel.pending_mut(), Edges::ALL);
/// ```
pub trait TiledEdgesWriter: sealed::Sealed {
    fn write_tiled_edges(&self, state: &mut ToplevelState, edges: Edges, _token: WriteToken) {
        if state.tiled_edges() != edges {
            tracing::trace!(
                "{} changes tiled edges {:?} -> {:?}",
                std::any::type_name::<Self>(),
                state.tiled_edges(),
                edges
            );
        }
        state.set_tiled_edges(edges);
    }
}

impl TiledEdgesWriter for GridSlot {}
impl TiledEdgesWriter for ResizeGrab {}
impl TiledEdgesWriter for TileNode {}
