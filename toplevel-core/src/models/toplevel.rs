//! Triple buffered toplevel state.
#![allow(clippy::module_name_repetitions)]

use super::transaction::{AckOutcome, Commit, MarginProducer, Serial, TransactionObject};
use super::{Dimensions, Edges, Geometry, ToplevelState};
use crate::config::Config;
use crate::errors::Result;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapState {
    Unmapped,
    Mapped,
}

/// A window whose state changes go through transactions.
///
/// Plugins write to [`Toplevel::pending_mut`]. [`Toplevel::commit`] copies the pending state
/// into the committed state and returns it for delivery to the client. Once the client has
/// drawn at the new size, [`Toplevel::acknowledge`] copies the committed state into the current
/// state. Only the current state describes what is on screen.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Toplevel {
    current: ToplevelState,
    committed: ToplevelState,
    pending: ToplevelState,
    last_serial: Serial,
    outstanding: Option<Serial>,
    min_size: Dimensions,
    max_size: Dimensions,
}

impl Default for Toplevel {
    fn default() -> Self {
        Self::new(ToplevelState::default())
    }
}

impl Toplevel {
    /// Start tracking a toplevel with all three states set to `initial`.
    #[must_use]
    pub fn new(initial: ToplevelState) -> Self {
        Self {
            current: initial,
            committed: initial,
            pending: initial,
            last_serial: 0,
            outstanding: None,
            min_size: Dimensions::default(),
            max_size: Dimensions::default(),
        }
    }

    /// # Errors
    ///
    /// Fails if the configured gravity names an unknown edge.
    pub fn with_config(config: &Config) -> Result<Self> {
        Ok(Self::new(config.initial_state()?))
    }

    /// What the client is presenting. Safe to treat as the truth on screen.
    #[must_use]
    pub const fn current(&self) -> &ToplevelState {
        &self.current
    }

    /// What was last requested from the client.
    #[must_use]
    pub const fn committed(&self) -> &ToplevelState {
        &self.committed
    }

    /// Changes that will go out with the next commit. Not authoritative for anyone but the
    /// issuer of that commit.
    #[must_use]
    pub const fn pending(&self) -> &ToplevelState {
        &self.pending
    }

    pub fn pending_mut(&mut self) -> &mut ToplevelState {
        &mut self.pending
    }

    #[must_use]
    pub const fn map_state(&self) -> MapState {
        if self.current.mapped {
            MapState::Mapped
        } else {
            MapState::Unmapped
        }
    }

    /// The client provided content; it becomes visible with the next acknowledged commit.
    pub fn map(&mut self) {
        tracing::debug!("Mapping toplevel at {}", self.pending.geometry);
        self.pending.mapped = true;
    }

    /// The client withdrew its surface.
    pub fn unmap(&mut self) {
        tracing::debug!("Unmapping toplevel at {}", self.current.geometry);
        self.pending.mapped = false;
    }

    /// Smallest size the client wants, `0` in a dimension it has no opinion about.
    #[must_use]
    pub const fn min_size(&self) -> Dimensions {
        self.min_size
    }

    /// Largest size the client wants, `0` in a dimension it has no opinion about.
    #[must_use]
    pub const fn max_size(&self) -> Dimensions {
        self.max_size
    }

    pub fn set_size_hints(&mut self, min: Dimensions, max: Dimensions) {
        self.min_size = min;
        self.max_size = max;
    }

    /// Whether a commit was sent that the client has not acknowledged yet.
    #[must_use]
    pub const fn has_outstanding_commit(&self) -> bool {
        self.outstanding.is_some()
    }

    /// Let a decoration write its margins into the pending state.
    pub fn apply_margin_producer(&mut self, producer: &dyn MarginProducer) {
        self.pending.margins = producer.produce_margins(&self.pending);
    }

    /// Copy the pending state into the committed state.
    ///
    /// A commit issued while another is still outstanding supersedes it: the older serial will
    /// be rejected if its acknowledgment shows up later.
    pub fn commit(&mut self) -> Commit {
        self.last_serial += 1;
        if let Some(superseded) = self.outstanding.replace(self.last_serial) {
            tracing::trace!(
                "Commit {} supersedes unacknowledged commit {}",
                self.last_serial,
                superseded
            );
        }
        self.committed = self.pending;
        tracing::debug!(
            "Committed toplevel state {}: {:?}",
            self.last_serial,
            self.committed
        );
        Commit {
            serial: self.last_serial,
            state: self.committed,
        }
    }

    /// The client drew a surface of `size` in response to commit `serial`.
    ///
    /// Acknowledgments for anything but the outstanding commit are dropped. Otherwise the
    /// committed state becomes current; if the client picked another size than requested, the
    /// geometry keeps the edges named by the committed gravity in place.
    pub fn acknowledge(&mut self, serial: Serial, size: Dimensions) -> AckOutcome {
        if self.outstanding != Some(serial) {
            tracing::warn!(
                "Dropping stale acknowledgment {} (outstanding: {:?})",
                serial,
                self.outstanding
            );
            return AckOutcome::Stale;
        }
        self.outstanding = None;

        let mut current = self.committed;
        let frame = size.expand_by_margins(&current.margins);
        if frame != current.geometry.dimensions() {
            tracing::debug!(
                "Client chose {} instead of {}, anchoring to {:?}",
                frame,
                current.geometry.dimensions(),
                current.gravity
            );
            current.geometry = anchor_to_gravity(current.geometry, frame, current.gravity);
        }
        if current.mapped != self.current.mapped {
            tracing::debug!("Toplevel mapped state is now {}", current.mapped);
        }
        self.current = current;
        AckOutcome::Applied
    }
}

/// Resize `geometry` to `size` keeping the edges in `gravity` fixed. Without `RIGHT` the left
/// edge stays, without `BOTTOM` the top edge stays.
#[must_use]
pub fn anchor_to_gravity(geometry: Geometry, size: Dimensions, gravity: Edges) -> Geometry {
    let mut anchored = Geometry::construct(geometry.origin(), size);
    if gravity.contains(Edges::RIGHT) {
        anchored.x = geometry.right() - size.width;
    }
    if gravity.contains(Edges::BOTTOM) {
        anchored.y = geometry.bottom() - size.height;
    }
    anchored
}

impl TransactionObject for Toplevel {
    fn snapshot_pending(&self) -> ToplevelState {
        self.pending
    }

    fn commit(&mut self) -> Commit {
        Toplevel::commit(self)
    }

    fn acknowledge(&mut self, serial: Serial, size: Dimensions) -> AckOutcome {
        Toplevel::acknowledge(self, serial, size)
    }
}
