//! Contracts between a toplevel and the subsystems that drive it.
use super::{Dimensions, Margins, ToplevelState};
use serde::{Deserialize, Serialize};

/// Sequence number of a commit, unique per toplevel. The first commit is serial 1.
pub type Serial = u64;

/// A pending state frozen by a commit, ready to be sent to the client.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Commit {
    pub serial: Serial,
    pub state: ToplevelState,
}

impl Commit {
    /// The surface size the client is asked to draw at.
    #[must_use]
    pub fn client_size(&self) -> Dimensions {
        self.state
            .geometry
            .dimensions()
            .shrink_by_margins(&self.state.margins)
    }
}

/// What became of an acknowledgment.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AckOutcome {
    /// The committed state is now current.
    Applied,
    /// The serial did not match the outstanding commit; nothing changed.
    Stale,
}

/// The side of a toplevel seen by the transaction scheduler.
pub trait TransactionObject {
    /// The pending state as of now.
    fn snapshot_pending(&self) -> ToplevelState;

    /// Freeze the pending state into the committed state and hand it out for delivery.
    fn commit(&mut self) -> Commit;

    /// The client has drawn a surface of `size` in response to commit `serial`.
    fn acknowledge(&mut self, serial: Serial, size: Dimensions) -> AckOutcome;
}

/// A decoration that decides how thick its frame around a toplevel is.
///
/// Producers run right before a commit, so they see every other pending change of the tick.
pub trait MarginProducer {
    fn produce_margins(&self, pending: &ToplevelState) -> Margins;
}
