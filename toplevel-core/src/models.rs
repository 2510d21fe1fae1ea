//! Geometry values and the toplevel state record.
mod dimensions;
mod displacement;
mod edges;
mod geometry;
mod maximization;
mod point;
mod rectangle;
mod toplevel;
mod toplevel_state;
mod transaction;

pub use dimensions::Dimensions;
pub use displacement::Displacement;
pub use displacement::Margins;
pub use edges::{into_edge, into_edges, Edges};
pub use geometry::Geometry;
pub use maximization::{expand_by_margins, shrink_by_margins, Maximization};
pub use point::{Point, PointF};
pub use rectangle::Rectangle;
pub use toplevel::{anchor_to_gravity, MapState, Toplevel};
pub use toplevel_state::ToplevelState;
pub use transaction::{AckOutcome, Commit, MarginProducer, Serial, TransactionObject};
