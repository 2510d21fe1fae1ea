//! Geometry algebra and transaction buffered state for compositor toplevels.
//!
//! [`models`] holds the value types (points, boxes, edge displacements, maximization) and the
//! [`Toplevel`] record with its pending, committed and current states. [`handlers`] holds the
//! collaborators allowed to move toplevels in and out of tiled layouts.
// We deny clippy pedantic lints, primarily to keep code as correct as possible
#![warn(clippy::pedantic)]
// Each of these lints are globally allowed because they otherwise make a lot
// of noise. However, work to ensure that each use of one of these is correct
// would be very much appreciated.
#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::must_use_candidate,
    clippy::default_trait_access
)]
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod utils;

pub use config::Config;
pub use errors::{CoreError, Result};
pub use models::Geometry;
pub use models::Maximization;
pub use models::Toplevel;
pub use models::ToplevelState;
