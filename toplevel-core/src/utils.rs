//! Helpers for crates embedding `toplevel-core`.
pub mod log;
