//! Rendering seam
//!
//! The engine core never draws anything itself. A concrete renderer plugs in
//! behind the [`ShapeBackend`] hook trait and receives one call per shape
//! added to or explicitly removed from an attachment.

mod backend;

pub use backend::{BackendError, ShapeBackend};
