//! Backend hook trait for shape processing

use thiserror::Error;

use crate::geometry::{Shape, ShapeId};

/// Errors raised by a concrete rendering backend
#[derive(Error, Debug)]
pub enum BackendError {
    /// The backend refused to create a drawable for the shape
    #[error("backend rejected shape {0:?}: {1}")]
    ShapeRejected(ShapeId, String),

    /// The backend ran out of drawable resources
    #[error("backend out of resources: {0}")]
    ResourceExhausted(String),
}

/// Capability hooks a concrete renderer implements per attachment kind
///
/// The shared attachment logic guarantees exactly one `process_shape` call
/// per shape added and exactly one `dispose_shape` call per shape explicitly
/// removed. Bulk paths (clearing all shapes, detaching from a node) bypass
/// `dispose_shape` deliberately; a backend that pools per-shape resources
/// must reclaim them on its own bulk-teardown path.
///
/// Hooks are expected to be total in practice. A hook error propagates
/// unchanged out of the attachment operation that triggered it, leaving the
/// attachment partially updated; nothing is rolled back.
pub trait ShapeBackend {
    /// Create/link a drawable for a newly added shape
    fn process_shape(&mut self, shape: &Shape) -> Result<(), BackendError>;

    /// Release the drawable for an explicitly removed shape
    fn dispose_shape(&mut self, shape: &Shape) -> Result<(), BackendError>;
}
