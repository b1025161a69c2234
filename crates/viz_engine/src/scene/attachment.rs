//! Attachment role: the binding between content and a single scene node

use thiserror::Error;

use crate::geometry::Geometry;
use crate::render::BackendError;
use crate::scene::node::NodeId;

/// Errors raised by attachment operations
#[derive(Error, Debug)]
pub enum AttachmentError {
    /// A backend hook failed while materializing a shape
    #[error(transparent)]
    Backend(#[from] BackendError),

    /// The node already hosts a singleton attachment of this kind
    #[error("node {node:?} already hosts a singleton attachment")]
    SingletonConflict {
        /// The node that refused the attachment
        node: NodeId,
    },
}

/// The attachment role
///
/// An attachment holds a single non-owning back-reference to the scene node
/// currently hosting it. The node framework drives the two transitions; the
/// attachment itself never validates call order.
pub trait SceneAttachment {
    /// Bind to `node`
    ///
    /// Re-attaching while already attached simply overwrites the owner with
    /// no cleanup of the old one; content teardown is handled separately by
    /// the manager and content layer. Fails only if a backend hook fails
    /// while expanding queued content.
    fn attach(&mut self, node: NodeId) -> Result<(), AttachmentError>;

    /// Unbind from the current owner
    ///
    /// Clears the owner unconditionally; the `node` argument exists for
    /// interface symmetry and backend bookkeeping, never for validation.
    /// Detaching while already detached is a no-op.
    fn detach(&mut self, node: Option<NodeId>);

    /// The node currently hosting this attachment, `None` when unattached
    fn owner(&self) -> Option<NodeId>;

    /// Whether a node may hold at most one attachment of this kind
    ///
    /// Advisory only; the node collaborator enforces it.
    fn is_singleton(&self) -> bool {
        false
    }
}

/// Attachments that accept hierarchical content
///
/// Split from [`SceneAttachment`] so the manager and dispatch layers can be
/// generic over attachments that do not carry content (cameras, lights).
pub trait GeometrySink {
    /// Feed a content item into the attachment
    ///
    /// Queued while unattached; the queue is expanded into shapes on the next
    /// attach. Re-adding the item most recently added is a no-op, which
    /// absorbs redundant notifications from upstream listeners.
    fn add_geometry(&mut self, geometry: &Geometry);
}
