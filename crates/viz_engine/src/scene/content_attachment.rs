//! Content attachment: queued-vs-live geometry state machine
//!
//! A [`ContentAttachment`] maintains the correspondence between hierarchical
//! content items and the flat list of backend-visible shapes derived from
//! them, deferring the expansion until a scene node is actually available.

use crate::config::SceneConfig;
use crate::geometry::{Geometry, GeometryId, Shape};
use crate::render::ShapeBackend;
use crate::scene::attachment::{AttachmentError, GeometrySink, SceneAttachment};
use crate::scene::node::NodeId;

/// Binding between a content stream and one scene node, generic over the
/// concrete rendering backend
///
/// While unattached, content items accumulate in a pending queue. On attach
/// the queue is drained in order and every item's child leaves become live
/// shapes, each announced to the backend exactly once. On detach both the
/// shape list and the queue are dropped wholesale; previously queued content
/// is *not* replayed on a later re-attach and must be re-added by the client.
pub struct ContentAttachment<B: ShapeBackend> {
    owner: Option<NodeId>,
    queued: Vec<Geometry>,
    shapes: Vec<Shape>,
    current: Option<GeometryId>,
    visible: bool,
    immutable: bool,
    singleton: bool,
    backend: B,
}

impl<B: ShapeBackend> ContentAttachment<B> {
    /// Create an attachment with default configuration
    pub fn new(backend: B) -> Self {
        Self::with_config(backend, &SceneConfig::default())
    }

    /// Create an attachment with explicit configuration
    pub fn with_config(backend: B, config: &SceneConfig) -> Self {
        Self {
            owner: None,
            queued: Vec::new(),
            shapes: Vec::with_capacity(config.shape_capacity),
            current: None,
            visible: config.default_visible,
            immutable: false,
            singleton: false,
            backend,
        }
    }

    /// Mark this attachment as a singleton kind (at most one per node)
    pub fn set_singleton(&mut self, singleton: bool) {
        self.singleton = singleton;
    }

    /// Append a shape to the live list and announce it to the backend
    ///
    /// No de-duplication: callers must avoid adding the same leaf twice. The
    /// shape stays in the list even if the backend hook fails, matching the
    /// partially-updated contract of hook errors.
    pub fn add_shape(&mut self, shape: Shape) -> Result<(), AttachmentError> {
        self.shapes.push(shape.clone());
        self.backend.process_shape(&shape)?;
        Ok(())
    }

    /// Remove a shape from the live list and release its backend drawable
    ///
    /// Removing a shape that is not present is silently accepted. This is the
    /// only path that calls the backend's dispose hook.
    pub fn remove_shape(&mut self, shape: &Shape) -> Result<(), AttachmentError> {
        let Some(index) = self.shapes.iter().position(|s| s == shape) else {
            return Ok(());
        };
        let removed = self.shapes.remove(index);
        self.backend.dispose_shape(&removed)?;
        Ok(())
    }

    /// Whether the live list contains `shape`
    pub fn has_shape(&self, shape: &Shape) -> bool {
        self.shapes.contains(shape)
    }

    /// Shape at `index` in the live list
    pub fn shape_at(&self, index: usize) -> Option<&Shape> {
        self.shapes.get(index)
    }

    /// Borrowing view of the live shape list
    ///
    /// This is the allocation-free accessor the render loop uses every frame.
    /// Use [`Self::shapes_snapshot`] for a copy that survives later mutation.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Independent snapshot of the live shape list
    pub fn shapes_snapshot(&self) -> Vec<Shape> {
        self.shapes.clone()
    }

    /// Drop all live shapes without releasing backend drawables per shape
    pub fn clear_shapes(&mut self) {
        self.shapes.clear();
    }

    /// Number of content items still waiting for a node
    pub fn queued_len(&self) -> usize {
        self.queued.len()
    }

    /// Id of the most recently added content item
    pub fn current_geometry(&self) -> Option<GeometryId> {
        self.current
    }

    /// Whether the attachment should be rendered
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Set the visibility flag
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Whether the content is locked against editing
    pub fn is_immutable(&self) -> bool {
        self.immutable
    }

    /// Set the immutability flag
    pub fn set_immutable(&mut self, immutable: bool) {
        self.immutable = immutable;
    }

    /// Access the rendering backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Mutable access to the rendering backend
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}

impl<B: ShapeBackend> GeometrySink for ContentAttachment<B> {
    fn add_geometry(&mut self, geometry: &Geometry) {
        if self.current == Some(geometry.id()) {
            log::trace!("ignoring redundant add of geometry {:?}", geometry.id());
            return;
        }
        self.current = Some(geometry.id());

        if self.owner.is_none() {
            log::trace!(
                "queueing geometry {:?} ({} leaves) until a node is available",
                geometry.id(),
                geometry.shapes().len()
            );
            self.queued.push(geometry.clone());
        }
        // While attached the base contract only records the item; immediate
        // expansion belongs to the driver that feeds shapes directly.
    }
}

impl<B: ShapeBackend> SceneAttachment for ContentAttachment<B> {
    fn attach(&mut self, node: NodeId) -> Result<(), AttachmentError> {
        self.owner = Some(node);

        // Drain in arrival order, then child order within each item. This is
        // the one user-visible ordering guarantee of the subsystem.
        let queued = std::mem::take(&mut self.queued);
        for item in &queued {
            for shape in item.shapes() {
                self.add_shape(shape.clone())?;
            }
        }
        Ok(())
    }

    fn detach(&mut self, _node: Option<NodeId>) {
        // Bulk clear: no per-shape dispose on this path.
        self.shapes.clear();
        self.queued.clear();
        // Allow the same item to be re-added after a detach/attach cycle.
        self.current = None;
        self.owner = None;
    }

    fn owner(&self) -> Option<NodeId> {
        self.owner
    }

    fn is_singleton(&self) -> bool {
        self.singleton
    }
}
