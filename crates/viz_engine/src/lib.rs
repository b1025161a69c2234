//! # Viz Engine
//!
//! Core of a retained-mode scene visualization engine. The central piece is
//! the attachment lifecycle: renderable content is bound to scene nodes
//! through [`scene::ContentAttachment`] handles that are allocated, retired,
//! and batch-destroyed by a [`scene::AttachmentManager`].
//!
//! ## Architecture
//!
//! ```text
//! Content model (geometry)        Scene nodes (external framework)
//!        ↓                                ↓ attach / detach
//! ContentAttachment  ←——— allocate ——— AttachmentManager
//!        ↓ process_shape / dispose_shape          ↓ update() per frame
//! ShapeBackend (concrete renderer)       deferred batch teardown
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use viz_engine::prelude::*;
//!
//! struct NullBackend;
//!
//! impl ShapeBackend for NullBackend {
//!     fn process_shape(&mut self, _shape: &Shape) -> Result<(), BackendError> {
//!         Ok(())
//!     }
//!     fn dispose_shape(&mut self, _shape: &Shape) -> Result<(), BackendError> {
//!         Ok(())
//!     }
//! }
//!
//! struct NullFactory;
//!
//! impl AttachmentFactory for NullFactory {
//!     type Attachment = ContentAttachment<NullBackend>;
//!     fn create(&mut self) -> Self::Attachment {
//!         ContentAttachment::new(NullBackend)
//!     }
//! }
//!
//! fn main() {
//!     let mut manager = AttachmentManager::new(NullFactory);
//!     let key = manager.allocate();
//!     manager.destroy(key);
//!     manager.update(); // real teardown happens here
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod foundation;
pub mod config;
pub mod geometry;
pub mod render;
pub mod scene;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, SceneConfig},
        foundation::{
            collections::{Handle, HandleMap},
            math::Vec3,
        },
        geometry::{Geometry, GeometryId, Shape, ShapeId, ShapeKind},
        render::{BackendError, ShapeBackend},
        scene::{
            AttachmentError, AttachmentFactory, AttachmentKey, AttachmentManager,
            ContentAttachment, GeometrySink, NodeId, SceneAttachment, SceneInbox, SceneMessage,
            SceneNode, ScenePost,
        },
    };
}
