//! Scene attachment lifecycle
//!
//! Renderable content reaches the scene graph through *attachments*: bindings
//! between one content item stream and at most one scene node at a time.
//!
//! ```text
//! client ──allocate()──→ AttachmentManager ──handles──→ client
//! client ──add_geometry──→ ContentAttachment (queues while unattached)
//! node   ──attach/detach──→ ContentAttachment (expands queue into shapes)
//! client ──destroy()──→ manager marks pending
//! driver ──update()──→ manager performs batched teardown
//! ```
//!
//! Destruction is deferred: `destroy` only retires an attachment from the
//! active view, and the real teardown runs as a single batch inside the next
//! `update` call. A render pass iterating the active view is therefore never
//! invalidated by a destroy issued mid-pass.
//!
//! The whole subsystem is confined to one logical thread (the scene thread).
//! Notifications arriving on other threads must be marshaled through
//! [`ScenePost`]/[`SceneInbox`] rather than touching attachments directly.

mod attachment;
mod attachment_manager;
mod content_attachment;
mod dispatch;
mod node;

pub use attachment::{AttachmentError, GeometrySink, SceneAttachment};
pub use attachment_manager::{AttachmentFactory, AttachmentKey, AttachmentManager};
pub use content_attachment::ContentAttachment;
pub use dispatch::{SceneInbox, SceneMessage, ScenePost};
pub use node::{NodeId, SceneNode};
