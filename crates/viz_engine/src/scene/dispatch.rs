//! Cross-thread marshaling onto the scene thread
//!
//! Content-changed notifications can originate anywhere (an async UI or
//! model-event framework); attachments themselves are thread-confined, so
//! such notifications are posted to the scene thread's inbox and applied
//! there during the driver tick. A post is fire-and-forget: once sent it
//! cannot be rescinded, and delivery is FIFO per source thread with no
//! ordering guarantee across sources.

use std::sync::mpsc::{channel, Receiver, Sender};

use crate::geometry::Geometry;
use crate::scene::attachment::GeometrySink;
use crate::scene::attachment_manager::{AttachmentFactory, AttachmentKey, AttachmentManager};

/// Messages a foreign thread may post to the scene thread
#[derive(Debug, Clone)]
pub enum SceneMessage {
    /// Content changed upstream; re-feed it to the target attachment
    ContentChanged {
        /// The attachment the content belongs to
        attachment: AttachmentKey,
        /// The new content item
        geometry: Geometry,
    },
}

/// Cloneable posting end, safe to hand to any thread
#[derive(Clone)]
pub struct ScenePost {
    tx: Sender<SceneMessage>,
}

impl ScenePost {
    /// Post a message to the scene thread
    ///
    /// Fire-and-forget: if the scene thread is gone the message is dropped.
    pub fn post(&self, message: SceneMessage) {
        let _ = self.tx.send(message);
    }

    /// Convenience wrapper for the content-changed message
    pub fn content_changed(&self, attachment: AttachmentKey, geometry: Geometry) {
        self.post(SceneMessage::ContentChanged {
            attachment,
            geometry,
        });
    }
}

/// Scene-thread end of the marshaling queue
pub struct SceneInbox {
    tx: Sender<SceneMessage>,
    rx: Receiver<SceneMessage>,
}

impl SceneInbox {
    /// Create an inbox owned by the scene thread
    pub fn new() -> Self {
        let (tx, rx) = channel();
        Self { tx, rx }
    }

    /// Create a posting end for another thread
    pub fn poster(&self) -> ScenePost {
        ScenePost {
            tx: self.tx.clone(),
        }
    }

    /// Apply every pending message to the manager's attachments
    ///
    /// Runs on the scene thread, typically once per driver tick before the
    /// manager's update pass. Messages for keys that no longer resolve are
    /// dropped silently; the attachment was retired after the post was made.
    /// Returns the number of messages applied.
    pub fn drain<F>(&mut self, manager: &mut AttachmentManager<F>) -> usize
    where
        F: AttachmentFactory,
        F::Attachment: GeometrySink,
    {
        let mut applied = 0;
        while let Ok(message) = self.rx.try_recv() {
            match message {
                SceneMessage::ContentChanged {
                    attachment,
                    geometry,
                } => {
                    if let Some(target) = manager.get_mut(attachment) {
                        target.add_geometry(&geometry);
                        applied += 1;
                    } else {
                        log::trace!("dropping content update for retired attachment {attachment:?}");
                    }
                }
            }
        }
        applied
    }
}

impl Default for SceneInbox {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;
    use crate::geometry::{GeometryId, Shape, ShapeId, ShapeKind};
    use crate::render::{BackendError, ShapeBackend};
    use crate::scene::content_attachment::ContentAttachment;

    struct NullBackend;

    impl ShapeBackend for NullBackend {
        fn process_shape(&mut self, _shape: &Shape) -> Result<(), BackendError> {
            Ok(())
        }

        fn dispose_shape(&mut self, _shape: &Shape) -> Result<(), BackendError> {
            Ok(())
        }
    }

    struct NullFactory;

    impl AttachmentFactory for NullFactory {
        type Attachment = ContentAttachment<NullBackend>;

        fn create(&mut self) -> Self::Attachment {
            ContentAttachment::new(NullBackend)
        }
    }

    fn geometry(id: u64) -> Geometry {
        Geometry::new(GeometryId::new(id), "posted").with_shape(Shape::new(
            ShapeId::new(id * 10),
            ShapeKind::Polygon,
            Vec3::zeros(),
        ))
    }

    #[test]
    fn test_posts_apply_in_fifo_order() {
        let mut manager = AttachmentManager::new(NullFactory);
        let key = manager.allocate();
        let mut inbox = SceneInbox::new();
        let poster = inbox.poster();

        let handle = std::thread::spawn(move || {
            poster.content_changed(key, geometry(1));
            poster.content_changed(key, geometry(2));
        });
        handle.join().unwrap();

        let applied = inbox.drain(&mut manager);
        assert_eq!(applied, 2);
        // Both items queued, in post order.
        let att = manager.get(key).unwrap();
        assert_eq!(att.queued_len(), 2);
        assert_eq!(att.current_geometry(), Some(GeometryId::new(2)));
    }

    #[test]
    fn test_post_to_retired_attachment_is_dropped() {
        let mut manager = AttachmentManager::new(NullFactory);
        let key = manager.allocate();
        let mut inbox = SceneInbox::new();
        let poster = inbox.poster();

        manager.destroy(key);
        manager.update();

        poster.content_changed(key, geometry(1));
        assert_eq!(inbox.drain(&mut manager), 0);
    }

    #[test]
    fn test_post_survives_dead_inbox() {
        let poster = {
            let inbox = SceneInbox::new();
            inbox.poster()
        };
        // Inbox dropped; posting must not panic.
        poster.content_changed(AttachmentKey::default(), geometry(1));
    }
}
