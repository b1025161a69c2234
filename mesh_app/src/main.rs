//! Mesh viewer demo driver
//!
//! Exercises the attachment lifecycle end to end with a console backend:
//! content queued before a node exists, a content update posted from a
//! worker thread, and deferred teardown swept by the per-tick update pass.

use std::thread;
use std::time::Duration;

use viz_engine::prelude::*;

/// Backend that "renders" by logging every hook call
struct ConsoleBackend {
    name: &'static str,
}

impl ShapeBackend for ConsoleBackend {
    fn process_shape(&mut self, shape: &Shape) -> Result<(), BackendError> {
        log::info!(
            "[{}] drawing {:?} '{}' at {:?}",
            self.name,
            shape.kind(),
            shape.label(),
            shape.position()
        );
        Ok(())
    }

    fn dispose_shape(&mut self, shape: &Shape) -> Result<(), BackendError> {
        log::info!("[{}] releasing {:?} '{}'", self.name, shape.kind(), shape.label());
        Ok(())
    }
}

struct ConsoleFactory;

impl AttachmentFactory for ConsoleFactory {
    type Attachment = ContentAttachment<ConsoleBackend>;

    fn create(&mut self) -> Self::Attachment {
        ContentAttachment::with_config(ConsoleBackend { name: "console" }, &SceneConfig::default())
    }
}

fn assembly_geometry() -> Geometry {
    Geometry::new(GeometryId::new(1), "fuel assembly")
        .with_shape(
            Shape::new(ShapeId::new(10), ShapeKind::Cylinder, Vec3::new(0.0, 0.0, 0.0))
                .with_label("pin A"),
        )
        .with_shape(
            Shape::new(ShapeId::new(11), ShapeKind::Cylinder, Vec3::new(1.0, 0.0, 0.0))
                .with_label("pin B"),
        )
}

fn boundary_geometry() -> Geometry {
    Geometry::new(GeometryId::new(2), "boundary")
        .with_shape(Shape::new(ShapeId::new(20), ShapeKind::Polygon, Vec3::zeros()).with_label("wall"))
}

fn main() {
    viz_engine::foundation::logging::init();

    let mut manager = AttachmentManager::new(ConsoleFactory);
    let mut inbox = SceneInbox::new();
    let mut root = SceneNode::new(NodeId::new(1));

    // Content arrives before the node is live; it queues.
    let assembly = manager.allocate();
    manager
        .get_mut(assembly)
        .expect("just allocated")
        .add_geometry(&assembly_geometry());

    // A model listener on another thread posts a second content item. The
    // post is fire-and-forget; it lands in the inbox for the next tick.
    let poster = inbox.poster();
    let worker = thread::spawn(move || {
        thread::sleep(Duration::from_millis(10));
        poster.content_changed(assembly, boundary_geometry());
    });
    worker.join().expect("worker thread panicked");

    let mut hosted = false;
    for tick in 0..5 {
        log::info!("--- tick {tick} ---");

        // Marshal foreign-thread updates onto this thread first.
        let applied = inbox.drain(&mut manager);
        if applied > 0 {
            log::info!("applied {applied} posted content update(s)");
        }

        // The node enters the live scene on the second tick.
        if tick == 1 {
            root.host(assembly, manager.get_mut(assembly).expect("still active"))
                .expect("console backend never fails");
            hosted = true;
        }

        if hosted {
            if let Some(att) = manager.get(assembly) {
                log::info!(
                    "attachment hosts {} live shape(s), visible = {}",
                    att.shapes().len(),
                    att.is_visible()
                );
            }
        }

        // Retire on the fourth tick; teardown happens in the sweep below.
        if tick == 3 {
            manager.destroy(assembly);
            log::info!(
                "destroyed; active = {}, pending = {}",
                manager.len(),
                manager.pending_count()
            );
        }

        manager.update();
    }

    log::info!("done; {} attachment(s) remain", manager.len());
}
