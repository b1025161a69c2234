//! End-to-end lifecycle tests: manager, node hosting, content expansion,
//! cross-thread posting, and deferred batch teardown working together.

use std::cell::RefCell;
use std::rc::Rc;

use viz_engine::prelude::*;

/// Shared recorder so the test can observe hook calls after the attachment
/// has been handed to the manager.
#[derive(Default)]
struct HookLog {
    processed: Vec<ShapeId>,
    disposed: Vec<ShapeId>,
}

struct SharedBackend {
    log: Rc<RefCell<HookLog>>,
}

impl ShapeBackend for SharedBackend {
    fn process_shape(&mut self, shape: &Shape) -> Result<(), BackendError> {
        self.log.borrow_mut().processed.push(shape.id());
        Ok(())
    }

    fn dispose_shape(&mut self, shape: &Shape) -> Result<(), BackendError> {
        self.log.borrow_mut().disposed.push(shape.id());
        Ok(())
    }
}

struct SharedFactory {
    log: Rc<RefCell<HookLog>>,
}

impl AttachmentFactory for SharedFactory {
    type Attachment = ContentAttachment<SharedBackend>;

    fn create(&mut self) -> Self::Attachment {
        ContentAttachment::new(SharedBackend {
            log: Rc::clone(&self.log),
        })
    }
}

fn manager_with_log() -> (AttachmentManager<SharedFactory>, Rc<RefCell<HookLog>>) {
    let log = Rc::new(RefCell::new(HookLog::default()));
    let manager = AttachmentManager::new(SharedFactory {
        log: Rc::clone(&log),
    });
    (manager, log)
}

fn geometry(id: u64, shape_ids: &[u64]) -> Geometry {
    let mut geom = Geometry::new(GeometryId::new(id), format!("content-{id}"));
    for sid in shape_ids {
        geom.push_shape(Shape::new(ShapeId::new(*sid), ShapeKind::Cylinder, Vec3::zeros()));
    }
    geom
}

#[test]
fn destroy_before_attach_is_safe() {
    viz_engine::foundation::logging::try_init();
    let (mut manager, log) = manager_with_log();

    let key = manager.allocate();
    manager.destroy(key);

    assert!(!manager.contains(key));
    assert!(manager.attachments().all(|(k, _)| k != key));

    // Two consecutive update passes are safe no-ops.
    manager.update();
    manager.update();

    assert!(manager.is_empty());
    assert!(log.borrow().processed.is_empty());
    assert!(log.borrow().disposed.is_empty());
}

#[test]
fn full_lifecycle_through_node_and_driver() {
    let (mut manager, log) = manager_with_log();
    let mut node = SceneNode::new(NodeId::new(1));

    // Content arrives before the node exists in the live scene.
    let key = manager.allocate();
    manager.get_mut(key).unwrap().add_geometry(&geometry(1, &[10, 11]));
    manager.get_mut(key).unwrap().add_geometry(&geometry(2, &[20]));

    // Hosting expands the queue in arrival-then-child order.
    node.host(key, manager.get_mut(key).unwrap()).unwrap();
    assert_eq!(
        log.borrow().processed,
        vec![ShapeId::new(10), ShapeId::new(11), ShapeId::new(20)]
    );
    assert_eq!(manager.get(key).unwrap().owner(), Some(node.id()));
    assert_eq!(manager.get(key).unwrap().shapes().len(), 3);

    // Retire mid-frame: still attached until the driver tick.
    manager.destroy(key);
    assert_eq!(manager.get(key).unwrap().owner(), Some(node.id()));
    assert_eq!(manager.len(), 0);

    manager.update();
    assert!(manager.get(key).is_none());
    // Batch teardown never disposes per shape.
    assert!(log.borrow().disposed.is_empty());
}

#[test]
fn detach_then_reattach_starts_empty() {
    let (mut manager, log) = manager_with_log();
    let mut node = SceneNode::new(NodeId::new(1));

    let key = manager.allocate();
    manager.get_mut(key).unwrap().add_geometry(&geometry(1, &[10]));
    node.host(key, manager.get_mut(key).unwrap()).unwrap();
    assert_eq!(manager.get(key).unwrap().shapes().len(), 1);

    node.release(key, manager.get_mut(key).unwrap());
    assert_eq!(manager.get(key).unwrap().owner(), None);

    // Queued content was discarded on detach, not replayed.
    let mut other = SceneNode::new(NodeId::new(2));
    other.host(key, manager.get_mut(key).unwrap()).unwrap();
    assert!(manager.get(key).unwrap().shapes().is_empty());
    assert_eq!(log.borrow().processed.len(), 1);
}

#[test]
fn threaded_content_post_lands_on_next_tick() {
    let (mut manager, log) = manager_with_log();
    let mut node = SceneNode::new(NodeId::new(1));
    let mut inbox = SceneInbox::new();

    let key = manager.allocate();
    let poster = inbox.poster();

    let worker = std::thread::spawn(move || {
        poster.content_changed(key, geometry(5, &[50, 51]));
    });
    worker.join().unwrap();

    // Driver tick: marshal first, then host, then sweep.
    assert_eq!(inbox.drain(&mut manager), 1);
    node.host(key, manager.get_mut(key).unwrap()).unwrap();
    manager.update();

    assert_eq!(log.borrow().processed, vec![ShapeId::new(50), ShapeId::new(51)]);
    assert!(manager.contains(key));
}

#[test]
fn explicit_shape_removal_disposes_exactly_once() {
    let (mut manager, log) = manager_with_log();
    let mut node = SceneNode::new(NodeId::new(1));

    let key = manager.allocate();
    manager.get_mut(key).unwrap().add_geometry(&geometry(1, &[10, 11]));
    node.host(key, manager.get_mut(key).unwrap()).unwrap();

    let victim = manager.get(key).unwrap().shape_at(0).unwrap().clone();
    let attachment = manager.get_mut(key).unwrap();
    attachment.remove_shape(&victim).unwrap();
    attachment.remove_shape(&victim).unwrap(); // second removal is silent

    assert_eq!(log.borrow().disposed, vec![ShapeId::new(10)]);
    assert!(!manager.get(key).unwrap().has_shape(&victim));
    assert_eq!(manager.get(key).unwrap().shapes().len(), 1);
}
