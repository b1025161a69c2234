//! Scene node collaborator
//!
//! Nodes belong to the external scene-graph framework; the engine core only
//! needs their identity and the hosting discipline: call `attach` exactly
//! once when a node begins hosting an attachment and `detach` exactly once
//! when it stops.

use crate::scene::attachment::{AttachmentError, SceneAttachment};
use crate::scene::attachment_manager::AttachmentKey;

/// Scene node identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    id: u32,
}

impl NodeId {
    /// Create a node id
    pub const fn new(id: u32) -> Self {
        Self { id }
    }

    /// Get the raw id
    pub const fn id(self) -> u32 {
        self.id
    }
}

/// A scene node hosting zero or more attachments
///
/// The node enforces the singleton advisory: a node holds at most one
/// attachment whose kind reports itself as singleton.
pub struct SceneNode {
    id: NodeId,
    hosted: Vec<AttachmentKey>,
    hosts_singleton: bool,
}

impl SceneNode {
    /// Create a node with the given identity
    pub fn new(id: NodeId) -> Self {
        Self {
            id,
            hosted: Vec::new(),
            hosts_singleton: false,
        }
    }

    /// Get the node identity
    pub const fn id(&self) -> NodeId {
        self.id
    }

    /// Begin hosting an attachment
    ///
    /// Checks the singleton advisory, then hands this node to the attachment
    /// as its owner. On a backend failure during attach the key is not
    /// recorded, but the attachment may already be partially expanded.
    pub fn host<A: SceneAttachment>(
        &mut self,
        key: AttachmentKey,
        attachment: &mut A,
    ) -> Result<(), AttachmentError> {
        if attachment.is_singleton() && self.hosts_singleton {
            return Err(AttachmentError::SingletonConflict { node: self.id });
        }
        attachment.attach(self.id)?;
        if attachment.is_singleton() {
            self.hosts_singleton = true;
        }
        self.hosted.push(key);
        Ok(())
    }

    /// Stop hosting an attachment
    ///
    /// Detaches unconditionally; releasing a key this node never hosted is
    /// harmless.
    pub fn release<A: SceneAttachment>(&mut self, key: AttachmentKey, attachment: &mut A) {
        attachment.detach(Some(self.id));
        if attachment.is_singleton() && self.hosted.contains(&key) {
            self.hosts_singleton = false;
        }
        self.hosted.retain(|k| *k != key);
    }

    /// Keys of the attachments this node currently hosts
    pub fn hosted(&self) -> &[AttachmentKey] {
        &self.hosted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::collections::HandleMap;

    struct FlagAttachment {
        owner: Option<NodeId>,
        singleton: bool,
    }

    impl FlagAttachment {
        fn new(singleton: bool) -> Self {
            Self {
                owner: None,
                singleton,
            }
        }
    }

    impl SceneAttachment for FlagAttachment {
        fn attach(&mut self, node: NodeId) -> Result<(), AttachmentError> {
            self.owner = Some(node);
            Ok(())
        }

        fn detach(&mut self, _node: Option<NodeId>) {
            self.owner = None;
        }

        fn owner(&self) -> Option<NodeId> {
            self.owner
        }

        fn is_singleton(&self) -> bool {
            self.singleton
        }
    }

    #[test]
    fn test_host_and_release() {
        let mut slots: HandleMap<FlagAttachment> = HandleMap::new();
        let key = slots.insert(FlagAttachment::new(false));
        let mut node = SceneNode::new(NodeId::new(3));

        node.host(key, &mut slots[key]).unwrap();
        assert_eq!(slots[key].owner(), Some(NodeId::new(3)));
        assert_eq!(node.hosted(), &[key]);

        node.release(key, &mut slots[key]);
        assert_eq!(slots[key].owner(), None);
        assert!(node.hosted().is_empty());
    }

    #[test]
    fn test_singleton_advisory_is_enforced() {
        let mut slots: HandleMap<FlagAttachment> = HandleMap::new();
        let first = slots.insert(FlagAttachment::new(true));
        let second = slots.insert(FlagAttachment::new(true));
        let mut node = SceneNode::new(NodeId::new(1));

        node.host(first, &mut slots[first]).unwrap();

        let err = node.host(second, &mut slots[second]).unwrap_err();
        assert!(matches!(err, AttachmentError::SingletonConflict { .. }));
        // The refused attachment was never attached.
        assert_eq!(slots[second].owner(), None);
        // The first one is untouched.
        assert_eq!(slots[first].owner(), Some(NodeId::new(1)));

        // Releasing the singleton frees the slot for another one.
        node.release(first, &mut slots[first]);
        node.host(second, &mut slots[second]).unwrap();
        assert_eq!(slots[second].owner(), Some(NodeId::new(1)));
    }

    #[test]
    fn test_non_singletons_coexist() {
        let mut slots: HandleMap<FlagAttachment> = HandleMap::new();
        let a = slots.insert(FlagAttachment::new(false));
        let b = slots.insert(FlagAttachment::new(false));
        let mut node = SceneNode::new(NodeId::new(9));

        node.host(a, &mut slots[a]).unwrap();
        node.host(b, &mut slots[b]).unwrap();
        assert_eq!(node.hosted().len(), 2);
    }
}
