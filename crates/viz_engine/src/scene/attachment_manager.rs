//! Attachment manager: identity registry and deferred batch destruction
//!
//! Two-phase destruction (Game Engine Architecture Ch. 16.6): `destroy` only
//! retires an attachment from the active view, and the real teardown runs as
//! a batch in the next `update`. A render pass iterating the active view is
//! never invalidated by a destroy issued while it runs.

use std::collections::HashSet;

use crate::foundation::collections::{Handle, HandleMap};
use crate::scene::attachment::SceneAttachment;

/// Stable handle to an attachment owned by an [`AttachmentManager`]
pub type AttachmentKey = Handle;

/// Factory for one attachment kind
///
/// Concrete backends implement this to give the manager a way to construct
/// attachments; clients never construct attachments directly.
pub trait AttachmentFactory {
    /// The attachment kind this factory produces
    type Attachment: SceneAttachment;

    /// Construct a fresh, unattached instance
    fn create(&mut self) -> Self::Attachment;
}

/// Registry of live attachments for one attachment kind
///
/// Owns attachment identity: instances are created only through
/// [`allocate`](Self::allocate) and torn down only through
/// [`destroy`](Self::destroy) followed by [`update`](Self::update).
///
/// All methods are thread-confined to the scene thread. There is no internal
/// locking; calling `destroy` from a second thread concurrently with
/// `update` is undefined behavior. Cross-thread notifications must go
/// through [`crate::scene::ScenePost`] instead.
pub struct AttachmentManager<F: AttachmentFactory> {
    factory: F,
    slots: HandleMap<F::Attachment>,
    // Retired but not yet torn down. Every key in here still resolves in
    // `slots` until the next update pass sweeps it.
    pending_removal: HashSet<AttachmentKey>,
}

impl<F: AttachmentFactory> AttachmentManager<F> {
    /// Create a manager around a concrete factory
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            slots: HandleMap::new(),
            pending_removal: HashSet::new(),
        }
    }

    /// Construct a new attachment and register it as active
    pub fn allocate(&mut self) -> AttachmentKey {
        let key = self.slots.insert(self.factory.create());
        log::debug!("allocated attachment {key:?}");
        key
    }

    /// Retire an attachment from the active view
    ///
    /// The attachment stays fully attached from its node's perspective until
    /// the next [`update`](Self::update) performs the real teardown.
    /// Destroying a key that is not active (unknown, already destroyed, or
    /// already swept) is silently accepted; independent observers may race
    /// each other to destroy the same attachment.
    pub fn destroy(&mut self, key: AttachmentKey) {
        if !self.slots.contains_key(key) || self.pending_removal.contains(&key) {
            return;
        }
        self.pending_removal.insert(key);
        log::debug!("attachment {key:?} marked for removal");
    }

    /// Tear down every attachment retired since the last call
    ///
    /// The only place real teardown happens; the owning driver must call it
    /// once per logical frame. Each pending attachment is detached from its
    /// owner and dropped. A call with nothing pending is a no-op.
    pub fn update(&mut self) {
        if self.pending_removal.is_empty() {
            return;
        }
        let pending = std::mem::take(&mut self.pending_removal);
        let count = pending.len();
        for key in pending {
            if let Some(mut attachment) = self.slots.remove(key) {
                let owner = attachment.owner();
                attachment.detach(owner);
            }
        }
        log::trace!("tore down {count} attachment(s)");
    }

    /// Iterate the active attachments
    ///
    /// Retired-but-unswept attachments are excluded. The iterator borrows the
    /// live registry; callers that need a stable snapshot across mutation use
    /// [`keys_snapshot`](Self::keys_snapshot).
    pub fn attachments(&self) -> impl Iterator<Item = (AttachmentKey, &F::Attachment)> + '_ {
        self.slots
            .iter()
            .filter(|(key, _)| !self.pending_removal.contains(key))
    }

    /// Owned snapshot of the active keys
    pub fn keys_snapshot(&self) -> Vec<AttachmentKey> {
        self.attachments().map(|(key, _)| key).collect()
    }

    /// Resolve a key to its attachment
    ///
    /// Unlike [`attachments`](Self::attachments) this also resolves keys in
    /// the retired-but-unswept window, so a client holding a key can still
    /// observe the attachment between `destroy` and `update`.
    pub fn get(&self, key: AttachmentKey) -> Option<&F::Attachment> {
        self.slots.get(key)
    }

    /// Mutable variant of [`get`](Self::get)
    pub fn get_mut(&mut self, key: AttachmentKey) -> Option<&mut F::Attachment> {
        self.slots.get_mut(key)
    }

    /// Whether `key` refers to an active attachment
    pub fn contains(&self, key: AttachmentKey) -> bool {
        self.slots.contains_key(key) && !self.pending_removal.contains(&key)
    }

    /// Number of active attachments
    pub fn len(&self) -> usize {
        self.slots.len() - self.pending_removal.len()
    }

    /// Whether no attachments are active
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of attachments awaiting teardown
    pub fn pending_count(&self) -> usize {
        self.pending_removal.len()
    }
}
