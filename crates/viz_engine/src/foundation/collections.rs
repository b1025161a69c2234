//! Handle-based collection types
//!
//! Registries in the engine hand out opaque handles instead of references.
//! A slot map keeps every live handle valid across removals of other entries,
//! so a registry can be compacted mid-iteration without invalidating the keys
//! clients are still holding.

pub use slotmap::{DefaultKey, SlotMap};

/// Opaque handle into a [`HandleMap`]
pub type Handle = DefaultKey;

/// Slot-map backed registry with stable handles
pub type HandleMap<T> = SlotMap<DefaultKey, T>;
