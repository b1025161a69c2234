//! Content model for renderable geometry
//!
//! Upstream editors hand the scene layer hierarchical content: a [`Geometry`]
//! item whose direct children are flattened renderable leaves ([`Shape`]s).
//! The scene layer never interprets the content beyond iterating its leaves;
//! a concrete backend turns each leaf into drawable primitives.

use crate::foundation::math::Vec3;

/// Identifier for a top-level content item
///
/// Assigned by the upstream model; the scene layer only ever compares these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeometryId(u64);

impl GeometryId {
    /// Create an identifier from a raw model id
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw id
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// Identifier for a renderable leaf
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeId(u64);

impl ShapeId {
    /// Create an identifier from a raw model id
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw id
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// Primitive palette a backend knows how to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// Axis-aligned box
    Box,
    /// Sphere
    Sphere,
    /// Cylinder
    Cylinder,
    /// Tube (cylinder with an inner radius)
    Tube,
    /// Flat polygon
    Polygon,
}

/// A flattened renderable leaf
///
/// Cheap to clone; equality is identity-based (two shapes are the same leaf
/// iff they carry the same [`ShapeId`]), so a shape can be looked up in a
/// live list by any clone of it.
#[derive(Debug, Clone)]
pub struct Shape {
    id: ShapeId,
    kind: ShapeKind,
    position: Vec3,
    label: String,
}

impl Shape {
    /// Create a new shape leaf
    pub fn new(id: ShapeId, kind: ShapeKind, position: Vec3) -> Self {
        Self {
            id,
            kind,
            position,
            label: String::new(),
        }
    }

    /// Attach a human-readable label (diagnostics only)
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Get the shape identifier
    pub const fn id(&self) -> ShapeId {
        self.id
    }

    /// Get the primitive kind
    pub const fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Get the position of the leaf
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Get the label, empty if none was set
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl PartialEq for Shape {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Shape {}

/// A top-level content item with its flattened child leaves
///
/// Child order is preserved everywhere downstream: when an attachment expands
/// an item into shapes, the shapes appear in exactly this order.
#[derive(Debug, Clone)]
pub struct Geometry {
    id: GeometryId,
    label: String,
    shapes: Vec<Shape>,
}

impl Geometry {
    /// Create an empty content item
    pub fn new(id: GeometryId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            shapes: Vec::new(),
        }
    }

    /// Append a child leaf (builder form)
    #[must_use]
    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shapes.push(shape);
        self
    }

    /// Append a child leaf
    pub fn push_shape(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Get the content identifier
    pub const fn id(&self) -> GeometryId {
        self.id
    }

    /// Get the label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Direct child leaves, in insertion order
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }
}
