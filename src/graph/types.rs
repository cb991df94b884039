//! Core graph types
//!
//! This module contains the fundamental data structures used in the dependency
//! graph.

use petgraph::graph::DiGraph;
use serde::Serialize;

/// The directed dependency graph shared by the builder, layout engine and
/// renderer. Node indices follow insertion order.
pub type DependencyGraph = DiGraph<EntityNode, DependencyEdge>;

/// Whether an entity is a foundational object or computed from others
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityCategory {
    Base,
    Derived,
}

impl std::fmt::Display for EntityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityCategory::Base => write!(f, "base"),
            EntityCategory::Derived => write!(f, "derived"),
        }
    }
}

/// A point in layout space
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Represents an entity node in the dependency graph
#[derive(Debug, Clone)]
pub struct EntityNode {
    name: String,
    category: EntityCategory,
    position: Option<Position>,
}

impl EntityNode {
    pub fn new(name: impl Into<String>, category: EntityCategory) -> Self {
        Self {
            name: name.into(),
            category,
            position: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> EntityCategory {
        self.category
    }

    pub(crate) fn set_category(&mut self, category: EntityCategory) {
        self.category = category;
    }

    pub fn is_base(&self) -> bool {
        self.category == EntityCategory::Base
    }

    /// Position assigned by the layout engine, `None` before layout
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = Some(position);
    }
}

/// A dependency edge: `from_entity` is depended upon by `to_entity`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyEdge {
    from_entity: String,
    to_entity: String,
}

impl DependencyEdge {
    pub fn new(from_entity: impl Into<String>, to_entity: impl Into<String>) -> Self {
        Self {
            from_entity: from_entity.into(),
            to_entity: to_entity.into(),
        }
    }

    pub fn from_entity(&self) -> &str {
        &self.from_entity
    }

    pub fn to_entity(&self) -> &str {
        &self.to_entity
    }

    pub fn is_self_loop(&self) -> bool {
        self.from_entity == self.to_entity
    }
}
