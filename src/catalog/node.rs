//! Container type nodes and inherited property resolution.
//!
//! A node stores only the properties its definition set explicitly;
//! everything else resolves through the parent chain and finally the
//! kind-level catalog defaults. The chain is bounded by dotted-name depth,
//! so resolution always terminates.

use std::sync::Arc;

use crate::catalog::builtins;
use crate::catalog::identity::{ContainerKind, ContainerName};
use crate::catalog::schema::{PropertyKey, PropertyMap, PropertyValue};
use crate::coordinates::Axis;

#[derive(Debug)]
/// One named entry in the container hierarchy.
///
/// Immutable after construction; the registry hands out shared `Arc`s so two
/// lookups of the same name observe the same node.
pub struct ContainerType {
    name: ContainerName,
    kind: ContainerKind,
    properties: PropertyMap,
    parent: Option<Arc<ContainerType>>,
}

impl ContainerType {
    /// Build a node from an already-validated property map.
    ///
    /// Schema validation is enforced by typing: raw definitions cannot reach
    /// this factory without passing through `schema::validate` (or the
    /// built-in tables, which are typed at the source).
    pub(crate) fn new(
        name: ContainerName,
        kind: ContainerKind,
        properties: PropertyMap,
        parent: Option<Arc<ContainerType>>,
    ) -> Self {
        Self {
            name,
            kind,
            properties,
            parent,
        }
    }

    pub fn name(&self) -> &ContainerName {
        &self.name
    }

    pub fn kind(&self) -> ContainerKind {
        self.kind
    }

    pub fn parent(&self) -> Option<&Arc<ContainerType>> {
        self.parent.as_ref()
    }

    /// Value set directly on this node, ignoring inheritance.
    pub fn own(&self, key: PropertyKey) -> Option<&PropertyValue> {
        self.properties.get(&key)
    }

    /// Effective value: own if set, else inherited, else the kind default.
    pub fn resolve(&self, key: PropertyKey) -> Option<PropertyValue> {
        let mut node = self;
        loop {
            if let Some(value) = node.properties.get(&key) {
                return Some(value.clone());
            }
            match &node.parent {
                Some(parent) => node = parent.as_ref(),
                None => return builtins::kind_default(self.kind, key),
            }
        }
    }

    /// Effective spacing for one grid axis.
    ///
    /// At each node on the chain the axis-specific key wins over the uniform
    /// `spacing` key; only when a node sets neither does its parent get a
    /// say. Axes resolve independently, so one axis may use a specific
    /// override while the other falls back to uniform spacing.
    pub(crate) fn spacing(&self, axis: Axis) -> Option<PropertyValue> {
        let mut node = self;
        loop {
            if let Some(value) = node.properties.get(&axis.specific_key()) {
                return Some(value.clone());
            }
            if let Some(value) = node.properties.get(&PropertyKey::Spacing) {
                return Some(value.clone());
            }
            match &node.parent {
                Some(parent) => node = parent.as_ref(),
                None => {
                    return builtins::kind_default(self.kind, axis.specific_key())
                        .or_else(|| builtins::kind_default(self.kind, PropertyKey::Spacing));
                }
            }
        }
    }
}
