//! Name-keyed arena of container type nodes.
//!
//! The registry owns every node as a shared `Arc`, so repeated lookups of the
//! same dotted name observe the same entry. Built-ins seed first; custom
//! definitions append afterward and are validated in full before anything is
//! inserted.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, OnceLock, RwLock};

use crate::catalog::builtins;
use crate::catalog::identity::{ContainerKind, ContainerName};
use crate::catalog::node::ContainerType;
use crate::catalog::schema::{self, PropertyKey, PropertyValue, RawDefinitions, RawProperties};
use crate::error::CatalogError;

#[derive(Default)]
/// In-memory store mapping dotted names to container type nodes.
pub struct Registry {
    nodes: BTreeMap<ContainerName, Arc<ContainerType>>,
}

impl Registry {
    /// Registry pre-populated with the built-in hierarchy.
    pub fn with_builtins() -> Self {
        let mut registry = Self::default();
        registry.seed_builtins();
        registry
    }

    /// Seed the built-in hierarchy.
    ///
    /// Idempotent: names already present are left untouched, so re-seeding
    /// never duplicates built-ins or disturbs custom entries.
    pub fn seed_builtins(&mut self) {
        for (raw_name, properties) in builtins::builtin_definitions() {
            let name = ContainerName::parse(raw_name).expect("builtin names satisfy the grammar");
            if self.nodes.contains_key(&name) {
                continue;
            }
            let parent = name.parent().map(|parent_name| {
                self.nodes
                    .get(&parent_name)
                    .cloned()
                    .expect("builtin parents seed before children")
            });
            let kind = match &parent {
                Some(parent) => parent.kind(),
                None => {
                    ContainerKind::parse(name.as_str()).expect("builtin roots are kind names")
                }
            };
            let node = Arc::new(ContainerType::new(name.clone(), kind, properties, parent));
            self.nodes.insert(name, node);
        }
    }

    /// Exact-match lookup of a registered container.
    pub fn load_container(&self, name: &str) -> Result<Arc<ContainerType>, CatalogError> {
        // An ill-formed name can never have been registered, so both cases
        // surface as not-found.
        let Ok(parsed) = ContainerName::parse(name) else {
            return Err(CatalogError::ContainerNotFound(name.to_string()));
        };
        self.nodes
            .get(&parsed)
            .cloned()
            .ok_or_else(|| CatalogError::ContainerNotFound(name.to_string()))
    }

    /// Every registered dotted name, built-in and custom, at every depth.
    pub fn list_containers(&self) -> BTreeSet<String> {
        self.nodes
            .keys()
            .map(|name| name.as_str().to_string())
            .collect()
    }

    /// Validate and register a custom container definition.
    ///
    /// The parent is the dotted prefix when there is one (and must already be
    /// registered); a bare name takes its kind from the explicit `type`
    /// property and hangs off that kind's root. Registration is atomic:
    /// every failure path returns before the map is touched. Re-registering
    /// a name replaces the entry; nodes already handed out are unaffected.
    pub fn add_custom_container(
        &mut self,
        name: &str,
        raw: &RawProperties,
    ) -> Result<Arc<ContainerType>, CatalogError> {
        let name = ContainerName::parse(name)?;
        let properties = schema::validate(raw)?;

        let declared_kind = match properties.get(&PropertyKey::Type) {
            Some(PropertyValue::Text(kind)) => Some(ContainerKind::parse(kind)?),
            _ => None,
        };

        let (kind, parent) = match name.parent() {
            Some(parent_name) => {
                let parent = self.nodes.get(&parent_name).cloned().ok_or_else(|| {
                    CatalogError::ContainerNotFound(parent_name.as_str().to_string())
                })?;
                if let Some(declared) = declared_kind {
                    if declared != parent.kind() {
                        return Err(CatalogError::ParentKindMismatch {
                            declared,
                            parent: parent.kind(),
                        });
                    }
                }
                (parent.kind(), Some(parent))
            }
            None => {
                let kind = declared_kind.ok_or_else(|| {
                    CatalogError::UnknownContainerKind(name.as_str().to_string())
                })?;
                (kind, self.nodes.get(&kind.root_name()).cloned())
            }
        };

        let node = Arc::new(ContainerType::new(name.clone(), kind, properties, parent));
        self.nodes.insert(name, node.clone());
        Ok(node)
    }

    /// Register a batch of raw definitions.
    ///
    /// Entries register in sorted name order; a parent is always a strict
    /// lexicographic prefix of its children, so it lands first no matter how
    /// the batch was assembled. The first failure aborts the batch; entries
    /// registered before it remain.
    pub fn load_custom_definitions(
        &mut self,
        definitions: &RawDefinitions,
    ) -> Result<(), CatalogError> {
        for (name, raw) in definitions {
            self.add_custom_container(name, raw)?;
        }
        Ok(())
    }
}

/// Process-wide registry for embedders that do not manage their own.
///
/// Seeded on first access. Registration takes the write lock (single writer);
/// lookups only need the read lock, since nodes are immutable once built.
pub fn shared() -> &'static RwLock<Registry> {
    static SHARED: OnceLock<RwLock<Registry>> = OnceLock::new();
    SHARED.get_or_init(|| RwLock::new(Registry::with_builtins()))
}
