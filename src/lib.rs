//! Container definition catalog for labware decks.
//!
//! The crate models laboratory containers (microplates, tip racks, and their
//! sub-variants) as a hierarchy of named definitions. A registry seeds the
//! built-in hierarchy, accepts validated custom definitions from
//! configuration, and hands out immutable nodes; coordinate helpers turn a
//! well label like `"b12"` into a deterministic (x, y[, z]) offset from the
//! node's resolved spacing. Everything is pure in-memory computation; deck
//! placement, motion, and hardware limits live with downstream consumers.

pub mod catalog;
pub mod coordinates;
pub mod definitions;
pub mod error;

pub use catalog::registry::shared;
pub use catalog::{
    ContainerKind, ContainerName, ContainerType, PropertyKey, PropertyMap, PropertyValue,
    RawDefinitions, RawProperties, Registry,
};
pub use coordinates::{Axis, Num, WellLabel};
pub use definitions::{load_definitions_file, load_definitions_from_path};
pub use error::CatalogError;
