//! Container catalog wiring.
//!
//! The catalog maps dotted hierarchical names (`microplate.96.deepwell`) to
//! immutable container type nodes. `schema` validates raw definitions before
//! admission, `node` resolves inherited properties through the parent chain,
//! and `registry` owns the name-to-node arena callers look up against.
//! Built-in geometry lives in `builtins` as catalog data.

mod builtins;
pub mod identity;
pub mod node;
pub mod registry;
pub mod schema;

pub use identity::{ContainerKind, ContainerName};
pub use node::ContainerType;
pub use registry::Registry;
pub use schema::{PropertyKey, PropertyMap, PropertyValue, RawDefinitions, RawProperties};
