//! Error types for catalog validation and coordinate lookup.

use thiserror::Error;

use crate::catalog::identity::ContainerKind;

/// Errors surfaced by the container catalog.
///
/// Every variant is a local validation failure reported at the offending
/// call; nothing is retried or silently recovered, and a failed registration
/// leaves the registry untouched.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A property key outside the recognized schema.
    #[error("unknown container property '{0}'")]
    UnknownProperty(String),

    /// A property value that is not a plain scalar of the key's accepted kind.
    #[error("invalid value for property '{key}': {reason}")]
    InvalidPropertyValue { key: String, reason: String },

    /// A definition whose root kind is neither microplate nor tiprack.
    #[error("unknown container kind '{0}' (expected 'microplate' or 'tiprack')")]
    UnknownContainerKind(String),

    /// An explicit `type` property that disagrees with the dotted parent.
    #[error("declared kind '{declared}' conflicts with parent kind '{parent}'")]
    ParentKindMismatch {
        declared: ContainerKind,
        parent: ContainerKind,
    },

    /// A requested dotted name with no registered node.
    #[error("no container registered under '{0}'")]
    ContainerNotFound(String),

    /// A well label that does not parse as letter-row plus number-column.
    #[error("invalid well label '{label}': {reason}")]
    InvalidWellLabel { label: String, reason: String },

    /// A name that violates the dotted-name grammar.
    #[error("invalid container name '{0}': segments are lowercase identifiers separated by '.'")]
    InvalidContainerName(String),

    /// A coordinate calculation needed a property that resolves nowhere.
    #[error("container '{container}' resolves no value for '{key}'")]
    MissingProperty {
        container: String,
        key: &'static str,
    },
}
