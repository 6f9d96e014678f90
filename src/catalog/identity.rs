use std::fmt;

use crate::error::CatalogError;

/// Dotted hierarchical name addressing a catalog entry (e.g.
/// `microplate.96.deepwell`).
///
/// Segments are lowercase ASCII letters, digits, and underscores separated by
/// single dots; depth is unbounded. The grammar is enforced at construction
/// so the registry can trust stored keys without re-checking.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ContainerName(String);

impl ContainerName {
    /// Parse and validate a dotted name.
    pub fn parse(raw: &str) -> Result<Self, CatalogError> {
        let well_formed = !raw.is_empty()
            && raw
                .split('.')
                .all(|segment| !segment.is_empty() && segment.chars().all(is_segment_char));
        if !well_formed {
            return Err(CatalogError::InvalidContainerName(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The name with the last segment removed, or `None` for a root name.
    pub fn parent(&self) -> Option<ContainerName> {
        self.0
            .rsplit_once('.')
            .map(|(prefix, _)| ContainerName(prefix.to_string()))
    }
}

impl fmt::Display for ContainerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_segment_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'
}

/// Root container family a catalog entry belongs to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ContainerKind {
    Microplate,
    Tiprack,
}

impl ContainerKind {
    pub const ALL: [ContainerKind; 2] = [ContainerKind::Microplate, ContainerKind::Tiprack];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContainerKind::Microplate => "microplate",
            ContainerKind::Tiprack => "tiprack",
        }
    }

    /// Parse a kind from its catalog string form.
    pub fn parse(value: &str) -> Result<Self, CatalogError> {
        match value {
            "microplate" => Ok(ContainerKind::Microplate),
            "tiprack" => Ok(ContainerKind::Tiprack),
            other => Err(CatalogError::UnknownContainerKind(other.to_string())),
        }
    }

    /// Root catalog name for this kind.
    pub fn root_name(&self) -> ContainerName {
        ContainerName(self.as_str().to_string())
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
