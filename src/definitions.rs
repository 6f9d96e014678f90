//! Custom container definitions as configuration files.
//!
//! One JSON file describes one custom container family:
//!
//! ```json
//! {
//!   "containers": {
//!     "microplate.example_plate": {"rows": 12, "cols": 8, "spacing": 12},
//!     "microplate.example_plate.deepwell": {"well_depth": 15}
//!   }
//! }
//! ```
//!
//! The loader hands the registry already-parsed mappings, never raw file
//! content. Engine validation failures keep their typed kinds; file problems
//! (missing, malformed) carry path context instead.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::catalog::registry::Registry;
use crate::catalog::schema::RawDefinitions;

#[derive(Debug, Deserialize)]
/// On-disk shape of a definitions file.
struct DefinitionsFile {
    containers: RawDefinitions,
}

/// Read and parse a definitions file into the raw mapping the registry
/// consumes.
pub fn load_definitions_from_path(path: &Path) -> Result<RawDefinitions> {
    let data = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let file: DefinitionsFile =
        serde_json::from_str(&data).with_context(|| format!("parsing {}", path.display()))?;
    Ok(file.containers)
}

/// Load a definitions file straight into a registry.
pub fn load_definitions_file(registry: &mut Registry, path: &Path) -> Result<()> {
    let definitions = load_definitions_from_path(path)?;
    registry
        .load_custom_definitions(&definitions)
        .with_context(|| format!("loading custom containers from {}", path.display()))?;
    Ok(())
}
