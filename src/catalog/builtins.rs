//! Built-in catalog data.
//!
//! Definitions and kind-level defaults live here as data so the engine stays
//! free of hard-coded geometry. Grid dimensions follow the ANSI/SLAS 96-well
//! footprint (8 rows by 12 columns at 9 mm pitch); per-variant diameters and
//! depths are nominal manufacturer values.

use crate::catalog::identity::ContainerKind;
use crate::catalog::schema::{PropertyKey, PropertyMap, PropertyValue};

/// Built-in hierarchy seeded into every registry, parents before children.
pub(super) fn builtin_definitions() -> Vec<(&'static str, PropertyMap)> {
    vec![
        (
            "microplate",
            props(&[
                (PropertyKey::Rows, int(8)),
                (PropertyKey::Cols, int(12)),
                (PropertyKey::Spacing, int(9)),
            ]),
        ),
        (
            "microplate.96",
            props(&[
                (PropertyKey::Rows, int(8)),
                (PropertyKey::Cols, int(12)),
                (PropertyKey::Diameter, float(6.4)),
                (PropertyKey::WellDepth, float(10.5)),
            ]),
        ),
        (
            "microplate.96.deepwell",
            props(&[
                (PropertyKey::Diameter, float(8.2)),
                (PropertyKey::WellDepth, float(28.0)),
            ]),
        ),
        (
            "tiprack",
            props(&[
                (PropertyKey::Rows, int(8)),
                (PropertyKey::Cols, int(12)),
                (PropertyKey::Spacing, int(9)),
            ]),
        ),
        (
            "tiprack.p10",
            props(&[
                (PropertyKey::Diameter, float(3.5)),
                (PropertyKey::WellDepth, float(31.5)),
            ]),
        ),
        (
            "tiprack.p20",
            props(&[
                (PropertyKey::Diameter, float(3.9)),
                (PropertyKey::WellDepth, float(32.0)),
            ]),
        ),
        (
            "tiprack.p200",
            props(&[
                (PropertyKey::Diameter, float(5.3)),
                (PropertyKey::WellDepth, float(50.0)),
            ]),
        ),
        (
            "tiprack.p1000",
            props(&[
                (PropertyKey::Diameter, float(7.5)),
                (PropertyKey::WellDepth, float(76.0)),
            ]),
        ),
    ]
}

/// Kind-level fallback used when neither a node nor any ancestor sets a
/// property. Both root families share the 96-position grid defaults, so a
/// tiprack always has 96 positions unless a definition overrides it.
pub(super) fn kind_default(_kind: ContainerKind, key: PropertyKey) -> Option<PropertyValue> {
    match key {
        PropertyKey::Rows => Some(int(8)),
        PropertyKey::Cols => Some(int(12)),
        PropertyKey::Spacing => Some(int(9)),
        _ => None,
    }
}

fn props(entries: &[(PropertyKey, PropertyValue)]) -> PropertyMap {
    entries.iter().cloned().collect()
}

fn int(value: i64) -> PropertyValue {
    PropertyValue::Int(value)
}

fn float(value: f64) -> PropertyValue {
    PropertyValue::Float(value)
}
