use labdeck::{RawProperties, Registry};
use serde_json::{Value, json};

/// Raw property map from a `json!` object literal.
pub fn raw(value: Value) -> RawProperties {
    match value {
        Value::Object(map) => map,
        other => panic!("fixture must be a JSON object, got {other}"),
    }
}

/// Registry populated with built-ins plus the example custom family used
/// across the suite. Mirrors a typical one-family definitions file: a plate
/// with uniform spacing, a deepwell variant with per-axis overrides, and a
/// deeper color variant.
pub fn example_registry() -> Registry {
    let mut registry = Registry::with_builtins();
    registry
        .add_custom_container(
            "microplate.example_plate",
            &raw(json!({
                "rows": 12,
                "cols": 8,
                "a1_x": 10,
                "a1_y": 11,
                "diameter": 7,
                "spacing": 12,
            })),
        )
        .expect("example plate registers");
    registry
        .add_custom_container(
            "microplate.example_plate.deepwell",
            &raw(json!({
                "well_depth": 15,
                "col_spacing": 10,
                "row_spacing": 13,
            })),
        )
        .expect("example deepwell registers");
    registry
        .add_custom_container(
            "microplate.example_plate.deepwell.red",
            &raw(json!({"well_depth": 25})),
        )
        .expect("example red deepwell registers");
    registry
        .add_custom_container("tiprack.example_rack", &raw(json!({})))
        .expect("example rack registers");
    registry
}
