//! Recognized container properties and raw-definition validation.
//!
//! Every definition admitted into the catalog passes through [`validate`]
//! first: unknown keys and non-scalar or wrongly-kinded values are rejected
//! before any node is constructed, so nodes only ever hold typed values.
//! Validation is pure; the raw input is never mutated.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::CatalogError;

/// Raw property mapping for one definition, as handed over by configuration
/// (already-parsed JSON, never file content).
pub type RawProperties = serde_json::Map<String, Value>;

/// Raw `name -> properties` batch, sorted by name. Sorted order guarantees a
/// parent (a strict prefix of its children) iterates before its children.
pub type RawDefinitions = BTreeMap<String, RawProperties>;

/// Validated, typed property set for one catalog entry.
pub type PropertyMap = BTreeMap<PropertyKey, PropertyValue>;

/// Recognized property keys.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub enum PropertyKey {
    Type,
    Rows,
    Cols,
    A1X,
    A1Y,
    Diameter,
    WellDepth,
    RowSpacing,
    ColSpacing,
    Spacing,
}

impl PropertyKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyKey::Type => "type",
            PropertyKey::Rows => "rows",
            PropertyKey::Cols => "cols",
            PropertyKey::A1X => "a1_x",
            PropertyKey::A1Y => "a1_y",
            PropertyKey::Diameter => "diameter",
            PropertyKey::WellDepth => "well_depth",
            PropertyKey::RowSpacing => "row_spacing",
            PropertyKey::ColSpacing => "col_spacing",
            PropertyKey::Spacing => "spacing",
        }
    }

    fn from_str(value: &str) -> Option<Self> {
        match value {
            "type" => Some(PropertyKey::Type),
            "rows" => Some(PropertyKey::Rows),
            "cols" => Some(PropertyKey::Cols),
            "a1_x" => Some(PropertyKey::A1X),
            "a1_y" => Some(PropertyKey::A1Y),
            "diameter" => Some(PropertyKey::Diameter),
            "well_depth" => Some(PropertyKey::WellDepth),
            "row_spacing" => Some(PropertyKey::RowSpacing),
            "col_spacing" => Some(PropertyKey::ColSpacing),
            "spacing" => Some(PropertyKey::Spacing),
            _ => None,
        }
    }

    /// Value kind this key accepts. The `type` value is checked for kind
    /// membership at registration, where the failure carries the right error.
    fn expected(&self) -> ValueKind {
        match self {
            PropertyKey::Type => ValueKind::Text,
            PropertyKey::Rows | PropertyKey::Cols => ValueKind::Integer,
            PropertyKey::A1X
            | PropertyKey::A1Y
            | PropertyKey::Diameter
            | PropertyKey::WellDepth
            | PropertyKey::RowSpacing
            | PropertyKey::ColSpacing
            | PropertyKey::Spacing => ValueKind::Number,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum ValueKind {
    Text,
    Integer,
    Number,
}

impl ValueKind {
    fn describe(&self) -> &'static str {
        match self {
            ValueKind::Text => "expected a string value",
            ValueKind::Integer => "expected an integer value",
            ValueKind::Number => "expected a numeric value",
        }
    }
}

/// Scalar value stored on a catalog node.
///
/// Integers and floats stay distinct so integer-valued geometry survives
/// arithmetic exactly.
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl PropertyValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            PropertyValue::Int(value) => Some(*value),
            _ => None,
        }
    }
}

/// Validate a raw definition against the property schema.
///
/// Fails with `UnknownProperty` for keys outside the schema and
/// `InvalidPropertyValue` for values that are not plain scalars of the key's
/// accepted kind. Custom properties must be static data: structured values
/// (objects, arrays) and nulls are never admitted.
pub fn validate(raw: &RawProperties) -> Result<PropertyMap, CatalogError> {
    let mut validated = BTreeMap::new();
    for (key, value) in raw {
        let key = PropertyKey::from_str(key)
            .ok_or_else(|| CatalogError::UnknownProperty(key.clone()))?;
        validated.insert(key, check_value(key, value)?);
    }
    Ok(validated)
}

fn check_value(key: PropertyKey, value: &Value) -> Result<PropertyValue, CatalogError> {
    let invalid = |reason: &str| CatalogError::InvalidPropertyValue {
        key: key.as_str().to_string(),
        reason: reason.to_string(),
    };
    let scalar = scalar_value(value).ok_or_else(|| invalid("expected a plain scalar value"))?;
    let expected = key.expected();
    let accepted = match (expected, &scalar) {
        (ValueKind::Text, PropertyValue::Text(_)) => true,
        (ValueKind::Integer, PropertyValue::Int(_)) => true,
        (ValueKind::Number, PropertyValue::Int(_) | PropertyValue::Float(_)) => true,
        _ => false,
    };
    if !accepted {
        return Err(invalid(expected.describe()));
    }
    Ok(scalar)
}

fn scalar_value(value: &Value) -> Option<PropertyValue> {
    match value {
        Value::Bool(value) => Some(PropertyValue::Bool(*value)),
        Value::Number(number) => {
            // Integer-representable numbers stay integral so downstream
            // arithmetic keeps them exact.
            if let Some(int) = number.as_i64() {
                Some(PropertyValue::Int(int))
            } else {
                number.as_f64().map(PropertyValue::Float)
            }
        }
        Value::String(value) => Some(PropertyValue::Text(value.clone())),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> RawProperties {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn validate_keeps_integers_exact() {
        let validated = validate(&raw(json!({
            "rows": 12,
            "spacing": 9,
            "well_depth": 10.5,
            "type": "microplate",
        })))
        .unwrap();
        assert_eq!(validated[&PropertyKey::Rows], PropertyValue::Int(12));
        assert_eq!(validated[&PropertyKey::Spacing], PropertyValue::Int(9));
        assert_eq!(validated[&PropertyKey::WellDepth], PropertyValue::Float(10.5));
        assert_eq!(
            validated[&PropertyKey::Type],
            PropertyValue::Text("microplate".to_string())
        );
    }

    #[test]
    fn validate_rejects_unknown_keys() {
        let err = validate(&raw(json!({"fake_key": true}))).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownProperty(key) if key == "fake_key"));
    }

    #[test]
    fn validate_rejects_structured_values() {
        for value in [json!({"well_depth": {"mm": 15}}), json!({"well_depth": [15]}), json!({"well_depth": null})] {
            let err = validate(&raw(value)).unwrap_err();
            assert!(matches!(err, CatalogError::InvalidPropertyValue { key, .. } if key == "well_depth"));
        }
    }

    #[test]
    fn validate_rejects_wrong_kinds() {
        let err = validate(&raw(json!({"rows": "twelve"}))).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidPropertyValue { key, .. } if key == "rows"));

        let err = validate(&raw(json!({"rows": 8.5}))).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidPropertyValue { key, .. } if key == "rows"));

        let err = validate(&raw(json!({"type": 96}))).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidPropertyValue { key, .. } if key == "type"));
    }

    #[test]
    fn validate_accepts_any_kind_string_for_type() {
        // Kind membership is the registry's call so it can surface
        // UnknownContainerKind instead of a value error.
        let validated = validate(&raw(json!({"type": "imaginary"}))).unwrap();
        assert_eq!(validated[&PropertyKey::Type].as_text(), Some("imaginary"));
    }
}
