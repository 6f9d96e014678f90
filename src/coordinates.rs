//! Well label parsing and offset computation.
//!
//! Spacing keys name the well pitch *within* a row or column: stepping one
//! row letter advances x by `col_spacing`, stepping one column number
//! advances y by `row_spacing`. Both coordinate entry points share this one
//! mapping, so grid-relative and instance coordinates can never disagree on
//! axis orientation.

use std::fmt;
use std::ops::{Add, Mul};

use crate::catalog::node::ContainerType;
use crate::catalog::schema::{PropertyKey, PropertyValue};
use crate::error::CatalogError;

/// Grid axis addressed by a spacing property.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Axis {
    Row,
    Col,
}

impl Axis {
    /// Spacing key that overrides uniform `spacing` for this axis.
    pub(crate) fn specific_key(&self) -> PropertyKey {
        match self {
            Axis::Row => PropertyKey::RowSpacing,
            Axis::Col => PropertyKey::ColSpacing,
        }
    }
}

/// Parsed well label: row letter plus 1-based column number, e.g. `"b12"`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WellLabel {
    row: u32,
    col: u32,
}

impl WellLabel {
    /// Parse a label, case-insensitively.
    pub fn parse(label: &str) -> Result<Self, CatalogError> {
        let invalid = |reason: &str| CatalogError::InvalidWellLabel {
            label: label.to_string(),
            reason: reason.to_string(),
        };

        let mut chars = label.chars();
        let row_char = chars.next().ok_or_else(|| invalid("label is empty"))?;
        if !row_char.is_ascii_alphabetic() {
            return Err(invalid("row must be a letter"));
        }
        let digits = chars.as_str();
        if digits.is_empty() {
            return Err(invalid("column number is missing"));
        }
        let col: u32 = digits
            .parse()
            .map_err(|_| invalid("column must be a number"))?;
        if col == 0 {
            return Err(invalid("column numbering starts at 1"));
        }

        Ok(Self {
            row: row_char.to_ascii_lowercase() as u32 - 'a' as u32,
            col: col - 1,
        })
    }

    /// Zero-based row index (`'a'` is 0).
    pub fn row_index(&self) -> u32 {
        self.row
    }

    /// Zero-based column index (`1` is 0).
    pub fn col_index(&self) -> u32 {
        self.col
    }
}

/// Catalog number: integer geometry stays integral through arithmetic; any
/// float operand promotes the result to float. No rounding, no unit
/// conversion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Num {
    Int(i64),
    Float(f64),
}

impl Num {
    pub fn as_f64(&self) -> f64 {
        match self {
            Num::Int(value) => *value as f64,
            Num::Float(value) => *value,
        }
    }

    fn from_property(value: &PropertyValue) -> Option<Num> {
        match value {
            PropertyValue::Int(value) => Some(Num::Int(*value)),
            PropertyValue::Float(value) => Some(Num::Float(*value)),
            PropertyValue::Bool(_) | PropertyValue::Text(_) => None,
        }
    }
}

impl Mul for Num {
    type Output = Num;

    fn mul(self, rhs: Num) -> Num {
        match (self, rhs) {
            (Num::Int(a), Num::Int(b)) => Num::Int(a * b),
            (a, b) => Num::Float(a.as_f64() * b.as_f64()),
        }
    }
}

impl Add for Num {
    type Output = Num;

    fn add(self, rhs: Num) -> Num {
        match (self, rhs) {
            (Num::Int(a), Num::Int(b)) => Num::Int(a + b),
            (a, b) => Num::Float(a.as_f64() + b.as_f64()),
        }
    }
}

impl From<i64> for Num {
    fn from(value: i64) -> Self {
        Num::Int(value)
    }
}

impl From<f64> for Num {
    fn from(value: f64) -> Self {
        Num::Float(value)
    }
}

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Num::Int(value) => write!(f, "{value}"),
            Num::Float(value) => write!(f, "{value}"),
        }
    }
}

impl ContainerType {
    /// Grid-relative offset of a well, origin at A1.
    ///
    /// `a1_x`/`a1_y` describe the plate's A1 origin for downstream deck
    /// consumers and do not enter the grid-relative result.
    pub fn calculate_offset(&self, label: &str) -> Result<(Num, Num), CatalogError> {
        let well = WellLabel::parse(label)?;
        let col_spacing = self.axis_spacing(Axis::Col)?;
        let row_spacing = self.axis_spacing(Axis::Row)?;
        let x = col_spacing * Num::Int(i64::from(well.row_index()));
        let y = row_spacing * Num::Int(i64::from(well.col_index()));
        Ok((x, y))
    }

    /// Grid-relative offset plus the z depth component.
    ///
    /// z is reserved for depth-aware placements; plain grid lookups resolve
    /// to 0.
    pub fn child_coordinates(&self, label: &str) -> Result<(Num, Num, Num), CatalogError> {
        let (x, y) = self.calculate_offset(label)?;
        Ok((x, y, Num::Int(0)))
    }

    fn axis_spacing(&self, axis: Axis) -> Result<Num, CatalogError> {
        self.spacing(axis)
            .as_ref()
            .and_then(Num::from_property)
            .ok_or_else(|| CatalogError::MissingProperty {
                container: self.name().as_str().to_string(),
                key: axis.specific_key().as_str(),
            })
    }
}
