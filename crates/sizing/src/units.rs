//! Length units and conversion through millimetres.
//!
//! Millimetres are the canonical unit. Every conversion goes value → mm → value,
//! never through a direct from→to table, so repeated conversions round the same way.

use serde::{Deserialize, Serialize};

/// The four supported display units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    Mm,
    Meters,
    Feet,
    Inches,
}

impl LengthUnit {
    pub const ALL: [LengthUnit; 4] = [
        LengthUnit::Mm,
        LengthUnit::Meters,
        LengthUnit::Feet,
        LengthUnit::Inches,
    ];

    /// Millimetres per one unit.
    pub const fn mm_factor(self) -> f64 {
        match self {
            LengthUnit::Mm => 1.0,
            LengthUnit::Meters => 1000.0,
            LengthUnit::Feet => 304.8,
            LengthUnit::Inches => 25.4,
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            LengthUnit::Mm => "Millimeters",
            LengthUnit::Meters => "Meters",
            LengthUnit::Feet => "Feet",
            LengthUnit::Inches => "Inches",
        }
    }
}

pub fn to_millimeters(value: f64, unit: LengthUnit) -> f64 {
    value * unit.mm_factor()
}

pub fn from_millimeters(value_mm: f64, unit: LengthUnit) -> f64 {
    value_mm / unit.mm_factor()
}

pub fn convert(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    from_millimeters(to_millimeters(value, from), to)
}

/// Formats a value to 2 decimal places for display only.
/// Ties round half away from zero; `{:.2}` alone would round 1.125 to "1.12".
pub fn format_number(value: f64) -> String {
    format!("{:.2}", (value * 100.0).round() / 100.0)
}
