//! User-facing parameters: which quantities are locked and what values they carry.
//!
//! The presentation layer collects up to four values but only two of them are
//! authoritative at a time. `LockedPair` makes that rule structural; callers
//! build it from whatever list the user submitted and get `InvalidInput` back
//! when the list is not exactly two distinct kinds.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SizingError};
use crate::units::{convert, to_millimeters, LengthUnit};

// ────────────────────────────────────────────────────────────────────────────
// Parameter kinds
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParameterKind {
    AspectRatio,
    Height,
    Width,
    Diagonal,
}

impl ParameterKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ParameterKind::AspectRatio => "aspectRatio",
            ParameterKind::Height => "height",
            ParameterKind::Width => "width",
            ParameterKind::Diagonal => "diagonal",
        }
    }
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Input values
// ────────────────────────────────────────────────────────────────────────────

/// Raw values as entered, in the active display unit.
/// Aspect ratio stays text because it comes from a preset list or a free field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputValues {
    pub aspect_ratio: Option<String>,
    pub height: Option<f64>,
    pub width: Option<f64>,
    pub diagonal: Option<f64>,
}

impl InputValues {
    /// Re-expresses the length values in another unit. Aspect ratio is unit-free.
    pub fn convert_unit(&self, from: LengthUnit, to: LengthUnit) -> InputValues {
        InputValues {
            aspect_ratio: self.aspect_ratio.clone(),
            height: self.height.map(|v| convert(v, from, to)),
            width: self.width.map(|v| convert(v, from, to)),
            diagonal: self.diagonal.map(|v| convert(v, from, to)),
        }
    }

    /// The value for `kind` as a positive finite number.
    /// Lengths are returned in the display unit they were entered in.
    pub fn required(&self, kind: ParameterKind) -> Result<f64> {
        let value = match kind {
            ParameterKind::AspectRatio => match self.aspect_ratio.as_deref() {
                Some(text) => Some(text.trim().parse::<f64>().map_err(|_| {
                    SizingError::InvalidInput(format!("aspectRatio '{text}' is not a number"))
                })?),
                None => None,
            },
            ParameterKind::Height => self.height,
            ParameterKind::Width => self.width,
            ParameterKind::Diagonal => self.diagonal,
        };

        match value {
            None => Err(SizingError::InvalidInput(format!(
                "locked parameter {kind} has no value"
            ))),
            Some(v) if !v.is_finite() || v <= 0.0 => Err(SizingError::InvalidInput(format!(
                "{kind} must be a positive number, got {v}"
            ))),
            Some(v) => Ok(v),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Locked pair
// ────────────────────────────────────────────────────────────────────────────

/// Exactly two distinct locked parameters. Order is irrelevant to every consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockedPair {
    first: ParameterKind,
    second: ParameterKind,
}

impl LockedPair {
    pub fn new(first: ParameterKind, second: ParameterKind) -> Result<Self> {
        if first == second {
            return Err(SizingError::InvalidInput(format!(
                "{first} is locked twice; lock two different parameters"
            )));
        }
        Ok(Self { first, second })
    }

    pub fn contains(&self, kind: ParameterKind) -> bool {
        self.first == kind || self.second == kind
    }

    /// True if this pair is exactly {a, b}, in either order.
    pub fn is(&self, a: ParameterKind, b: ParameterKind) -> bool {
        (self.first == a && self.second == b) || (self.first == b && self.second == a)
    }

    pub fn kinds(&self) -> [ParameterKind; 2] {
        [self.first, self.second]
    }
}

impl TryFrom<&[ParameterKind]> for LockedPair {
    type Error = SizingError;

    fn try_from(kinds: &[ParameterKind]) -> Result<Self> {
        match kinds {
            [first, second] => LockedPair::new(*first, *second),
            _ => Err(SizingError::InvalidInput(format!(
                "exactly 2 parameters must be locked, got {}",
                kinds.len()
            ))),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Search input
// ────────────────────────────────────────────────────────────────────────────

/// Everything one search needs. Built fresh per request; the core keeps no state.
#[derive(Debug, Clone)]
pub struct CalculationInput {
    pub locked: LockedPair,
    pub values: InputValues,
    pub unit: LengthUnit,
    pub cabinet_type: String,
}

/// The locked targets, resolved once into millimetres (aspect ratio is dimensionless).
/// Unlocked kinds are `None` even if the user typed a value for them.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Targets {
    pub height_mm: Option<f64>,
    pub width_mm: Option<f64>,
    pub diagonal_mm: Option<f64>,
    pub aspect_ratio: Option<f64>,
}

impl Targets {
    pub fn resolve(locked: &LockedPair, values: &InputValues, unit: LengthUnit) -> Result<Self> {
        let mut targets = Targets::default();
        for kind in locked.kinds() {
            let value = values.required(kind)?;
            match kind {
                ParameterKind::Height => targets.height_mm = Some(to_millimeters(value, unit)),
                ParameterKind::Width => targets.width_mm = Some(to_millimeters(value, unit)),
                ParameterKind::Diagonal => {
                    targets.diagonal_mm = Some(to_millimeters(value, unit))
                }
                ParameterKind::AspectRatio => targets.aspect_ratio = Some(value),
            }
        }
        Ok(targets)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Aspect-ratio presets
// ────────────────────────────────────────────────────────────────────────────

/// A standard ratio offered in the aspect-ratio picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AspectRatioPreset {
    /// Text value submitted as `InputValues::aspect_ratio`.
    pub value: &'static str,
    pub label: &'static str,
}

pub const ASPECT_RATIO_PRESETS: &[AspectRatioPreset] = &[
    AspectRatioPreset { value: "5.33", label: "48:9 (5.33)" },
    AspectRatioPreset { value: "3.56", label: "32:9 (3.56)" },
    AspectRatioPreset { value: "2.67", label: "24:9 (2.67)" },
    AspectRatioPreset { value: "2.40", label: "2.40:1" },
    AspectRatioPreset { value: "2.35", label: "21:9 (2.35)" },
    AspectRatioPreset { value: "1.78", label: "16:9 (1.78)" },
    AspectRatioPreset { value: "1.60", label: "16:10 (1.60)" },
    AspectRatioPreset { value: "1.33", label: "4:3 (1.33)" },
    AspectRatioPreset { value: "1.00", label: "1:1 (1.00)" },
    AspectRatioPreset { value: "0.889", label: "16:18 (0.89)" },
    AspectRatioPreset { value: "0.5625", label: "9:16 (0.56)" },
];
