//! Implied values: the ideal continuous dimensions two locked inputs imply.
//!
//! Closed-form, independent of any cabinet. One formula per locked pair;
//! {aspectRatio, diagonal} has none and yields an empty record.
//!
//! Lengths come back in the caller's unit. Aspect ratio comes back as
//! 2-decimal text, the same form the aspect-ratio input takes, so the value
//! can be shown in (or fed back into) that field unchanged.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::{Result, SizingError};
use crate::params::{InputValues, LockedPair, ParameterKind};
use crate::units::{format_number, from_millimeters, to_millimeters, LengthUnit};

/// The one or two values derived from the locked pair. Locked kinds stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImpliedValues {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagonal: Option<f64>,
}

impl ImpliedValues {
    pub fn is_empty(&self) -> bool {
        self.aspect_ratio.is_none()
            && self.height.is_none()
            && self.width.is_none()
            && self.diagonal.is_none()
    }
}

fn hypot_in(a_mm: f64, b_mm: f64, unit: LengthUnit) -> f64 {
    from_millimeters((a_mm * a_mm + b_mm * b_mm).sqrt(), unit)
}

/// The other leg of a right triangle. The diagonal must be strictly longer.
fn remaining_side_mm(diagonal_mm: f64, side_mm: f64, side: ParameterKind) -> Result<f64> {
    if diagonal_mm <= side_mm {
        warn!(diagonal_mm, side_mm, "diagonal does not exceed {side}");
        return Err(SizingError::InvalidInput(format!(
            "diagonal must exceed {side}"
        )));
    }
    Ok((diagonal_mm * diagonal_mm - side_mm * side_mm).sqrt())
}

pub fn implied_values(
    locked: &LockedPair,
    values: &InputValues,
    unit: LengthUnit,
) -> Result<ImpliedValues> {
    use ParameterKind::{AspectRatio, Diagonal, Height, Width};

    if locked.is(AspectRatio, Height) {
        let aspect_ratio = values.required(AspectRatio)?;
        let height = values.required(Height)?;
        let height_mm = to_millimeters(height, unit);
        let width_mm = height_mm * aspect_ratio;
        return Ok(ImpliedValues {
            width: Some(height * aspect_ratio),
            diagonal: Some(hypot_in(width_mm, height_mm, unit)),
            ..Default::default()
        });
    }

    if locked.is(AspectRatio, Width) {
        let aspect_ratio = values.required(AspectRatio)?;
        let width = values.required(Width)?;
        let width_mm = to_millimeters(width, unit);
        let height_mm = width_mm / aspect_ratio;
        return Ok(ImpliedValues {
            height: Some(width / aspect_ratio),
            diagonal: Some(hypot_in(width_mm, height_mm, unit)),
            ..Default::default()
        });
    }

    if locked.is(Width, Height) {
        let width = values.required(Width)?;
        let height = values.required(Height)?;
        return Ok(ImpliedValues {
            aspect_ratio: Some(format_number(width / height)),
            diagonal: Some(hypot_in(
                to_millimeters(width, unit),
                to_millimeters(height, unit),
                unit,
            )),
            ..Default::default()
        });
    }

    if locked.is(Width, Diagonal) {
        let width = values.required(Width)?;
        let diagonal = values.required(Diagonal)?;
        let height_mm = remaining_side_mm(
            to_millimeters(diagonal, unit),
            to_millimeters(width, unit),
            Width,
        )?;
        let height = from_millimeters(height_mm, unit);
        return Ok(ImpliedValues {
            height: Some(height),
            aspect_ratio: Some(format_number(width / height)),
            ..Default::default()
        });
    }

    if locked.is(Height, Diagonal) {
        let height = values.required(Height)?;
        let diagonal = values.required(Diagonal)?;
        let width_mm = remaining_side_mm(
            to_millimeters(diagonal, unit),
            to_millimeters(height, unit),
            Height,
        )?;
        let width = from_millimeters(width_mm, unit);
        return Ok(ImpliedValues {
            width: Some(width),
            aspect_ratio: Some(format_number(width / height)),
            ..Default::default()
        });
    }

    Ok(ImpliedValues::default())
}
