//! Grid fine-tuning after a result has been chosen.
//!
//! The user steps rows or columns up and down from a selected configuration.
//! With the aspect lock on, the other axis follows the base grid's
//! columns/rows ratio. Counts never drop below 1.

use serde::{Deserialize, Serialize};

use crate::enumerator::ConfigurationResult;
use crate::errors::{Result, SizingError};
use crate::units::LengthUnit;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSize {
    pub columns: u32,
    pub rows: u32,
}

impl From<&ConfigurationResult> for GridSize {
    fn from(config: &ConfigurationResult) -> Self {
        GridSize {
            columns: config.columns,
            rows: config.rows,
        }
    }
}

/// One user interaction: step rows, then columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridStep {
    pub rows_delta: i32,
    pub columns_delta: i32,
    pub lock_aspect_ratio: bool,
}

fn stepped(value: u32, delta: i32) -> u32 {
    (i64::from(value) + i64::from(delta)).clamp(1, i64::from(u32::MAX)) as u32
}

fn rounded_count(value: f64) -> u32 {
    value.round().clamp(1.0, f64::from(u32::MAX)) as u32
}

fn base_ratio(base: &ConfigurationResult) -> f64 {
    f64::from(base.columns) / f64::from(base.rows)
}

pub fn step_rows(
    base: &ConfigurationResult,
    current: GridSize,
    delta: i32,
    lock_aspect_ratio: bool,
) -> GridSize {
    let rows = stepped(current.rows, delta);
    let columns = if lock_aspect_ratio {
        rounded_count(f64::from(rows) * base_ratio(base))
    } else {
        current.columns
    };
    GridSize { columns, rows }
}

pub fn step_columns(
    base: &ConfigurationResult,
    current: GridSize,
    delta: i32,
    lock_aspect_ratio: bool,
) -> GridSize {
    let columns = stepped(current.columns, delta);
    let rows = if lock_aspect_ratio {
        rounded_count(f64::from(columns) / base_ratio(base))
    } else {
        current.rows
    };
    GridSize { columns, rows }
}

impl ConfigurationResult {
    /// The same cabinet laid out as a different grid, expressed in `unit`.
    pub fn with_grid(&self, grid: GridSize, unit: LengthUnit) -> Result<ConfigurationResult> {
        if self.columns == 0 || self.rows == 0 || grid.columns == 0 || grid.rows == 0 {
            return Err(SizingError::InvalidInput(
                "grid must have at least one column and one row".to_string(),
            ));
        }
        let cabinet_width_mm = self.width_mm / f64::from(self.columns);
        let cabinet_height_mm = self.height_mm / f64::from(self.rows);
        if !(cabinet_width_mm > 0.0 && cabinet_height_mm > 0.0)
            || !cabinet_width_mm.is_finite()
            || !cabinet_height_mm.is_finite()
        {
            return Err(SizingError::InvalidInput(
                "configuration has no usable physical size".to_string(),
            ));
        }

        Ok(ConfigurationResult::from_grid(
            grid.columns,
            grid.rows,
            cabinet_width_mm,
            cabinet_height_mm,
            &self.cabinet_type,
            unit,
        ))
    }
}

/// Applies one step to `current` and recomputes the wall's dimensions.
pub fn adjust_configuration(
    base: &ConfigurationResult,
    current: GridSize,
    step: &GridStep,
    unit: LengthUnit,
) -> Result<ConfigurationResult> {
    if base.columns == 0 || base.rows == 0 {
        return Err(SizingError::InvalidInput(
            "base configuration must have at least one column and one row".to_string(),
        ));
    }

    let mut grid = current;
    if step.rows_delta != 0 {
        grid = step_rows(base, grid, step.rows_delta, step.lock_aspect_ratio);
    }
    if step.columns_delta != 0 {
        grid = step_columns(base, grid, step.columns_delta, step.lock_aspect_ratio);
    }

    base.with_grid(grid, unit)
}
