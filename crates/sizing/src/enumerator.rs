//! Brute-force enumeration of every columns × rows grid up to a bound.

use serde::{Deserialize, Serialize};

use crate::cabinet::CabinetType;
use crate::units::{from_millimeters, LengthUnit};

/// Reference bound: columns and rows each range over 1..=50.
pub const MAX_DIMENSION: u32 = 50;

/// One candidate wall. Display fields are in the unit the search ran in;
/// `width_mm` / `height_mm` keep the exact millimetre values used for scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationResult {
    pub columns: u32,
    pub rows: u32,
    pub total_cabinets: u32,
    pub width: f64,
    pub height: f64,
    pub diagonal: f64,
    pub aspect_ratio: f64,
    pub cabinet_type: String,
    pub width_mm: f64,
    pub height_mm: f64,
}

impl ConfigurationResult {
    pub(crate) fn from_grid(
        columns: u32,
        rows: u32,
        cabinet_width_mm: f64,
        cabinet_height_mm: f64,
        cabinet_type: &str,
        unit: LengthUnit,
    ) -> Self {
        let width_mm = f64::from(columns) * cabinet_width_mm;
        let height_mm = f64::from(rows) * cabinet_height_mm;
        let diagonal_mm = (width_mm * width_mm + height_mm * height_mm).sqrt();

        ConfigurationResult {
            columns,
            rows,
            total_cabinets: columns.saturating_mul(rows),
            width: from_millimeters(width_mm, unit),
            height: from_millimeters(height_mm, unit),
            diagonal: from_millimeters(diagonal_mm, unit),
            aspect_ratio: width_mm / height_mm,
            cabinet_type: cabinet_type.to_string(),
            width_mm,
            height_mm,
        }
    }

    pub fn diagonal_mm(&self) -> f64 {
        (self.width_mm * self.width_mm + self.height_mm * self.height_mm).sqrt()
    }

    pub fn area_mm2(&self) -> f64 {
        self.width_mm * self.height_mm
    }
}

/// All grids up to the reference bound.
pub fn enumerate(cabinet: &CabinetType, unit: LengthUnit) -> Vec<ConfigurationResult> {
    enumerate_bounded(cabinet, unit, MAX_DIMENSION)
}

/// All grids with `1..=max_dimension` columns and rows.
/// Order is columns-outer, rows-inner, ascending; the selector's stable sort relies on it.
pub fn enumerate_bounded(
    cabinet: &CabinetType,
    unit: LengthUnit,
    max_dimension: u32,
) -> Vec<ConfigurationResult> {
    let side = max_dimension as usize;
    let mut configurations = Vec::with_capacity(side * side);

    for columns in 1..=max_dimension {
        for rows in 1..=max_dimension {
            configurations.push(ConfigurationResult::from_grid(
                columns,
                rows,
                cabinet.width_mm,
                cabinet.height_mm,
                cabinet.id,
                unit,
            ));
        }
    }

    configurations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cabinet::{all_cabinets, lookup};

    #[test]
    fn test_reference_bound_yields_2500() {
        let cabinet = lookup("16:9").unwrap();
        let configs = enumerate(cabinet, LengthUnit::Mm);
        assert_eq!(configs.len(), 2500);
    }

    #[test]
    fn test_every_candidate_is_consistent() {
        for cabinet in all_cabinets() {
            for unit in LengthUnit::ALL {
                let configs = enumerate_bounded(cabinet, unit, 12);
                assert_eq!(configs.len(), 144);
                for c in &configs {
                    assert!((1..=12).contains(&c.columns));
                    assert!((1..=12).contains(&c.rows));
                    assert_eq!(c.total_cabinets, c.columns * c.rows);
                    assert_eq!(c.aspect_ratio, c.width_mm / c.height_mm);
                    assert_eq!(c.cabinet_type, cabinet.id);
                }
            }
        }
    }

    #[test]
    fn test_order_is_columns_outer_rows_inner() {
        let cabinet = lookup("1:1").unwrap();
        let configs = enumerate_bounded(cabinet, LengthUnit::Mm, 3);
        let grid: Vec<(u32, u32)> = configs.iter().map(|c| (c.columns, c.rows)).collect();
        assert_eq!(
            grid,
            vec![
                (1, 1),
                (1, 2),
                (1, 3),
                (2, 1),
                (2, 2),
                (2, 3),
                (3, 1),
                (3, 2),
                (3, 3)
            ]
        );
    }

    #[test]
    fn test_display_unit_conversion_keeps_mm() {
        let cabinet = lookup("16:9").unwrap();
        let configs = enumerate_bounded(cabinet, LengthUnit::Meters, 5);
        let c = configs
            .iter()
            .find(|c| c.columns == 5 && c.rows == 4)
            .unwrap();
        assert_eq!(c.width_mm, 3000.0);
        assert_eq!(c.height_mm, 1350.0);
        assert!((c.width - 3.0).abs() < 1e-12);
        assert!((c.height - 1.35).abs() < 1e-12);
        assert!((c.diagonal - c.diagonal_mm() / 1000.0).abs() < 1e-12);
    }
}
