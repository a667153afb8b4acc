//! Static cabinet catalog.
//!
//! A cabinet is one fixed-size LED tile. Walls are grids of identical cabinets,
//! so every physical dimension of a wall is derived from one catalog entry.
//! Entries are static data and are never computed at runtime.

use serde::Serialize;

use crate::errors::{Result, SizingError};

// ────────────────────────────────────────────────────────────────────────────
// Data model
// ────────────────────────────────────────────────────────────────────────────

/// Physical geometry of one cabinet, in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CabinetType {
    pub id: &'static str,
    pub width_mm: f64,
    pub height_mm: f64,
    /// width / height.
    pub aspect_ratio: f64,
}

/// Cabinet used when the caller does not choose one.
pub const DEFAULT_CABINET_ID: &str = "16:9";

const CABINET_TYPES: &[CabinetType] = &[
    CabinetType {
        id: "16:9",
        width_mm: 600.0,
        height_mm: 337.5,
        aspect_ratio: 16.0 / 9.0,
    },
    CabinetType {
        id: "1:1",
        width_mm: 500.0,
        height_mm: 500.0,
        aspect_ratio: 1.0,
    },
];

// ────────────────────────────────────────────────────────────────────────────
// Lookup
// ────────────────────────────────────────────────────────────────────────────

pub fn lookup(cabinet_type_id: &str) -> Result<&'static CabinetType> {
    CABINET_TYPES
        .iter()
        .find(|c| c.id == cabinet_type_id)
        .ok_or_else(|| SizingError::NotFound(format!("cabinet type '{cabinet_type_id}'")))
}

pub fn all_cabinets() -> &'static [CabinetType] {
    CABINET_TYPES
}
