//! Axum route handlers for the Sizing API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;
use wall_sizing::params::{AspectRatioPreset, ASPECT_RATIO_PRESETS};
use wall_sizing::{
    adjust_configuration, all_cabinets, calculate_configurations, implied_values, CabinetType,
    CalculationInput, ConfigurationResult, GridSize, GridStep, ImpliedValues, InputValues,
    LengthUnit, LockedPair, ParameterKind,
};

use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct CabinetsResponse {
    pub cabinets: Vec<CabinetType>,
    pub default_cabinet: String,
}

#[derive(Debug, Serialize)]
pub struct UnitInfo {
    pub id: LengthUnit,
    pub display_name: &'static str,
    pub mm_factor: f64,
}

#[derive(Debug, Serialize)]
pub struct UnitsResponse {
    pub units: Vec<UnitInfo>,
}

#[derive(Debug, Serialize)]
pub struct AspectRatiosResponse {
    pub presets: Vec<AspectRatioPreset>,
}

/// Locked params arrive as a plain list so a wrong count is reported as a
/// validation error rather than a JSON rejection.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub locked_params: Vec<ParameterKind>,
    #[serde(default)]
    pub values: InputValues,
    pub unit: LengthUnit,
    pub cabinet_type: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub configurations: Vec<ConfigurationResult>,
    pub unit: LengthUnit,
    pub cabinet_type: String,
}

#[derive(Debug, Deserialize)]
pub struct ImpliedRequest {
    pub locked_params: Vec<ParameterKind>,
    #[serde(default)]
    pub values: InputValues,
    pub unit: LengthUnit,
}

#[derive(Debug, Deserialize)]
pub struct AdjustRequest {
    pub base: ConfigurationResult,
    /// Grid currently shown; defaults to the base grid.
    pub current: Option<GridSize>,
    #[serde(default)]
    pub step: GridStep,
    pub unit: LengthUnit,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/cabinets
pub async fn handle_list_cabinets(State(state): State<AppState>) -> Json<CabinetsResponse> {
    Json(CabinetsResponse {
        cabinets: all_cabinets().to_vec(),
        default_cabinet: state.config.default_cabinet.clone(),
    })
}

/// GET /api/v1/units
pub async fn handle_list_units() -> Json<UnitsResponse> {
    let units = LengthUnit::ALL
        .iter()
        .map(|&unit| UnitInfo {
            id: unit,
            display_name: unit.display_name(),
            mm_factor: unit.mm_factor(),
        })
        .collect();
    Json(UnitsResponse { units })
}

/// GET /api/v1/aspect-ratios
pub async fn handle_list_aspect_ratios() -> Json<AspectRatiosResponse> {
    Json(AspectRatiosResponse {
        presets: ASPECT_RATIO_PRESETS.to_vec(),
    })
}

/// POST /api/v1/configurations
///
/// Runs the grid search for two locked parameters and returns up to 4 layouts:
/// nearest-below matches first, then nearest-above.
pub async fn handle_search_configurations(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, AppError> {
    let locked = LockedPair::try_from(request.locked_params.as_slice())?;
    let cabinet_type = request
        .cabinet_type
        .unwrap_or_else(|| state.config.default_cabinet.clone());

    info!(
        "Searching configurations: locked={:?} unit={:?} cabinet={}",
        locked.kinds(),
        request.unit,
        cabinet_type
    );

    let input = CalculationInput {
        locked,
        values: request.values,
        unit: request.unit,
        cabinet_type: cabinet_type.clone(),
    };
    let search = state.config.search;

    // CPU-bound pass, run on the blocking pool.
    let configurations =
        tokio::task::spawn_blocking(move || calculate_configurations(&input, &search))
            .await
            .map_err(|e| {
                AppError::Internal(anyhow::anyhow!(
                    "spawn_blocking failed in configuration search: {e}"
                ))
            })??;

    Ok(Json(SearchResponse {
        configurations,
        unit: request.unit,
        cabinet_type,
    }))
}

/// POST /api/v1/implied
///
/// Closed-form values implied by the two locked inputs (no grid search).
pub async fn handle_implied_values(
    Json(request): Json<ImpliedRequest>,
) -> Result<Json<ImpliedValues>, AppError> {
    let locked = LockedPair::try_from(request.locked_params.as_slice())?;
    let implied = implied_values(&locked, &request.values, request.unit)?;
    Ok(Json(implied))
}

/// POST /api/v1/configurations/adjust
///
/// Steps rows/columns of a chosen layout and returns the recomputed wall.
pub async fn handle_adjust_configuration(
    Json(request): Json<AdjustRequest>,
) -> Result<Json<ConfigurationResult>, AppError> {
    let current = request
        .current
        .unwrap_or_else(|| GridSize::from(&request.base));
    let adjusted = adjust_configuration(&request.base, current, &request.step, request.unit)?;
    Ok(Json(adjusted))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn search_request(locked_params: Vec<ParameterKind>, cabinet_type: Option<&str>) -> SearchRequest {
        SearchRequest {
            locked_params,
            values: InputValues {
                width: Some(3200.0),
                height: Some(1800.0),
                ..Default::default()
            },
            unit: LengthUnit::Mm,
            cabinet_type: cabinet_type.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_search_uses_default_cabinet() {
        let request = search_request(vec![ParameterKind::Width, ParameterKind::Height], None);
        let Json(response) = handle_search_configurations(State(AppState::default()), Json(request))
            .await
            .unwrap();

        assert_eq!(response.cabinet_type, "16:9");
        assert_eq!(response.configurations.len(), 4);
        assert_eq!(
            (response.configurations[0].columns, response.configurations[0].rows),
            (5, 5)
        );
    }

    #[tokio::test]
    async fn test_search_rejects_three_locked_params() {
        let request = search_request(
            vec![
                ParameterKind::Width,
                ParameterKind::Height,
                ParameterKind::Diagonal,
            ],
            None,
        );
        let result = handle_search_configurations(State(AppState::default()), Json(request)).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_search_unknown_cabinet_is_not_found() {
        let request = search_request(
            vec![ParameterKind::Width, ParameterKind::Height],
            Some("4:3"),
        );
        let result = handle_search_configurations(State(AppState::default()), Json(request)).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_implied_values_handler() {
        let request = ImpliedRequest {
            locked_params: vec![ParameterKind::Width, ParameterKind::Height],
            values: InputValues {
                width: Some(160.0),
                height: Some(90.0),
                ..Default::default()
            },
            unit: LengthUnit::Inches,
        };
        let Json(implied) = handle_implied_values(Json(request)).await.unwrap();
        assert_eq!(implied.aspect_ratio.as_deref(), Some("1.78"));
    }

    #[tokio::test]
    async fn test_implied_impossible_diagonal_is_validation_error() {
        let request = ImpliedRequest {
            locked_params: vec![ParameterKind::Width, ParameterKind::Diagonal],
            values: InputValues {
                width: Some(100.0),
                diagonal: Some(50.0),
                ..Default::default()
            },
            unit: LengthUnit::Mm,
        };
        let result = handle_implied_values(Json(request)).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_adjust_defaults_to_base_grid() {
        let request = search_request(vec![ParameterKind::Width, ParameterKind::Height], None);
        let Json(search) = handle_search_configurations(State(AppState::default()), Json(request))
            .await
            .unwrap();
        let base = search.configurations[0].clone();

        let adjust = AdjustRequest {
            base,
            current: None,
            step: GridStep {
                rows_delta: 0,
                columns_delta: 1,
                lock_aspect_ratio: false,
            },
            unit: LengthUnit::Mm,
        };
        let Json(adjusted) = handle_adjust_configuration(Json(adjust)).await.unwrap();
        assert_eq!((adjusted.columns, adjusted.rows), (6, 5));
        assert_eq!(adjusted.width_mm, 3600.0);
    }

    #[tokio::test]
    async fn test_reference_lists() {
        let Json(units) = handle_list_units().await;
        assert_eq!(units.units.len(), 4);
        assert!(units.units.iter().any(|u| u.display_name == "Inches"));

        let Json(presets) = handle_list_aspect_ratios().await;
        assert!(presets.presets.iter().any(|p| p.value == "1.78"));

        let Json(cabinets) = handle_list_cabinets(State(AppState::default())).await;
        assert!(cabinets.cabinets.iter().any(|c| c.id == "1:1"));
        assert_eq!(cabinets.default_cabinet, "16:9");
    }
}
