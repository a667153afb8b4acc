//! Scorer & Selector. Ranks enumerated grids against the locked targets and
//! picks a small, diverse result set.
//!
//! Algorithm:
//! 1. error = Σ |candidate − target| over the locked kinds, in millimetres.
//!    Aspect-ratio error is multiplied by 1000 so 0.001 of ratio weighs as much as 1mm.
//! 2. Stable sort ascending by error (ties keep enumeration order).
//! 3. Split by a primary dimension (height > width > diagonal > area) into
//!    at-or-below target and above target.
//! 4. Best 2 below, then best 2 above; backfill from the ranked list up to 4.
//!
//! Step 4 is a diversity rule: the two "below" picks need not be the two best
//! overall. It is kept as-is rather than collapsed into a plain top-4.

use crate::enumerator::ConfigurationResult;
use crate::params::Targets;

pub const RESULT_LIMIT: usize = 4;
const PER_GROUP: usize = 2;

/// Scales dimensionless aspect-ratio error onto the millimetre scale.
pub const ASPECT_RATIO_WEIGHT: f64 = 1000.0;

/// Split point when no length is locked (aspect ratio alone): 5 m².
pub const REFERENCE_AREA_MM2: f64 = 5_000_000.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ScoredConfiguration {
    pub config: ConfigurationResult,
    pub error: f64,
}

/// Accumulated error of one candidate. Lower is better.
pub fn score(config: &ConfigurationResult, targets: &Targets) -> f64 {
    let mut error = 0.0;

    if let Some(height_mm) = targets.height_mm {
        error += (config.height_mm - height_mm).abs();
    }
    if let Some(width_mm) = targets.width_mm {
        error += (config.width_mm - width_mm).abs();
    }
    if let Some(diagonal_mm) = targets.diagonal_mm {
        error += (config.diagonal_mm() - diagonal_mm).abs();
    }
    if let Some(aspect_ratio) = targets.aspect_ratio {
        error += (config.aspect_ratio - aspect_ratio).abs() * ASPECT_RATIO_WEIGHT;
    }

    error
}

/// Scores every candidate and sorts ascending by error. `sort_by` is stable.
pub fn rank(configurations: Vec<ConfigurationResult>, targets: &Targets) -> Vec<ScoredConfiguration> {
    let mut ranked: Vec<ScoredConfiguration> = configurations
        .into_iter()
        .map(|config| {
            let error = score(&config, targets);
            ScoredConfiguration { config, error }
        })
        .collect();

    ranked.sort_by(|a, b| a.error.total_cmp(&b.error));
    ranked
}

fn primary_dimension(config: &ConfigurationResult, targets: &Targets) -> f64 {
    if targets.height_mm.is_some() {
        config.height_mm
    } else if targets.width_mm.is_some() {
        config.width_mm
    } else if targets.diagonal_mm.is_some() {
        config.diagonal_mm()
    } else {
        config.area_mm2()
    }
}

fn target_value(targets: &Targets) -> f64 {
    targets
        .height_mm
        .or(targets.width_mm)
        .or(targets.diagonal_mm)
        .unwrap_or(REFERENCE_AREA_MM2)
}

/// Returns at most `RESULT_LIMIT` candidates: nearest-below matches first, then nearest-above.
pub fn select(configurations: Vec<ConfigurationResult>, targets: &Targets) -> Vec<ConfigurationResult> {
    let ranked = rank(configurations, targets);
    let target = target_value(targets);

    let is_lower: Vec<bool> = ranked
        .iter()
        .map(|s| primary_dimension(&s.config, targets) <= target)
        .collect();

    let mut picked: Vec<usize> = Vec::with_capacity(RESULT_LIMIT);
    picked.extend((0..ranked.len()).filter(|&i| is_lower[i]).take(PER_GROUP));
    picked.extend((0..ranked.len()).filter(|&i| !is_lower[i]).take(PER_GROUP));

    if picked.len() < RESULT_LIMIT {
        let needed = RESULT_LIMIT - picked.len();
        let backfill: Vec<usize> = (0..ranked.len())
            .filter(|i| !picked.contains(i))
            .take(needed)
            .collect();
        picked.extend(backfill);
    }

    let mut slots: Vec<Option<ScoredConfiguration>> = ranked.into_iter().map(Some).collect();
    picked
        .into_iter()
        .filter_map(|i| slots[i].take())
        .map(|scored| scored.config)
        .collect()
}
