//! Configuration search: the single entry point the presentation layer calls.
//!
//! lookup cabinet → resolve locked targets to mm → enumerate grids → select.
//! Pure function of its arguments; nothing is cached between calls.

use tracing::debug;

use crate::cabinet::lookup;
use crate::config::SearchConfig;
use crate::enumerator::{enumerate_bounded, ConfigurationResult};
use crate::errors::Result;
use crate::params::{CalculationInput, Targets};
use crate::selector::select;

pub fn calculate_configurations(
    input: &CalculationInput,
    config: &SearchConfig,
) -> Result<Vec<ConfigurationResult>> {
    let cabinet = lookup(&input.cabinet_type)?;
    let targets = Targets::resolve(&input.locked, &input.values, input.unit)?;

    let candidates = enumerate_bounded(cabinet, input.unit, config.max_dimension());
    debug!(
        cabinet = cabinet.id,
        locked = ?input.locked.kinds(),
        candidates = candidates.len(),
        "Scoring configurations"
    );

    let results = select(candidates, &targets);
    debug!(
        "Selected grids: {:?}",
        results
            .iter()
            .map(|c| (c.columns, c.rows))
            .collect::<Vec<_>>()
    );

    Ok(results)
}
