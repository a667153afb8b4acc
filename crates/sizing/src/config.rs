use serde::{Deserialize, Serialize};

use crate::enumerator::MAX_DIMENSION;
use crate::errors::{Result, SizingError};

/// Hard ceiling on the grid bound. Work is O(max_dimension²).
pub const MAX_DIMENSION_CAP: u32 = 200;

/// Tunables for the configuration search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSearchConfig")]
pub struct SearchConfig {
    max_dimension: u32,
}

#[derive(Deserialize)]
struct RawSearchConfig {
    max_dimension: u32,
}

impl TryFrom<RawSearchConfig> for SearchConfig {
    type Error = SizingError;

    fn try_from(raw: RawSearchConfig) -> Result<Self> {
        SearchConfig::new(raw.max_dimension)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_dimension: MAX_DIMENSION,
        }
    }
}

impl SearchConfig {
    pub fn new(max_dimension: u32) -> Result<Self> {
        if !(1..=MAX_DIMENSION_CAP).contains(&max_dimension) {
            return Err(SizingError::InvalidInput(format!(
                "max_dimension must be between 1 and {MAX_DIMENSION_CAP}, got {max_dimension}"
            )));
        }
        Ok(Self { max_dimension })
    }

    pub fn max_dimension(&self) -> u32 {
        self.max_dimension
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_reference_bound() {
        assert_eq!(SearchConfig::default().max_dimension(), 50);
    }

    #[test]
    fn test_bounds_enforced() {
        assert!(SearchConfig::new(0).is_err());
        assert!(SearchConfig::new(MAX_DIMENSION_CAP + 1).is_err());
        assert_eq!(SearchConfig::new(1).unwrap().max_dimension(), 1);
        assert_eq!(
            SearchConfig::new(MAX_DIMENSION_CAP).unwrap().max_dimension(),
            MAX_DIMENSION_CAP
        );
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: SearchConfig = serde_json::from_str(r#"{"max_dimension": 20}"#).unwrap();
        assert_eq!(ok.max_dimension(), 20);
        assert!(serde_json::from_str::<SearchConfig>(r#"{"max_dimension": 0}"#).is_err());
    }
}
