//! Video-wall sizing core.
//!
//! Given two of {width, height, diagonal, aspect ratio}, finds the grids of
//! identical cabinets that come closest, and derives the ideal values the two
//! inputs imply. All comparisons run in millimetres; units are converted only
//! when values come in and when results go out.

pub mod adjust;
pub mod cabinet;
pub mod config;
pub mod enumerator;
pub mod errors;
pub mod implied;
pub mod params;
pub mod search;
pub mod selector;
pub mod units;

pub use adjust::{adjust_configuration, GridSize, GridStep};
pub use cabinet::{all_cabinets, lookup, CabinetType, DEFAULT_CABINET_ID};
pub use config::SearchConfig;
pub use enumerator::{enumerate, ConfigurationResult};
pub use errors::SizingError;
pub use implied::{implied_values, ImpliedValues};
pub use params::{CalculationInput, InputValues, LockedPair, ParameterKind};
pub use search::calculate_configurations;
pub use selector::select;
pub use units::LengthUnit;
