//! Tunables for ranking and reporting strategy comparisons.
//!
//! The distance unit is not configured here: it is chosen when the
//! graph is built and read back with [`Graph::unit`](crate::Graph::unit).

use serde::Deserialize;

/// Default tolerance under which two path costs are considered equal.
pub const DEFAULT_TIE_EPSILON: f64 = 1e-6;

/// Default number of decimals costs are reported with.
pub const DEFAULT_DISPLAY_PRECISION: u32 = 2;

/// Router settings. Every field falls back to its default when absent
/// from the deserialized input.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RouterConfig {
    /// Costs closer than this compare as a tie.
    pub tie_epsilon: f64,

    /// Decimals shown when printing distances. Strategy comparisons
    /// also rank costs at this precision, so costs that print the same
    /// compare as a tie.
    pub display_precision: u32,
}

impl Default for RouterConfig {
    fn default() -> Self {
        RouterConfig {
            tie_epsilon: DEFAULT_TIE_EPSILON,
            display_precision: DEFAULT_DISPLAY_PRECISION,
        }
    }
}
