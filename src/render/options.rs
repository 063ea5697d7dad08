use serde::{Deserialize, Serialize};

/// Display limits for rendering a store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Arrays longer than this are elided in record mode
    pub threshold: usize,

    /// Values shown at each end of an elided array
    pub edge_items: usize,

    /// Digits after the decimal point for floats
    pub precision: usize,

    /// Print tiny floats in fixed notation instead of scientific
    pub suppress_small: bool,

    /// Rows shown per table in tabular mode
    pub max_rows: usize,

    /// Characters shown per cell in tabular mode
    pub max_colwidth: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            threshold: 100,
            edge_items: 1,
            precision: 3,
            suppress_small: true,
            max_rows: 3,
            max_colwidth: 6,
        }
    }
}

/// Largest limit that still fits a TOML integer
const UNLIMITED: usize = i64::MAX as usize;

impl RenderOptions {
    /// Show every value and every row
    pub fn unlimited() -> Self {
        Self {
            threshold: UNLIMITED,
            max_rows: UNLIMITED,
            max_colwidth: UNLIMITED,
            ..Default::default()
        }
    }
}
