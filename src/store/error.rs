use crate::conversion::ConversionSchema;

/// Errors that can occur during channel store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Field setter or removal called for a channel that is not stored
    #[error("Channel not in store: {0}")]
    NotFound(String),

    /// Argument rejected before touching the store
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Records and master-channel index disagree
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    /// Conversion laid out in a schema other than the store's
    #[error("Conversion schema mismatch: store uses {expected}, conversion is {found}")]
    SchemaMismatch {
        /// Schema selected by the store's version
        expected: ConversionSchema,
        /// Schema of the rejected conversion
        found: ConversionSchema,
    },

    /// Channel does not fit its group's master grid in the tabular view
    #[error("Channel '{channel}' in group '{master}' has {found} samples, master grid has {expected}")]
    ColumnLength {
        /// Master group name
        master: String,
        /// Offending channel
        channel: String,
        /// Length of the master grid
        expected: usize,
        /// Length of the channel
        found: usize,
    },

    /// Arrow error while building the tabular view
    #[error("Arrow error: {0}")]
    ArrowError(#[from] arrow::error::ArrowError),
}
