use serde::{Deserialize, Serialize};

/// Version assumed when nothing else is known
pub const DEFAULT_VERSION: u16 = 300;

/// Scalar configuration of a channel store
///
/// Most flags are carried for the reader that fills the store and for
/// downstream consumers; the store itself only acts on `version` (schema
/// selection) and `tabular` (rendering).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Source file name
    pub file_name: Option<String>,

    /// Source-format version number, e.g. 310 or 410
    pub version: u16,

    /// Render and iterate channels as per-master tables
    pub tabular: bool,

    /// Ask the reader to convert one master group per worker
    pub multi_proc: bool,

    /// Ask the reader to strip module prefixes from dot-separated channel names
    pub filter_channel_names: bool,

    /// Channel data holds physical values (conversion applied after read)
    pub convert_after_read: bool,

    /// Ask the reader to also apply text/value table conversions
    pub convert_tables: bool,

    /// Channels the reader was asked to load, `None` for all
    pub channel_list: Option<Vec<String>>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            file_name: None,
            version: DEFAULT_VERSION,
            tabular: false,
            multi_proc: false,
            filter_channel_names: false,
            convert_after_read: true,
            convert_tables: false,
            channel_list: None,
        }
    }
}

impl StoreConfig {
    /// Configuration for a file of the given version
    pub fn for_version(version: u16) -> Self {
        Self {
            version,
            ..Default::default()
        }
    }

    /// Set the source file name
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    /// Select tabular rendering
    pub fn with_tabular(mut self, tabular: bool) -> Self {
        self.tabular = tabular;
        self
    }
}
