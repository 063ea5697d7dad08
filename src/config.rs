//! TOML configuration file support.
//!
//! Store flags and display limits can be kept in a file instead of being
//! set in code:
//!
//! ```toml
//! # mdfstore.toml
//! [store]
//! version = 410
//! tabular = true
//! multi_proc = true
//! channel_list = ["time", "rpm"]
//!
//! [render]
//! threshold = 50
//! max_rows = 10
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::render::RenderOptions;
use crate::store::{ChannelStore, StoreConfig};

/// Root configuration structure for mdfstore.toml files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Store construction flags.
    #[serde(default)]
    pub store: StoreConfig,

    /// Display limits.
    #[serde(default)]
    pub render: RenderOptions,
}

impl StoreSettings {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }

    /// Serialize configuration to a TOML string.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).context("Failed to serialize TOML configuration")
    }

    /// Create an empty store with these settings.
    pub fn build_store(&self) -> ChannelStore {
        ChannelStore::new(self.store.clone())
    }
}
