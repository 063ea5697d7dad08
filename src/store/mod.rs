//! # Channel Store Module
//!
//! [`ChannelStore`] is the container a format reader fills and downstream
//! code queries: it owns every channel record, the master-channel index,
//! the file metadata and the reader flags.
//!
//! ## Contracts
//!
//! - **Mutation**: [`add_channel`](ChannelStore::add_channel),
//!   [`remove_channel`](ChannelStore::remove_channel) and the field setters.
//!   Setters fail with [`StoreError::NotFound`] for unknown channels.
//! - **Query**: [`get_channel`](ChannelStore::get_channel) and the field
//!   getters never fail; an unknown channel is reported as `None` (or
//!   [`FieldLookup::UnknownChannel`]), distinct from an empty field.
//!
//! Every mutation updates the records and the index together; no accessor
//! can observe them disagreeing.
//!
//! ## Example
//!
//! ```rust
//! use mdfstore::store::{ChannelStore, NewChannel, StoreConfig};
//!
//! let mut store = ChannelStore::new(StoreConfig::for_version(410));
//! store.add_channel(0, "t", NewChannel::new(vec![0.0, 0.1, 0.2], "t"))?;
//! store.add_channel(0, "speed", NewChannel::new(vec![10.0, 12.0, 13.0], "t").unit("km/h"))?;
//! store.add_channel(1, "speed", NewChannel::new(vec![1.0, 2.0, 3.0], "t"))?;
//!
//! assert!(store.contains("speed_1"));
//! assert_eq!(store.get_channel_unit("speed").as_deref(), Some("km/h"));
//! # Ok::<(), mdfstore::store::StoreError>(())
//! ```

mod config;
mod copy;
mod error;
mod mutation;
mod partition;
mod query;


pub use config::{StoreConfig, DEFAULT_VERSION};
pub use error::StoreError;
pub use mutation::{NewChannel, OptionalField};
pub use partition::MasterPartition;
pub use query::{ChannelField, FieldLookup, FieldValue};

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, PoisonError, RwLock};

use log::debug;

use crate::channel::SharedChannel;
use crate::conversion::ConversionSchema;
use crate::index::MasterChannelIndex;
use crate::metadata::FileMetadata;

/// In-memory store of channels grouped by master channel
#[derive(Debug)]
pub struct ChannelStore {
    config: StoreConfig,
    schema: ConversionSchema,
    channels: HashMap<String, SharedChannel>,
    index: MasterChannelIndex,
    file_metadata: Arc<RwLock<FileMetadata>>,
}

impl Default for ChannelStore {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

impl ChannelStore {
    /// Create an empty store
    pub fn new(config: StoreConfig) -> Self {
        let schema = ConversionSchema::for_version(config.version);
        Self {
            config,
            schema,
            channels: HashMap::new(),
            index: MasterChannelIndex::new(),
            file_metadata: Arc::new(RwLock::new(FileMetadata::default())),
        }
    }

    /// Current configuration
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Source-format version
    pub fn version(&self) -> u16 {
        self.config.version
    }

    /// Change the source-format version and re-select the conversion schema.
    ///
    /// Conversions already attached keep the layout they were built with.
    pub fn set_version(&mut self, version: u16) {
        let schema = ConversionSchema::for_version(version);
        if schema != self.schema {
            debug!(
                "Version {} -> {}: conversion schema {} -> {}",
                self.config.version, version, self.schema, schema
            );
        }
        self.config.version = version;
        self.schema = schema;
    }

    /// Conversion schema selected by the version
    pub fn schema(&self) -> ConversionSchema {
        self.schema
    }

    /// Source file name
    pub fn file_name(&self) -> Option<&str> {
        self.config.file_name.as_deref()
    }

    /// Set the source file name
    pub fn set_file_name(&mut self, file_name: Option<String>) {
        self.config.file_name = file_name;
    }

    /// Whether rendering uses per-master tables
    pub fn is_tabular(&self) -> bool {
        self.config.tabular
    }

    /// Switch between record-oriented and tabular rendering
    pub fn set_tabular(&mut self, tabular: bool) {
        self.config.tabular = tabular;
    }

    /// Whether the reader should convert master groups on separate workers
    pub fn multi_proc(&self) -> bool {
        self.config.multi_proc
    }

    /// Set the multi-processing intent flag
    pub fn set_multi_proc(&mut self, multi_proc: bool) {
        self.config.multi_proc = multi_proc;
    }

    /// Whether the reader should strip module prefixes from channel names
    pub fn filter_channel_names(&self) -> bool {
        self.config.filter_channel_names
    }

    /// Set the name-filtering flag
    pub fn set_filter_channel_names(&mut self, filter: bool) {
        self.config.filter_channel_names = filter;
    }

    /// Whether channel data holds physical values
    pub fn convert_after_read(&self) -> bool {
        self.config.convert_after_read
    }

    /// Set the converted-state flag
    pub fn set_convert_after_read(&mut self, converted: bool) {
        self.config.convert_after_read = converted;
    }

    /// Whether the reader should also apply table conversions
    pub fn convert_tables(&self) -> bool {
        self.config.convert_tables
    }

    /// Set the table-conversion flag
    pub fn set_convert_tables(&mut self, convert: bool) {
        self.config.convert_tables = convert;
    }

    /// Channels the reader was asked to load
    pub fn channel_list(&self) -> Option<&[String]> {
        self.config.channel_list.as_deref()
    }

    /// Set the channel selection passed to the reader
    pub fn set_channel_list(&mut self, channels: Option<Vec<String>>) {
        self.config.channel_list = channels;
    }

    /// Returns true if the reader should load `name`
    pub fn wants_channel(&self, name: &str) -> bool {
        self.config
            .channel_list
            .as_ref()
            .map_or(true, |list| list.iter().any(|wanted| wanted == name))
    }

    /// Replace the file metadata wholesale.
    ///
    /// Fields left at their default become empty strings; nothing is merged
    /// with the previous value.
    pub fn add_metadata(&mut self, metadata: FileMetadata) {
        *self
            .file_metadata
            .write()
            .unwrap_or_else(PoisonError::into_inner) = metadata;
    }

    /// Snapshot of the file metadata
    pub fn file_metadata(&self) -> FileMetadata {
        self.file_metadata
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Master-channel index
    pub fn master_channel_index(&self) -> &MasterChannelIndex {
        &self.index
    }

    /// Number of channels
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    /// Returns true if no channel is stored
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Returns true if a channel is stored under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.channels.contains_key(name)
    }

    /// Channel names grouped by master in index order
    pub fn channel_names(&self) -> impl Iterator<Item = &str> {
        self.index.channel_names()
    }

    /// Verify that records and index agree.
    ///
    /// Checks that every index entry names a stored channel whose `master`
    /// field points back at that entry, that no name is listed twice, and
    /// that every stored channel is listed.
    pub fn check_consistency(&self) -> Result<(), StoreError> {
        let mut seen = HashSet::with_capacity(self.channels.len());
        for entry in self.index.entries() {
            for name in entry.channels() {
                if !seen.insert(name.as_str()) {
                    return Err(StoreError::InvariantViolation(format!(
                        "channel '{name}' listed more than once"
                    )));
                }
                let channel = self.channels.get(name).ok_or_else(|| {
                    StoreError::InvariantViolation(format!(
                        "index lists '{name}' under '{}' but no record exists",
                        entry.master()
                    ))
                })?;
                let record = channel.read();
                if &record.master != entry.master() {
                    return Err(StoreError::InvariantViolation(format!(
                        "'{name}' is listed under '{}' but its master is '{}'",
                        entry.master(),
                        record.master
                    )));
                }
            }
        }
        if seen.len() != self.channels.len() {
            return Err(StoreError::InvariantViolation(format!(
                "{} channels stored but {} indexed",
                self.channels.len(),
                seen.len()
            )));
        }
        Ok(())
    }
}
