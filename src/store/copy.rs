use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use super::ChannelStore;

impl ChannelStore {
    /// Reference-sharing copy.
    ///
    /// Scalar configuration is copied. Channel records and file metadata
    /// are shared: a field set through either store is visible in both.
    /// Each store gets its own key set and master-channel index, so adding
    /// or removing whole channels on one store leaves the other untouched.
    /// Use [`deep_copy`](Self::deep_copy) for a store that shares nothing.
    pub fn copy(&self) -> ChannelStore {
        ChannelStore {
            config: self.config.clone(),
            schema: self.schema,
            channels: self.channels.clone(),
            index: self.index.clone(),
            file_metadata: Arc::clone(&self.file_metadata),
        }
    }

    /// Fully independent copy of records, index and metadata
    pub fn deep_copy(&self) -> ChannelStore {
        let channels: HashMap<_, _> = self
            .channels
            .iter()
            .map(|(name, channel)| (name.clone(), channel.deep_clone()))
            .collect();
        let metadata = self
            .file_metadata
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        ChannelStore {
            config: self.config.clone(),
            schema: self.schema,
            channels,
            index: self.index.clone(),
            file_metadata: Arc::new(RwLock::new(metadata)),
        }
    }

    /// Returns true if both stores share the same file metadata
    pub fn shares_metadata_with(&self, other: &ChannelStore) -> bool {
        Arc::ptr_eq(&self.file_metadata, &other.file_metadata)
    }
}
