//! # Master-Channel Index
//!
//! Maps each master channel to the ordered list of channel names sharing
//! its sampling grid. The index is never built on its own: the store
//! updates it in the same call that adds or removes a record, so the union
//! of all lists always equals the store's key set.
//!
//! Masters are kept in first-seen order and channels in insertion order
//! within each master. A master whose last channel is removed keeps an
//! empty entry.

use std::collections::HashMap;

use crate::channel::MasterName;

#[cfg(test)]
mod tests;

/// One master group: the master and its channels in insertion order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MasterEntry {
    master: MasterName,
    channels: Vec<String>,
}

impl MasterEntry {
    /// Master of this group
    pub fn master(&self) -> &MasterName {
        &self.master
    }

    /// Channel names in insertion order
    pub fn channels(&self) -> &[String] {
        &self.channels
    }
}

/// Insertion-ordered mapping from master name to channel names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MasterChannelIndex {
    entries: Vec<MasterEntry>,
    positions: HashMap<MasterName, usize>,
}

impl MasterChannelIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `channel` to `master`'s list, creating the entry if absent
    pub(crate) fn insert(&mut self, master: &MasterName, channel: String) {
        let position = match self.positions.get(master) {
            Some(&position) => position,
            None => {
                let position = self.entries.len();
                self.entries.push(MasterEntry {
                    master: master.clone(),
                    channels: Vec::new(),
                });
                self.positions.insert(master.clone(), position);
                position
            }
        };
        self.entries[position].channels.push(channel);
    }

    /// Remove `channel` from `master`'s list.
    ///
    /// Returns `false` if the master has no entry or the entry does not
    /// list the channel; either means the index already disagreed with the
    /// records.
    pub(crate) fn remove(&mut self, master: &MasterName, channel: &str) -> bool {
        let Some(&position) = self.positions.get(master) else {
            return false;
        };
        let channels = &mut self.entries[position].channels;
        match channels.iter().position(|name| name == channel) {
            Some(at) => {
                channels.remove(at);
                true
            }
            None => false,
        }
    }

    /// Channels of a master, `None` if the master has never been seen
    pub fn channels(&self, master: &MasterName) -> Option<&[String]> {
        self.positions
            .get(master)
            .map(|&position| self.entries[position].channels.as_slice())
    }

    /// Returns true if the master has an entry
    pub fn contains_master(&self, master: &MasterName) -> bool {
        self.positions.contains_key(master)
    }

    /// Master groups in first-seen order
    pub fn entries(&self) -> impl Iterator<Item = &MasterEntry> {
        self.entries.iter()
    }

    /// Masters in first-seen order
    pub fn masters(&self) -> impl Iterator<Item = &MasterName> {
        self.entries.iter().map(|entry| &entry.master)
    }

    /// Number of master entries, including empty ones
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no master has been registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of channel names across all masters
    pub fn channel_count(&self) -> usize {
        self.entries.iter().map(|entry| entry.channels.len()).sum()
    }

    /// All channel names, grouped by master in index order
    pub fn channel_names(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .flat_map(|entry| entry.channels.iter().map(String::as_str))
    }
}
