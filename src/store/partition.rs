use crate::channel::{MasterName, SharedChannel};

use super::ChannelStore;

/// Channels of one master group, handed to a single worker
///
/// Partitions built from one store never share a channel, so workers
/// holding different partitions can write to their records concurrently.
#[derive(Debug, Clone)]
pub struct MasterPartition {
    /// Master of the group
    pub master: MasterName,
    /// `(key, handle)` pairs in insertion order
    pub channels: Vec<(String, SharedChannel)>,
}

impl MasterPartition {
    /// Number of channels in the group
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    /// Returns true if the group has no channel
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}

impl ChannelStore {
    /// One partition per master entry, in index order.
    ///
    /// Partitions are a snapshot of the grouping. A channel moved with
    /// [`set_channel_master`](Self::set_channel_master) while a partition
    /// still holds its handle is detached from that handle, so writes
    /// through the old partition no longer reach the store. Build new
    /// partitions after any structural change.
    pub fn master_partitions(&self) -> Vec<MasterPartition> {
        self.index
            .entries()
            .map(|entry| MasterPartition {
                master: entry.master().clone(),
                channels: entry
                    .channels()
                    .iter()
                    .filter_map(|name| {
                        self.channels
                            .get(name)
                            .map(|channel| (name.clone(), channel.clone()))
                    })
                    .collect(),
            })
            .collect()
    }

    /// Apply `f` to every master group and collect the results in index order.
    ///
    /// With the `parallel` feature and the store's `multi_proc` flag set,
    /// groups run on the rayon pool; otherwise sequentially.
    pub fn map_master_groups<R, F>(&self, f: F) -> Vec<R>
    where
        R: Send,
        F: Fn(&MasterPartition) -> R + Send + Sync,
    {
        let partitions = self.master_partitions();

        #[cfg(feature = "parallel")]
        if self.config.multi_proc {
            use rayon::prelude::*;
            log::debug!("Processing {} master groups in parallel", partitions.len());
            return partitions.par_iter().map(&f).collect();
        }

        partitions.iter().map(f).collect()
    }
}
