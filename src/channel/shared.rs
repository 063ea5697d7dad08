use std::ops::Deref;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::{Attachment, ChannelData, ChannelRecord, MasterType};

/// Reference-counted handle to a channel record.
///
/// Cloning the handle shares the record: a write through one clone is
/// visible through every other. Stores produced by
/// [`ChannelStore::copy`](crate::store::ChannelStore::copy) hold clones of
/// the same handles.
#[derive(Debug, Clone)]
pub struct SharedChannel(Arc<RwLock<ChannelRecord>>);

impl SharedChannel {
    /// Take ownership of a record
    pub fn new(record: ChannelRecord) -> Self {
        Self(Arc::new(RwLock::new(record)))
    }

    /// Read access to the record.
    ///
    /// A lock poisoned by a panicking writer is recovered; a record has no
    /// cross-field invariant a partial write could break.
    pub fn read(&self) -> RwLockReadGuard<'_, ChannelRecord> {
        self.0.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Write access to the fields that do not affect grouping.
    ///
    /// The master name is indexed by the owning store and can only be
    /// changed through
    /// [`ChannelStore::set_channel_master`](crate::store::ChannelStore::set_channel_master).
    pub fn write(&self) -> RecordWriteGuard<'_> {
        RecordWriteGuard(self.write_record())
    }

    /// Unrestricted write access, for the owning store only
    pub(crate) fn write_record(&self) -> RwLockWriteGuard<'_, ChannelRecord> {
        self.0.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Owned copy of the record's current state
    pub fn snapshot(&self) -> ChannelRecord {
        self.read().clone()
    }

    /// Returns true if both handles point at the same record
    pub fn ptr_eq(&self, other: &SharedChannel) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Returns true if another handle points at the same record
    pub fn is_shared(&self) -> bool {
        Arc::strong_count(&self.0) > 1
    }

    /// Detach into a new record that shares nothing with this one
    pub fn deep_clone(&self) -> Self {
        Self::new(self.snapshot())
    }

    /// Unwrap the record, cloning it if other handles are still alive
    pub fn into_record(self) -> ChannelRecord {
        match Arc::try_unwrap(self.0) {
            Ok(lock) => lock.into_inner().unwrap_or_else(PoisonError::into_inner),
            Err(shared) => shared
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .clone(),
        }
    }
}

/// Write lock on a shared record that leaves its master untouched.
///
/// Reads go through `Deref`. The record cannot be replaced as a whole, and
/// conversions are set through the store so they keep its schema.
///
/// ```compile_fail
/// use mdfstore::channel::{ChannelData, ChannelRecord, MasterName, MasterType, SharedChannel};
///
/// let handle = SharedChannel::new(ChannelRecord::new(
///     ChannelData::default(),
///     MasterName::from("t"),
///     MasterType::Time,
/// ));
/// handle.write().master = MasterName::from("other");
/// ```
#[derive(Debug)]
pub struct RecordWriteGuard<'a>(RwLockWriteGuard<'a, ChannelRecord>);

impl RecordWriteGuard<'_> {
    /// Mutable sample array
    pub fn data_mut(&mut self) -> &mut ChannelData {
        &mut self.0.data
    }

    /// Mutable unit
    pub fn unit_mut(&mut self) -> &mut String {
        &mut self.0.unit
    }

    /// Mutable description
    pub fn description_mut(&mut self) -> &mut String {
        &mut self.0.description
    }

    /// Mutable master type
    pub fn master_type_mut(&mut self) -> &mut MasterType {
        &mut self.0.master_type
    }

    /// Mutable attachment reference
    pub fn attachment_mut(&mut self) -> &mut Option<Attachment> {
        &mut self.0.attachment
    }
}

impl Deref for RecordWriteGuard<'_> {
    type Target = ChannelRecord;

    fn deref(&self) -> &ChannelRecord {
        &self.0
    }
}
