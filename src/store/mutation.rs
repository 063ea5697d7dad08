use log::{debug, trace, warn};

use super::{ChannelStore, FieldValue, StoreError};
use crate::channel::{
    Attachment, ChannelData, ChannelRecord, MasterName, MasterType, SharedChannel,
};
use crate::conversion::{Conversion, ConversionSource};

/// Arguments of [`ChannelStore::add_channel`]
///
/// Defaults: master type time, empty unit and description, no conversion.
#[derive(Debug, Clone)]
pub struct NewChannel {
    data: ChannelData,
    master: MasterName,
    master_type: MasterType,
    unit: String,
    description: String,
    conversion: Option<ConversionSource>,
}

impl NewChannel {
    /// Channel with the given samples, following `master`'s grid
    pub fn new(data: impl Into<ChannelData>, master: impl Into<MasterName>) -> Self {
        Self {
            data: data.into(),
            master: master.into(),
            master_type: MasterType::Time,
            unit: String::new(),
            description: String::new(),
            conversion: None,
        }
    }

    /// Set the master type (ignored by legacy-version stores)
    pub fn master_type(mut self, master_type: MasterType) -> Self {
        self.master_type = master_type;
        self
    }

    /// Set the unit
    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    /// Set the description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Attach a conversion, normalized by the store's schema
    pub fn conversion(mut self, source: ConversionSource) -> Self {
        self.conversion = Some(source);
        self
    }
}

/// Record fields that may be absent and can be removed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionalField {
    /// Raw to physical conversion
    Conversion,
    /// Attachment reference
    Attachment,
}

fn validate_master(master: &MasterName) -> Result<(), StoreError> {
    if matches!(master, MasterName::Named(name) if name.is_empty()) {
        return Err(StoreError::InvalidArgument(
            "master channel name is empty".to_string(),
        ));
    }
    Ok(())
}

impl ChannelStore {
    /// Add a channel read from data group `group_id`.
    ///
    /// If `name` is taken, the channel is registered as `name_<group_id>`
    /// (repeatedly, until unique) and the existing channel is left
    /// untouched. Legacy-version stores force the master type to time.
    /// Returns the key the channel was stored under.
    pub fn add_channel(
        &mut self,
        group_id: usize,
        name: &str,
        channel: NewChannel,
    ) -> Result<String, StoreError> {
        if name.is_empty() {
            return Err(StoreError::InvalidArgument(
                "channel name is empty".to_string(),
            ));
        }
        validate_master(&channel.master)?;

        let key = self.unique_key(name, group_id);
        let master_type = if self.schema.forces_time_master() {
            MasterType::Time
        } else {
            channel.master_type
        };
        let conversion = channel
            .conversion
            .and_then(|source| self.schema.normalize(source));

        let record = ChannelRecord {
            data: channel.data,
            unit: channel.unit,
            description: channel.description,
            master: channel.master,
            master_type,
            conversion,
            attachment: None,
        };
        trace!(
            "Adding channel '{}' ({} samples) to master '{}'",
            key,
            record.data.len(),
            record.master
        );
        self.index.insert(&record.master, key.clone());
        self.channels.insert(key.clone(), SharedChannel::new(record));
        Ok(key)
    }

    fn unique_key(&self, name: &str, group_id: usize) -> String {
        let mut key = name.to_string();
        while self.channels.contains_key(&key) {
            key = format!("{key}_{group_id}");
        }
        if key != name {
            debug!("Channel '{}' already stored, registering as '{}'", name, key);
        }
        key
    }

    /// Remove a channel from the records and the index and return it
    pub fn remove_channel(&mut self, name: &str) -> Result<ChannelRecord, StoreError> {
        let master = self.require(name)?.read().master.clone();
        if !self.index.remove(&master, name) {
            return Err(StoreError::InvariantViolation(format!(
                "channel '{name}' is not listed under its master '{master}'"
            )));
        }
        let channel = self.channels.remove(name).ok_or_else(|| {
            StoreError::InvariantViolation(format!("channel '{name}' vanished during removal"))
        })?;
        debug!("Removed channel '{}' from master '{}'", name, master);
        Ok(channel.into_record())
    }

    fn require(&self, name: &str) -> Result<&SharedChannel, StoreError> {
        self.channels
            .get(name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }

    /// Set the unit of a stored channel
    pub fn set_channel_unit(&mut self, name: &str, unit: impl Into<String>) -> Result<(), StoreError> {
        self.require(name)?.write_record().unit = unit.into();
        Ok(())
    }

    /// Replace the samples of a stored channel
    pub fn set_channel_data(
        &mut self,
        name: &str,
        data: impl Into<ChannelData>,
    ) -> Result<(), StoreError> {
        self.require(name)?.write_record().data = data.into();
        Ok(())
    }

    /// Set the description of a stored channel
    pub fn set_channel_desc(
        &mut self,
        name: &str,
        description: impl Into<String>,
    ) -> Result<(), StoreError> {
        self.require(name)?.write_record().description = description.into();
        Ok(())
    }

    /// Move a stored channel to another master group.
    ///
    /// The index entry moves with the field. A record whose handle is held
    /// elsewhere (a copied store or a live
    /// [`MasterPartition`](super::MasterPartition)) is detached first, so the
    /// other holder keeps the old record and the old master.
    pub fn set_channel_master(
        &mut self,
        name: &str,
        master: impl Into<MasterName>,
    ) -> Result<(), StoreError> {
        let master = master.into();
        validate_master(&master)?;
        let handle = self.require(name)?;
        let previous = handle.read().master.clone();
        if previous == master {
            return Ok(());
        }

        let handle = if handle.is_shared() {
            debug!("Detaching shared channel '{}' before changing its master", name);
            handle.deep_clone()
        } else {
            handle.clone()
        };
        if !self.index.remove(&previous, name) {
            return Err(StoreError::InvariantViolation(format!(
                "channel '{name}' is not listed under its master '{previous}'"
            )));
        }
        self.index.insert(&master, name.to_string());
        handle.write_record().master = master;
        self.channels.insert(name.to_string(), handle);
        Ok(())
    }

    /// Set the master type of a stored channel
    pub fn set_channel_master_type(
        &mut self,
        name: &str,
        master_type: MasterType,
    ) -> Result<(), StoreError> {
        self.require(name)?.write_record().master_type = master_type;
        Ok(())
    }

    /// Attach a conversion to a stored channel.
    ///
    /// The conversion must be laid out in the store's schema.
    pub fn set_channel_conversion(
        &mut self,
        name: &str,
        conversion: Conversion,
    ) -> Result<(), StoreError> {
        let handle = self.require(name)?;
        if conversion.schema() != self.schema {
            warn!(
                "Rejecting {} conversion for '{}' in a {} store",
                conversion.schema(),
                name,
                self.schema
            );
            return Err(StoreError::SchemaMismatch {
                expected: self.schema,
                found: conversion.schema(),
            });
        }
        handle.write_record().conversion = Some(conversion);
        Ok(())
    }

    /// Attach an attachment reference to a stored channel
    pub fn set_channel_attachment(
        &mut self,
        name: &str,
        attachment: Attachment,
    ) -> Result<(), StoreError> {
        self.require(name)?.write_record().attachment = Some(attachment);
        Ok(())
    }

    /// Remove the conversion of a channel; `None` if the channel or conversion is absent
    pub fn remove_channel_conversion(&mut self, name: &str) -> Option<Conversion> {
        self.channels.get(name)?.write_record().conversion.take()
    }

    /// Remove an optional field; `None` if the channel or field is absent
    pub fn remove_channel_field(&mut self, name: &str, field: OptionalField) -> Option<FieldValue> {
        let mut record = self.channels.get(name)?.write_record();
        match field {
            OptionalField::Conversion => record.conversion.take().map(FieldValue::Conversion),
            OptionalField::Attachment => record.attachment.take().map(FieldValue::Attachment),
        }
    }
}
