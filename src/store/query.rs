use super::ChannelStore;
use crate::channel::{Attachment, ChannelData, MasterName, MasterType, SharedChannel};
use crate::conversion::Conversion;

/// Result of looking up a field that may be missing
///
/// Keeps "no such channel" apart from "channel exists, field unset".
#[derive(Debug, Clone, PartialEq)]
pub enum FieldLookup<T> {
    /// The channel is not stored
    UnknownChannel,
    /// The channel exists but the field is unset
    Absent,
    /// The field value
    Present(T),
}

impl<T> FieldLookup<T> {
    /// The value, if present
    pub fn present(self) -> Option<T> {
        match self {
            FieldLookup::Present(value) => Some(value),
            _ => None,
        }
    }

    /// Returns true if the channel is not stored
    pub fn is_unknown_channel(&self) -> bool {
        matches!(self, FieldLookup::UnknownChannel)
    }

    /// Returns true if the channel exists without this field
    pub fn is_absent(&self) -> bool {
        matches!(self, FieldLookup::Absent)
    }

    fn from_option(value: Option<T>) -> Self {
        value.map_or(FieldLookup::Absent, FieldLookup::Present)
    }
}

/// Selector for [`ChannelStore::get_channel_field`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelField {
    /// Sample array
    Data,
    /// Unit string
    Unit,
    /// Description string
    Description,
    /// Master name
    Master,
    /// Master type
    MasterType,
    /// Conversion
    Conversion,
    /// Attachment reference
    Attachment,
}

/// Value of one record field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Sample array
    Data(ChannelData),
    /// Unit string
    Unit(String),
    /// Description string
    Description(String),
    /// Master name
    Master(MasterName),
    /// Master type
    MasterType(MasterType),
    /// Conversion
    Conversion(Conversion),
    /// Attachment reference
    Attachment(Attachment),
}

impl ChannelStore {
    /// Handle to a stored channel, `None` if unknown
    pub fn get_channel(&self, name: &str) -> Option<&SharedChannel> {
        self.channels.get(name)
    }

    /// Copy of a channel's samples
    pub fn get_channel_data(&self, name: &str) -> Option<ChannelData> {
        self.with_channel_data(name, ChannelData::clone)
    }

    /// Run `f` on a channel's samples without copying them
    pub fn with_channel_data<R>(&self, name: &str, f: impl FnOnce(&ChannelData) -> R) -> Option<R> {
        self.channels.get(name).map(|channel| f(&channel.read().data))
    }

    /// Unit, empty if unset, `None` if the channel is unknown
    pub fn get_channel_unit(&self, name: &str) -> Option<String> {
        self.channels.get(name).map(|channel| channel.read().unit.clone())
    }

    /// Description, empty if unset, `None` if the channel is unknown
    pub fn get_channel_desc(&self, name: &str) -> Option<String> {
        self.channels
            .get(name)
            .map(|channel| channel.read().description.clone())
    }

    /// Master name, `None` if the channel is unknown
    pub fn get_channel_master(&self, name: &str) -> Option<MasterName> {
        self.channels.get(name).map(|channel| channel.read().master.clone())
    }

    /// Master type, `None` if the channel is unknown
    pub fn get_channel_master_type(&self, name: &str) -> Option<MasterType> {
        self.channels.get(name).map(|channel| channel.read().master_type)
    }

    /// Conversion of a channel
    pub fn get_channel_conversion(&self, name: &str) -> FieldLookup<Conversion> {
        match self.channels.get(name) {
            Some(channel) => FieldLookup::from_option(channel.read().conversion.clone()),
            None => FieldLookup::UnknownChannel,
        }
    }

    /// Attachment reference of a channel
    pub fn get_channel_attachment(&self, name: &str) -> FieldLookup<Attachment> {
        match self.channels.get(name) {
            Some(channel) => FieldLookup::from_option(channel.read().attachment.clone()),
            None => FieldLookup::UnknownChannel,
        }
    }

    /// Any field of a channel by selector
    pub fn get_channel_field(&self, name: &str, field: ChannelField) -> FieldLookup<FieldValue> {
        let Some(channel) = self.channels.get(name) else {
            return FieldLookup::UnknownChannel;
        };
        let record = channel.read();
        let value = match field {
            ChannelField::Data => Some(FieldValue::Data(record.data.clone())),
            ChannelField::Unit => Some(FieldValue::Unit(record.unit.clone())),
            ChannelField::Description => Some(FieldValue::Description(record.description.clone())),
            ChannelField::Master => Some(FieldValue::Master(record.master.clone())),
            ChannelField::MasterType => Some(FieldValue::MasterType(record.master_type)),
            ChannelField::Conversion => record.conversion.clone().map(FieldValue::Conversion),
            ChannelField::Attachment => record.attachment.clone().map(FieldValue::Attachment),
        };
        FieldLookup::from_option(value)
    }

    /// Masters in first-seen order
    pub fn masters(&self) -> impl Iterator<Item = &MasterName> {
        self.index.masters()
    }

    /// Channels of a master in insertion order, `None` for unknown masters
    pub fn master_channels(&self, master: &MasterName) -> Option<&[String]> {
        self.index.channels(master)
    }
}
