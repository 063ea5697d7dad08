use std::fmt;

use serde::{Deserialize, Serialize};

use super::ChannelData;
use crate::conversion::Conversion;

/// Domain of a master channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum MasterType {
    /// No master
    None = 0,
    /// Time (the common case)
    #[default]
    Time = 1,
    /// Crank or wheel angle
    Angle = 2,
    /// Travelled distance
    Distance = 3,
    /// Plain sample index
    Index = 4,
}

impl MasterType {
    /// Decode the integer code used by the source formats
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(MasterType::None),
            1 => Some(MasterType::Time),
            2 => Some(MasterType::Angle),
            3 => Some(MasterType::Distance),
            4 => Some(MasterType::Index),
            _ => None,
        }
    }

    /// Integer code of this master type
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for MasterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MasterType::None => "none",
            MasterType::Time => "time",
            MasterType::Angle => "angle",
            MasterType::Distance => "distance",
            MasterType::Index => "index",
        };
        f.write_str(name)
    }
}

/// Name of the master channel a record belongs to.
///
/// Channels read from a group without a master channel are filed under
/// [`MasterName::Unmastered`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MasterName {
    /// Master channel with the given name
    Named(String),
    /// Group has no master channel
    Unmastered,
}

impl MasterName {
    /// Channel name of the master, if any
    pub fn as_str(&self) -> Option<&str> {
        match self {
            MasterName::Named(name) => Some(name),
            MasterName::Unmastered => None,
        }
    }

    /// Returns true for the "no master" sentinel
    pub fn is_unmastered(&self) -> bool {
        matches!(self, MasterName::Unmastered)
    }
}

impl From<&str> for MasterName {
    fn from(name: &str) -> Self {
        MasterName::Named(name.to_string())
    }
}

impl From<String> for MasterName {
    fn from(name: String) -> Self {
        MasterName::Named(name)
    }
}

impl From<Option<String>> for MasterName {
    fn from(name: Option<String>) -> Self {
        name.map_or(MasterName::Unmastered, MasterName::Named)
    }
}

impl fmt::Display for MasterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MasterName::Named(name) => f.write_str(name),
            MasterName::Unmastered => Ok(()),
        }
    }
}

/// Opaque reference to attachment content owned outside the store
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attachment(String);

impl Attachment {
    /// Wrap an attachment reference
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    /// The reference as given by the reader
    pub fn reference(&self) -> &str {
        &self.0
    }
}

/// Data and metadata of one named channel
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelRecord {
    /// Raw or physical samples
    pub data: ChannelData,
    /// Unit, empty if unknown
    pub unit: String,
    /// Description, empty if absent
    pub description: String,
    /// Master channel this record belongs to
    pub master: MasterName,
    /// Domain of the master channel
    pub master_type: MasterType,
    /// Raw to physical mapping, `None` when raw already equals physical
    pub conversion: Option<Conversion>,
    /// Attachment reference
    pub attachment: Option<Attachment>,
}

impl ChannelRecord {
    /// Create a record without conversion or attachment
    pub fn new(data: ChannelData, master: MasterName, master_type: MasterType) -> Self {
        Self {
            data,
            unit: String::new(),
            description: String::new(),
            master,
            master_type,
            conversion: None,
            attachment: None,
        }
    }

    /// Returns true if a conversion is attached
    pub fn has_conversion(&self) -> bool {
        self.conversion.is_some()
    }

    /// Returns true if an attachment is referenced
    pub fn has_attachment(&self) -> bool {
        self.attachment.is_some()
    }
}
