use std::collections::BTreeMap;
use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use super::{ConversionRef, LegacyConversion, ModernConversion, ParameterValue};

/// First source-format version using the modern conversion schema
pub const MODERN_SCHEMA_VERSION: u16 = 400;

/// Conversion as delivered by a format reader, before normalization.
///
/// A reader fills whichever fields its format provides; normalization picks
/// the ones matching the store's schema and ignores the rest.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversionSource {
    /// Raw `cc_type` code
    pub cc_type: u16,
    /// Legacy named parameters
    pub conversion: Option<BTreeMap<String, ParameterValue>>,
    /// Modern numeric values
    pub cc_val: Option<Vec<f64>>,
    /// Modern reference table
    pub cc_ref: Option<Vec<ConversionRef>>,
}

impl ConversionSource {
    /// Create a source with only a type code
    pub fn new(cc_type: u16) -> Self {
        Self {
            cc_type,
            ..Default::default()
        }
    }

    /// Add a legacy named parameter
    pub fn with_parameter(mut self, name: &str, value: impl Into<ParameterValue>) -> Self {
        self.conversion
            .get_or_insert_with(BTreeMap::new)
            .insert(name.to_string(), value.into());
        self
    }

    /// Set the modern `cc_val` array
    pub fn with_cc_val(mut self, values: Vec<f64>) -> Self {
        self.cc_val = Some(values);
        self
    }

    /// Set the modern `cc_ref` table
    pub fn with_cc_ref(mut self, refs: Vec<ConversionRef>) -> Self {
        self.cc_ref = Some(refs);
        self
    }
}

/// Conversion metadata attached to a channel, in one of the two schemas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "schema", rename_all = "snake_case")]
pub enum Conversion {
    /// Version < 400 layout
    Legacy(LegacyConversion),
    /// Version >= 400 layout
    Modern(ModernConversion),
}

impl Conversion {
    /// Raw `cc_type` code
    pub fn cc_type(&self) -> u16 {
        match self {
            Conversion::Legacy(c) => c.cc_type,
            Conversion::Modern(c) => c.cc_type,
        }
    }

    /// Schema this conversion is laid out in
    pub fn schema(&self) -> ConversionSchema {
        match self {
            Conversion::Legacy(_) => ConversionSchema::Legacy,
            Conversion::Modern(_) => ConversionSchema::Modern,
        }
    }
}

/// Conversion layout selected by the source-format version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionSchema {
    /// Flat named parameters, master type always time
    Legacy,
    /// `cc_val` / `cc_ref`, master type as given
    Modern,
}

impl ConversionSchema {
    /// Schema used by a given source-format version
    pub fn for_version(version: u16) -> Self {
        if version < MODERN_SCHEMA_VERSION {
            ConversionSchema::Legacy
        } else {
            ConversionSchema::Modern
        }
    }

    /// Legacy files only know time masters
    pub fn forces_time_master(self) -> bool {
        self == ConversionSchema::Legacy
    }

    /// Build the conversion to attach, or `None` when the source is a no-op.
    ///
    /// Only the legacy linear identity (`P2 == 1`, `P1 == ±0`) is elided;
    /// every other conversion is kept as delivered.
    pub fn normalize(self, source: ConversionSource) -> Option<Conversion> {
        match self {
            ConversionSchema::Legacy => {
                let conversion = LegacyConversion {
                    cc_type: source.cc_type,
                    parameters: source.conversion.unwrap_or_default(),
                };
                if conversion.is_identity() {
                    debug!("Dropping identity linear conversion");
                    return None;
                }
                Some(Conversion::Legacy(conversion))
            }
            ConversionSchema::Modern => Some(Conversion::Modern(ModernConversion {
                cc_type: source.cc_type,
                cc_val: source.cc_val,
                cc_ref: source.cc_ref,
            })),
        }
    }
}

impl fmt::Display for ConversionSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionSchema::Legacy => f.write_str("legacy"),
            ConversionSchema::Modern => f.write_str("modern"),
        }
    }
}
