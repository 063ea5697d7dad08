use serde::{Deserialize, Serialize};

use super::ModernConversionKind;

/// Entry of a modern conversion's reference table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionRef {
    /// Text value or formula
    Text(String),
    /// Nested conversion applied to the matching range
    Conversion(Box<ModernConversion>),
    /// Unset link
    Empty,
}

/// Conversion in the modern schema: numeric values and a reference table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModernConversion {
    /// Raw `cc_type` code
    pub cc_type: u16,
    /// Numeric coefficients or table keys
    pub cc_val: Option<Vec<f64>>,
    /// Texts, formulas or nested conversions
    pub cc_ref: Option<Vec<ConversionRef>>,
}

impl ModernConversion {
    /// Create a conversion with neither `cc_val` nor `cc_ref`
    pub fn new(cc_type: u16) -> Self {
        Self {
            cc_type,
            cc_val: None,
            cc_ref: None,
        }
    }

    /// Decoded conversion type, `None` for codes the schema does not define
    pub fn kind(&self) -> Option<ModernConversionKind> {
        ModernConversionKind::from_code(self.cc_type)
    }
}
