use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::LegacyConversionKind;

/// Named coefficient or table of a legacy conversion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterValue {
    /// Scalar coefficient such as `P1`
    Number(f64),
    /// Formula or single text entry
    Text(String),
    /// Numeric table column
    Numbers(Vec<f64>),
    /// Text table column
    Texts(Vec<String>),
}

impl ParameterValue {
    /// Scalar value, if this parameter is numeric
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ParameterValue::Number(value) => Some(*value),
            _ => None,
        }
    }
}

impl From<f64> for ParameterValue {
    fn from(value: f64) -> Self {
        ParameterValue::Number(value)
    }
}

impl From<&str> for ParameterValue {
    fn from(value: &str) -> Self {
        ParameterValue::Text(value.to_string())
    }
}

impl From<Vec<f64>> for ParameterValue {
    fn from(values: Vec<f64>) -> Self {
        ParameterValue::Numbers(values)
    }
}

/// Conversion in the legacy schema: a type code and a flat map of named parameters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LegacyConversion {
    /// Raw `cc_type` code
    pub cc_type: u16,
    /// Named coefficients (`P1`, `P2`, ...) or tables, interpreted per `cc_type`
    pub parameters: BTreeMap<String, ParameterValue>,
}

impl LegacyConversion {
    /// Create a conversion with no parameters
    pub fn new(cc_type: u16) -> Self {
        Self {
            cc_type,
            parameters: BTreeMap::new(),
        }
    }

    /// Decoded conversion type, `None` for codes the schema does not define
    pub fn kind(&self) -> Option<LegacyConversionKind> {
        LegacyConversionKind::from_code(self.cc_type)
    }

    /// Numeric coefficient by name
    pub fn coefficient(&self, name: &str) -> Option<f64> {
        self.parameters.get(name).and_then(ParameterValue::as_f64)
    }

    /// Returns true for a linear conversion with slope 1 and offset 0.
    ///
    /// `-0.0 == 0.0` under IEEE comparison, so a negative-zero offset is
    /// also an identity. Missing coefficients never count as identity.
    pub fn is_identity(&self) -> bool {
        if self.kind() != Some(LegacyConversionKind::Linear) {
            return false;
        }
        matches!(
            (self.coefficient("P1"), self.coefficient("P2")),
            (Some(offset), Some(slope)) if slope == 1.0 && offset == 0.0
        )
    }
}
