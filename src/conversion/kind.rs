/// Conversion types of the legacy (version < 400) schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LegacyConversionKind {
    /// `phys = P2 * raw + P1`
    Linear,
    /// Value table with interpolation
    TabularInterpolation,
    /// Value table without interpolation
    Tabular,
    /// Polynomial (P1..P6)
    Polynomial,
    /// Exponential (P1..P7)
    Exponential,
    /// Logarithmic (P1..P7)
    Logarithmic,
    /// Rational (P1..P6)
    Rational,
    /// ASAM-MCD2 text formula
    Formula,
    /// Value to text table
    TextTable,
    /// Value range to text table
    TextRange,
    /// 1:1 conversion
    Identity,
}

impl LegacyConversionKind {
    /// Decode a legacy `cc_type` code
    pub fn from_code(code: u16) -> Option<Self> {
        match code {
            0 => Some(Self::Linear),
            1 => Some(Self::TabularInterpolation),
            2 => Some(Self::Tabular),
            6 => Some(Self::Polynomial),
            7 => Some(Self::Exponential),
            8 => Some(Self::Logarithmic),
            9 => Some(Self::Rational),
            10 => Some(Self::Formula),
            11 => Some(Self::TextTable),
            12 => Some(Self::TextRange),
            65535 => Some(Self::Identity),
            _ => None,
        }
    }
}

/// Conversion types of the modern (version >= 400) schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModernConversionKind {
    /// 1:1 conversion
    Identity,
    /// `phys = cc_val[1] * raw + cc_val[0]`
    Linear,
    /// Rational function of six coefficients
    Rational,
    /// Algebraic formula stored in `cc_ref`
    Algebraic,
    /// Value to value table with interpolation
    ValueToValueInterpolated,
    /// Value to value table without interpolation
    ValueToValue,
    /// Value range to value table
    RangeToValue,
    /// Value to text table
    ValueToText,
    /// Value range to text table
    RangeToText,
    /// Text to value table
    TextToValue,
    /// Text to text table
    TextToText,
    /// Bitfield text table
    BitfieldText,
}

impl ModernConversionKind {
    /// Decode a modern `cc_type` code
    pub fn from_code(code: u16) -> Option<Self> {
        match code {
            0 => Some(Self::Identity),
            1 => Some(Self::Linear),
            2 => Some(Self::Rational),
            3 => Some(Self::Algebraic),
            4 => Some(Self::ValueToValueInterpolated),
            5 => Some(Self::ValueToValue),
            6 => Some(Self::RangeToValue),
            7 => Some(Self::ValueToText),
            8 => Some(Self::RangeToText),
            9 => Some(Self::TextToValue),
            10 => Some(Self::TextToText),
            11 => Some(Self::BitfieldText),
            _ => None,
        }
    }
}
