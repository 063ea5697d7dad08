use std::sync::Arc;

use arrow::array::{
    ArrayRef, FixedSizeBinaryArray, Float32Array, Float64Array, Int16Array, Int32Array,
    Int64Array, Int8Array, UInt16Array, UInt32Array, UInt64Array, UInt8Array,
};
use arrow::buffer::Buffer;
use arrow::datatypes::DataType;
use arrow::error::ArrowError;

/// Fixed-width byte records (e.g. raw CAN frames or packed structures).
///
/// The byte buffer always holds a whole number of records of `width` bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteRecords {
    width: usize,
    values: Vec<u8>,
}

impl ByteRecords {
    /// Wrap a packed byte buffer.
    ///
    /// Returns `None` when `width` is zero or the buffer is not a multiple of `width`.
    pub fn new(width: usize, values: Vec<u8>) -> Option<Self> {
        if width == 0 || values.len() % width != 0 {
            return None;
        }
        Some(Self { width, values })
    }

    /// Size of one record in bytes
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.values.len() / self.width
    }

    /// Returns true if there are no records
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Packed bytes of all records
    pub fn as_bytes(&self) -> &[u8] {
        &self.values
    }

    /// Bytes of the record at `index`
    pub fn record(&self, index: usize) -> Option<&[u8]> {
        let start = index.checked_mul(self.width)?;
        self.values.get(start..start + self.width)
    }
}

/// Sample array of one channel, one value per index of the master grid.
///
/// Holds either raw or physical values; which one is tracked by the owning
/// store's `convert_after_read` flag, not by the array.
#[derive(Debug, Clone, PartialEq)]
pub enum ChannelData {
    /// 64-bit floats
    Float64(Vec<f64>),
    /// 32-bit floats
    Float32(Vec<f32>),
    /// Signed 64-bit integers
    Int64(Vec<i64>),
    /// Signed 32-bit integers
    Int32(Vec<i32>),
    /// Signed 16-bit integers
    Int16(Vec<i16>),
    /// Signed 8-bit integers
    Int8(Vec<i8>),
    /// Unsigned 64-bit integers
    UInt64(Vec<u64>),
    /// Unsigned 32-bit integers
    UInt32(Vec<u32>),
    /// Unsigned 16-bit integers
    UInt16(Vec<u16>),
    /// Unsigned 8-bit integers
    UInt8(Vec<u8>),
    /// Fixed-width byte records
    Bytes(ByteRecords),
}

macro_rules! impl_from_vec {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<Vec<$ty>> for ChannelData {
                fn from(values: Vec<$ty>) -> Self {
                    ChannelData::$variant(values)
                }
            }
        )*
    };
}

impl_from_vec!(
    f64 => Float64,
    f32 => Float32,
    i64 => Int64,
    i32 => Int32,
    i16 => Int16,
    i8 => Int8,
    u64 => UInt64,
    u32 => UInt32,
    u16 => UInt16,
    u8 => UInt8,
);

impl From<ByteRecords> for ChannelData {
    fn from(records: ByteRecords) -> Self {
        ChannelData::Bytes(records)
    }
}

impl Default for ChannelData {
    fn default() -> Self {
        ChannelData::Float64(Vec::new())
    }
}

impl ChannelData {
    /// Number of samples
    pub fn len(&self) -> usize {
        match self {
            ChannelData::Float64(v) => v.len(),
            ChannelData::Float32(v) => v.len(),
            ChannelData::Int64(v) => v.len(),
            ChannelData::Int32(v) => v.len(),
            ChannelData::Int16(v) => v.len(),
            ChannelData::Int8(v) => v.len(),
            ChannelData::UInt64(v) => v.len(),
            ChannelData::UInt32(v) => v.len(),
            ChannelData::UInt16(v) => v.len(),
            ChannelData::UInt8(v) => v.len(),
            ChannelData::Bytes(r) => r.len(),
        }
    }

    /// Returns true if the channel holds no samples
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true for byte records, which have no numeric representation
    pub fn is_byte_records(&self) -> bool {
        matches!(self, ChannelData::Bytes(_))
    }

    /// Arrow type used for this array in the tabular view
    pub fn data_type(&self) -> DataType {
        match self {
            ChannelData::Float64(_) => DataType::Float64,
            ChannelData::Float32(_) => DataType::Float32,
            ChannelData::Int64(_) => DataType::Int64,
            ChannelData::Int32(_) => DataType::Int32,
            ChannelData::Int16(_) => DataType::Int16,
            ChannelData::Int8(_) => DataType::Int8,
            ChannelData::UInt64(_) => DataType::UInt64,
            ChannelData::UInt32(_) => DataType::UInt32,
            ChannelData::UInt16(_) => DataType::UInt16,
            ChannelData::UInt8(_) => DataType::UInt8,
            // Width is validated non-zero on construction and practically small
            ChannelData::Bytes(r) => DataType::FixedSizeBinary(r.width() as i32),
        }
    }

    /// Sample at `index` widened to f64, `None` for byte records or out of range
    pub fn value_as_f64(&self, index: usize) -> Option<f64> {
        match self {
            ChannelData::Float64(v) => v.get(index).copied(),
            ChannelData::Float32(v) => v.get(index).map(|x| f64::from(*x)),
            ChannelData::Int64(v) => v.get(index).map(|x| *x as f64),
            ChannelData::Int32(v) => v.get(index).map(|x| f64::from(*x)),
            ChannelData::Int16(v) => v.get(index).map(|x| f64::from(*x)),
            ChannelData::Int8(v) => v.get(index).map(|x| f64::from(*x)),
            ChannelData::UInt64(v) => v.get(index).map(|x| *x as f64),
            ChannelData::UInt32(v) => v.get(index).map(|x| f64::from(*x)),
            ChannelData::UInt16(v) => v.get(index).map(|x| f64::from(*x)),
            ChannelData::UInt8(v) => v.get(index).map(|x| f64::from(*x)),
            ChannelData::Bytes(_) => None,
        }
    }

    /// Returns true for floating point arrays
    pub fn is_float(&self) -> bool {
        matches!(self, ChannelData::Float64(_) | ChannelData::Float32(_))
    }

    /// Build an Arrow array holding a copy of the samples
    pub fn to_arrow(&self) -> Result<ArrayRef, ArrowError> {
        let array: ArrayRef = match self {
            ChannelData::Float64(v) => Arc::new(Float64Array::from(v.clone())),
            ChannelData::Float32(v) => Arc::new(Float32Array::from(v.clone())),
            ChannelData::Int64(v) => Arc::new(Int64Array::from(v.clone())),
            ChannelData::Int32(v) => Arc::new(Int32Array::from(v.clone())),
            ChannelData::Int16(v) => Arc::new(Int16Array::from(v.clone())),
            ChannelData::Int8(v) => Arc::new(Int8Array::from(v.clone())),
            ChannelData::UInt64(v) => Arc::new(UInt64Array::from(v.clone())),
            ChannelData::UInt32(v) => Arc::new(UInt32Array::from(v.clone())),
            ChannelData::UInt16(v) => Arc::new(UInt16Array::from(v.clone())),
            ChannelData::UInt8(v) => Arc::new(UInt8Array::from(v.clone())),
            ChannelData::Bytes(r) => {
                let width = i32::try_from(r.width()).map_err(|_| {
                    ArrowError::InvalidArgumentError(format!(
                        "byte record width {} exceeds i32",
                        r.width()
                    ))
                })?;
                Arc::new(FixedSizeBinaryArray::try_new(
                    width,
                    Buffer::from_vec(r.as_bytes().to_vec()),
                    None,
                )?)
            }
        };
        Ok(array)
    }
}
