//! # Conversion Module
//!
//! Metadata describing how a channel's raw samples map to physical values.
//! Evaluating the mapping is left to downstream code; this module only
//! models its shape.
//!
//! ## Schemas
//!
//! Two incompatible layouts exist, selected by the source-format version:
//!
//! | Version | Schema | Parameters |
//! |---------|--------|------------|
//! | < 400 | [`ConversionSchema::Legacy`] | flat map of named coefficients (`P1`, `P2`, ...) |
//! | >= 400 | [`ConversionSchema::Modern`] | `cc_val` numeric array and/or `cc_ref` table |
//!
//! A store picks its schema once from its version and normalizes every
//! incoming [`ConversionSource`] through it.

mod kind;
mod legacy;
mod modern;
mod schema;


pub use kind::{LegacyConversionKind, ModernConversionKind};
pub use legacy::{LegacyConversion, ParameterValue};
pub use modern::{ConversionRef, ModernConversion};
pub use schema::{Conversion, ConversionSchema, ConversionSource, MODERN_SCHEMA_VERSION};
