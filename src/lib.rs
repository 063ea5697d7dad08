//! # mdfstore - In-Memory Channel Store for Measurement Data
//!
//! `mdfstore` is the container a measurement-file reader (MDF 3.x / 4.x and
//! similar sensor or bus logs) fills with decoded channels, and that
//! converters, exporters and analysis code then query and mutate.
//!
//! ## Key Features
//!
//! - **Master-Channel Grouping**: Every channel follows the sampling grid of
//!   a master channel (time, angle, distance or index). The grouping index
//!   is updated together with the records, never rebuilt lazily.
//!
//! - **Collision-Free Names**: A channel name seen again in another data
//!   group is stored as `name_<group>` instead of overwriting.
//!
//! - **Version-Aware Conversions**: Conversion metadata is normalized into
//!   the legacy (< 400) or modern (>= 400) layout picked once from the
//!   file version; no-op linear conversions are dropped.
//!
//! - **Two Views**: A record-oriented rendering, and a tabular view that
//!   lays each master group out as an Arrow `RecordBatch`.
//!
//! ## Quick Start
//!
//! ```rust
//! use mdfstore::prelude::*;
//!
//! let mut store = ChannelStore::new(StoreConfig::for_version(310).with_file_name("run.dat"));
//!
//! store.add_channel(0, "time", NewChannel::new(vec![0.0, 0.01, 0.02], "time").unit("s"))?;
//! store.add_channel(
//!     0,
//!     "n_eng",
//!     NewChannel::new(vec![812u16, 815, 820], "time")
//!         .unit("rpm")
//!         .description("engine speed")
//!         .conversion(
//!             ConversionSource::new(0)
//!                 .with_parameter("P1", 0.0)
//!                 .with_parameter("P2", 0.5),
//!         ),
//! )?;
//!
//! assert_eq!(store.master_channels(&MasterName::from("time")).unwrap().len(), 2);
//! assert!(store.get_channel_conversion("n_eng").present().is_some());
//!
//! println!("{}", store.render(&RenderOptions::default()));
//! # Ok::<(), mdfstore::store::StoreError>(())
//! ```
//!
//! ## Architecture
//!
//! The library is organized into the following modules:
//!
//! - [`store`]: The channel store, its mutation and query contracts, copies
//! - [`channel`]: Channel records, sample arrays and shared record handles
//! - [`conversion`]: Legacy and modern conversion metadata and normalization
//! - [`index`]: The master-channel index
//! - [`metadata`]: File provenance metadata
//! - [`render`]: Record-oriented and tabular rendering, Arrow tables
//! - [`config`]: TOML settings for store flags and display limits
//!
//! ## Concurrency
//!
//! The store is not internally synchronized beyond per-record locks. A
//! reader honoring the `multi_proc` flag should hand each worker one
//! [`MasterPartition`](store::MasterPartition); partitions never share a
//! channel. Stores produced by [`copy`](store::ChannelStore::copy) share
//! their records and must be treated as one store under concurrent use.

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod channel;
pub mod config;
pub mod conversion;
pub mod index;
pub mod metadata;
pub mod render;
pub mod store;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::channel::{
        Attachment, ByteRecords, ChannelData, ChannelRecord, MasterName, MasterType,
        RecordWriteGuard, SharedChannel,
    };
    pub use crate::config::StoreSettings;
    pub use crate::conversion::{
        Conversion, ConversionRef, ConversionSchema, ConversionSource, LegacyConversion,
        ModernConversion, ParameterValue,
    };
    pub use crate::index::MasterChannelIndex;
    pub use crate::metadata::{FileMetadata, MetadataError};
    pub use crate::render::{RenderOptions, TabularGroup};
    pub use crate::store::{
        ChannelField, ChannelStore, FieldLookup, FieldValue, MasterPartition, NewChannel,
        OptionalField, StoreConfig, StoreError,
    };
}
