//! # Channel Module
//!
//! A channel is one named signal: its sample array plus unit, description,
//! the master channel whose sampling grid it follows, and optionally a
//! conversion and an attachment reference.
//!
//! Records are owned by a [`ChannelStore`](crate::store::ChannelStore)
//! through [`SharedChannel`] handles.

mod data;
mod record;
mod shared;


pub use data::{ByteRecords, ChannelData};
pub use record::{Attachment, ChannelRecord, MasterName, MasterType};
pub use shared::{RecordWriteGuard, SharedChannel};
