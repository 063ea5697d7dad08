//! # File Metadata Module
//!
//! Provenance of the source file: who recorded it, for which project and
//! subject, and when. The store carries one [`FileMetadata`] value and
//! replaces it wholesale on every
//! [`add_metadata`](crate::store::ChannelStore::add_metadata) call.

mod error;
mod file;


pub use error::MetadataError;
pub use file::FileMetadata;
