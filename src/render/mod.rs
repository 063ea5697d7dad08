//! # Render Module
//!
//! Human-readable views of a [`ChannelStore`]. Display limits are passed
//! in through [`RenderOptions`]; nothing here reads global state.
//!
//! Two layouts exist, chosen by the store's `tabular` flag:
//!
//! - **Record-oriented**: master by master, each channel with its
//!   description, an elided preview of its samples and its unit.
//! - **Tabular**: each master group as a table whose first column is the
//!   master channel, built on demand as an Arrow [`RecordBatch`]
//!   (see [`ChannelStore::tabular_groups`]).
//!
//! [`RecordBatch`]: arrow::record_batch::RecordBatch

mod options;
mod record;
mod tabular;


pub use options::RenderOptions;
pub use record::preview;
pub use tabular::{
    format_table, TabularGroup, DESCRIPTION_KEY, MASTER_KEY, MASTER_TYPE_KEY, UNIT_KEY,
};

use std::fmt;
use std::fmt::Write;

use crate::store::ChannelStore;

impl ChannelStore {
    /// Render the store with the given display limits
    pub fn render(&self, options: &RenderOptions) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "file name : {}", self.file_name().unwrap_or_default());
        for (field, value) in self.file_metadata().fields() {
            let _ = writeln!(out, "{field} : {value}");
        }
        if self.is_tabular() {
            tabular::render_tables(self, options, &mut out);
        } else {
            record::render_records(self, options, &mut out);
        }
        out
    }
}

impl fmt::Display for ChannelStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&RenderOptions::default()))
    }
}
