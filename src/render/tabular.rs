use std::collections::HashMap;
use std::fmt::Write;
use std::sync::Arc;

use arrow::array::ArrayRef;
use arrow::datatypes::{Field, Schema};
use arrow::error::ArrowError;
use arrow::record_batch::RecordBatch;
use arrow::util::display::{ArrayFormatter, FormatOptions};
use log::{debug, warn};

use super::RenderOptions;
use crate::channel::MasterName;
use crate::store::{ChannelStore, StoreError};

/// Field metadata key holding a channel's unit
pub const UNIT_KEY: &str = "unit";
/// Field metadata key holding a channel's description
pub const DESCRIPTION_KEY: &str = "description";
/// Schema metadata key holding the group's master name
pub const MASTER_KEY: &str = "master";
/// Schema metadata key holding the group's master type code
pub const MASTER_TYPE_KEY: &str = "master_type";

/// One master group laid out as a table
///
/// The master channel, when stored, is the first column and acts as the
/// row index; every other channel of the group is one column.
#[derive(Debug, Clone)]
pub struct TabularGroup {
    /// Master of the group
    pub master: MasterName,
    /// Columns of the group
    pub batch: RecordBatch,
}

impl TabularGroup {
    /// Number of rows (samples on the master grid)
    pub fn num_rows(&self) -> usize {
        self.batch.num_rows()
    }

    /// Column names in table order
    pub fn column_names(&self) -> Vec<&str> {
        self.batch
            .schema_ref()
            .fields()
            .iter()
            .map(|field| field.name().as_str())
            .collect()
    }
}

impl ChannelStore {
    /// Build the table of one master group.
    ///
    /// Returns `Ok(None)` for unknown masters and empty groups. Fails with
    /// [`StoreError::ColumnLength`] if a channel does not match the grid.
    pub fn tabular_group(&self, master: &MasterName) -> Result<Option<TabularGroup>, StoreError> {
        let Some(names) = self.master_channels(master) else {
            return Ok(None);
        };
        if names.is_empty() {
            return Ok(None);
        }

        // Master channel first, as the row index
        let mut ordered: Vec<&str> = Vec::with_capacity(names.len());
        if let Some(own) = master.as_str().filter(|own| names.iter().any(|n| n == own)) {
            ordered.push(own);
        }
        ordered.extend(
            names
                .iter()
                .map(String::as_str)
                .filter(|name| Some(*name) != master.as_str()),
        );

        let mut fields = Vec::with_capacity(ordered.len());
        let mut columns: Vec<ArrayRef> = Vec::with_capacity(ordered.len());
        let mut expected_rows = None;
        let mut master_type = None;
        for name in ordered {
            let channel = self.get_channel(name).ok_or_else(|| {
                StoreError::InvariantViolation(format!(
                    "index lists '{name}' under '{master}' but no record exists"
                ))
            })?;
            let record = channel.read();
            let rows = *expected_rows.get_or_insert(record.data.len());
            if record.data.len() != rows {
                return Err(StoreError::ColumnLength {
                    master: master.to_string(),
                    channel: name.to_string(),
                    expected: rows,
                    found: record.data.len(),
                });
            }
            if master_type.is_none() {
                master_type = Some(record.master_type);
            }

            let metadata = HashMap::from([
                (UNIT_KEY.to_string(), record.unit.clone()),
                (DESCRIPTION_KEY.to_string(), record.description.clone()),
            ]);
            fields.push(Field::new(name, record.data.data_type(), false).with_metadata(metadata));
            columns.push(record.data.to_arrow()?);
        }

        let mut schema_metadata = HashMap::from([(MASTER_KEY.to_string(), master.to_string())]);
        if let Some(master_type) = master_type {
            schema_metadata.insert(MASTER_TYPE_KEY.to_string(), master_type.code().to_string());
        }
        let schema = Arc::new(Schema::new_with_metadata(fields, schema_metadata));
        let batch = RecordBatch::try_new(schema, columns)?;
        debug!(
            "Built table for master '{}': {} rows x {} columns",
            master,
            batch.num_rows(),
            batch.num_columns()
        );
        Ok(Some(TabularGroup {
            master: master.clone(),
            batch,
        }))
    }

    /// Tables of every non-empty master group, in index order
    pub fn tabular_groups(&self) -> Result<Vec<TabularGroup>, StoreError> {
        let mut groups = Vec::with_capacity(self.master_channel_index().len());
        for master in self.masters() {
            if let Some(group) = self.tabular_group(master)? {
                groups.push(group);
            }
        }
        Ok(groups)
    }
}

fn truncate(cell: String, max_width: usize) -> String {
    if cell.chars().count() <= max_width {
        return cell;
    }
    if max_width > 3 {
        let kept: String = cell.chars().take(max_width - 3).collect();
        format!("{kept}...")
    } else {
        cell.chars().take(max_width).collect()
    }
}

/// Row indices to print, `None` marking the elided middle
fn visible_rows(rows: usize, max_rows: usize) -> Vec<Option<usize>> {
    if rows <= max_rows {
        return (0..rows).map(Some).collect();
    }
    let tail = max_rows / 2;
    let head = max_rows - tail;
    (0..head)
        .map(Some)
        .chain(std::iter::once(None))
        .chain((rows - tail..rows).map(Some))
        .collect()
}

/// Text preview of a table limited by `max_rows` and `max_colwidth`
pub fn format_table(batch: &RecordBatch, options: &RenderOptions) -> Result<String, ArrowError> {
    let format_options = FormatOptions::default();
    let formatters = batch
        .columns()
        .iter()
        .map(|column| ArrayFormatter::try_new(column.as_ref(), &format_options))
        .collect::<Result<Vec<_>, _>>()?;

    let mut lines: Vec<Vec<String>> = Vec::new();
    lines.push(
        batch
            .schema_ref()
            .fields()
            .iter()
            .map(|field| truncate(field.name().clone(), options.max_colwidth))
            .collect(),
    );
    for row in visible_rows(batch.num_rows(), options.max_rows) {
        let line = match row {
            Some(row) => formatters
                .iter()
                .map(|formatter| truncate(formatter.value(row).to_string(), options.max_colwidth))
                .collect(),
            None => vec!["...".to_string(); formatters.len()],
        };
        lines.push(line);
    }

    let mut widths = vec![0usize; formatters.len()];
    for line in &lines {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for line in &lines {
        let cells: Vec<String> = line
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:>width$}"))
            .collect();
        let _ = writeln!(out, "  {}", cells.join("  ").trim_end());
    }
    let _ = writeln!(
        out,
        "[{} rows x {} columns]",
        batch.num_rows(),
        batch.num_columns()
    );
    Ok(out)
}

/// Master groups rendered as truncated tables
pub(super) fn render_tables(store: &ChannelStore, options: &RenderOptions, out: &mut String) {
    for master in store.masters() {
        let table = store
            .tabular_group(master)
            .and_then(|group| match group {
                Some(group) => Ok(Some(format_table(&group.batch, options)?)),
                None => Ok(None),
            });
        match table {
            Ok(Some(table)) => {
                let _ = writeln!(out, "\n{master}");
                out.push_str(&table);
            }
            Ok(None) => {}
            Err(err) => {
                warn!("Cannot render master group '{}': {}", master, err);
                let _ = writeln!(out, "\n{master}\n  <unavailable: {err}>");
            }
        }
    }
}
