use std::fmt::Write;

use super::RenderOptions;
use crate::channel::ChannelData;
use crate::store::ChannelStore;

/// Largest precision that still changes an f64's rendering
const MAX_PRECISION: usize = 17;

fn format_float(value: f64, options: &RenderOptions) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let precision = options.precision.min(MAX_PRECISION);
    let smallest = 10f64.powi(-(precision as i32));
    if !options.suppress_small && value != 0.0 && value.abs() < smallest {
        format!("{value:.precision$e}")
    } else {
        format!("{value:.precision$}")
    }
}

fn format_value(data: &ChannelData, index: usize, options: &RenderOptions) -> Option<String> {
    match data {
        ChannelData::Float64(v) => v.get(index).map(|x| format_float(*x, options)),
        ChannelData::Float32(v) => v.get(index).map(|x| format_float(f64::from(*x), options)),
        ChannelData::Int64(v) => v.get(index).map(ToString::to_string),
        ChannelData::Int32(v) => v.get(index).map(ToString::to_string),
        ChannelData::Int16(v) => v.get(index).map(ToString::to_string),
        ChannelData::Int8(v) => v.get(index).map(ToString::to_string),
        ChannelData::UInt64(v) => v.get(index).map(ToString::to_string),
        ChannelData::UInt32(v) => v.get(index).map(ToString::to_string),
        ChannelData::UInt16(v) => v.get(index).map(ToString::to_string),
        ChannelData::UInt8(v) => v.get(index).map(ToString::to_string),
        ChannelData::Bytes(_) => None,
    }
}

/// Bracketed preview of a sample array, eliding the middle of long arrays.
///
/// Returns `None` for byte records, which have no printable form.
pub fn preview(data: &ChannelData, options: &RenderOptions) -> Option<String> {
    if data.is_byte_records() {
        return None;
    }
    let len = data.len();
    let edge = options.edge_items;
    let items: Vec<String> = if len > options.threshold && edge.saturating_mul(2) < len {
        (0..edge)
            .filter_map(|i| format_value(data, i, options))
            .chain(std::iter::once("...".to_string()))
            .chain((len - edge..len).filter_map(|i| format_value(data, i, options)))
            .collect()
    } else {
        (0..len)
            .filter_map(|i| format_value(data, i, options))
            .collect()
    };
    Some(format!("[{}]", items.join(", ")))
}

/// Channels listed master by master, with description, preview and unit
pub(super) fn render_records(store: &ChannelStore, options: &RenderOptions, out: &mut String) {
    out.push_str("\nchannels listed by data groups:\n");
    for entry in store.master_channel_index().entries() {
        if let Some(master) = entry.master().as_str() {
            let _ = writeln!(out, "{master}");
        }
        for name in entry.channels() {
            let Some(channel) = store.get_channel(name) else {
                continue;
            };
            let record = channel.read();
            let _ = writeln!(out, "  {name} : {}", record.description);
            out.push_str("    ");
            match preview(&record.data, options) {
                Some(values) => out.push_str(&values),
                None => {
                    let _ = write!(out, "<{} byte records>", record.data.len());
                }
            }
            let _ = writeln!(out, " {}", record.unit);
        }
    }
}
