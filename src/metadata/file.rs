use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use super::MetadataError;

/// Accepted layouts of the `date` field
const DATE_FORMATS: [&str; 3] = ["%d:%m:%Y", "%d.%m.%Y", "%Y-%m-%d"];

/// Accepted layouts of the `time` field
const TIME_FORMATS: [&str; 2] = ["%H:%M:%S%.f", "%H:%M:%S"];

/// Provenance fields of the source file
///
/// Exactly seven fields are recognized; all default to the empty string.
/// Replacing the metadata of a store is wholesale: build a new value with
/// `..Default::default()` for the fields you do not have.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMetadata {
    /// Author of the recording
    #[serde(default)]
    pub author: String,
    /// Organisation of the author
    #[serde(default)]
    pub organisation: String,
    /// Project name
    #[serde(default)]
    pub project: String,
    /// Subject under test (vehicle, bench, ...)
    #[serde(default)]
    pub subject: String,
    /// Free comment
    #[serde(default)]
    pub comment: String,
    /// Recording date as stored in the file
    #[serde(default)]
    pub date: String,
    /// Recording time as stored in the file
    #[serde(default)]
    pub time: String,
}

impl FileMetadata {
    /// Names of the recognized fields, in display order
    pub const FIELDS: [&'static str; 7] = [
        "author",
        "organisation",
        "project",
        "subject",
        "comment",
        "date",
        "time",
    ];

    /// Empty metadata
    pub fn new() -> Self {
        Self::default()
    }

    /// Field value by name, `None` for unrecognized names
    pub fn get(&self, field: &str) -> Option<&str> {
        let value = match field {
            "author" => &self.author,
            "organisation" => &self.organisation,
            "project" => &self.project,
            "subject" => &self.subject,
            "comment" => &self.comment,
            "date" => &self.date,
            "time" => &self.time,
            _ => return None,
        };
        Some(value)
    }

    /// `(name, value)` pairs in display order
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        Self::FIELDS
            .iter()
            .filter_map(move |name| self.get(name).map(|value| (*name, value)))
    }

    /// Returns true if every field is empty
    pub fn is_empty(&self) -> bool {
        self.fields().all(|(_, value)| value.is_empty())
    }

    /// Combine `date` and `time` into a timestamp
    pub fn recorded_at(&self) -> Result<NaiveDateTime, MetadataError> {
        let date = DATE_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(self.date.trim(), format).ok())
            .ok_or_else(|| MetadataError::InvalidTimestamp(format!("date '{}'", self.date)))?;
        let time = TIME_FORMATS
            .iter()
            .find_map(|format| NaiveTime::parse_from_str(self.time.trim(), format).ok())
            .ok_or_else(|| MetadataError::InvalidTimestamp(format!("time '{}'", self.time)))?;
        Ok(date.and_time(time))
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, MetadataError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize from JSON
    pub fn from_json(json: &str) -> Result<Self, MetadataError> {
        Ok(serde_json::from_str(json)?)
    }
}
