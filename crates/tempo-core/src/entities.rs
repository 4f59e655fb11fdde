//! Entity structs for the two persisted record kinds.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ScheduleStatus;

fn is_false(value: &bool) -> bool {
    !*value
}

/// A saved job/link record imported from a CSV export.
///
/// Known columns map to named fields; any other CSV column passes through
/// `extra` unvalidated and survives round-trips untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Job {
    /// Source link. Primary identity when non-empty.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub link: String,
    #[serde(default)]
    pub title: String,
    /// Share/publish timestamp as it appeared in the CSV.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub timestamp: String,
    /// Comma+space-joined tag list; empty means untagged.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub tags: String,
    /// Free text, may contain embedded newlines.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub summary: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub deleted: bool,
    /// Local time of the soft delete, `YYYY-MM-DD HH:MM:SS`. Present only
    /// while `deleted` is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<String>,
    /// Passthrough for CSV columns the tool does not interpret.
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl Job {
    /// Identity key used for deduplication and addressing: the link when
    /// present, otherwise `"{title}|{timestamp}"`. Never re-validated after
    /// import, so edits to title/timestamp move the record under a new key.
    #[must_use]
    pub fn key(&self) -> String {
        if self.link.is_empty() {
            format!("{}|{}", self.title, self.timestamp)
        } else {
            self.link.clone()
        }
    }
}

/// A time-boxed schedule slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Schedule {
    /// Assigned as `max(existing) + 1`; never reused after a hard delete.
    pub id: u64,
    /// `YYYY-MM-DD` or `YYYY-MM-DD HH:MM`; `end >= start` always holds.
    pub start: String,
    pub end: String,
    pub task: String,
    pub status: ScheduleStatus,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Why the slot matters; free text kept as a motivator.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value_note: String,
    /// Set once at creation, `YYYY-MM-DD HH:MM:SS` local time.
    pub created_at: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub deleted: bool,
}
