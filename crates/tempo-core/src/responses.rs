//! CLI response types returned as JSON by `tempo` commands.
//!
//! These structs define the shape of JSON output for commands like
//! `tempo job load`, `tempo job backup`, `tempo schedule gen`, and the
//! `stats` subcommands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Response from `tempo job load`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ImportReport {
    /// Rows appended to the job list.
    pub added: u32,
    /// Rows skipped because their identity key already existed.
    pub skipped: u32,
    /// Data rows present in the CSV file.
    pub total: u32,
}

/// Response from `tempo job stats`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct JobStats {
    pub total_jobs: u32,
    pub active_jobs: u32,
    pub deleted_jobs: u32,
    /// Absolute paths of every CSV file imported so far, in import order.
    pub csv_files: Vec<String>,
}

/// Response from `tempo schedule stats`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ScheduleStats {
    pub total: u32,
    pub completed: u32,
    pub in_progress: u32,
    pub not_started: u32,
}

/// Response from `tempo job backup`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BackupReport {
    pub backup_path: String,
    pub bytes: u64,
}

/// Result of the bulk future soft-delete inside the plan workflow.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ReplanReport {
    pub soft_deleted: u32,
}

/// Result of the batch slot generation inside the plan workflow.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GenReport {
    /// Slots actually inserted.
    pub generated: u32,
    /// Slots the total/unit arithmetic asked for.
    pub requested: u32,
    /// Minutes of the requested total not covered by a full slot.
    pub leftover_minutes: u32,
}
