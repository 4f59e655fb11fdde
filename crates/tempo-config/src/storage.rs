//! Storage location configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_job_file() -> String {
    String::from("job_list.json")
}

fn default_schedule_file() -> String {
    String::from("schedules.json")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory holding the persisted JSON documents. Defaults to the
    /// platform data dir (e.g. `~/.local/share/tempo`).
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// File name of the job-list document inside `data_dir`.
    #[serde(default = "default_job_file")]
    pub job_file: String,

    /// File name of the schedule document inside `data_dir`.
    #[serde(default = "default_schedule_file")]
    pub schedule_file: String,

    /// Where `job backup` writes its copies. Defaults to `backups/`
    /// beside the job-list file.
    #[serde(default)]
    pub backup_dir: Option<PathBuf>,
}

impl StorageConfig {
    /// Resolve the effective data directory.
    #[must_use]
    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("tempo")
        })
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            job_file: default_job_file(),
            schedule_file: default_schedule_file(),
            backup_dir: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_name_both_documents() {
        let config = StorageConfig::default();
        assert_eq!(config.job_file, "job_list.json");
        assert_eq!(config.schedule_file, "schedules.json");
        assert!(config.data_dir.is_none());
        assert!(config.backup_dir.is_none());
    }

    #[test]
    fn explicit_data_dir_wins() {
        let config = StorageConfig {
            data_dir: Some(PathBuf::from("/tmp/tempo-data")),
            ..StorageConfig::default()
        };
        assert_eq!(config.resolved_data_dir(), PathBuf::from("/tmp/tempo-data"));
    }
}
