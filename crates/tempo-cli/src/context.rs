use std::path::{Path, PathBuf};

use tempo_config::TempoConfig;
use tempo_store::jobs::JobBook;
use tempo_store::schedules::SchedulePlanner;

/// Resolved configuration plus the directory both documents live in.
pub struct AppContext {
    pub config: TempoConfig,
    data_dir: PathBuf,
}

impl AppContext {
    /// `--data-dir` beats the configured (or platform default) location.
    pub fn new(config: TempoConfig, data_dir_override: Option<&str>) -> Self {
        let data_dir = data_dir_override.map_or_else(
            || config.storage.resolved_data_dir(),
            PathBuf::from,
        );
        tracing::debug!(path = %data_dir.display(), "resolved data directory");
        Self { config, data_dir }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Open the job registry. Registries are cheap to open (one file read),
    /// so each command opens its own.
    pub fn job_book(&self) -> JobBook {
        JobBook::open(self.data_dir.join(&self.config.storage.job_file))
    }

    /// Open the schedule registry.
    pub fn schedule_planner(&self) -> SchedulePlanner {
        SchedulePlanner::open(self.data_dir.join(&self.config.storage.schedule_file))
    }

    /// Configured backup directory, if any; the registry falls back to a
    /// `backups/` sibling of the job file.
    pub fn backup_dir(&self) -> Option<PathBuf> {
        self.config.storage.backup_dir.clone()
    }
}
