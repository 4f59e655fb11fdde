//! Job registry — CSV import with dedup, tags, soft delete, search.
//!
//! Every mutating operation applies to the in-memory list first and then
//! rewrites the whole document. A failed save returns an error while the
//! in-memory mutation stays applied (fire-and-forget persistence).

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use tempo_core::entities::Job;
use tempo_core::responses::{BackupReport, ImportReport, JobStats};
use tempo_core::stamp;

use crate::csv_import;
use crate::document;
use crate::error::StoreError;

/// Persisted document: previously imported CSV paths plus the job records,
/// both in append order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobList {
    #[serde(default)]
    pub csv_files: Vec<String>,
    #[serde(default)]
    pub jobs: Vec<Job>,
}

/// Search criteria for [`JobBook::search`].
///
/// `keyword` alone matches title OR tags. `title` and `tag` together must
/// both match (AND); either one alone matches its own field.
#[derive(Debug, Clone, Default)]
pub struct JobQuery {
    pub keyword: Option<String>,
    pub title: Option<String>,
    pub tag: Option<String>,
    pub case_sensitive: bool,
    pub include_deleted: bool,
}

/// The job registry, bound to one JSON document.
pub struct JobBook {
    path: PathBuf,
    list: JobList,
}

impl JobBook {
    /// Open the registry, loading the document if it exists.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let list = document::load(&path);
        Self { path, list }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn jobs(&self) -> &[Job] {
        &self.list.jobs
    }

    #[must_use]
    pub fn csv_files(&self) -> &[String] {
        &self.list.csv_files
    }

    fn save(&self) -> Result<(), StoreError> {
        document::save(&self.path, &self.list)
    }

    /// Import a CSV export, appending rows whose identity key is new.
    ///
    /// Rejected outright: a missing file, a path already imported (compared
    /// case-sensitively on the normalized absolute path), and a header set
    /// containing neither `link` nor `title`.
    pub fn import_csv(&mut self, csv_path: &Path) -> Result<ImportReport, StoreError> {
        if !csv_path.exists() {
            return Err(StoreError::NotFound(format!(
                "file does not exist: {}",
                csv_path.display()
            )));
        }
        let normalized = std::path::absolute(csv_path)?.display().to_string();
        if self.list.csv_files.contains(&normalized) {
            return Err(StoreError::Validation(format!(
                "file already imported: {normalized}"
            )));
        }

        let (headers, rows) = csv_import::read_rows(csv_path)?;
        if !headers.iter().any(|h| h == "link" || h == "title") {
            return Err(StoreError::Validation(String::from(
                "CSV file has neither a 'link' nor a 'title' column",
            )));
        }

        let mut seen: HashSet<String> = self.list.jobs.iter().map(Job::key).collect();
        let total = clamp_count(rows.len());
        let mut added = 0;
        let mut skipped = 0;

        for row in rows {
            let job = job_from_row(row);
            let key = job.key();
            if seen.contains(&key) {
                skipped += 1;
            } else {
                seen.insert(key);
                self.list.jobs.push(job);
                added += 1;
            }
        }

        self.list.csv_files.push(normalized);
        self.save()?;
        Ok(ImportReport {
            added,
            skipped,
            total,
        })
    }

    /// Active jobs (or all jobs), optionally truncated.
    #[must_use]
    pub fn list(&self, limit: Option<usize>, include_deleted: bool) -> Vec<Job> {
        let mut jobs: Vec<Job> = self
            .list
            .jobs
            .iter()
            .filter(|job| include_deleted || !job.deleted)
            .cloned()
            .collect();
        if let Some(limit) = limit {
            jobs.truncate(limit);
        }
        jobs
    }

    /// Soft-deleted jobs, in storage order.
    #[must_use]
    pub fn deleted(&self) -> Vec<Job> {
        self.list
            .jobs
            .iter()
            .filter(|job| job.deleted)
            .cloned()
            .collect()
    }

    /// First record whose identity key matches.
    #[must_use]
    pub fn find(&self, key: &str, include_deleted: bool) -> Option<&Job> {
        self.list
            .jobs
            .iter()
            .find(|job| job.key() == key && (include_deleted || !job.deleted))
    }

    /// Index into the freshly computed filtered view (not raw storage).
    ///
    /// The same record moves between indices as other records are deleted
    /// or restored, so callers must re-resolve after any such change —
    /// resolve the index to an identity key immediately and address by key
    /// from then on.
    #[must_use]
    pub fn find_by_index(&self, index: usize, include_deleted: bool) -> Option<&Job> {
        self.list
            .jobs
            .iter()
            .filter(|job| include_deleted || !job.deleted)
            .nth(index)
    }

    /// Index into the deleted-only view (the `list-deleted` numbering).
    #[must_use]
    pub fn find_deleted_by_index(&self, index: usize) -> Option<&Job> {
        self.list.jobs.iter().filter(|job| job.deleted).nth(index)
    }

    /// Merge patch entries into the record: known names update their
    /// fields, anything else lands in the passthrough columns. The
    /// soft-delete fields are managed by `soft_delete`/`restore` and are
    /// rejected here.
    pub fn update_fields(
        &mut self,
        key: &str,
        patch: &[(String, String)],
    ) -> Result<Job, StoreError> {
        if patch.is_empty() {
            return Err(StoreError::Validation(String::from(
                "no fields provided to update",
            )));
        }
        if patch
            .iter()
            .any(|(field, _)| field == "deleted" || field == "deleted_at")
        {
            return Err(StoreError::Validation(String::from(
                "deleted/deleted_at are managed by delete and restore",
            )));
        }

        let index = self.position(key)?;
        let job = &mut self.list.jobs[index];
        for (field, value) in patch {
            match field.as_str() {
                "link" => job.link = value.clone(),
                "title" => job.title = value.clone(),
                "timestamp" => job.timestamp = value.clone(),
                "tags" => job.tags = value.clone(),
                "summary" => job.summary = value.clone(),
                _ => {
                    job.extra.insert(field.clone(), value.clone());
                }
            }
        }
        let updated = job.clone();
        self.save()?;
        Ok(updated)
    }

    /// Add a tag unless it is already present (idempotent).
    pub fn add_tag(&mut self, key: &str, tag: &str) -> Result<Job, StoreError> {
        let index = self.position(key)?;
        let job = &mut self.list.jobs[index];

        let mut tags = split_tags(&job.tags);
        if !tags.iter().any(|existing| existing == tag) {
            tags.push(tag.to_string());
            job.tags = tags.join(", ");
            let updated = job.clone();
            self.save()?;
            return Ok(updated);
        }
        Ok(job.clone())
    }

    /// Remove a tag; fails with [`StoreError::TagMissing`] when absent.
    pub fn remove_tag(&mut self, key: &str, tag: &str) -> Result<Job, StoreError> {
        let index = self.position(key)?;
        let job = &mut self.list.jobs[index];

        let mut tags = split_tags(&job.tags);
        let before = tags.len();
        tags.retain(|existing| existing != tag);
        if tags.len() == before {
            return Err(StoreError::TagMissing(tag.to_string()));
        }
        job.tags = tags.join(", ");
        let updated = job.clone();
        self.save()?;
        Ok(updated)
    }

    /// Mark a record deleted and stamp the deletion time.
    pub fn soft_delete(&mut self, key: &str) -> Result<Job, StoreError> {
        let index = self.position(key)?;
        let job = &mut self.list.jobs[index];
        if job.deleted {
            return Err(StoreError::AlreadyDeleted);
        }
        job.deleted = true;
        job.deleted_at = Some(stamp::now_second());
        let updated = job.clone();
        self.save()?;
        Ok(updated)
    }

    /// Undo a soft delete, clearing both delete fields.
    pub fn restore(&mut self, key: &str) -> Result<Job, StoreError> {
        let index = self.position(key)?;
        let job = &mut self.list.jobs[index];
        if !job.deleted {
            return Err(StoreError::NotDeleted);
        }
        job.deleted = false;
        job.deleted_at = None;
        let updated = job.clone();
        self.save()?;
        Ok(updated)
    }

    /// Substring search over title and tags; see [`JobQuery`] for the
    /// matching modes. Returns an empty list when no criteria are given.
    #[must_use]
    pub fn search(&self, query: &JobQuery) -> Vec<Job> {
        let fold = |text: &str| {
            if query.case_sensitive {
                text.to_string()
            } else {
                text.to_lowercase()
            }
        };

        self.list
            .jobs
            .iter()
            .filter(|job| query.include_deleted || !job.deleted)
            .filter(|job| {
                let title = fold(&job.title);
                let tags = fold(&job.tags);
                if let Some(keyword) = &query.keyword {
                    let needle = fold(keyword);
                    title.contains(&needle) || tags.contains(&needle)
                } else {
                    match (&query.title, &query.tag) {
                        (Some(by_title), Some(by_tag)) => {
                            title.contains(&fold(by_title)) && tags.contains(&fold(by_tag))
                        }
                        (Some(by_title), None) => title.contains(&fold(by_title)),
                        (None, Some(by_tag)) => tags.contains(&fold(by_tag)),
                        (None, None) => false,
                    }
                }
            })
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn stats(&self) -> JobStats {
        let deleted = self.list.jobs.iter().filter(|job| job.deleted).count();
        JobStats {
            total_jobs: clamp_count(self.list.jobs.len()),
            active_jobs: clamp_count(self.list.jobs.len() - deleted),
            deleted_jobs: clamp_count(deleted),
            csv_files: self.list.csv_files.clone(),
        }
    }

    /// Copy the persisted document verbatim to a timestamped backup file,
    /// creating the destination directory (default: `backups/` beside the
    /// store file) if needed.
    pub fn backup(&self, dest_dir: Option<&Path>) -> Result<BackupReport, StoreError> {
        if !self.path.exists() {
            return Err(StoreError::NotFound(format!(
                "store file does not exist yet: {}",
                self.path.display()
            )));
        }
        let dir = dest_dir.map_or_else(
            || {
                self.path
                    .parent()
                    .unwrap_or_else(|| Path::new("."))
                    .join("backups")
            },
            Path::to_path_buf,
        );
        fs::create_dir_all(&dir)?;

        let backup_path = dir.join(format!("job_list_backup_{}.json", stamp::now_compact()));
        let bytes = fs::copy(&self.path, &backup_path)?;
        Ok(BackupReport {
            backup_path: backup_path.display().to_string(),
            bytes,
        })
    }

    /// Drop every record and the import history.
    pub fn clear_all(&mut self) -> Result<(), StoreError> {
        self.list.jobs.clear();
        self.list.csv_files.clear();
        self.save()
    }

    fn position(&self, key: &str) -> Result<usize, StoreError> {
        self.list
            .jobs
            .iter()
            .position(|job| job.key() == key)
            .ok_or_else(|| StoreError::NotFound(format!("no job with key '{key}'")))
    }
}

/// Split the stored comma-joined tag string into trimmed tags.
fn split_tags(tags: &str) -> Vec<String> {
    tags.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Build a job from a CSV row: known columns become fields, the rest pass
/// through. Soft-delete bookkeeping never comes from a CSV.
fn job_from_row(mut row: BTreeMap<String, String>) -> Job {
    let mut take = |name: &str| row.remove(name).unwrap_or_default();
    let job = Job {
        link: take("link"),
        title: take("title"),
        timestamp: take("timestamp"),
        tags: take("tags"),
        summary: take("summary"),
        deleted: false,
        deleted_at: None,
        extra: BTreeMap::new(),
    };
    row.remove("deleted");
    row.remove("deleted_at");
    Job { extra: row, ..job }
}

fn clamp_count(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}
