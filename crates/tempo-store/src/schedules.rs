//! Schedule registry — time-boxed slots with status tracking.
//!
//! Records carry their endpoints as flexible stamps (date-only or minute
//! precision) and keep `end >= start` at all times. As in the job
//! registry, mutations hit the in-memory list first and then rewrite the
//! whole document; a failed save leaves the memory state applied.

use std::path::{Path, PathBuf};

use chrono::{Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use tempo_core::entities::Schedule;
use tempo_core::enums::ScheduleStatus;
use tempo_core::responses::{ReplanReport, ScheduleStats};
use tempo_core::stamp::{self, Granularity};

use crate::document;
use crate::error::StoreError;

/// Persisted document: schedule records in append order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleList {
    #[serde(default)]
    pub schedules: Vec<Schedule>,
}

/// Input for [`SchedulePlanner::add`].
#[derive(Debug, Clone)]
pub struct ScheduleDraft {
    pub start: String,
    pub end: String,
    pub task: String,
    pub status: ScheduleStatus,
    pub description: String,
    pub value_note: String,
}

/// Filters for [`SchedulePlanner::list`]. Date bounds compare against the
/// date portion of the record stamps only.
#[derive(Debug, Clone, Default)]
pub struct ScheduleFilter {
    pub limit: Option<usize>,
    pub status: Option<ScheduleStatus>,
    pub start_from: Option<NaiveDate>,
    pub end_until: Option<NaiveDate>,
    pub include_deleted: bool,
}

/// How a record is addressed: by id, or by position in the active sorted
/// view that `list` (with no filters) would print.
#[derive(Debug, Clone, Copy)]
pub enum ScheduleTarget {
    Id(u64),
    Index(usize),
}

/// Partial update for [`SchedulePlanner::update`]. Endpoint edits are
/// re-validated against the other (possibly unmodified) endpoint.
#[derive(Debug, Clone, Default)]
pub struct SchedulePatch {
    pub start: Option<String>,
    pub end: Option<String>,
    pub task: Option<String>,
    pub status: Option<ScheduleStatus>,
    pub description: Option<String>,
    pub value_note: Option<String>,
}

impl SchedulePatch {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start.is_none()
            && self.end.is_none()
            && self.task.is_none()
            && self.status.is_none()
            && self.description.is_none()
            && self.value_note.is_none()
    }
}

/// The schedule registry, bound to one JSON document.
pub struct SchedulePlanner {
    path: PathBuf,
    list: ScheduleList,
}

impl SchedulePlanner {
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
    pub fn schedules(&self) -> &[Schedule] {
        &self.list.schedules
    }

    fn save(&self) -> Result<(), StoreError> {
        document::save(&self.path, &self.list)
    }

    /// Validate and append a new slot. The id is `max(existing) + 1`, so
    /// hard-deleting anything but the newest record never frees its id.
    pub fn add(&mut self, draft: ScheduleDraft) -> Result<Schedule, StoreError> {
        let start_dt = stamp::parse(&draft.start)?;
        let end_dt = stamp::parse(&draft.end)?;
        if end_dt < start_dt {
            return Err(StoreError::Validation(String::from(
                "end must not be earlier than start",
            )));
        }

        let id = self
            .list
            .schedules
            .iter()
            .map(|schedule| schedule.id)
            .max()
            .map_or(0, |max| max + 1);

        let schedule = Schedule {
            id,
            start: draft.start,
            end: draft.end,
            task: draft.task,
            status: draft.status,
            description: draft.description,
            value_note: draft.value_note,
            created_at: stamp::now_second(),
            deleted: false,
        };
        self.list.schedules.push(schedule.clone());
        self.save()?;
        Ok(schedule)
    }

    /// Filtered view, ascending by parsed start time.
    ///
    /// A record whose stamp fails to parse is never filtered out by the
    /// date bounds, and if any record's start fails to parse the sort is
    /// skipped entirely and input order is kept.
    #[must_use]
    pub fn list(&self, filter: &ScheduleFilter) -> Vec<Schedule> {
        let mut items: Vec<Schedule> = self
            .list
            .schedules
            .iter()
            .filter(|schedule| filter.include_deleted || !schedule.deleted)
            .filter(|schedule| {
                filter
                    .status
                    .is_none_or(|status| schedule.status == status)
            })
            .filter(|schedule| {
                filter.start_from.is_none_or(|floor| {
                    stamp::date_part(&schedule.start).map_or(true, |date| date >= floor)
                })
            })
            .filter(|schedule| {
                filter.end_until.is_none_or(|ceiling| {
                    stamp::date_part(&schedule.end).map_or(true, |date| date <= ceiling)
                })
            })
            .cloned()
            .collect();

        sort_by_stamp(&mut items, start_stamp, false);
        if let Some(limit) = filter.limit {
            items.truncate(limit);
        }
        items
    }

    /// Look up by id across all records, including soft-deleted ones.
    #[must_use]
    pub fn find_by_id(&self, id: u64) -> Option<&Schedule> {
        self.list.schedules.iter().find(|schedule| schedule.id == id)
    }

    /// Index into the active sorted view (the numbering `list` with no
    /// filters prints). Resolved to an id immediately; callers must
    /// re-resolve indices after any delete or restore.
    #[must_use]
    pub fn find_by_index(&self, index: usize) -> Option<Schedule> {
        self.list(&ScheduleFilter::default()).into_iter().nth(index)
    }

    /// Apply a partial update. Empty patches are rejected; endpoint
    /// changes keep `end >= start` against the other endpoint.
    pub fn update(
        &mut self,
        target: ScheduleTarget,
        patch: SchedulePatch,
    ) -> Result<Schedule, StoreError> {
        if patch.is_empty() {
            return Err(StoreError::Validation(String::from(
                "no fields provided to update",
            )));
        }
        let index = self.resolve(target)?;

        if patch.start.is_some() || patch.end.is_some() {
            let current = &self.list.schedules[index];
            let start_raw = patch.start.as_deref().unwrap_or(&current.start);
            let end_raw = patch.end.as_deref().unwrap_or(&current.end);
            let start_dt = stamp::parse(start_raw)?;
            let end_dt = stamp::parse(end_raw)?;
            if end_dt < start_dt {
                return Err(StoreError::Validation(String::from(
                    "end must not be earlier than start",
                )));
            }
        }

        let schedule = &mut self.list.schedules[index];
        if let Some(start) = patch.start {
            schedule.start = start;
        }
        if let Some(end) = patch.end {
            schedule.end = end;
        }
        if let Some(task) = patch.task {
            schedule.task = task;
        }
        if let Some(status) = patch.status {
            schedule.status = status;
        }
        if let Some(description) = patch.description {
            schedule.description = description;
        }
        if let Some(value_note) = patch.value_note {
            schedule.value_note = value_note;
        }

        let updated = schedule.clone();
        self.save()?;
        Ok(updated)
    }

    /// Remove the record outright. Its id is never assigned again while a
    /// higher id remains in storage.
    pub fn delete(&mut self, target: ScheduleTarget) -> Result<Schedule, StoreError> {
        let index = self.resolve(target)?;
        let removed = self.list.schedules.remove(index);
        self.save()?;
        Ok(removed)
    }

    /// Mark the record deleted; it stays in storage.
    pub fn soft_delete(&mut self, target: ScheduleTarget) -> Result<Schedule, StoreError> {
        let index = self.resolve(target)?;
        self.list.schedules[index].deleted = true;
        let updated = self.list.schedules[index].clone();
        self.save()?;
        Ok(updated)
    }

    /// Push the end stamp out by `minutes` (> 0), preserving its date-only
    /// vs minute granularity, and mark the slot postponed.
    pub fn extend(&mut self, target: ScheduleTarget, minutes: f64) -> Result<Schedule, StoreError> {
        if !minutes.is_finite() || minutes <= 0.0 {
            return Err(StoreError::Validation(String::from(
                "extension must be a positive number of minutes",
            )));
        }
        let index = self.resolve(target)?;

        let end_raw = self.list.schedules[index].end.clone();
        let end_dt = stamp::parse(&end_raw)?;
        #[allow(clippy::cast_possible_truncation)]
        let shift = Duration::seconds((minutes * 60.0).round() as i64);

        let schedule = &mut self.list.schedules[index];
        schedule.end = stamp::format(end_dt + shift, Granularity::of(&end_raw));
        schedule.status = ScheduleStatus::Postponed;
        let updated = schedule.clone();
        self.save()?;
        Ok(updated)
    }

    /// Active slots that start after now, ascending by start.
    #[must_use]
    pub fn future(&self) -> Vec<Schedule> {
        let now = Local::now().naive_local();
        let mut items = self.active_where(|schedule| {
            stamp::parse(&schedule.start).is_ok_and(|start| start > now)
        });
        sort_by_stamp(&mut items, start_stamp, false);
        items
    }

    /// Active slots with `start <= now <= end`, ascending by start.
    #[must_use]
    pub fn in_progress(&self) -> Vec<Schedule> {
        let now = Local::now().naive_local();
        let mut items = self.active_where(|schedule| {
            let Ok(start) = stamp::parse(&schedule.start) else {
                return false;
            };
            let Ok(end) = stamp::parse(&schedule.end) else {
                return false;
            };
            start <= now && now <= end
        });
        sort_by_stamp(&mut items, start_stamp, false);
        items
    }

    /// Active, not completed, already past their end; most recent first.
    #[must_use]
    pub fn expired(&self) -> Vec<Schedule> {
        let now = Local::now().naive_local();
        let mut items = self.active_where(|schedule| {
            schedule.status != ScheduleStatus::Completed
                && stamp::parse(&schedule.end).is_ok_and(|end| end < now)
        });
        sort_by_stamp(&mut items, end_stamp, true);
        items
    }

    /// Active slots that ended within the past `days` days; most recent
    /// first.
    #[must_use]
    pub fn history(&self, days: u32) -> Vec<Schedule> {
        let now = Local::now().naive_local();
        let floor = now - Duration::days(i64::from(days));
        let mut items = self.active_where(|schedule| {
            stamp::parse(&schedule.end).is_ok_and(|end| end < now && end >= floor)
        });
        sort_by_stamp(&mut items, end_stamp, true);
        items
    }

    /// Substring search over task, description, and value note; criteria
    /// OR-merge. Soft-deleted records are searchable (a deleted slot's
    /// notes still answer "what did I plan?"). Ascending by start.
    #[must_use]
    pub fn search(&self, query: &ScheduleQuery) -> Vec<Schedule> {
        let fold = |text: &str| {
            if query.case_sensitive {
                text.to_string()
            } else {
                text.to_lowercase()
            }
        };

        let mut items: Vec<Schedule> = self
            .list
            .schedules
            .iter()
            .filter(|schedule| {
                let task = fold(&schedule.task);
                let description = fold(&schedule.description);
                let value_note = fold(&schedule.value_note);

                let keyword_hit = query.keyword.as_deref().is_some_and(|keyword| {
                    let needle = fold(keyword);
                    task.contains(&needle)
                        || description.contains(&needle)
                        || value_note.contains(&needle)
                });
                let task_hit = query
                    .task
                    .as_deref()
                    .is_some_and(|needle| task.contains(&fold(needle)));
                let description_hit = query
                    .description
                    .as_deref()
                    .is_some_and(|needle| description.contains(&fold(needle)));
                let value_hit = query
                    .value_note
                    .as_deref()
                    .is_some_and(|needle| value_note.contains(&fold(needle)));

                keyword_hit || task_hit || description_hit || value_hit
            })
            .cloned()
            .collect();

        sort_by_stamp(&mut items, start_stamp, false);
        items
    }

    /// Soft-delete every active slot whose **end** stamp is in the future
    /// and report how many were hit.
    ///
    /// Deliberately keyed off the end time, not the start time the
    /// `future` view uses: a slot already underway is still cleared by a
    /// replan.
    pub fn soft_delete_future(&mut self) -> Result<ReplanReport, StoreError> {
        let now = Local::now().naive_local();
        let mut count = 0u32;
        for schedule in &mut self.list.schedules {
            if schedule.deleted {
                continue;
            }
            if stamp::parse(&schedule.end).is_ok_and(|end| end > now) {
                schedule.deleted = true;
                count += 1;
            }
        }
        self.save()?;
        Ok(ReplanReport { soft_deleted: count })
    }

    #[must_use]
    pub fn stats(&self) -> ScheduleStats {
        let count = |status: ScheduleStatus| {
            u32::try_from(
                self.list
                    .schedules
                    .iter()
                    .filter(|schedule| schedule.status == status)
                    .count(),
            )
            .unwrap_or(u32::MAX)
        };
        ScheduleStats {
            total: u32::try_from(self.list.schedules.len()).unwrap_or(u32::MAX),
            completed: count(ScheduleStatus::Completed),
            in_progress: count(ScheduleStatus::InProgress),
            not_started: count(ScheduleStatus::NotStarted),
        }
    }

    fn active_where(&self, keep: impl Fn(&Schedule) -> bool) -> Vec<Schedule> {
        self.list
            .schedules
            .iter()
            .filter(|schedule| !schedule.deleted && keep(schedule))
            .cloned()
            .collect()
    }

    fn resolve(&self, target: ScheduleTarget) -> Result<usize, StoreError> {
        let id = match target {
            ScheduleTarget::Id(id) => id,
            ScheduleTarget::Index(index) => {
                self.find_by_index(index)
                    .ok_or_else(|| {
                        StoreError::NotFound(format!("no schedule at index {index}"))
                    })?
                    .id
            }
        };
        self.list
            .schedules
            .iter()
            .position(|schedule| schedule.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("no schedule with id {id}")))
    }
}

/// Search criteria for [`SchedulePlanner::search`]; provided criteria
/// OR-merge, and `keyword` spans all three text fields.
#[derive(Debug, Clone, Default)]
pub struct ScheduleQuery {
    pub keyword: Option<String>,
    pub task: Option<String>,
    pub description: Option<String>,
    pub value_note: Option<String>,
    pub case_sensitive: bool,
}

fn start_stamp(schedule: &Schedule) -> &str {
    &schedule.start
}

fn end_stamp(schedule: &Schedule) -> &str {
    &schedule.end
}

/// Sort by a parsed stamp. If any record's stamp fails to parse the sort
/// is skipped and input order is kept — the global fallback the list view
/// promises.
fn sort_by_stamp(items: &mut [Schedule], key: fn(&Schedule) -> &str, descending: bool) {
    let all_parse = items
        .iter()
        .all(|schedule| stamp::parse(key(schedule)).is_ok());
    if !all_parse {
        return;
    }
    items.sort_by_key(|schedule| stamp::parse(key(schedule)).ok());
    if descending {
        items.reverse();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::test_support::helpers::{by_id, draft, minutes_from_now, schedule_planner};

    use super::*;

    #[test]
    fn add_assigns_incrementing_ids() {
        let (_dir, mut planner) = schedule_planner();
        let a = planner
            .add(draft("2025-06-01 09:00", "2025-06-01 10:00", "A"))
            .unwrap();
        let b = planner
            .add(draft("2025-06-01 10:00", "2025-06-01 11:00", "B"))
            .unwrap();
        assert_eq!((a.id, b.id), (0, 1));
    }

    #[test]
    fn ids_are_not_reused_after_hard_delete_of_older_records() {
        let (_dir, mut planner) = schedule_planner();
        planner
            .add(draft("2025-06-01 09:00", "2025-06-01 10:00", "A"))
            .unwrap();
        let b = planner
            .add(draft("2025-06-01 10:00", "2025-06-01 11:00", "B"))
            .unwrap();
        planner.delete(ScheduleTarget::Id(0)).unwrap();

        let c = planner
            .add(draft("2025-06-01 11:00", "2025-06-01 12:00", "C"))
            .unwrap();
        assert_eq!(b.id, 1);
        assert_eq!(c.id, 2);
    }

    #[test]
    fn add_rejects_end_before_start() {
        let (_dir, mut planner) = schedule_planner();
        let result = planner.add(draft("2025-01-02", "2025-01-01", "x"));
        assert!(matches!(result, Err(StoreError::Validation(_))));
        assert!(planner.schedules().is_empty());
    }

    #[test]
    fn add_rejects_malformed_stamp() {
        let (_dir, mut planner) = schedule_planner();
        let result = planner.add(draft("someday", "2025-01-02", "x"));
        assert!(matches!(result, Err(StoreError::Core(_))));
    }

    #[test]
    fn add_accepts_mixed_granularity() {
        let (_dir, mut planner) = schedule_planner();
        let schedule = planner.add(draft("2025-06-01", "2025-06-01 08:30", "x")).unwrap();
        assert_eq!(schedule.start, "2025-06-01");
        assert_eq!(schedule.end, "2025-06-01 08:30");
    }

    #[test]
    fn list_sorts_ascending_by_start() {
        let (_dir, mut planner) = schedule_planner();
        planner
            .add(draft("2025-06-01 09:00", "2025-06-01 10:00", "A"))
            .unwrap();
        planner
            .add(draft("2025-06-01 08:00", "2025-06-01 08:30", "B"))
            .unwrap();

        let tasks: Vec<String> = planner
            .list(&ScheduleFilter::default())
            .into_iter()
            .map(|schedule| schedule.task)
            .collect();
        assert_eq!(tasks, vec!["B", "A"]);
    }

    #[test]
    fn list_filters_by_status() {
        let (_dir, mut planner) = schedule_planner();
        planner
            .add(draft("2025-06-01 09:00", "2025-06-01 10:00", "A"))
            .unwrap();
        let b = planner
            .add(draft("2025-06-01 10:00", "2025-06-01 11:00", "B"))
            .unwrap();
        planner
            .update(
                ScheduleTarget::Id(b.id),
                SchedulePatch {
                    status: Some(ScheduleStatus::Completed),
                    ..SchedulePatch::default()
                },
            )
            .unwrap();

        let completed = planner.list(&ScheduleFilter {
            status: Some(ScheduleStatus::Completed),
            ..ScheduleFilter::default()
        });
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].task, "B");
    }

    #[test]
    fn list_date_bounds_use_date_part_only() {
        let (_dir, mut planner) = schedule_planner();
        planner
            .add(draft("2025-06-01 23:00", "2025-06-01 23:30", "early"))
            .unwrap();
        planner
            .add(draft("2025-06-03 00:10", "2025-06-03 01:00", "late"))
            .unwrap();

        let filtered = planner.list(&ScheduleFilter {
            start_from: NaiveDate::from_ymd_opt(2025, 6, 2),
            ..ScheduleFilter::default()
        });
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].task, "late");

        let capped = planner.list(&ScheduleFilter {
            end_until: NaiveDate::from_ymd_opt(2025, 6, 1),
            ..ScheduleFilter::default()
        });
        assert_eq!(capped.len(), 1);
        assert_eq!(capped[0].task, "early");
    }

    #[test]
    fn list_respects_limit_after_sorting() {
        let (_dir, mut planner) = schedule_planner();
        planner
            .add(draft("2025-06-01 09:00", "2025-06-01 10:00", "second"))
            .unwrap();
        planner
            .add(draft("2025-06-01 08:00", "2025-06-01 08:30", "first"))
            .unwrap();

        let limited = planner.list(&ScheduleFilter {
            limit: Some(1),
            ..ScheduleFilter::default()
        });
        assert_eq!(limited.len(), 1);
        assert_eq!(limited[0].task, "first");
    }

    #[test]
    fn index_addresses_the_sorted_active_view() {
        let (_dir, mut planner) = schedule_planner();
        let later = planner
            .add(draft("2025-06-01 09:00", "2025-06-01 10:00", "later"))
            .unwrap();
        planner
            .add(draft("2025-06-01 08:00", "2025-06-01 08:30", "earlier"))
            .unwrap();

        // Index 0 is the earliest start, not the first inserted.
        assert_eq!(planner.find_by_index(0).unwrap().task, "earlier");
        assert_eq!(planner.find_by_index(1).unwrap().id, later.id);
        assert!(planner.find_by_index(2).is_none());
    }

    #[test]
    fn update_requires_at_least_one_field() {
        let (_dir, mut planner) = schedule_planner();
        let a = planner
            .add(draft("2025-06-01 09:00", "2025-06-01 10:00", "A"))
            .unwrap();

        let result = planner.update(ScheduleTarget::Id(a.id), SchedulePatch::default());
        assert!(matches!(result, Err(StoreError::Validation(_))));
    }

    #[test]
    fn update_validates_new_end_against_existing_start() {
        let (_dir, mut planner) = schedule_planner();
        let a = planner
            .add(draft("2025-06-01 09:00", "2025-06-01 10:00", "A"))
            .unwrap();

        let result = planner.update(
            ScheduleTarget::Id(a.id),
            SchedulePatch {
                end: Some(String::from("2025-06-01 08:00")),
                ..SchedulePatch::default()
            },
        );
        assert!(matches!(result, Err(StoreError::Validation(_))));
        assert_eq!(planner.find_by_id(a.id).unwrap().end, "2025-06-01 10:00");
    }

    #[test]
    fn update_validates_new_start_against_existing_end() {
        let (_dir, mut planner) = schedule_planner();
        let a = planner
            .add(draft("2025-06-01 09:00", "2025-06-01 10:00", "A"))
            .unwrap();

        let result = planner.update(
            ScheduleTarget::Id(a.id),
            SchedulePatch {
                start: Some(String::from("2025-06-01 11:00")),
                ..SchedulePatch::default()
            },
        );
        assert!(matches!(result, Err(StoreError::Validation(_))));
    }

    #[test]
    fn update_moves_both_endpoints_together() {
        let (_dir, mut planner) = schedule_planner();
        let a = planner
            .add(draft("2025-06-01 09:00", "2025-06-01 10:00", "A"))
            .unwrap();

        let updated = planner
            .update(
                ScheduleTarget::Id(a.id),
                SchedulePatch {
                    start: Some(String::from("2025-06-02 09:00")),
                    end: Some(String::from("2025-06-02 10:00")),
                    ..SchedulePatch::default()
                },
            )
            .unwrap();
        assert_eq!(updated.start, "2025-06-02 09:00");
        assert_eq!(updated.end, "2025-06-02 10:00");
    }

    #[test]
    fn hard_delete_removes_the_record() {
        let (_dir, mut planner) = schedule_planner();
        let a = planner
            .add(draft("2025-06-01 09:00", "2025-06-01 10:00", "A"))
            .unwrap();

        planner.delete(ScheduleTarget::Id(a.id)).unwrap();
        assert!(planner.find_by_id(a.id).is_none());
        assert!(planner.schedules().is_empty());
    }

    #[test]
    fn soft_delete_keeps_the_record_in_storage() {
        let (_dir, mut planner) = schedule_planner();
        let a = planner
            .add(draft("2025-06-01 09:00", "2025-06-01 10:00", "A"))
            .unwrap();

        planner.soft_delete(ScheduleTarget::Id(a.id)).unwrap();
        assert!(planner.find_by_id(a.id).unwrap().deleted);
        assert!(planner.list(&ScheduleFilter::default()).is_empty());
        assert_eq!(
            planner
                .list(&ScheduleFilter {
                    include_deleted: true,
                    ..ScheduleFilter::default()
                })
                .len(),
            1
        );
    }

    #[test]
    fn extend_shifts_end_and_marks_postponed() {
        let (_dir, mut planner) = schedule_planner();
        let a = planner
            .add(draft("2025-01-01 09:00", "2025-01-01 10:00", "A"))
            .unwrap();

        let updated = planner.extend(ScheduleTarget::Id(a.id), 30.0).unwrap();
        assert_eq!(updated.end, "2025-01-01 10:30");
        assert_eq!(updated.status, ScheduleStatus::Postponed);
    }

    #[test]
    fn extend_preserves_date_only_granularity() {
        let (_dir, mut planner) = schedule_planner();
        let a = planner.add(draft("2025-01-01", "2025-01-01", "A")).unwrap();

        let updated = planner.extend(ScheduleTarget::Id(a.id), 1440.0).unwrap();
        assert_eq!(updated.end, "2025-01-02");
    }

    #[rstest::rstest]
    #[case(0.0)]
    #[case(-15.0)]
    #[case(f64::NAN)]
    fn extend_rejects_non_positive_minutes(#[case] minutes: f64) {
        let (_dir, mut planner) = schedule_planner();
        let a = planner
            .add(draft("2025-01-01 09:00", "2025-01-01 10:00", "A"))
            .unwrap();

        let result = planner.extend(ScheduleTarget::Id(a.id), minutes);
        assert!(matches!(result, Err(StoreError::Validation(_))));
        assert_eq!(planner.find_by_id(a.id).unwrap().end, "2025-01-01 10:00");
    }

    #[test]
    fn derived_views_split_past_present_future() {
        let (_dir, mut planner) = schedule_planner();
        let past = planner
            .add(draft(&minutes_from_now(-120), &minutes_from_now(-60), "past"))
            .unwrap();
        let current = planner
            .add(draft(&minutes_from_now(-30), &minutes_from_now(30), "current"))
            .unwrap();
        let upcoming = planner
            .add(draft(&minutes_from_now(60), &minutes_from_now(120), "upcoming"))
            .unwrap();

        let future = planner.future();
        assert_eq!(future.len(), 1);
        assert_eq!(future[0].id, upcoming.id);

        let in_progress = planner.in_progress();
        assert_eq!(in_progress.len(), 1);
        assert_eq!(in_progress[0].id, current.id);

        let expired = planner.expired();
        assert_eq!(expired.len(), 1);
        assert_eq!(expired[0].id, past.id);
    }

    #[test]
    fn expired_skips_completed_slots() {
        let (_dir, mut planner) = schedule_planner();
        let past = planner
            .add(draft(&minutes_from_now(-120), &minutes_from_now(-60), "past"))
            .unwrap();
        planner
            .update(
                ScheduleTarget::Id(past.id),
                SchedulePatch {
                    status: Some(ScheduleStatus::Completed),
                    ..SchedulePatch::default()
                },
            )
            .unwrap();

        assert!(planner.expired().is_empty());
    }

    #[test]
    fn history_is_bounded_by_days_and_sorted_recent_first() {
        let (_dir, mut planner) = schedule_planner();
        let recent = planner
            .add(draft(
                &minutes_from_now(-3 * 24 * 60),
                &minutes_from_now(-3 * 24 * 60 + 30),
                "recent",
            ))
            .unwrap();
        let yesterday = planner
            .add(draft(
                &minutes_from_now(-24 * 60),
                &minutes_from_now(-24 * 60 + 30),
                "yesterday",
            ))
            .unwrap();
        planner
            .add(draft(
                &minutes_from_now(-30 * 24 * 60),
                &minutes_from_now(-30 * 24 * 60 + 30),
                "ancient",
            ))
            .unwrap();

        let history = planner.history(7);
        let ids: Vec<u64> = history.iter().map(|schedule| schedule.id).collect();
        assert_eq!(ids, vec![yesterday.id, recent.id]);
    }

    #[test]
    fn search_merges_criteria_with_or() {
        let (_dir, mut planner) = schedule_planner();
        planner
            .add(ScheduleDraft {
                description: String::from("deep work"),
                ..draft("2025-06-01 09:00", "2025-06-01 10:00", "write report")
            })
            .unwrap();
        planner
            .add(ScheduleDraft {
                value_note: String::from("sharpen skills"),
                ..draft("2025-06-01 08:00", "2025-06-01 08:30", "practice")
            })
            .unwrap();

        let hits = planner.search(&ScheduleQuery {
            task: Some(String::from("report")),
            value_note: Some(String::from("skills")),
            ..ScheduleQuery::default()
        });
        let tasks: Vec<&str> = hits.iter().map(|schedule| schedule.task.as_str()).collect();
        // Sorted by start, so "practice" (08:00) leads.
        assert_eq!(tasks, vec!["practice", "write report"]);
    }

    #[test]
    fn keyword_search_spans_all_text_fields() {
        let (_dir, mut planner) = schedule_planner();
        planner
            .add(ScheduleDraft {
                description: String::from("focus block"),
                ..draft("2025-06-01 09:00", "2025-06-01 10:00", "write")
            })
            .unwrap();

        let hits = planner.search(&ScheduleQuery {
            keyword: Some(String::from("FOCUS")),
            ..ScheduleQuery::default()
        });
        assert_eq!(hits.len(), 1);

        let strict = planner.search(&ScheduleQuery {
            keyword: Some(String::from("FOCUS")),
            case_sensitive: true,
            ..ScheduleQuery::default()
        });
        assert!(strict.is_empty());
    }

    #[test]
    fn search_includes_soft_deleted_records() {
        let (_dir, mut planner) = schedule_planner();
        let a = planner
            .add(draft("2025-06-01 09:00", "2025-06-01 10:00", "archived plan"))
            .unwrap();
        planner.soft_delete(ScheduleTarget::Id(a.id)).unwrap();

        let hits = planner.search(&ScheduleQuery {
            keyword: Some(String::from("archived")),
            ..ScheduleQuery::default()
        });
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn soft_delete_future_keys_off_end_time() {
        let (_dir, mut planner) = schedule_planner();
        // Started in the past but still running: end is in the future, so a
        // replan clears it too.
        let running = planner
            .add(draft(&minutes_from_now(-30), &minutes_from_now(30), "running"))
            .unwrap();
        let upcoming = planner
            .add(draft(&minutes_from_now(60), &minutes_from_now(120), "upcoming"))
            .unwrap();
        let finished = planner
            .add(draft(&minutes_from_now(-120), &minutes_from_now(-60), "finished"))
            .unwrap();

        let report = planner.soft_delete_future().unwrap();
        assert_eq!(report.soft_deleted, 2);
        assert!(by_id(planner.schedules(), running.id).deleted);
        assert!(by_id(planner.schedules(), upcoming.id).deleted);
        assert!(!by_id(planner.schedules(), finished.id).deleted);
    }

    #[test]
    fn reload_round_trips_records() {
        let (_dir, mut planner) = schedule_planner();
        planner
            .add(draft("2025-06-01 09:00", "2025-06-01 10:00", "A"))
            .unwrap();
        planner
            .add(draft("2025-06-02", "2025-06-03", "B"))
            .unwrap();

        let reloaded = SchedulePlanner::open(planner.path());
        assert_eq!(reloaded.schedules(), planner.schedules());
    }

    #[test]
    fn stats_count_statuses() {
        let (_dir, mut planner) = schedule_planner();
        planner
            .add(draft("2025-06-01 09:00", "2025-06-01 10:00", "A"))
            .unwrap();
        let b = planner
            .add(draft("2025-06-01 10:00", "2025-06-01 11:00", "B"))
            .unwrap();
        planner
            .update(
                ScheduleTarget::Id(b.id),
                SchedulePatch {
                    status: Some(ScheduleStatus::Completed),
                    ..SchedulePatch::default()
                },
            )
            .unwrap();

        let stats = planner.stats();
        assert_eq!(stats.total, 2);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.not_started, 1);
        assert_eq!(stats.in_progress, 0);
    }
}
