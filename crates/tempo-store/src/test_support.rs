//! Shared test utilities for tempo-store unit tests.

pub(crate) mod helpers {
    use std::path::PathBuf;

    use tempfile::TempDir;

    use tempo_core::entities::Schedule;
    use tempo_core::enums::ScheduleStatus;
    use tempo_core::stamp;

    use crate::jobs::JobBook;
    use crate::schedules::{ScheduleDraft, SchedulePlanner};

    /// Empty job registry backed by a temp directory.
    pub fn job_book() -> (TempDir, JobBook) {
        let dir = tempfile::tempdir().unwrap();
        let book = JobBook::open(dir.path().join("job_list.json"));
        (dir, book)
    }

    /// Job registry seeded from one CSV import: "Alpha project" (with a
    /// link), "Beta" (link-less), "Gamma" (with a link).
    pub fn seeded_job_book() -> (TempDir, JobBook) {
        let (dir, mut book) = job_book();
        let csv = write_csv(
            &dir,
            "seed.csv",
            "link,title,timestamp\n\
             https://example.com/a,Alpha project,2025-01-01\n\
             ,Beta,2025-01-02\n\
             https://example.com/c,Gamma,2025-01-03\n",
        );
        book.import_csv(&csv).unwrap();
        (dir, book)
    }

    /// Write a CSV file into the temp directory and return its path.
    pub fn write_csv(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    /// Empty schedule registry backed by a temp directory.
    pub fn schedule_planner() -> (TempDir, SchedulePlanner) {
        let dir = tempfile::tempdir().unwrap();
        let planner = SchedulePlanner::open(dir.path().join("schedules.json"));
        (dir, planner)
    }

    /// Draft with sensible defaults for tests.
    pub fn draft(start: &str, end: &str, task: &str) -> ScheduleDraft {
        ScheduleDraft {
            start: start.to_string(),
            end: end.to_string(),
            task: task.to_string(),
            status: ScheduleStatus::NotStarted,
            description: String::new(),
            value_note: String::new(),
        }
    }

    /// A stamp `minutes` away from now, minute granularity.
    pub fn minutes_from_now(minutes: i64) -> String {
        let dt = chrono::Local::now().naive_local() + chrono::Duration::minutes(minutes);
        stamp::format(dt, stamp::Granularity::Minute)
    }

    /// Find by id in a slice of schedules (test convenience).
    pub fn by_id(items: &[Schedule], id: u64) -> &Schedule {
        items
            .iter()
            .find(|schedule| schedule.id == id)
            .expect("schedule with id should exist")
    }
}
