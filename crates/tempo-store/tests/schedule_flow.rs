//! End-to-end schedule registry flows, including the scripted plan
//! workflow against a real directory.

use tempfile::TempDir;

use tempo_core::enums::ScheduleStatus;
use tempo_store::plan::{self, PlanDefaults, ScriptedConsole};
use tempo_store::schedules::{
    ScheduleDraft, ScheduleFilter, SchedulePatch, SchedulePlanner, ScheduleTarget,
};

fn setup() -> (TempDir, SchedulePlanner) {
    let dir = tempfile::tempdir().unwrap();
    let planner = SchedulePlanner::open(dir.path().join("schedules.json"));
    (dir, planner)
}

fn draft(start: &str, end: &str, task: &str) -> ScheduleDraft {
    ScheduleDraft {
        start: start.to_string(),
        end: end.to_string(),
        task: task.to_string(),
        status: ScheduleStatus::NotStarted,
        description: String::new(),
        value_note: String::new(),
    }
}

#[test]
fn add_edit_extend_survive_reload() {
    let (_dir, mut planner) = setup();
    let slot = planner
        .add(draft("2025-06-01 09:00", "2025-06-01 10:00", "deep work"))
        .unwrap();

    planner
        .update(
            ScheduleTarget::Id(slot.id),
            SchedulePatch {
                description: Some(String::from("chapter three")),
                ..SchedulePatch::default()
            },
        )
        .unwrap();
    planner.extend(ScheduleTarget::Id(slot.id), 45.0).unwrap();

    let reloaded = SchedulePlanner::open(planner.path());
    let record = reloaded.find_by_id(slot.id).unwrap();
    assert_eq!(record.end, "2025-06-01 10:45");
    assert_eq!(record.status, ScheduleStatus::Postponed);
    assert_eq!(record.description, "chapter three");
}

#[test]
fn listing_is_chronological_and_status_filterable() {
    let (_dir, mut planner) = setup();
    planner
        .add(draft("2025-06-01 09:00", "2025-06-01 10:00", "A"))
        .unwrap();
    planner
        .add(draft("2025-06-01 08:00", "2025-06-01 08:30", "B"))
        .unwrap();
    let c = planner
        .add(draft("2025-06-02", "2025-06-03", "C"))
        .unwrap();
    planner
        .update(
            ScheduleTarget::Id(c.id),
            SchedulePatch {
                status: Some(ScheduleStatus::Completed),
                ..SchedulePatch::default()
            },
        )
        .unwrap();

    let all = planner.list(&ScheduleFilter::default());
    let tasks: Vec<&str> = all.iter().map(|s| s.task.as_str()).collect();
    assert_eq!(tasks, vec!["B", "A", "C"]);

    let completed = planner.list(&ScheduleFilter {
        status: Some(ScheduleStatus::Completed),
        ..ScheduleFilter::default()
    });
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].task, "C");
}

#[test]
fn hard_and_soft_delete_differ_in_storage() {
    let (_dir, mut planner) = setup();
    let hard = planner
        .add(draft("2025-06-01 09:00", "2025-06-01 10:00", "hard"))
        .unwrap();
    let soft = planner
        .add(draft("2025-06-01 10:00", "2025-06-01 11:00", "soft"))
        .unwrap();

    planner.delete(ScheduleTarget::Id(hard.id)).unwrap();
    planner.soft_delete(ScheduleTarget::Id(soft.id)).unwrap();

    let reloaded = SchedulePlanner::open(planner.path());
    assert!(reloaded.find_by_id(hard.id).is_none());
    assert!(reloaded.find_by_id(soft.id).unwrap().deleted);
    assert!(reloaded.list(&ScheduleFilter::default()).is_empty());
}

#[test]
fn scripted_plan_workflow_populates_the_store() {
    let (_dir, mut planner) = setup();
    let mut console = ScriptedConsole::new([
        "y",                // create new slots?
        "1.5",              // total hours
        "45 minutes",       // slot length
        "2030-03-01 08:00", // start
        "sprint {n}",       // template
        "in_progress",      // default status
        "warmup", "main",   // descriptions
        "", "",             // value notes
        "y",                // confirm
    ]);

    let outcome = plan::run(&mut planner, &mut console, PlanDefaults::default()).unwrap();
    let report = outcome.generated.unwrap();
    assert_eq!(report.generated, 2);
    assert_eq!(report.leftover_minutes, 0);

    let reloaded = SchedulePlanner::open(planner.path());
    let slots = reloaded.list(&ScheduleFilter::default());
    assert_eq!(slots.len(), 2);
    assert_eq!(slots[0].task, "sprint 1");
    assert_eq!(slots[0].description, "warmup");
    assert_eq!(slots[0].status, ScheduleStatus::InProgress);
    assert_eq!(slots[1].start, "2030-03-01 08:45");
    assert_eq!(slots[1].end, "2030-03-01 09:30");
}
