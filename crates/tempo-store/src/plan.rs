//! Interactive plan-generation workflow.
//!
//! A fixed sequence of decision points driven by operator input: review
//! upcoming slots (with an optional triple-confirmed replan), triage
//! whatever is running or overdue, then optionally carve a block of time
//! into equal slots and capture per-slot notes. All record changes go
//! through [`SchedulePlanner`]; the workflow owns no persistence.
//!
//! Input and output run through the [`Console`] trait so the whole flow is
//! scriptable in tests ([`ScriptedConsole`]) as well as on a terminal
//! ([`StdConsole`]).

use std::collections::VecDeque;
use std::io::{self, Write};

use chrono::{Duration, Local};
use serde::Serialize;

use tempo_core::duration;
use tempo_core::entities::Schedule;
use tempo_core::enums::ScheduleStatus;
use tempo_core::responses::{GenReport, ReplanReport};
use tempo_core::stamp::{self, Granularity};

use crate::error::StoreError;
use crate::schedules::{ScheduleDraft, SchedulePatch, SchedulePlanner, ScheduleTarget};

/// Prompt/print seam for the workflow. `prompt` returns `None` on EOF,
/// which the workflow treats as declining/skipping.
pub trait Console {
    fn say(&mut self, message: &str);
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>>;
}

/// Terminal-backed console.
pub struct StdConsole;

impl Console for StdConsole {
    fn say(&mut self, message: &str) {
        println!("{message}");
    }

    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        print!("{message}");
        io::stdout().flush()?;
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            Ok(None)
        } else {
            Ok(Some(line.trim().to_string()))
        }
    }
}

/// Console fed from a prepared reply list; used to drive the workflow
/// non-interactively. Everything said or asked lands in `transcript`.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    replies: VecDeque<String>,
    pub transcript: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: replies.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }
}

impl Console for ScriptedConsole {
    fn say(&mut self, message: &str) {
        self.transcript.push(message.to_string());
    }

    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        self.transcript.push(message.to_string());
        Ok(self.replies.pop_front())
    }
}

/// Knobs the workflow takes from configuration.
#[derive(Debug, Clone, Copy)]
pub struct PlanDefaults {
    /// Slot length offered when the operator does not give one.
    pub slot_minutes: u32,
}

impl Default for PlanDefaults {
    fn default() -> Self {
        Self { slot_minutes: 60 }
    }
}

/// What a workflow run did.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct PlanOutcome {
    /// Set when the operator confirmed a replan.
    pub replanned: Option<ReplanReport>,
    /// Slots walked through in the triage steps.
    pub reviewed: u32,
    /// Set when the batch-create step ran to completion.
    pub generated: Option<GenReport>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TriagePhase {
    InProgress,
    Expired,
}

/// Run the full workflow against one registry.
pub fn run(
    planner: &mut SchedulePlanner,
    console: &mut dyn Console,
    defaults: PlanDefaults,
) -> Result<PlanOutcome, StoreError> {
    let mut outcome = PlanOutcome::default();

    let future = planner.future();
    if !future.is_empty() {
        console.say("Upcoming slots:");
        for schedule in &future {
            describe(console, schedule);
        }
        if ask_yes_no(console, "Replan and soft-delete all upcoming slots? (y/N): ", false)? {
            outcome.replanned = confirm_replan(planner, console)?;
        }
    }

    for schedule in planner.in_progress() {
        console.say("In progress:");
        triage(planner, console, &schedule, TriagePhase::InProgress)?;
        outcome.reviewed += 1;
    }

    for schedule in planner.expired() {
        console.say("Overdue:");
        triage(planner, console, &schedule, TriagePhase::Expired)?;
        outcome.reviewed += 1;
    }

    if ask_yes_no(console, "Create new slots? (y/N): ", false)? {
        outcome.generated = generate_slots(planner, console, defaults)?;
    }

    Ok(outcome)
}

/// A replan soft-deletes records wholesale, so it takes three consecutive
/// confirmations; any hesitation cancels.
fn confirm_replan(
    planner: &mut SchedulePlanner,
    console: &mut dyn Console,
) -> Result<Option<ReplanReport>, StoreError> {
    let confirmations = [
        "This soft-deletes every upcoming slot. Continue? (y/N): ",
        "Please confirm once more. (y/N): ",
        "Final confirmation — really replan? (y/N): ",
    ];
    for message in confirmations {
        if !ask_yes_no(console, message, false)? {
            console.say("replan cancelled");
            return Ok(None);
        }
    }

    let report = planner.soft_delete_future()?;
    console.say(&format!(
        "soft-deleted {} upcoming slot(s)",
        report.soft_deleted
    ));
    Ok(Some(report))
}

fn triage(
    planner: &mut SchedulePlanner,
    console: &mut dyn Console,
    schedule: &Schedule,
    phase: TriagePhase,
) -> Result<(), StoreError> {
    describe(console, schedule);
    match phase {
        TriagePhase::InProgress => console.say(
            "  [1] still in progress  [2] completed  [3] extend  [4] shelve\n  [5] edit description  [6] edit value note  [0] skip",
        ),
        TriagePhase::Expired => console.say(
            "  [1] completed  [2] not finished  [3] extend  [4] shelve\n  [5] edit description  [6] edit value note  [0] skip",
        ),
    }

    let target = ScheduleTarget::Id(schedule.id);
    loop {
        let Some(raw) = console.prompt("choose (0-6) [0]: ")? else {
            return Ok(());
        };
        let choice = if raw.is_empty() { String::from("0") } else { raw };
        match (phase, choice.as_str()) {
            (_, "0") => return Ok(()),
            (TriagePhase::InProgress, "1") => {
                set_status(planner, console, target, ScheduleStatus::InProgress)?;
                return Ok(());
            }
            (TriagePhase::InProgress, "2") | (TriagePhase::Expired, "1") => {
                set_status(planner, console, target, ScheduleStatus::Completed)?;
                return Ok(());
            }
            (TriagePhase::Expired, "2") => {
                record_unfinished(planner, console, schedule)?;
                return Ok(());
            }
            (_, "3") => {
                prompt_extension(planner, console, target)?;
                return Ok(());
            }
            (_, "4") => {
                set_status(planner, console, target, ScheduleStatus::Shelved)?;
                return Ok(());
            }
            (_, "5") => {
                edit_text(planner, console, target, TextField::Description)?;
                return Ok(());
            }
            (_, "6") => {
                edit_text(planner, console, target, TextField::ValueNote)?;
                return Ok(());
            }
            _ => console.say("enter a number between 0 and 6"),
        }
    }
}

fn set_status(
    planner: &mut SchedulePlanner,
    console: &mut dyn Console,
    target: ScheduleTarget,
    status: ScheduleStatus,
) -> Result<(), StoreError> {
    planner.update(
        target,
        SchedulePatch {
            status: Some(status),
            ..SchedulePatch::default()
        },
    )?;
    console.say(&format!("status set to {status}"));
    Ok(())
}

fn record_unfinished(
    planner: &mut SchedulePlanner,
    console: &mut dyn Console,
    schedule: &Schedule,
) -> Result<(), StoreError> {
    let target = ScheduleTarget::Id(schedule.id);
    set_status(planner, console, target, ScheduleStatus::NotStarted)?;

    let Some(reason) = console.prompt("reason it was not finished (optional): ")? else {
        return Ok(());
    };
    if reason.is_empty() {
        return Ok(());
    }
    let note = format!("unfinished: {reason}");
    let description = if schedule.description.is_empty() {
        note
    } else {
        format!("{}\n{note}", schedule.description)
    };
    planner.update(
        target,
        SchedulePatch {
            description: Some(description),
            ..SchedulePatch::default()
        },
    )?;
    Ok(())
}

enum TextField {
    Description,
    ValueNote,
}

fn edit_text(
    planner: &mut SchedulePlanner,
    console: &mut dyn Console,
    target: ScheduleTarget,
    field: TextField,
) -> Result<(), StoreError> {
    let label = match field {
        TextField::Description => "description",
        TextField::ValueNote => "value note",
    };
    let Some(raw) = console.prompt(&format!(
        "new {label} (\\n for line breaks, empty clears): "
    ))?
    else {
        return Ok(());
    };
    let text = unescape_newlines(&raw);
    let patch = match field {
        TextField::Description => SchedulePatch {
            description: Some(text),
            ..SchedulePatch::default()
        },
        TextField::ValueNote => SchedulePatch {
            value_note: Some(text),
            ..SchedulePatch::default()
        },
    };
    planner.update(target, patch)?;
    console.say(&format!("{label} updated"));
    Ok(())
}

fn prompt_extension(
    planner: &mut SchedulePlanner,
    console: &mut dyn Console,
    target: ScheduleTarget,
) -> Result<(), StoreError> {
    loop {
        let Some(raw) = console.prompt("extend by how much (e.g. '1 hour', '30 minutes'): ")?
        else {
            return Ok(());
        };
        if raw.is_empty() {
            console.say("a duration is required");
            continue;
        }
        match duration::parse_minutes(&raw) {
            Ok(minutes) => {
                match planner.extend(target, minutes) {
                    Ok(updated) => console.say(&format!("extended; new end {}", updated.end)),
                    Err(error) => console.say(&format!("extend failed: {error}")),
                }
                return Ok(());
            }
            Err(error) => console.say(&error.to_string()),
        }
    }
}

/// The batch-create step. Returns `None` when the operator backs out at
/// any point.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn generate_slots(
    planner: &mut SchedulePlanner,
    console: &mut dyn Console,
    defaults: PlanDefaults,
) -> Result<Option<GenReport>, StoreError> {
    let total_minutes = loop {
        let Some(raw) = console.prompt("Total time to plan, in hours (e.g. 8 or 8.5): ")? else {
            return Ok(None);
        };
        match raw.parse::<f64>() {
            Ok(hours) if hours > 0.0 => break hours * 60.0,
            _ => console.say("enter a positive number of hours"),
        }
    };

    let unit_minutes = loop {
        let Some(raw) = console.prompt(&format!(
            "Slot length (e.g. '1 hour', '40 minutes') [{} minutes]: ",
            defaults.slot_minutes
        ))?
        else {
            return Ok(None);
        };
        let parsed = if raw.is_empty() {
            Ok(f64::from(defaults.slot_minutes))
        } else {
            duration::parse_minutes(&raw)
        };
        match parsed {
            Ok(minutes) if minutes <= total_minutes => break minutes,
            Ok(_) => console.say("slot length cannot exceed the total"),
            Err(error) => console.say(&error.to_string()),
        }
    };

    let start_dt = {
        let Some(raw) = console.prompt("Start time (YYYY-MM-DD HH:MM) [now]: ")? else {
            return Ok(None);
        };
        let fallback = || stamp::floor_to_five_minutes(Local::now().naive_local());
        if raw.is_empty() {
            fallback()
        } else {
            match stamp::parse(&raw) {
                Ok(dt) => dt,
                Err(error) => {
                    console.say(&format!("{error}; starting from the current time"));
                    fallback()
                }
            }
        }
    };

    let template = {
        let Some(raw) = console.prompt("Task name template, {n} is the slot number [slot {n}]: ")?
        else {
            return Ok(None);
        };
        if raw.is_empty() {
            String::from("slot {n}")
        } else {
            raw
        }
    };

    let status = loop {
        let Some(raw) = console.prompt("Default status [not_started]: ")? else {
            return Ok(None);
        };
        if raw.is_empty() {
            break ScheduleStatus::NotStarted;
        }
        match raw.parse::<ScheduleStatus>() {
            Ok(status) => break status,
            Err(error) => console.say(&error.to_string()),
        }
    };

    let requested = (total_minutes / unit_minutes).floor() as u32;
    let leftover_minutes = (total_minutes - f64::from(requested) * unit_minutes).round() as u32;
    if requested == 0 {
        console.say("slot length exceeds the total, nothing to create");
        return Ok(None);
    }

    let unit = Duration::seconds((unit_minutes * 60.0).round() as i64);
    console.say(&format!(
        "Plan: {requested} slot(s) of {unit_minutes:.0} minute(s) starting {}",
        stamp::format(start_dt, Granularity::Minute)
    ));
    if leftover_minutes > 0 {
        console.say(&format!("{leftover_minutes} minute(s) left uncovered"));
    }

    let slot_name = |index: u32| template.replace("{n}", &(index + 1).to_string());
    let slot_range = |index: u32| {
        let slot_start = start_dt + unit * i32::try_from(index).unwrap_or(i32::MAX);
        (slot_start, slot_start + unit)
    };

    let mut descriptions = Vec::with_capacity(requested as usize);
    for index in 0..requested {
        let (slot_start, slot_end) = slot_range(index);
        let Some(raw) = console.prompt(&format!(
            "[{}/{requested}] {} ({} ~ {})\n  description (optional): ",
            index + 1,
            slot_name(index),
            stamp::format(slot_start, Granularity::Minute),
            stamp::format(slot_end, Granularity::Minute),
        ))?
        else {
            return Ok(None);
        };
        descriptions.push(unescape_newlines(&raw));
    }

    let mut value_notes = Vec::with_capacity(requested as usize);
    for index in 0..requested {
        let Some(raw) = console.prompt(&format!(
            "[{}/{requested}] {}\n  value note (optional): ",
            index + 1,
            slot_name(index),
        ))?
        else {
            return Ok(None);
        };
        value_notes.push(unescape_newlines(&raw));
    }

    if !ask_yes_no(console, &format!("Create {requested} slot(s)? (Y/n): "), true)? {
        console.say("cancelled");
        return Ok(None);
    }

    let mut generated = 0;
    for index in 0..requested {
        let (slot_start, slot_end) = slot_range(index);
        let draft = ScheduleDraft {
            start: stamp::format(slot_start, Granularity::Minute),
            end: stamp::format(slot_end, Granularity::Minute),
            task: slot_name(index),
            status,
            description: descriptions[index as usize].clone(),
            value_note: value_notes[index as usize].clone(),
        };
        match planner.add(draft) {
            Ok(schedule) => {
                generated += 1;
                console.say(&format!(
                    "[{}] {} ({} ~ {})",
                    schedule.id, schedule.task, schedule.start, schedule.end
                ));
            }
            Err(error) => {
                console.say(&format!("failed to create slot {}: {error}", index + 1));
            }
        }
    }

    Ok(Some(GenReport {
        generated,
        requested,
        leftover_minutes,
    }))
}

fn ask_yes_no(
    console: &mut dyn Console,
    message: &str,
    default_yes: bool,
) -> Result<bool, StoreError> {
    loop {
        let Some(raw) = console.prompt(message)? else {
            return Ok(false);
        };
        match raw.to_ascii_lowercase().as_str() {
            "" => return Ok(default_yes),
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => console.say("please answer y or n"),
        }
    }
}

fn describe(console: &mut dyn Console, schedule: &Schedule) {
    console.say(&format!("[{}] {}", schedule.id, schedule.task));
    console.say(&format!("    {} ~ {}", schedule.start, schedule.end));
    console.say(&format!("    status: {}", schedule.status));
    say_block(console, "description", &schedule.description);
    say_block(console, "value note", &schedule.value_note);
}

fn say_block(console: &mut dyn Console, label: &str, text: &str) {
    if text.is_empty() {
        return;
    }
    if text.contains('\n') {
        console.say(&format!("    {label}:"));
        for line in text.lines() {
            console.say(&format!("        {line}"));
        }
    } else {
        console.say(&format!("    {label}: {text}"));
    }
}

/// Turn literal `\n` sequences from single-line input into real newlines.
fn unescape_newlines(raw: &str) -> String {
    raw.replace("\\n", "\n")
}
