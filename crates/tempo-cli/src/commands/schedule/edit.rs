use tempo_store::schedules::SchedulePatch;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::{parse_status, schedule_target};
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub id: Option<u64>,
    pub index: Option<usize>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub task: Option<String>,
    pub status: Option<String>,
    pub description: Option<String>,
    pub value: Option<String>,
}

pub fn run(params: Params, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let target = schedule_target(params.id, params.index)?;
    let status = params.status.as_deref().map(parse_status).transpose()?;

    let mut planner = ctx.schedule_planner();
    let schedule = planner.update(
        target,
        SchedulePatch {
            start: params.start,
            end: params.end,
            task: params.task,
            status,
            description: params.description,
            value_note: params.value,
        },
    )?;
    output(&schedule, flags.format)
}
