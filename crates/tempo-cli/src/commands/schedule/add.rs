use tempo_store::schedules::ScheduleDraft;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_status;
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub start: String,
    pub end: String,
    pub task: String,
    pub status: String,
    pub description: String,
    pub value: String,
}

pub fn run(params: Params, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let status = parse_status(&params.status)?;
    let mut planner = ctx.schedule_planner();
    let schedule = planner.add(ScheduleDraft {
        start: params.start,
        end: params.end,
        task: params.task,
        status,
        description: params.description,
        value_note: params.value,
    })?;
    output(&schedule, flags.format)
}
