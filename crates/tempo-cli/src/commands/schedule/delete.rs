use crate::cli::GlobalFlags;
use crate::commands::shared::parse::schedule_target;
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    id: Option<u64>,
    index: Option<usize>,
    soft: bool,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let target = schedule_target(id, index)?;
    let mut planner = ctx.schedule_planner();
    let schedule = if soft {
        planner.soft_delete(target)?
    } else {
        planner.delete(target)?
    };
    output(&schedule, flags.format)
}
