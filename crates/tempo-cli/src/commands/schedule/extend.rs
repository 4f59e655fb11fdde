use tempo_core::duration;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::schedule_target;
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    id: Option<u64>,
    index: Option<usize>,
    by: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let target = schedule_target(id, index)?;
    let minutes = duration::parse_minutes(by)?;

    let mut planner = ctx.schedule_planner();
    let schedule = planner.extend(target, minutes)?;
    output(&schedule, flags.format)
}
