use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let planner = ctx.schedule_planner();
    output(&planner.stats(), flags.format)
}
