use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(days: Option<u32>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let days = days.unwrap_or(ctx.config.general.history_days);
    let planner = ctx.schedule_planner();
    output(&planner.history(days), flags.format)
}
