use tempo_store::plan::{self, PlanDefaults, StdConsole};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut planner = ctx.schedule_planner();
    let mut console = StdConsole;
    let outcome = plan::run(
        &mut planner,
        &mut console,
        PlanDefaults {
            slot_minutes: ctx.config.general.slot_minutes,
        },
    )?;
    output(&outcome, flags.format)
}
