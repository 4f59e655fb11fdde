use tempo_store::schedules::ScheduleQuery;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    keyword: Option<String>,
    task: Option<String>,
    description: Option<String>,
    value: Option<String>,
    case_sensitive: bool,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if keyword.is_none() && task.is_none() && description.is_none() && value.is_none() {
        anyhow::bail!("provide a keyword, or --task/--description/--value");
    }

    let planner = ctx.schedule_planner();
    let hits = planner.search(&ScheduleQuery {
        keyword,
        task,
        description,
        value_note: value,
        case_sensitive,
    });
    output(&hits, flags.format)
}
