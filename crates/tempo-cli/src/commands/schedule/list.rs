use tempo_store::schedules::ScheduleFilter;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::{parse_date, parse_status};
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    limit: Option<u32>,
    status: Option<String>,
    from: Option<String>,
    until: Option<String>,
    include_deleted: bool,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let limit = effective_limit(limit, flags.limit, ctx.config.general.default_limit);
    let status = status.as_deref().map(parse_status).transpose()?;
    let start_from = from.as_deref().map(|raw| parse_date(raw, "--from")).transpose()?;
    let end_until = until
        .as_deref()
        .map(|raw| parse_date(raw, "--until"))
        .transpose()?;

    let planner = ctx.schedule_planner();
    let schedules = planner.list(&ScheduleFilter {
        limit: Some(usize::try_from(limit)?),
        status,
        start_from,
        end_until,
        include_deleted,
    });
    output(&schedules, flags.format)
}
