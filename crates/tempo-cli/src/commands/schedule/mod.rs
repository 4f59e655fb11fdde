mod add;
mod delete;
mod edit;
mod extend;
#[path = "gen.rs"]
mod r#gen;
mod history;
mod list;
mod search;
mod stats;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ScheduleCommands;
use crate::context::AppContext;

/// Handle `tempo schedule`.
pub fn handle(
    action: ScheduleCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ScheduleCommands::Add {
            start,
            end,
            task,
            status,
            description,
            value,
        } => add::run(
            add::Params {
                start,
                end,
                task,
                status,
                description,
                value,
            },
            ctx,
            flags,
        ),
        ScheduleCommands::List {
            limit,
            status,
            from,
            until,
            include_deleted,
        } => list::run(limit, status, from, until, include_deleted, ctx, flags),
        ScheduleCommands::Edit {
            id,
            index,
            start,
            end,
            task,
            status,
            description,
            value,
        } => edit::run(
            edit::Params {
                id,
                index,
                start,
                end,
                task,
                status,
                description,
                value,
            },
            ctx,
            flags,
        ),
        ScheduleCommands::Delete { id, index, soft } => delete::run(id, index, soft, ctx, flags),
        ScheduleCommands::Extend { id, index, by } => extend::run(id, index, &by, ctx, flags),
        ScheduleCommands::Search {
            keyword,
            task,
            description,
            value,
            case_sensitive,
        } => search::run(keyword, task, description, value, case_sensitive, ctx, flags),
        ScheduleCommands::Gen => r#gen::run(ctx, flags),
        ScheduleCommands::History { days } => history::run(days, ctx, flags),
        ScheduleCommands::Stats => stats::run(ctx, flags),
    }
}
