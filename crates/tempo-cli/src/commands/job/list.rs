use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    limit: Option<u32>,
    include_deleted: bool,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let limit = effective_limit(limit, flags.limit, ctx.config.general.default_limit);
    let book = ctx.job_book();
    let jobs = book.list(Some(usize::try_from(limit)?), include_deleted);
    output(&jobs, flags.format)
}
