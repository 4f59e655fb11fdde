use crate::cli::GlobalFlags;
use crate::commands::job::resolve_key;
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    index: Option<usize>,
    key: Option<String>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut book = ctx.job_book();
    // --index counts the deleted view here, matching `job list-deleted`.
    let key = resolve_key(&book, index, key, true)?;
    let job = book.restore(&key)?;
    output(&job, flags.format)
}
