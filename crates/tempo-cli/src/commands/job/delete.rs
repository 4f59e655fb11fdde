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
    let key = resolve_key(&book, index, key, false)?;
    let job = book.soft_delete(&key)?;
    output(&job, flags.format)
}
