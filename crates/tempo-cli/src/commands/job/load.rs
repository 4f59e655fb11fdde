use std::path::Path;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(csv: &Path, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut book = ctx.job_book();
    let report = book.import_csv(csv)?;
    output(&report, flags.format)
}
