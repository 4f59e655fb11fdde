use std::path::Path;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(dir: Option<&Path>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let book = ctx.job_book();
    let configured = ctx.backup_dir();
    let dest = dir.or(configured.as_deref());
    let report = book.backup(dest)?;
    output(&report, flags.format)
}
