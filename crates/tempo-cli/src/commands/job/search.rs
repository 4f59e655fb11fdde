use tempo_store::jobs::JobQuery;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    keyword: Option<String>,
    title: Option<String>,
    tag: Option<String>,
    case_sensitive: bool,
    include_deleted: bool,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if keyword.is_none() && title.is_none() && tag.is_none() {
        anyhow::bail!("provide a keyword, or --title and/or --tag");
    }

    let book = ctx.job_book();
    let hits = book.search(&JobQuery {
        keyword,
        title,
        tag,
        case_sensitive,
        include_deleted,
    });
    output(&hits, flags.format)
}
