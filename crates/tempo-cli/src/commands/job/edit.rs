use std::path::PathBuf;

use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::commands::job::resolve_key;
use crate::commands::shared::parse::unescape_newlines;
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub index: Option<usize>,
    pub key: Option<String>,
    pub field: Option<String>,
    pub value: Option<String>,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub summary_file: Option<PathBuf>,
    pub add_tag: Option<String>,
    pub remove_tag: Option<String>,
}

pub fn run(params: Params, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut book = ctx.job_book();
    let key = resolve_key(&book, params.index, params.key, false)?;

    let job = if let Some(tag) = params.add_tag {
        book.add_tag(&key, &tag)?
    } else if let Some(tag) = params.remove_tag {
        book.remove_tag(&key, &tag)?
    } else if let Some(summary) = resolve_summary(params.summary, params.summary_file.as_deref())? {
        book.update_fields(&key, &[(String::from("summary"), summary)])?
    } else if let Some(title) = params.title {
        book.update_fields(&key, &[(String::from("title"), title)])?
    } else if let (Some(field), Some(value)) = (params.field, params.value) {
        book.update_fields(&key, &[(field, value)])?
    } else {
        anyhow::bail!(
            "nothing to do: give --field/--value, --title, --summary, --summary-file, --add-tag, or --remove-tag"
        );
    };

    output(&job, flags.format)
}

/// `--summary` takes the text inline (with `\n` expansion); `--summary-file`
/// reads it verbatim from a file.
fn resolve_summary(
    summary: Option<String>,
    summary_file: Option<&std::path::Path>,
) -> anyhow::Result<Option<String>> {
    if let Some(path) = summary_file {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read summary file {}", path.display()))?;
        return Ok(Some(text));
    }
    Ok(summary.map(|text| unescape_newlines(&text)))
}
