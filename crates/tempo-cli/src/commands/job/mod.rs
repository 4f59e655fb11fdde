mod backup;
mod delete;
mod edit;
mod list;
mod list_deleted;
mod load;
mod restore;
mod search;
mod stats;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::JobCommands;
use crate::context::AppContext;

use tempo_store::jobs::JobBook;

/// Handle `tempo job`.
pub fn handle(action: JobCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        JobCommands::Load { csv } => load::run(&csv, ctx, flags),
        JobCommands::List {
            limit,
            include_deleted,
        } => list::run(limit, include_deleted, ctx, flags),
        JobCommands::ListDeleted { limit } => list_deleted::run(limit, ctx, flags),
        JobCommands::Search {
            keyword,
            title,
            tag,
            case_sensitive,
            include_deleted,
        } => search::run(
            keyword,
            title,
            tag,
            case_sensitive,
            include_deleted,
            ctx,
            flags,
        ),
        JobCommands::Edit {
            index,
            key,
            field,
            value,
            title,
            summary,
            summary_file,
            add_tag,
            remove_tag,
        } => edit::run(
            edit::Params {
                index,
                key,
                field,
                value,
                title,
                summary,
                summary_file,
                add_tag,
                remove_tag,
            },
            ctx,
            flags,
        ),
        JobCommands::Delete { index, key } => delete::run(index, key, ctx, flags),
        JobCommands::Restore { index, key } => restore::run(index, key, ctx, flags),
        JobCommands::Backup { dir } => backup::run(dir.as_deref(), ctx, flags),
        JobCommands::Stats => stats::run(ctx, flags),
    }
}

/// Resolve `--index`/`--key` addressing to an identity key against the
/// view the index counts (active records, or the deleted list).
pub(crate) fn resolve_key(
    book: &JobBook,
    index: Option<usize>,
    key: Option<String>,
    deleted_view: bool,
) -> anyhow::Result<String> {
    match (index, key) {
        (Some(_), Some(_)) => anyhow::bail!("give either --index or --key, not both"),
        (None, None) => anyhow::bail!("--index or --key is required"),
        (None, Some(key)) => Ok(key),
        (Some(index), None) => {
            let job = if deleted_view {
                book.find_deleted_by_index(index)
            } else {
                book.find_by_index(index, false)
            };
            job.map(tempo_core::entities::Job::key)
                .ok_or_else(|| anyhow::anyhow!("no job at index {index}"))
        }
    }
}
