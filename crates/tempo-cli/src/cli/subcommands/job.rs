use std::path::PathBuf;

use clap::Subcommand;

/// Job entity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum JobCommands {
    /// Import a CSV export into the job list.
    Load {
        /// Path to the CSV file.
        csv: PathBuf,
    },
    /// List active jobs.
    List {
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long)]
        include_deleted: bool,
    },
    /// List soft-deleted jobs.
    #[command(name = "list-deleted")]
    ListDeleted {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Search jobs by keyword, or by title and/or tag.
    Search {
        /// Keyword matched against title or tags.
        keyword: Option<String>,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        tag: Option<String>,
        #[arg(long)]
        case_sensitive: bool,
        #[arg(long)]
        include_deleted: bool,
    },
    /// Edit one job: a field, the summary, or its tags.
    Edit {
        /// Row number from `job list` (active view).
        #[arg(long)]
        index: Option<usize>,
        /// Identity key (link, or "title|timestamp").
        #[arg(long)]
        key: Option<String>,
        /// Field name for --field/--value updates.
        #[arg(long)]
        field: Option<String>,
        #[arg(long)]
        value: Option<String>,
        /// Shorthand for --field title --value ...
        #[arg(long)]
        title: Option<String>,
        /// New summary; literal \n becomes a line break.
        #[arg(long)]
        summary: Option<String>,
        /// Read the new summary from a file.
        #[arg(long)]
        summary_file: Option<PathBuf>,
        #[arg(long)]
        add_tag: Option<String>,
        #[arg(long)]
        remove_tag: Option<String>,
    },
    /// Soft-delete a job.
    Delete {
        #[arg(long)]
        index: Option<usize>,
        #[arg(long)]
        key: Option<String>,
    },
    /// Restore a soft-deleted job (--index counts the deleted view).
    Restore {
        #[arg(long)]
        index: Option<usize>,
        #[arg(long)]
        key: Option<String>,
    },
    /// Copy the job-list file to a timestamped backup.
    Backup {
        #[arg(long)]
        dir: Option<PathBuf>,
    },
    /// Job list statistics.
    Stats,
}
