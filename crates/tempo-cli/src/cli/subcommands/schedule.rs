use clap::Subcommand;

/// Schedule entity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ScheduleCommands {
    /// Add a slot.
    Add {
        /// YYYY-MM-DD or YYYY-MM-DD HH:MM.
        #[arg(long)]
        start: String,
        /// YYYY-MM-DD or YYYY-MM-DD HH:MM; never earlier than start.
        #[arg(long)]
        end: String,
        #[arg(long)]
        task: String,
        /// completed, in_progress, not_started, shelved, or postponed.
        #[arg(long, default_value = "not_started")]
        status: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Why the slot matters.
        #[arg(long, default_value = "")]
        value: String,
    },
    /// List slots, ascending by start time.
    List {
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long)]
        status: Option<String>,
        /// Keep slots starting on or after this date (YYYY-MM-DD).
        #[arg(long)]
        from: Option<String>,
        /// Keep slots ending on or before this date (YYYY-MM-DD).
        #[arg(long)]
        until: Option<String>,
        #[arg(long)]
        include_deleted: bool,
    },
    /// Edit a slot by id or by row number from `schedule list`.
    Edit {
        id: Option<u64>,
        #[arg(long)]
        index: Option<usize>,
        #[arg(long)]
        start: Option<String>,
        #[arg(long)]
        end: Option<String>,
        #[arg(long)]
        task: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        value: Option<String>,
    },
    /// Delete a slot (soft with --soft, permanent otherwise).
    Delete {
        id: Option<u64>,
        #[arg(long)]
        index: Option<usize>,
        #[arg(long)]
        soft: bool,
    },
    /// Push a slot's end time out and mark it postponed.
    Extend {
        id: Option<u64>,
        #[arg(long)]
        index: Option<usize>,
        /// How much longer, e.g. '30 minutes' or '1.5 hours'.
        #[arg(long)]
        by: String,
    },
    /// Search slots over task, description, and value note.
    Search {
        /// Keyword matched against all three text fields.
        keyword: Option<String>,
        #[arg(long)]
        task: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        value: Option<String>,
        #[arg(long)]
        case_sensitive: bool,
    },
    /// Interactive review of existing slots and batch slot creation.
    Gen,
    /// Slots that ended within the past days (default from config).
    History {
        #[arg(long)]
        days: Option<u32>,
    },
    /// Schedule statistics.
    Stats,
}
