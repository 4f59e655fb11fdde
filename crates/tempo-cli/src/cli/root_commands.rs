use clap::Subcommand;

use crate::cli::subcommands::{JobCommands, ScheduleCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Job list management.
    Job {
        #[command(subcommand)]
        action: JobCommands,
    },
    /// Schedule management.
    Schedule {
        #[command(subcommand)]
        action: ScheduleCommands,
    },
}
