use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Job { action } => commands::job::handle(action, ctx, flags),
        Commands::Schedule { action } => commands::schedule::handle(action, ctx, flags),
    }
}
