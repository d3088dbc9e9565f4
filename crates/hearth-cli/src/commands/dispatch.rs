use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::User { action } => commands::user::handle(&action, ctx, flags).await,
        Commands::House { action } => commands::house::handle(&action, ctx, flags).await,
        Commands::Item { action } => commands::item::handle(&action, ctx, flags).await,
        Commands::Recipe { action } => commands::recipe::handle(&action, ctx, flags).await,
        Commands::Shopping { action } => commands::shopping::handle(&action, ctx, flags).await,
        Commands::Chore { action } => commands::chore::handle(&action, ctx, flags).await,
    }
}
