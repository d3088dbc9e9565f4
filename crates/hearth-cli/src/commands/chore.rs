use hearth_core::enums::ChoreFrequency;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ChoreCommands;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

/// Handle `hearth chore`.
pub async fn handle(
    action: &ChoreCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let caller = ctx.caller().await?;
    match action {
        ChoreCommands::Create {
            title,
            frequency,
            assign,
        } => {
            let frequency = parse_enum::<ChoreFrequency>(frequency, "frequency")?;
            let chore = ctx
                .service
                .create_chore(&caller, title, frequency, assign.as_deref())
                .await?;
            output(&chore, flags.format)
        }
        ChoreCommands::List { archived } => {
            let chores = ctx.service.list_chores(&caller, *archived).await?;
            output(&chores, flags.format)
        }
        ChoreCommands::Complete { id, note } => {
            let completion = ctx
                .service
                .complete_chore(&caller, id, note.as_deref())
                .await?;
            output(&completion, flags.format)
        }
        ChoreCommands::Archive { id } => {
            let chore = ctx.service.archive_chore(&caller, id).await?;
            output(&chore, flags.format)
        }
        ChoreCommands::Reassign { id, to } => {
            let chore = ctx
                .service
                .reassign_chore(&caller, id, to.as_deref())
                .await?;
            output(&chore, flags.format)
        }
    }
}
