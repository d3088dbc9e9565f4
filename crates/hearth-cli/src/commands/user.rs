use crate::cli::GlobalFlags;
use crate::cli::subcommands::UserCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `hearth user`.
pub async fn handle(
    action: &UserCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        UserCommands::Create { email, name } => {
            let user = ctx.service.create_user(email, name).await?;
            output(&user, flags.format)
        }
        UserCommands::Show { id } => {
            let user_id = match id {
                Some(id) => id.clone(),
                None => ctx.caller().await?.user_id,
            };
            let user = ctx.service.get_user(&user_id).await?;
            output(&user, flags.format)
        }
    }
}
