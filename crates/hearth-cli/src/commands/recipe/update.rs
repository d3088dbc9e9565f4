use hearth_core::enums::RecipeType;
use hearth_db::updates::recipe::RecipeUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub id: String,
    pub title: Option<String>,
    pub recipe_type: Option<String>,
    pub tags: Vec<String>,
    pub clear_tags: bool,
    pub notes: Option<String>,
    pub clear_notes: bool,
    pub text: Option<String>,
    pub clear_text: bool,
}

pub async fn run(params: Params, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    validate_update_params(&params)?;
    let caller = ctx.caller().await?;

    let mut builder = RecipeUpdateBuilder::new();
    if let Some(title) = params.title.as_deref() {
        builder = builder.title(title);
    }
    if let Some(recipe_type) = params.recipe_type.as_deref() {
        builder = builder.recipe_type(parse_enum::<RecipeType>(recipe_type, "type")?);
    }
    if params.clear_tags {
        builder = builder.tags(Vec::new());
    } else if !params.tags.is_empty() {
        builder = builder.tags(params.tags);
    }
    if params.clear_notes {
        builder = builder.notes(None);
    } else if let Some(notes) = params.notes {
        builder = builder.notes(Some(notes));
    }
    if params.clear_text {
        builder = builder.text(None);
    } else if let Some(text) = params.text {
        builder = builder.text(Some(text));
    }

    let recipe = ctx
        .service
        .update_recipe(&caller, &params.id, builder.build())
        .await?;
    output(&recipe, flags.format)
}

fn validate_update_params(params: &Params) -> anyhow::Result<()> {
    if params.title.is_none()
        && params.recipe_type.is_none()
        && params.tags.is_empty()
        && !params.clear_tags
        && params.notes.is_none()
        && !params.clear_notes
        && params.text.is_none()
        && !params.clear_text
    {
        anyhow::bail!("Provide --title, --type, --tag, --notes, --text or a --clear-* flag");
    }
    Ok(())
}
