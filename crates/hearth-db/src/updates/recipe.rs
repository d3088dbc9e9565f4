//! Recipe update builder.

use hearth_core::enums::RecipeType;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct RecipeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub recipe_type: Option<RecipeType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Option<String>>,
}

impl RecipeUpdate {
    /// True when no field would be written.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.recipe_type.is_none()
            && self.tags.is_none()
            && self.notes.is_none()
            && self.text.is_none()
    }
}

pub struct RecipeUpdateBuilder(RecipeUpdate);

impl RecipeUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(RecipeUpdate::default())
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn recipe_type(mut self, recipe_type: RecipeType) -> Self {
        self.0.recipe_type = Some(recipe_type);
        self
    }

    #[must_use]
    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.0.tags = Some(tags);
        self
    }

    #[must_use]
    pub fn notes(mut self, notes: Option<String>) -> Self {
        self.0.notes = Some(notes);
        self
    }

    #[must_use]
    pub fn text(mut self, text: Option<String>) -> Self {
        self.0.text = Some(text);
        self
    }

    #[must_use]
    pub fn build(self) -> RecipeUpdate {
        self.0
    }
}

impl Default for RecipeUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
