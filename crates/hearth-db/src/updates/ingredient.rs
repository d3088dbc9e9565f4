//! Recipe ingredient update builder.

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct IngredientUpdate {
    /// Raw decimal text; validated by the repository.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_override: Option<Option<String>>,
}

impl IngredientUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.quantity.is_none() && self.unit_override.is_none()
    }
}

pub struct IngredientUpdateBuilder(IngredientUpdate);

impl IngredientUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(IngredientUpdate::default())
    }

    #[must_use]
    pub fn quantity(mut self, quantity: impl Into<String>) -> Self {
        self.0.quantity = Some(quantity.into());
        self
    }

    #[must_use]
    pub fn unit_override(mut self, unit_override: Option<String>) -> Self {
        self.0.unit_override = Some(unit_override);
        self
    }

    #[must_use]
    pub fn build(self) -> IngredientUpdate {
        self.0
    }
}

impl Default for IngredientUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
