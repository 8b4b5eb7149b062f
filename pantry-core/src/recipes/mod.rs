//! Recipe search abstraction.
//!
//! The finder only needs two capabilities from a recipe database: a ranked
//! search by ingredients and a per-recipe detail lookup. Both sit behind the
//! [`RecipeSource`] trait.

mod fake;
mod spoonacular;

pub use fake::FakeRecipeSource;
pub use spoonacular::SpoonacularSource;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::error::FetchError;
use crate::types::{null_as_default, IngredientRef, RecipeCandidate};

#[derive(Debug, Error)]
pub enum RecipeSourceError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

/// One hit from an ingredient search, before enrichment.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub used_ingredient_count: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub missed_ingredient_count: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub used_ingredients: Vec<IngredientRef>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub missed_ingredients: Vec<IngredientRef>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub likes: u32,
}

impl SearchHit {
    /// Turn the hit into a candidate carrying the given instructions.
    pub fn into_candidate(self, instructions: String) -> RecipeCandidate {
        RecipeCandidate {
            id: self.id,
            title: self.title,
            image: self.image,
            used_ingredient_count: self.used_ingredient_count,
            missed_ingredient_count: self.missed_ingredient_count,
            used_ingredients: self.used_ingredients,
            missed_ingredients: self.missed_ingredients,
            likes: self.likes,
            instructions,
            score: 0.0,
        }
    }
}

/// Extended details for a single recipe.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RecipeInformation {
    #[serde(default)]
    pub instructions: Option<String>,
}

/// A ranked, ingredient-driven recipe database.
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Search for recipes that use the given comma-separated ingredients.
    async fn search_by_ingredients(
        &self,
        ingredients: &str,
        limit: u32,
    ) -> Result<Vec<SearchHit>, RecipeSourceError>;

    /// Fetch extended details for one recipe.
    async fn recipe_information(&self, id: i64) -> Result<RecipeInformation, RecipeSourceError>;
}
