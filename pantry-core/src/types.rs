use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Text used whenever a candidate ends up with no usable instructions.
pub const INSTRUCTIONS_PLACEHOLDER: &str = "Instructions unavailable.";

/// Reasoning used when the suggestion call itself fails.
pub const SUGGESTION_PLACEHOLDER: &str = "AI suggestion unavailable.";

/// Deserialize an explicit `null` the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One ingredient line as reported by the recipe search API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct IngredientRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl IngredientRef {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// A recipe returned to the caller, after enrichment and scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct RecipeCandidate {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub used_ingredient_count: u32,
    #[serde(default)]
    pub missed_ingredient_count: u32,
    #[serde(default)]
    pub used_ingredients: Vec<IngredientRef>,
    #[serde(default)]
    pub missed_ingredients: Vec<IngredientRef>,
    #[serde(default)]
    pub likes: u32,
    /// Never empty once the candidate leaves the finder.
    pub instructions: String,
    #[serde(default)]
    pub score: f64,
}

/// Improvement goal the AI is asked to pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Healthier,
    Cheaper,
    Faster,
}

impl Goal {
    pub const ALL: &'static [Goal] = &[Goal::Healthier, Goal::Cheaper, Goal::Faster];

    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::Healthier => "healthier",
            Goal::Cheaper => "cheaper",
            Goal::Faster => "faster",
        }
    }

    /// Case-insensitive parse, ignoring surrounding whitespace.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|g| g.as_str().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single ingredient swap proposed by the AI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Substitution {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub benefit: String,
}

/// The "agentic" improvement suggestion for the top-ranked recipe.
///
/// Field names on the wire are what the browser bundle reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Suggestion {
    #[serde(rename = "bestRecipeId")]
    pub best_recipe_id: i64,
    #[serde(rename = "bestRecipeTitle")]
    pub best_recipe_title: String,
    pub goal: Option<Goal>,
    pub reasoning: Option<String>,
    #[serde(default)]
    pub substitutions: Vec<Substitution>,
    #[serde(default)]
    pub improved_instructions: Vec<String>,
}

impl Suggestion {
    /// A suggestion with only the best-recipe reference filled in.
    pub fn for_recipe(best: &RecipeCandidate) -> Self {
        Self {
            best_recipe_id: best.id,
            best_recipe_title: best.title.clone(),
            goal: None,
            reasoning: None,
            substitutions: Vec::new(),
            improved_instructions: Vec::new(),
        }
    }
}

/// Response body of `GET /api/recipes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FindRecipesResponse {
    pub recipes: Vec<RecipeCandidate>,
    pub agentic: Option<Suggestion>,
}

impl FindRecipesResponse {
    pub fn empty() -> Self {
        Self {
            recipes: Vec::new(),
            agentic: None,
        }
    }
}
