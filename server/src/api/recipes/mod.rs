pub mod find;

use crate::AppState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/recipes endpoints (mounted at /api/recipes)
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(find::find_recipes))
}

#[derive(OpenApi)]
#[openapi(
    paths(find::find_recipes),
    components(schemas(
        pantry_core::FindRecipesResponse,
        pantry_core::RecipeCandidate,
        pantry_core::IngredientRef,
        pantry_core::Suggestion,
        pantry_core::Substitution,
        pantry_core::Goal,
    ))
)]
pub struct ApiDoc;
