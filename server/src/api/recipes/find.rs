use crate::api::ErrorResponse;
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use pantry_core::{FindError, FindRecipesResponse};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
pub struct FindRecipesParams {
    /// Comma-separated ingredients, e.g. "chicken, rice". Characters other
    /// than letters, digits, commas and whitespace are dropped.
    pub ingredients: Option<String>,
}

/// Find recipes for a list of ingredients
///
/// Searches the recipe database, fills in missing instructions with AI,
/// ranks the results, and attaches one AI improvement suggestion for the
/// best match. AI failures never fail the request; they show up as
/// placeholder text.
#[utoipa::path(
    get,
    path = "/api/recipes",
    tag = "recipes",
    params(FindRecipesParams),
    responses(
        (status = 200, description = "Ranked recipes with an improvement suggestion", body = FindRecipesResponse),
        (status = 400, description = "Missing ingredients", body = ErrorResponse),
        (status = 500, description = "Recipe search failed", body = ErrorResponse)
    )
)]
pub async fn find_recipes(
    State(finder): State<AppState>,
    Query(params): Query<FindRecipesParams>,
) -> impl IntoResponse {
    match finder.find_recipes(params.ingredients.as_deref()).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(FindError::InvalidRequest) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Missing ingredients".to_string(),
            }),
        )
            .into_response(),
        // Already logged by the finder
        Err(FindError::Upstream(_)) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Failed to load recipes".to_string(),
            }),
        )
            .into_response(),
    }
}
