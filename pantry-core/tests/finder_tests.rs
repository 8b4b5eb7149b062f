//! End-to-end finder tests against in-memory upstreams.

use async_trait::async_trait;
use pantry_core::recipes::RecipeInformation;
use pantry_core::{
    score, FakeProvider, FakeRecipeSource, FindError, Goal, IngredientRef, LlmProvider,
    MockClient, RecipeFinder, RecipeSource, RecipeSourceError, SearchHit, SpoonacularSource,
    INSTRUCTIONS_PLACEHOLDER, SUGGESTION_PLACEHOLDER,
};
use serde_json::json;
use std::sync::Arc;

fn hit(id: i64, title: &str, used: u32, missed: u32, likes: u32) -> SearchHit {
    SearchHit {
        id,
        title: title.to_string(),
        image: Some(format!("https://img.test/{}.jpg", id)),
        used_ingredient_count: used,
        missed_ingredient_count: missed,
        used_ingredients: (0..used).map(|i| IngredientRef::named(format!("used{}", i))).collect(),
        missed_ingredients: (0..missed)
            .map(|i| IngredientRef::named(format!("missed{}", i)))
            .collect(),
        likes,
    }
}

fn finder(source: Arc<FakeRecipeSource>, llm: Arc<FakeProvider>) -> RecipeFinder {
    let source: Arc<dyn RecipeSource> = source;
    let llm: Arc<dyn LlmProvider> = llm;
    RecipeFinder::new(source, llm)
}

const SUGGESTION_JSON: &str = r#"{"goal": "faster", "reasoning": "Use instant rice", "substitutions": [{"from": "rice", "to": "instant rice", "benefit": "saves 15 minutes"}], "improved_instructions": ["Cook instant rice", "Stir-fry chicken"]}"#;

#[tokio::test]
async fn test_blank_instructions_get_generated() {
    let source = Arc::new(
        FakeRecipeSource::new()
            .with_recipe(hit(1, "Chicken Rice Soup", 2, 1, 10), Some("Simmer everything."))
            .with_recipe(hit(2, "Chicken Fried Rice", 2, 0, 80), Some("")),
    );
    let llm = Arc::new(
        FakeProvider::with_response("step-by-step", "1. Fry rice.\n2. Add chicken.")
            .and_response("autonomous cooking assistant", SUGGESTION_JSON),
    );

    let response = finder(source.clone(), llm)
        .find_recipes(Some("chicken, rice"))
        .await
        .unwrap();

    assert_eq!(response.recipes.len(), 2);
    for recipe in &response.recipes {
        assert!(!recipe.instructions.trim().is_empty());
    }

    let soup = response.recipes.iter().find(|r| r.id == 1).unwrap();
    let fried = response.recipes.iter().find(|r| r.id == 2).unwrap();
    assert_eq!(soup.instructions, "Simmer everything.");
    assert_eq!(fried.instructions, "1. Fry rice.\n2. Add chicken.");
    assert_eq!(source.detail_calls(), 2);
}

#[tokio::test]
async fn test_results_ranked_and_suggestion_references_best() {
    let source = Arc::new(
        FakeRecipeSource::new()
            .with_recipe(hit(1, "Low", 1, 3, 0), Some("a"))
            .with_recipe(hit(2, "High", 3, 0, 600), Some("b"))
            .with_recipe(hit(3, "Mid", 2, 1, 50), Some("c")),
    );
    let llm = Arc::new(FakeProvider::with_response("autonomous", SUGGESTION_JSON));

    let response = finder(source, llm)
        .find_recipes(Some("chicken, rice"))
        .await
        .unwrap();

    let ids: Vec<i64> = response.recipes.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2, 3, 1]);
    assert!(response
        .recipes
        .windows(2)
        .all(|w| w[0].score >= w[1].score));
    assert_eq!(response.recipes[0].score, score(3, 0, 600));

    let agentic = response.agentic.unwrap();
    assert_eq!(agentic.best_recipe_id, 2);
    assert_eq!(agentic.best_recipe_title, "High");
    assert!(response.recipes.iter().any(|r| r.id == agentic.best_recipe_id));
    assert_eq!(agentic.goal, Some(Goal::Faster));
    assert_eq!(agentic.improved_instructions.len(), 2);
}

#[tokio::test]
async fn test_empty_search_is_empty_response() {
    let source = Arc::new(FakeRecipeSource::new());
    let llm = Arc::new(FakeProvider::new());

    let response = finder(source, llm.clone())
        .find_recipes(Some("unobtainium"))
        .await
        .unwrap();

    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({"recipes": [], "agentic": null})
    );
    assert_eq!(llm.calls(), 0);
}

#[tokio::test]
async fn test_blank_query_rejected_before_upstream() {
    let source = Arc::new(FakeRecipeSource::new().with_recipe(hit(1, "X", 1, 0, 0), Some("x")));
    let llm = Arc::new(FakeProvider::new());
    let finder = finder(source.clone(), llm);

    for input in [None, Some(""), Some("   "), Some("?!#")] {
        let err = finder.find_recipes(input).await.unwrap_err();
        assert!(matches!(err, FindError::InvalidRequest), "input: {:?}", input);
    }
    assert_eq!(source.search_calls(), 0);
}

#[tokio::test]
async fn test_search_failure_is_upstream_error() {
    let source = Arc::new(FakeRecipeSource::new().with_search_error("quota exceeded"));
    let llm = Arc::new(FakeProvider::new());

    let err = finder(source, llm)
        .find_recipes(Some("egg"))
        .await
        .unwrap_err();
    assert!(matches!(err, FindError::Upstream(_)));
}

#[tokio::test]
async fn test_detail_failure_is_isolated() {
    let source = Arc::new(
        FakeRecipeSource::new()
            .with_failing_details(hit(1, "Broken", 3, 0, 0))
            .with_recipe(hit(2, "Fine", 1, 0, 0), Some("Bake.")),
    );
    let llm = Arc::new(FakeProvider::with_response("autonomous", SUGGESTION_JSON));

    let response = finder(source, llm).find_recipes(Some("egg")).await.unwrap();

    assert_eq!(response.recipes.len(), 2);
    let broken = response.recipes.iter().find(|r| r.id == 1).unwrap();
    let fine = response.recipes.iter().find(|r| r.id == 2).unwrap();
    assert_eq!(broken.instructions, INSTRUCTIONS_PLACEHOLDER);
    assert_eq!(fine.instructions, "Bake.");
}

#[tokio::test]
async fn test_malformed_suggestion_falls_back_to_raw_text() {
    let raw = "Make it healthier: {goal: healthier, oops}";
    let source = Arc::new(FakeRecipeSource::new().with_recipe(hit(1, "Stew", 1, 0, 0), Some("Stew.")));
    let llm = Arc::new(FakeProvider::with_response("autonomous", raw));

    let response = finder(source, llm).find_recipes(Some("beef")).await.unwrap();

    let agentic = response.agentic.unwrap();
    assert_eq!(agentic.reasoning.as_deref(), Some(raw));
    assert!(agentic.substitutions.is_empty());
    assert!(agentic.improved_instructions.is_empty());
    assert_eq!(agentic.goal, None);
}

#[tokio::test]
async fn test_all_ai_failing_still_succeeds() {
    let source = Arc::new(
        FakeRecipeSource::new()
            .with_recipe(hit(1, "A", 1, 0, 0), None)
            .with_recipe(hit(2, "B", 2, 0, 0), Some(" ")),
    );
    let llm = Arc::new(FakeProvider::new());

    let response = finder(source, llm).find_recipes(Some("egg")).await.unwrap();

    assert!(response
        .recipes
        .iter()
        .all(|r| r.instructions == INSTRUCTIONS_PLACEHOLDER));
    assert_eq!(
        response.agentic.unwrap().reasoning.as_deref(),
        Some(SUGGESTION_PLACEHOLDER)
    );
}

#[tokio::test]
async fn test_search_limit_is_forwarded() {
    let mock = Arc::new(MockClient::new().with_json(
        "https://spoon.test/recipes/findByIngredients",
        json!([]),
    ));
    let source: Arc<dyn RecipeSource> = Arc::new(SpoonacularSource::new(
        mock.clone(),
        "https://spoon.test",
        Some("k".to_string()),
    ));
    let llm: Arc<dyn LlmProvider> = Arc::new(FakeProvider::new());

    let response = RecipeFinder::new(source, llm)
        .with_search_limit(5)
        .find_recipes(Some("chicken, rice & beans"))
        .await
        .unwrap();

    assert!(response.recipes.is_empty());
    let request = &mock.requests()[0];
    assert_eq!(request.query_param("number"), Some("5"));
    assert_eq!(request.query_param("ingredients"), Some("chicken, rice  beans"));
}

/// Source whose detail lookup panics for one recipe id.
struct PanicOnDetails {
    hits: Vec<SearchHit>,
    panic_for: i64,
}

#[async_trait]
impl RecipeSource for PanicOnDetails {
    async fn search_by_ingredients(
        &self,
        _ingredients: &str,
        _limit: u32,
    ) -> Result<Vec<SearchHit>, RecipeSourceError> {
        Ok(self.hits.clone())
    }

    async fn recipe_information(&self, id: i64) -> Result<RecipeInformation, RecipeSourceError> {
        if id == self.panic_for {
            panic!("detail lookup blew up for {}", id);
        }
        Ok(RecipeInformation {
            instructions: Some("Bake.".to_string()),
        })
    }
}

#[tokio::test]
async fn test_panicking_enrichment_only_affects_its_slot() {
    let source: Arc<dyn RecipeSource> = Arc::new(PanicOnDetails {
        hits: vec![hit(1, "Exploding Pie", 3, 0, 0), hit(2, "Bread", 1, 0, 0)],
        panic_for: 1,
    });
    let llm: Arc<dyn LlmProvider> =
        Arc::new(FakeProvider::with_response("autonomous", SUGGESTION_JSON));

    let response = RecipeFinder::new(source, llm)
        .find_recipes(Some("flour"))
        .await
        .unwrap();

    let ids: Vec<i64> = response.recipes.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(response.recipes[0].instructions, INSTRUCTIONS_PLACEHOLDER);
    assert_eq!(response.recipes[1].instructions, "Bake.");
    assert_eq!(response.agentic.unwrap().best_recipe_id, 1);
}
