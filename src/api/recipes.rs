//! Recipe operations.

use crate::api::{ApiClient, ApiError};
use crate::models::{Ack, CookSummary, Recipe, RecipeDetail, RecipeSuggestion, SuggestRequest};

impl ApiClient {
    /// Fetch the user's saved recipes, newest first. The server caps
    /// this list at the per-user recipe limit.
    pub async fn recipe_history(&self) -> Result<Vec<Recipe>, ApiError> {
        self.get("/recipes/history").await
    }

    /// Fetch one recipe with its instructions and ingredients.
    pub async fn recipe_detail(&self, recipe_id: i64) -> Result<RecipeDetail, ApiError> {
        self.get(&format!("/recipes/{}", recipe_id)).await
    }

    /// Ask the server to generate recipe proposals. Returns an empty
    /// list when the generator comes up with nothing usable.
    pub async fn suggest_recipes(
        &self,
        request: &SuggestRequest,
    ) -> Result<Vec<RecipeSuggestion>, ApiError> {
        self.post_json("/recipes/suggest", request).await
    }

    /// Save a suggestion as a real recipe. When the user is already at
    /// the recipe limit the server drops their oldest entry first.
    pub async fn create_recipe(
        &self,
        suggestion: &RecipeSuggestion,
    ) -> Result<RecipeDetail, ApiError> {
        self.post_json("/recipes/create", suggestion).await
    }

    /// Mark a recipe as cooked; the server consumes matching inventory
    /// items on its side.
    pub async fn cook_recipe(&self, recipe_id: i64) -> Result<CookSummary, ApiError> {
        self.post(&format!("/recipes/{}/cook", recipe_id)).await
    }

    /// Remove a recipe from the user's collection.
    pub async fn delete_recipe(&self, recipe_id: i64) -> Result<Ack, ApiError> {
        self.delete(&format!("/recipes/{}", recipe_id)).await
    }
}
