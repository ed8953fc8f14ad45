//! Recipe models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Summary row as returned by `GET /recipes/history`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Recipe {
    pub recipe_id: i64,
    pub title: String,
    pub short_description: Option<String>,
    pub total_time_minutes: Option<i64>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecipeIngredient {
    pub recipe_id: i64,
    pub ingredient_name: String,
}

/// Full recipe as returned by `GET /recipes/{id}` and `POST /recipes/create`.
#[derive(Debug, Clone, Deserialize)]
pub struct RecipeDetail {
    pub recipe_id: i64,
    pub title: String,
    pub short_description: Option<String>,
    pub total_time_minutes: Option<i64>,
    pub created_at: NaiveDateTime,
    pub instructions: String,
    pub ingredients: Vec<RecipeIngredient>,
}

impl RecipeDetail {
    /// Instructions are stored as one newline-joined string; split them
    /// back into display steps.
    pub fn steps(&self) -> Vec<&str> {
        self.instructions
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect()
    }
}

impl From<RecipeDetail> for Recipe {
    fn from(detail: RecipeDetail) -> Self {
        Self {
            recipe_id: detail.recipe_id,
            title: detail.title,
            short_description: detail.short_description,
            total_time_minutes: detail.total_time_minutes,
            created_at: detail.created_at,
        }
    }
}

/// A generated recipe proposal. The same shape is posted back to
/// `POST /recipes/create` when the user saves one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeSuggestion {
    pub recipe_name: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub approx_time: String,
    pub steps: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SuggestRequest {
    pub custom_ingredients: Option<Vec<String>>,
    pub ignore_history: bool,
}

/// Result of `POST /recipes/{id}/cook`.
#[derive(Debug, Clone, Deserialize)]
pub struct CookSummary {
    pub message: String,
    pub ingredients_used: u32,
}
