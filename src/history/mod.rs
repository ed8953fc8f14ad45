//! Bounded recipe collection.
//!
//! Each user keeps at most [`MAX_RECIPES_PER_USER`] saved recipes. The
//! server enforces the cap; this mirror applies the same rules locally
//! so commands can report evictions without a second round trip, and so
//! an over-long server response can never widen the display.

use std::cmp::Ordering;

use crate::models::Recipe;

/// Maximum number of recipes a user can keep.
pub const MAX_RECIPES_PER_USER: usize = 3;

/// Local mirror of the user's saved recipes, ordered newest first.
#[derive(Debug, Clone, Default)]
pub struct RecipeHistory {
    recipes: Vec<Recipe>,
}

impl RecipeHistory {
    /// Build from a server response, sorting newest-first and dropping
    /// anything beyond the cap. Ties on the save timestamp break toward
    /// the higher id, so the order is deterministic.
    pub fn from_server(mut recipes: Vec<Recipe>) -> Self {
        recipes.sort_by(|a, b| save_order(b, a));
        recipes.truncate(MAX_RECIPES_PER_USER);
        Self { recipes }
    }

    /// Saved recipes, newest first.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.recipes.len() >= MAX_RECIPES_PER_USER
    }

    pub fn contains(&self, recipe_id: i64) -> bool {
        self.recipes.iter().any(|r| r.recipe_id == recipe_id)
    }

    /// Record a newly saved recipe. Returns the evicted entry when the
    /// cap forced the oldest one out.
    pub fn record_saved(&mut self, recipe: Recipe) -> Option<Recipe> {
        self.recipes.push(recipe);
        self.recipes.sort_by(|a, b| save_order(b, a));
        if self.recipes.len() > MAX_RECIPES_PER_USER {
            self.recipes.pop()
        } else {
            None
        }
    }

    /// Drop a recipe by id. Returns false when it was not present.
    pub fn remove(&mut self, recipe_id: i64) -> bool {
        let before = self.recipes.len();
        self.recipes.retain(|r| r.recipe_id != recipe_id);
        self.recipes.len() != before
    }
}

/// Ascending save order: oldest first, ties broken by ascending id.
fn save_order(a: &Recipe, b: &Recipe) -> Ordering {
    a.created_at
        .cmp(&b.created_at)
        .then_with(|| a.recipe_id.cmp(&b.recipe_id))
}
