//! Joined dashboard reads.
//!
//! The dashboard view needs both the inventory and the recipe history;
//! the two fetches run concurrently and the result is all-or-nothing,
//! so the view never renders one fresh half next to one stale half.

use tokio::try_join;

use crate::api::{ApiClient, ApiError};
use crate::history::RecipeHistory;
use crate::models::{InventoryItem, RecipeSuggestion, SuggestRequest};

pub struct Dashboard {
    pub inventory: Vec<InventoryItem>,
    pub recipes: RecipeHistory,
}

impl Dashboard {
    /// Fetch inventory and recipe history concurrently. Either both
    /// succeed or the whole load fails.
    pub async fn load(client: &ApiClient) -> Result<Self, ApiError> {
        let (inventory, history) = try_join!(client.list_inventory(), client.recipe_history())?;
        Ok(Self {
            inventory,
            recipes: RecipeHistory::from_server(history),
        })
    }
}

/// Outcome of a suggestion request driven by ingredient names.
pub enum SuggestOutcome {
    /// Nothing to cook from; no request was made.
    EmptyInventory,
    /// The generator had ingredients but produced nothing usable.
    NoMatches,
    Suggestions(Vec<RecipeSuggestion>),
}

/// Ask for recipe proposals based on the given ingredient names.
///
/// An empty list short-circuits without touching the network: the
/// server could only refuse it anyway.
pub async fn suggest_from_ingredients(
    client: &ApiClient,
    ingredients: Vec<String>,
    ignore_history: bool,
) -> Result<SuggestOutcome, ApiError> {
    if ingredients.is_empty() {
        return Ok(SuggestOutcome::EmptyInventory);
    }

    let request = SuggestRequest {
        custom_ingredients: Some(ingredients),
        ignore_history,
    };
    let suggestions = client.suggest_recipes(&request).await?;

    if suggestions.is_empty() {
        Ok(SuggestOutcome::NoMatches)
    } else {
        Ok(SuggestOutcome::Suggestions(suggestions))
    }
}

/// Ingredient names in inventory order, as the suggest endpoint expects.
pub fn ingredient_names(inventory: &[InventoryItem]) -> Vec<String> {
    inventory.iter().map(|item| item.name.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    const USER_ID: &str = "550e8400-e29b-41d4-a716-446655440000";

    fn inventory_body() -> serde_json::Value {
        json!([
            {"item_id": 1, "user_id": USER_ID, "name": "Tomato",
             "added_at": "2025-05-01T08:00:00", "updated_at": "2025-05-01T08:00:00"}
        ])
    }

    #[tokio::test]
    async fn test_load_joins_both_fetches() {
        let server = MockServer::start();
        let inventory_mock = server.mock(|when, then| {
            when.method(Method::GET).path("/inventory/");
            then.status(200).json_body(inventory_body());
        });
        let history_mock = server.mock(|when, then| {
            when.method(Method::GET).path("/recipes/history");
            then.status(200).json_body(json!([
                {"recipe_id": 1, "title": "Old", "short_description": null,
                 "total_time_minutes": null, "created_at": "2025-05-01T12:00:00"},
                {"recipe_id": 2, "title": "New", "short_description": null,
                 "total_time_minutes": null, "created_at": "2025-05-02T12:00:00"}
            ]));
        });

        let client = ApiClient::new(&server.base_url(), Some("tok")).unwrap();
        let dashboard = Dashboard::load(&client).await.unwrap();

        assert_eq!(inventory_mock.calls(), 1);
        assert_eq!(history_mock.calls(), 1);
        assert_eq!(dashboard.inventory.len(), 1);
        // History comes back newest first regardless of server order.
        assert_eq!(dashboard.recipes.recipes()[0].recipe_id, 2);
    }

    #[tokio::test]
    async fn test_load_fails_when_either_fetch_fails() {
        let server = MockServer::start();
        let _inventory = server.mock(|when, then| {
            when.method(Method::GET).path("/inventory/");
            then.status(200).json_body(inventory_body());
        });
        let _history = server.mock(|when, then| {
            when.method(Method::GET).path("/recipes/history");
            then.status(500).json_body(json!({"detail": "boom"}));
        });

        let client = ApiClient::new(&server.base_url(), Some("tok")).unwrap();
        assert!(Dashboard::load(&client).await.is_err());
    }

    #[tokio::test]
    async fn test_empty_ingredients_never_hit_the_network() {
        let server = MockServer::start();
        let suggest_mock = server.mock(|when, then| {
            when.method(Method::POST).path("/recipes/suggest");
            then.status(200).json_body(json!([]));
        });

        let client = ApiClient::new(&server.base_url(), Some("tok")).unwrap();
        let outcome = suggest_from_ingredients(&client, Vec::new(), false)
            .await
            .unwrap();

        assert!(matches!(outcome, SuggestOutcome::EmptyInventory));
        assert_eq!(suggest_mock.calls(), 0);
    }

    #[tokio::test]
    async fn test_generator_with_no_usable_output() {
        let server = MockServer::start();
        let _m = server.mock(|when, then| {
            when.method(Method::POST).path("/recipes/suggest");
            then.status(200).json_body(json!([]));
        });

        let client = ApiClient::new(&server.base_url(), Some("tok")).unwrap();
        let outcome = suggest_from_ingredients(&client, vec!["Tofu".to_string()], false)
            .await
            .unwrap();

        assert!(matches!(outcome, SuggestOutcome::NoMatches));
    }

    #[tokio::test]
    async fn test_suggestions_pass_through() {
        let server = MockServer::start();
        let _m = server.mock(|when, then| {
            when.method(Method::POST).path("/recipes/suggest").json_body(json!({
                "custom_ingredients": ["Tomato"],
                "ignore_history": false
            }));
            then.status(200).json_body(json!([
                {"recipe_name": "Bruschetta", "description": "Starter",
                 "ingredients": ["Tomato", "Bread"], "approx_time": "15 minutes",
                 "steps": ["Toast", "Top"]}
            ]));
        });

        let client = ApiClient::new(&server.base_url(), Some("tok")).unwrap();
        let outcome = suggest_from_ingredients(&client, vec!["Tomato".to_string()], false)
            .await
            .unwrap();

        match outcome {
            SuggestOutcome::Suggestions(list) => {
                assert_eq!(list.len(), 1);
                assert_eq!(list[0].recipe_name, "Bruschetta");
            }
            _ => panic!("expected suggestions"),
        }
    }

    #[test]
    fn test_ingredient_names_preserve_order() {
        let items: Vec<InventoryItem> = serde_json::from_value(json!([
            {"item_id": 1, "user_id": USER_ID, "name": "Tomato",
             "added_at": "2025-05-01T08:00:00", "updated_at": "2025-05-01T08:00:00"},
            {"item_id": 2, "user_id": USER_ID, "name": "Basil",
             "added_at": "2025-05-01T08:05:00", "updated_at": "2025-05-01T08:05:00"}
        ]))
        .unwrap();

        assert_eq!(ingredient_names(&items), vec!["Tomato", "Basil"]);
    }
}
