//! User profile and preference operations.

use crate::api::{ApiClient, ApiError};
use crate::models::{PreferenceCatalog, PreferenceUpdate, UserProfile};

impl ApiClient {
    /// Fetch the signed-in user's profile.
    pub async fn current_user(&self) -> Result<UserProfile, ApiError> {
        self.get("/users/me").await
    }

    /// List every selectable dietary preference and cuisine.
    pub async fn preference_catalog(&self) -> Result<PreferenceCatalog, ApiError> {
        self.get("/users/preferences").await
    }

    /// Replace the user's dietary and cuisine preferences. Returns the
    /// refreshed profile.
    pub async fn update_preferences(
        &self,
        update: &PreferenceUpdate,
    ) -> Result<UserProfile, ApiError> {
        self.put_json("/users/preferences", update).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn profile_body() -> serde_json::Value {
        json!({
            "user_id": "550e8400-e29b-41d4-a716-446655440000",
            "email": "chef@example.com",
            "first_name": "Ada",
            "last_name": "Okafor",
            "created_at": "2025-04-01T09:30:00",
            "updated_at": "2025-05-02T11:00:00.251000",
            "dietary_preferences": [
                {"preference_id": 2, "name": "Vegetarian", "description": "No meat"}
            ],
            "preferred_cuisines": [
                {"cuisine_id": 5, "name": "Italian", "description": null}
            ]
        })
    }

    #[tokio::test]
    async fn test_current_user_parses_profile() {
        let server = MockServer::start();
        let _m = server.mock(|when, then| {
            when.method(Method::GET)
                .path("/users/me")
                .header("authorization", "Bearer tok");
            then.status(200).json_body(profile_body());
        });

        let client = ApiClient::new(&server.base_url(), Some("tok")).unwrap();
        let profile = client.current_user().await.unwrap();

        assert_eq!(profile.full_name(), "Ada Okafor");
        assert_eq!(profile.dietary_preferences[0].name, "Vegetarian");
        assert_eq!(profile.preferred_cuisines[0].cuisine_id, 5);
        assert!(profile.preferred_cuisines[0].description.is_none());
    }

    #[tokio::test]
    async fn test_preference_catalog() {
        let server = MockServer::start();
        let _m = server.mock(|when, then| {
            when.method(Method::GET).path("/users/preferences");
            then.status(200).json_body(json!({
                "dietary_preferences": [
                    {"preference_id": 1, "name": "Non-vegetarian", "description": null},
                    {"preference_id": 2, "name": "Vegetarian", "description": null}
                ],
                "cuisines": [
                    {"cuisine_id": 1, "name": "American", "description": null}
                ]
            }));
        });

        let client = ApiClient::new(&server.base_url(), Some("tok")).unwrap();
        let catalog = client.preference_catalog().await.unwrap();

        assert_eq!(catalog.dietary_preferences.len(), 2);
        assert_eq!(catalog.cuisines.len(), 1);
    }

    #[tokio::test]
    async fn test_update_preferences_returns_profile() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(Method::PUT)
                .path("/users/preferences")
                .json_body(json!({"dietary_preference_id": 2, "cuisine_preference_id": 5}));
            then.status(200).json_body(profile_body());
        });

        let client = ApiClient::new(&server.base_url(), Some("tok")).unwrap();
        let update = PreferenceUpdate {
            dietary_preference_id: 2,
            cuisine_preference_id: 5,
        };
        let profile = client.update_preferences(&update).await.unwrap();

        assert_eq!(mock.calls(), 1);
        assert_eq!(profile.dietary_preferences[0].preference_id, 2);
    }

    #[tokio::test]
    async fn test_update_preferences_unknown_id() {
        let server = MockServer::start();
        let _m = server.mock(|when, then| {
            when.method(Method::PUT).path("/users/preferences");
            then.status(400)
                .json_body(json!({"detail": "Invalid dietary preference"}));
        });

        let client = ApiClient::new(&server.base_url(), Some("tok")).unwrap();
        let update = PreferenceUpdate {
            dietary_preference_id: 999,
            cuisine_preference_id: 1,
        };
        let err = client.update_preferences(&update).await.unwrap_err();

        assert!(err.to_string().contains("Invalid dietary preference"));
    }
}
