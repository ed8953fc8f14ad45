//! User profile and preference models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize)]
pub struct DietaryPreference {
    pub preference_id: i64,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Cuisine {
    pub cuisine_id: i64,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    pub user_id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub dietary_preferences: Vec<DietaryPreference>,
    pub preferred_cuisines: Vec<Cuisine>,
}

impl UserProfile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Catalog of selectable preferences from `GET /users/preferences`.
#[derive(Debug, Clone, Deserialize)]
pub struct PreferenceCatalog {
    pub dietary_preferences: Vec<DietaryPreference>,
    pub cuisines: Vec<Cuisine>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PreferenceUpdate {
    pub dietary_preference_id: i64,
    pub cuisine_preference_id: i64,
}
