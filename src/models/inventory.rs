//! Inventory item models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize)]
pub struct InventoryItem {
    pub item_id: i64,
    pub user_id: Uuid,
    pub name: String,
    pub added_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewInventoryItem {
    pub name: String,
}

/// Batch add request for `POST /inventory/update-multiple`.
#[derive(Debug, Clone, Serialize)]
pub struct InventoryImport {
    pub items: Vec<String>,
}

/// Result of an image scan via `POST /inventory/upload-image`.
///
/// When no food is detected the server omits the detection fields,
/// so they default to empty.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadSummary {
    pub message: String,
    pub items_added: u32,
    #[serde(default)]
    pub total_items_detected: u32,
    #[serde(default)]
    pub detected_items: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImportSummary {
    pub message: String,
    pub items_added: u32,
}
