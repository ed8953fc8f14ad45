//! Inventory operations.

use reqwest::multipart::{Form, Part};

use crate::api::{ApiClient, ApiError};
use crate::models::{Ack, ImportSummary, InventoryImport, InventoryItem, NewInventoryItem, UploadSummary};

impl ApiClient {
    /// List every item in the user's inventory.
    pub async fn list_inventory(&self) -> Result<Vec<InventoryItem>, ApiError> {
        self.get("/inventory/").await
    }

    /// Add a single item. The server matches names case-insensitively
    /// and returns the existing row when the item is already stocked.
    pub async fn add_inventory_item(&self, name: &str) -> Result<InventoryItem, ApiError> {
        let body = NewInventoryItem {
            name: name.to_string(),
        };
        self.post_json("/inventory/item", &body).await
    }

    /// Remove an item by id.
    pub async fn remove_inventory_item(&self, item_id: i64) -> Result<Ack, ApiError> {
        self.delete(&format!("/inventory/item/{}", item_id)).await
    }

    /// Send a fridge or pantry photo for ingredient detection.
    pub async fn upload_inventory_image(
        &self,
        file_name: &str,
        mime_type: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadSummary, ApiError> {
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime_type)?;
        let form = Form::new().part("file", part);
        self.post_multipart("/inventory/upload-image", form).await
    }

    /// Add many items in one request, skipping names already present.
    pub async fn import_inventory_items(&self, items: Vec<String>) -> Result<ImportSummary, ApiError> {
        self.post_json("/inventory/update-multiple", &InventoryImport { items })
            .await
    }
}
