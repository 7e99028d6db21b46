//! Product read model and the add-product form draft.

use serde::{Deserialize, Serialize};

use crate::coerce::coerce_count;
use crate::error::{ClientError, ClientResult};

/// Product as returned by the Inventory API.
///
/// `id` is server-assigned and the only identity the client knows; the
/// client holds a read-only copy refreshed after every mutation. Wire names
/// are camelCase to match the API's JSON contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub sku: String,
    pub name: String,
    pub current_stock: i64,
    pub reorder_level: i64,
}

/// Form state for the add-product form: `Product` minus `id`.
///
/// Posted verbatim as the `POST /products` body. Numeric setters take the
/// raw input text and coerce it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub sku: String,
    pub current_stock: i64,
    pub reorder_level: i64,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            sku: String::new(),
            current_stock: 0,
            reorder_level: 0,
        }
    }
}

impl ProductDraft {
    pub fn set_name(&mut self, raw: &str) {
        self.name = raw.to_string();
    }

    pub fn set_sku(&mut self, raw: &str) {
        self.sku = raw.to_string();
    }

    pub fn set_current_stock(&mut self, raw: &str) {
        self.current_stock = coerce_count(raw);
    }

    pub fn set_reorder_level(&mut self, raw: &str) {
        self.reorder_level = coerce_count(raw);
    }

    /// Precondition for submission: a product must have a name.
    pub fn validate(&self) -> ClientResult<()> {
        if self.name.trim().is_empty() {
            return Err(ClientError::validation("Name is required"));
        }
        Ok(())
    }
}
