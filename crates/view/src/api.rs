//! HTTP client for the Inventory API.

use invtrack_core::{ClientError, ClientResult, NewTransaction, Product, ProductDraft};

/// Typed wrapper over the three Inventory API endpoints.
///
/// The base URL is injected from startup configuration. Nothing here
/// retries, times out, or caches; a hung request stays in flight.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /products` — the full catalog, in server order.
    pub async fn list_products(&self) -> ClientResult<Vec<Product>> {
        let url = format!("{}/products", self.base_url);
        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ClientError::network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(ClientError::request(resp.status().as_u16()));
        }

        resp.json()
            .await
            .map_err(|e| ClientError::decode(e.to_string()))
    }

    /// `POST /products` — create a product. The response body is unused;
    /// the caller re-fetches the list instead.
    pub async fn create_product(&self, draft: &ProductDraft) -> ClientResult<()> {
        let url = format!("{}/products", self.base_url);
        let resp = self
            .http
            .post(&url)
            .json(draft)
            .send()
            .await
            .map_err(|e| ClientError::network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(ClientError::request(resp.status().as_u16()));
        }

        Ok(())
    }

    /// `POST /transactions` — record a stock movement. Response body unused.
    pub async fn create_transaction(&self, transaction: &NewTransaction) -> ClientResult<()> {
        let url = format!("{}/transactions", self.base_url);
        let resp = self
            .http
            .post(&url)
            .json(transaction)
            .send()
            .await
            .map_err(|e| ClientError::network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(ClientError::request(resp.status().as_u16()));
        }

        Ok(())
    }
}
