//! The Inventory View: owned state plus the three user operations.

use invtrack_core::{ClientError, Product, ProductDraft, TransactionDraft};

use crate::api::ApiClient;

/// All mutable state behind the page.
///
/// One instance is owned by the shell and passed through rendering and event
/// handling; there are no module globals. Each operation is one sequential
/// async task whose only suspension points are the API calls. `products` is
/// always the last successful fetch result.
#[derive(Debug, Default)]
pub struct InventoryView {
    pub products: Vec<Product>,
    pub loading: bool,
    pub error: Option<String>,
    pub product_draft: ProductDraft,
    pub transaction_draft: TransactionDraft,
}

impl InventoryView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the catalog. Runs once when the view is first presented and
    /// again after every successful write; a failure keeps the previous
    /// list untouched and surfaces a banner message.
    pub async fn load_products(&mut self, api: &ApiClient) {
        self.loading = true;
        self.error = None;

        match api.list_products().await {
            Ok(products) => {
                tracing::debug!(count = products.len(), "loaded product list");
                self.products = products;
            }
            Err(err) => {
                tracing::error!(%err, "failed to load products");
                self.error = Some(format!("Failed to load products: {err}"));
            }
        }

        self.loading = false;
    }

    /// Submit the add-product form. A blank name is refused before any
    /// network call. Success resets the draft and re-fetches; failure keeps
    /// the user's input in place.
    pub async fn submit_product(&mut self, api: &ApiClient) {
        self.error = None;

        if let Err(err) = self.product_draft.validate() {
            tracing::warn!(%err, "rejected product draft");
            self.error = Some(Self::banner("Failed to add product", &err));
            return;
        }

        match api.create_product(&self.product_draft).await {
            Ok(()) => {
                tracing::info!(name = %self.product_draft.name, "product created");
                self.product_draft = ProductDraft::default();
                self.load_products(api).await;
            }
            Err(err) => {
                tracing::error!(%err, "failed to add product");
                self.error = Some(Self::banner("Failed to add product", &err));
            }
        }
    }

    /// Submit the record-transaction form. Refuses to hit the network
    /// without a selected product. Success resets the draft and re-fetches
    /// so stock levels reflect the server's applied effect.
    pub async fn submit_transaction(&mut self, api: &ApiClient) {
        self.error = None;

        let Some(product_id) = self.transaction_draft.product_id else {
            let err = ClientError::validation("Select a product first");
            tracing::warn!(%err, "rejected transaction draft");
            self.error = Some(Self::banner("Failed to record transaction", &err));
            return;
        };

        let request = self.transaction_draft.to_request(product_id);
        match api.create_transaction(&request).await {
            Ok(()) => {
                tracing::info!(
                    product_id,
                    quantity = request.quantity,
                    kind = request.kind.as_str(),
                    "transaction recorded"
                );
                self.transaction_draft = TransactionDraft::default();
                self.load_products(api).await;
            }
            Err(err) => {
                tracing::error!(%err, "failed to record transaction");
                self.error = Some(Self::banner("Failed to record transaction", &err));
            }
        }
    }

    /// One human-readable line for the banner. Validation messages stand on
    /// their own; transport and status errors get the action as context.
    fn banner(action: &str, err: &ClientError) -> String {
        match err {
            ClientError::Validation(msg) => msg.clone(),
            other => format!("{action}: {other}"),
        }
    }
}
