//! One-shot shell: render the inventory page against a live API.

use anyhow::Result;

use invtrack_view::{render, telemetry, ApiClient, InventoryView, ViewConfig};

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init();

    let config = ViewConfig::from_env();
    tracing::info!(api_base = %config.api_base, "starting invtrack");

    let api = ApiClient::new(config.api_base);
    let mut view = InventoryView::new();
    view.load_products(&api).await;

    println!("{}", render::page(&view)?);
    Ok(())
}
