//! HTML rendering of the inventory page.
//!
//! The view state is flattened into a typed page model first, then rendered
//! through the askama template. Rendering is pure: it never touches the
//! network and never mutates the view.

use askama::Template;

use invtrack_core::{Product, TransactionKind};

use crate::state::InventoryView;

/// One row of the product table.
struct ProductRow {
    id: i64,
    sku: String,
    name: String,
    current_stock: i64,
    reorder_level: i64,
}

/// One entry of the transaction form's product selector.
struct ProductOption {
    id: i64,
    label: String,
    selected: bool,
}

#[derive(Template)]
#[template(path = "inventory.html")]
struct InventoryPage {
    loading: bool,
    error: Option<String>,
    rows: Vec<ProductRow>,
    options: Vec<ProductOption>,
    name_value: String,
    sku_value: String,
    stock_value: i64,
    reorder_value: i64,
    kind_in_selected: bool,
    kind_out_selected: bool,
    quantity_value: i64,
}

/// Label shown for a product in the transaction selector.
pub fn option_label(product: &Product) -> String {
    format!("{} (stock: {})", product.name, product.current_stock)
}

/// Render the full page for the given view state.
pub fn page(view: &InventoryView) -> askama::Result<String> {
    let rows = view
        .products
        .iter()
        .map(|p| ProductRow {
            id: p.id,
            sku: p.sku.clone(),
            name: p.name.clone(),
            current_stock: p.current_stock,
            reorder_level: p.reorder_level,
        })
        .collect();

    let options = view
        .products
        .iter()
        .map(|p| ProductOption {
            id: p.id,
            label: option_label(p),
            selected: view.transaction_draft.product_id == Some(p.id),
        })
        .collect();

    InventoryPage {
        loading: view.loading,
        error: view.error.clone(),
        rows,
        options,
        name_value: view.product_draft.name.clone(),
        sku_value: view.product_draft.sku.clone(),
        stock_value: view.product_draft.current_stock,
        reorder_value: view.product_draft.reorder_level,
        kind_in_selected: view.transaction_draft.kind == TransactionKind::In,
        kind_out_selected: view.transaction_draft.kind == TransactionKind::Out,
        quantity_value: view.transaction_draft.quantity,
    }
    .render()
}
