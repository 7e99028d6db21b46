//! Stock transaction form draft and its wire body.

use serde::{Deserialize, Serialize};

use crate::coerce::coerce_quantity;

/// Direction of a stock transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionKind {
    In,
    Out,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::In => "IN",
            TransactionKind::Out => "OUT",
        }
    }
}

/// Form state for the record-transaction form.
///
/// `product_id` stays unset until the user picks an option; submission is
/// refused without it. The draft only lives until a successful submit, after
/// which the view discards it and re-fetches the product list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionDraft {
    pub kind: TransactionKind,
    pub product_id: Option<i64>,
    pub quantity: i64,
}

impl Default for TransactionDraft {
    fn default() -> Self {
        Self {
            kind: TransactionKind::In,
            product_id: None,
            quantity: 1,
        }
    }
}

impl TransactionDraft {
    pub fn set_kind(&mut self, kind: TransactionKind) {
        self.kind = kind;
    }

    /// Update the selection from the raw `<select>` value; anything that is
    /// not an integer (the placeholder option) clears the selection.
    pub fn select_product(&mut self, raw: &str) {
        self.product_id = raw.trim().parse().ok();
    }

    pub fn set_quantity(&mut self, raw: &str) {
        self.quantity = coerce_quantity(raw);
    }

    /// Build the wire body, once a product has been selected.
    pub fn to_request(&self, product_id: i64) -> NewTransaction {
        NewTransaction {
            kind: self.kind,
            product_id,
            quantity: self.quantity,
        }
    }
}

/// `POST /transactions` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub product_id: i64,
    pub quantity: i64,
}
