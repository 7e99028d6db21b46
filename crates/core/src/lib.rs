//! `invtrack-core` — shared types for the inventory client.
//!
//! This crate contains the **view-facing model**: the product read model,
//! the two form drafts, raw-input coercion, and the client error taxonomy.
//! It must stay free of HTTP, async, and rendering concerns so any shell
//! (native binary, tests, WASM) can consume it.

pub mod coerce;
pub mod error;
pub mod product;
pub mod transaction;

pub use coerce::{coerce_count, coerce_quantity};
pub use error::{ClientError, ClientResult};
pub use product::{Product, ProductDraft};
pub use transaction::{NewTransaction, TransactionDraft, TransactionKind};
