//! `invtrack-view`
//!
//! **Responsibility:** the Inventory View — the single page of the client.
//!
//! This crate provides:
//! - a typed `ApiClient` over the Inventory API's three REST endpoints
//! - the owned `InventoryView` state with its three user operations
//! - HTML rendering of the page from that state
//!
//! The view is a **thin shell** around the Inventory API: it performs no
//! stock arithmetic of its own; the authoritative stock level always comes
//! from the next product fetch.

pub mod api;
pub mod config;
pub mod render;
pub mod state;
pub mod telemetry;

pub use api::ApiClient;
pub use config::ViewConfig;
pub use state::InventoryView;
