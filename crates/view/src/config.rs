//! Startup configuration.

use std::env;

/// Fallback when `INVTRACK_API_BASE` is not set.
pub const DEFAULT_API_BASE: &str = "http://localhost:8080";

/// Configuration injected into the shell at startup.
///
/// `api_base` is the only knob this client has. It is read once here and
/// handed to `ApiClient`; nothing reads the environment after startup.
#[derive(Debug, Clone)]
pub struct ViewConfig {
    pub api_base: String,
}

impl ViewConfig {
    /// Read configuration from the environment.
    pub fn from_env() -> Self {
        let api_base =
            env::var("INVTRACK_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        Self { api_base }
    }
}
