//! Cloakbrowse: Rust client for antidetect browser-profile management
//!
//! This library talks to a remote browser-profile service: CRUD over
//! fingerprint/proxy/timezone/WebRTC/navigator profiles, cookie import and
//! export, and launching managed browser instances whose remote-debugging
//! URL is handed to an automation library once the CDP endpoint is ready.

pub mod error;
pub mod config;

pub mod http;
pub mod models;
pub mod api;
pub mod cdp;
pub mod browser;

// Re-exports
pub use api::ProfileServiceClient;
pub use browser::{BrowserHandle, CloakBrowser, LaunchConfig};
pub use error::{Error, Result};

/// Cloakbrowse library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
