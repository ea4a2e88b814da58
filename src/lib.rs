//! WebAssembly service worker for browser push notifications.
//!
//! The worker receives web push messages, shows them as notifications and
//! brings the right page forward when one is clicked.
//!
//! # Event Flow
//!
//! ```text
//! Push service                   Service worker (this crate)          Browser
//! ─────────────────────────────────────────────────────────────────────────────
//! push ──────────────────────►  parse payload (JSON or text)
//!                                showNotification(title, opts) ──►  notification
//!
//!                                notificationclick ◄──────────────  user click
//!                                close notification
//!                                action == "close"? stop
//!                                matchAll(type=window) ──────────►  clients
//!                                focus(matching) / openWindow(url) ►
//! ```
//!
//! # Modules
//!
//! - [`payload`] - Inbound payload parsing with per-field fallbacks
//! - [`notification`] - The `showNotification` request
//! - [`click`] - Click action dispatch and focus-or-open decision
//! - [`worker`] - The event handlers, generic over [`WorkerHost`]
//! - `wasm` - `web-sys` host and the exported `PushServiceWorker` class

pub mod click;
pub mod config;
pub mod error;
pub mod events;
pub mod host;
pub mod notification;
pub mod payload;
pub mod worker;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use click::{ClickAction, ClickNavigation, Navigation};
pub use config::WorkerConfig;
pub use error::WorkerError;
pub use events::EventKind;
pub use host::{ShownNotification, WorkerHost};
pub use notification::{NotificationAction, NotificationData, NotificationOptions, NotificationRequest};
pub use payload::NotificationPayload;
pub use worker::PushWorker;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Initialize the WASM module.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in the worker console
    console_error_panic_hook::set_once();
    // Already installed when the module is instantiated twice.
    let _ = console_log::init_with_level(log::Level::Trace);
}

/// Test function to verify WASM loads correctly.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn ping() -> String {
    concat!("push-worker-wasm loaded (v", env!("CARGO_PKG_VERSION"), ")").to_string()
}
