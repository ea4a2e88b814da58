//! Outbound calls to the host platform.
//!
//! The worker never touches browser APIs directly. Everything it asks of the
//! platform goes through [`WorkerHost`], which the browser binding implements
//! over `web-sys` and tests implement with a recording mock.

use async_trait::async_trait;

use crate::error::WorkerError;
use crate::notification::NotificationRequest;

/// The service worker global scope, as seen by the push worker.
///
/// Futures are `?Send`: wasm in the browser is single-threaded.
#[async_trait(?Send)]
pub trait WorkerHost {
    /// An open window client.
    type Client;

    /// The worker's own origin (e.g. `https://app.example.com`).
    fn origin(&self) -> String;

    /// Activate immediately instead of waiting for older workers to go away.
    async fn skip_waiting(&self) -> Result<(), WorkerError>;

    /// Take control of every open client in scope.
    async fn claim_clients(&self) -> Result<(), WorkerError>;

    /// Display a notification.
    async fn show_notification(&self, request: &NotificationRequest) -> Result<(), WorkerError>;

    /// All window clients, including ones this worker does not control.
    async fn window_clients(&self) -> Result<Vec<Self::Client>, WorkerError>;

    /// Current URL of a client.
    fn client_url(&self, client: &Self::Client) -> String;

    /// Bring a client to the foreground.
    async fn focus(&self, client: &Self::Client) -> Result<(), WorkerError>;

    /// Open a new window at `url`.
    async fn open_window(&self, url: &str) -> Result<(), WorkerError>;
}

/// A notification that is currently displayed.
pub trait ShownNotification {
    /// Dismiss it.
    fn close(&self);

    /// The click target stored in its data, if any.
    fn target_url(&self) -> Option<String>;

    /// Its grouping tag.
    fn tag(&self) -> String;
}
