//! The push worker: one handler per subscribed event.
//!
//! Handlers are platform-neutral and talk to the browser only through
//! [`WorkerHost`]. Each async handler resolves when the work the browser must
//! wait for has settled, so the binding can hand it to `waitUntil`.

use crate::click::{choose_navigation, ClickAction, ClickNavigation, Navigation};
use crate::config::WorkerConfig;
use crate::error::WorkerError;
use crate::host::{ShownNotification, WorkerHost};
use crate::notification::NotificationRequest;
use crate::payload::NotificationPayload;

/// Push-to-notification adapter.
#[derive(Debug)]
pub struct PushWorker<H> {
    host: H,
    config: WorkerConfig,
}

impl<H: WorkerHost> PushWorker<H> {
    /// Create a worker over `host`, rejecting an invalid config.
    pub fn new(host: H, config: WorkerConfig) -> Result<Self, WorkerError> {
        config.validate()?;
        Ok(Self { host, config })
    }

    /// The host platform.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The active configuration.
    pub fn config(&self) -> &WorkerConfig {
        &self.config
    }

    /// `install`: request immediate activation.
    pub async fn on_install(&self) -> Result<(), WorkerError> {
        log::info!("[Worker] Installing");
        self.host.skip_waiting().await
    }

    /// `activate`: take control of all open clients.
    pub async fn on_activate(&self) -> Result<(), WorkerError> {
        log::info!("[Worker] Activated");
        self.host.claim_clients().await
    }

    /// Build the notification a push with `data` should display.
    pub fn notification_for_push(&self, data: Option<&str>) -> NotificationRequest {
        let payload = NotificationPayload::from_push(data, &self.host.origin(), &self.config);
        NotificationRequest::new(payload, &self.config)
    }

    /// `push`: parse the message and show a notification.
    pub async fn on_push(&self, data: Option<&str>) -> Result<(), WorkerError> {
        log::info!(
            "[Push] Message received ({} bytes)",
            data.map_or(0, str::len)
        );
        let request = self.notification_for_push(data);
        log::debug!(
            "[Push] Showing \"{}\" tag={} url={:?}",
            request.title,
            request.options.tag,
            request.target_url()
        );
        self.host.show_notification(&request).await
    }

    /// Synchronous half of `notificationclick`.
    ///
    /// Closes the notification right away and returns the navigation still
    /// to perform, or `None` for the `close` action.
    pub fn accept_click<N: ShownNotification>(
        &self,
        notification: &N,
        action: &str,
    ) -> Option<ClickNavigation> {
        let action = ClickAction::parse(action);
        log::info!("[Click] Notification clicked (action={action})");
        notification.close();

        if !action.navigates() {
            return None;
        }
        Some(ClickNavigation {
            action,
            target_url: notification.target_url(),
        })
    }

    /// Asynchronous half of `notificationclick`: focus a window already at
    /// the target, or open a new one.
    pub async fn navigate(&self, click: &ClickNavigation) -> Result<(), WorkerError> {
        let clients = self.host.window_clients().await?;
        let navigation = choose_navigation(
            clients,
            |c| self.host.client_url(c),
            click.target_url.as_deref(),
            &self.config.fallback_url,
        );

        match navigation {
            Navigation::Focus(client) => {
                log::debug!(
                    "[Click] Focusing {} (action={})",
                    self.host.client_url(&client),
                    click.action
                );
                self.host.focus(&client).await
            }
            Navigation::Open(url) => {
                log::debug!("[Click] Opening {url} (action={})", click.action);
                self.host.open_window(&url).await
            }
        }
    }

    /// `notificationclick`: both halves in sequence.
    pub async fn on_notification_click<N: ShownNotification>(
        &self,
        notification: &N,
        action: &str,
    ) -> Result<(), WorkerError> {
        match self.accept_click(notification, action) {
            Some(click) => self.navigate(&click).await,
            None => Ok(()),
        }
    }

    /// `notificationclose`: nothing to do beyond recording it.
    pub fn on_notification_close<N: ShownNotification>(&self, notification: &N) {
        log::info!("[Click] Notification closed (tag={})", notification.tag());
    }
}
