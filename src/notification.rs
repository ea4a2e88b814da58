//! The show-notification request handed to the host.
//!
//! Field names serialize in camelCase so the options object can be passed to
//! `ServiceWorkerRegistration.showNotification` as is.

use serde::{Deserialize, Serialize};

use crate::click::ClickAction;
use crate::config::WorkerConfig;
use crate::payload::NotificationPayload;

/// Data attached to a displayed notification and read back on click.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationData {
    /// Page to focus or open when the notification is clicked.
    pub url: String,
}

/// An action button on the notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationAction {
    /// Identifier reported back in the click event.
    pub action: String,
    /// Button label.
    pub title: String,
}

/// Options for `showNotification`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationOptions {
    /// Body text.
    pub body: String,
    /// Icon path.
    pub icon: String,
    /// Badge path.
    pub badge: String,
    /// Grouping/replacement tag.
    pub tag: String,
    /// Click target, absent for plain-text and empty pushes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<NotificationData>,
    /// Keep on screen until the user acts.
    pub require_interaction: bool,
    /// Vibration pattern in milliseconds.
    pub vibrate: Vec<u32>,
    /// Action buttons.
    pub actions: Vec<NotificationAction>,
}

/// A complete `showNotification(title, options)` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRequest {
    /// Notification title.
    pub title: String,
    /// Everything else.
    pub options: NotificationOptions,
}

impl NotificationRequest {
    /// Combine a parsed payload with the fixed parts from config.
    pub fn new(payload: NotificationPayload, config: &WorkerConfig) -> Self {
        let NotificationPayload {
            title,
            body,
            icon,
            badge,
            tag,
            url,
            require_interaction,
        } = payload;

        Self {
            title,
            options: NotificationOptions {
                body,
                icon,
                badge,
                tag,
                data: url.map(|url| NotificationData { url }),
                require_interaction,
                vibrate: config.vibrate.clone(),
                actions: vec![
                    NotificationAction {
                        action: ClickAction::Open.as_str().to_string(),
                        title: config.open_action_label.clone(),
                    },
                    NotificationAction {
                        action: ClickAction::Close.as_str().to_string(),
                        title: config.close_action_label.clone(),
                    },
                ],
            },
        }
    }

    /// The stored click target, if any.
    pub fn target_url(&self) -> Option<&str> {
        self.options.data.as_ref().map(|d| d.url.as_str())
    }
}
