//! The events this worker subscribes to.

use std::fmt;
use std::str::FromStr;

use crate::error::WorkerError;

/// A service worker event handled by [`PushWorker`](crate::PushWorker).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Worker installed; skip the waiting phase.
    Install,
    /// Worker activated; take control of open clients.
    Activate,
    /// Push message delivered.
    Push,
    /// User clicked a notification or one of its actions.
    NotificationClick,
    /// User dismissed a notification.
    NotificationClose,
}

impl EventKind {
    /// Every subscribed event, in registration order.
    ///
    /// `static/sw.js` repeats this list because it registers listeners before
    /// the module loads; keep the two in sync.
    pub const ALL: [EventKind; 5] = [
        Self::Install,
        Self::Activate,
        Self::Push,
        Self::NotificationClick,
        Self::NotificationClose,
    ];

    /// The DOM event type name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Install => "install",
            Self::Activate => "activate",
            Self::Push => "push",
            Self::NotificationClick => "notificationclick",
            Self::NotificationClose => "notificationclose",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = WorkerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| WorkerError::UnknownEvent(s.to_string()))
    }
}
