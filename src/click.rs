//! Notification click dispatch.
//!
//! A click carries an action identifier: `close`, `open`, or the empty string
//! when the notification body itself was clicked. Everything except `close`
//! navigates: focus an open window already showing the target, or open one.

use std::fmt;

/// What the user clicked on a notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    /// The `open` action button.
    Open,
    /// The `close` action button.
    Close,
    /// The notification body (no action identifier).
    Body,
    /// An action identifier this worker never registers.
    Other(String),
}

impl ClickAction {
    /// Parse the action identifier from a click event.
    pub fn parse(action: &str) -> Self {
        match action {
            "open" => Self::Open,
            "close" => Self::Close,
            "" => Self::Body,
            other => Self::Other(other.to_string()),
        }
    }

    /// The identifier as registered on the notification.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Open => "open",
            Self::Close => "close",
            Self::Body => "",
            Self::Other(action) => action,
        }
    }

    /// Whether this click should bring a window forward.
    pub fn navigates(&self) -> bool {
        !matches!(self, Self::Close)
    }
}

impl fmt::Display for ClickAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Body => write!(f, "<body>"),
            other => write!(f, "{}", other.as_str()),
        }
    }
}

/// A click that still has to focus or open a window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickNavigation {
    /// What was clicked.
    pub action: ClickAction,
    /// Target stored on the notification.
    pub target_url: Option<String>,
}

/// The outcome of a navigating click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation<C> {
    /// Bring this already-open client to the foreground.
    Focus(C),
    /// Open a new window at this URL.
    Open(String),
}

/// Pick the first client whose URL equals `target`, or fall back to opening
/// `target` (or `fallback_url` when the notification stored none).
///
/// Matching is exact string equality; with no target nothing matches.
pub fn choose_navigation<C>(
    clients: Vec<C>,
    client_url: impl Fn(&C) -> String,
    target: Option<&str>,
    fallback_url: &str,
) -> Navigation<C> {
    if let Some(target) = target {
        if let Some(client) = clients.into_iter().find(|c| client_url(c) == target) {
            return Navigation::Focus(client);
        }
    }
    Navigation::Open(target.unwrap_or(fallback_url).to_string())
}
