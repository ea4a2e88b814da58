//! Inbound push payload parsing.
//!
//! A push message is producer-defined. The worker tries to read it as a JSON
//! object of the form
//!
//! ```text
//! { title?, body?, icon?, tag?, url?, requireInteraction? }
//! ```
//!
//! and falls back field by field to the configured defaults. Anything that
//! does not parse is shown verbatim as the notification body.

use serde_json::{Map, Number, Value};

use crate::config::WorkerConfig;

/// Everything a single push contributes to the displayed notification.
///
/// Built fresh for each push event and dropped once the notification has
/// been requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationPayload {
    /// Notification title.
    pub title: String,
    /// Notification body text.
    pub body: String,
    /// Icon path.
    pub icon: String,
    /// Badge path. Always derived from the inbound `icon`.
    pub badge: String,
    /// Grouping/replacement tag.
    pub tag: String,
    /// Click target. `None` when the push had no data or was plain text.
    pub url: Option<String>,
    /// Keep the notification on screen until the user acts on it.
    pub require_interaction: bool,
}

impl NotificationPayload {
    /// The payload used when a push carries no data.
    pub fn defaults(config: &WorkerConfig) -> Self {
        Self {
            title: config.default_title.clone(),
            body: config.default_body.clone(),
            icon: config.default_icon.clone(),
            badge: config.default_badge.clone(),
            tag: config.default_tag.clone(),
            url: None,
            require_interaction: false,
        }
    }

    /// Build the payload for a push event.
    ///
    /// `data` is the push message text, if any. `origin` is the worker's own
    /// origin and becomes the click target when a JSON payload has no `url`.
    pub fn from_push(data: Option<&str>, origin: &str, config: &WorkerConfig) -> Self {
        let mut payload = Self::defaults(config);
        let Some(text) = data else {
            return payload;
        };

        match serde_json::from_str::<Value>(text) {
            // `null` parses but has no fields to read; treated like text.
            Ok(Value::Null) | Err(_) => {
                log::debug!("[Push] Payload is not structured, using it as body");
                payload.body = text.to_string();
            }
            Ok(Value::Object(fields)) => payload.apply_fields(&fields, origin),
            Ok(_) => payload.apply_fields(&Map::new(), origin),
        }
        payload
    }

    fn apply_fields(&mut self, fields: &Map<String, Value>, origin: &str) {
        if let Some(title) = truthy_text(fields.get("title")) {
            self.title = title;
        }
        if let Some(body) = truthy_text(fields.get("body")) {
            self.body = body;
        }
        // The inbound icon doubles as the badge; a `badge` field is not read.
        if let Some(icon) = truthy_text(fields.get("icon")) {
            self.badge.clone_from(&icon);
            self.icon = icon;
        }
        if let Some(tag) = truthy_text(fields.get("tag")) {
            self.tag = tag;
        }
        self.url = Some(truthy_text(fields.get("url")).unwrap_or_else(|| origin.to_string()));
        self.require_interaction = fields.get("requireInteraction").is_some_and(is_truthy);
    }
}

/// Whether a JSON value counts as set.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Text for a field, if it is set to something printable.
fn truthy_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64().is_some_and(|f| f != 0.0) => Some(number_text(n)),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

/// Render a number the way the browser stringifies it: integral values have
/// no fraction, very large and very small magnitudes use `e+N`/`e-N`.
fn number_text(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    let Some(f) = n.as_f64() else {
        return n.to_string();
    };
    if f == 0.0 {
        return "0".to_string();
    }
    let magnitude = f.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let exp = format!("{f:e}");
        return match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
            _ => exp,
        };
    }
    if f.fract() == 0.0 {
        format!("{f:.0}")
    } else {
        f.to_string()
    }
}
