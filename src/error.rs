//! Error types for the push worker.
//!
//! A payload that is not JSON is not an error here: the parser folds it into
//! the plain-text fallback. What remains are configuration mistakes and
//! rejections coming back from the host platform.

use thiserror::Error;

/// Errors surfaced by the push worker.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkerError {
    /// The supplied configuration is unusable.
    #[error("Invalid config: {0}")]
    Config(String),
    /// A host platform call rejected.
    #[error("Host call {operation} failed: {message}")]
    Host {
        /// Name of the outbound call (e.g. `showNotification`).
        operation: &'static str,
        /// Rendered rejection value.
        message: String,
    },
    /// An event type outside the subscription table was dispatched.
    #[error("Unsupported event type: {0}")]
    UnknownEvent(String),
}

impl WorkerError {
    /// Build a [`WorkerError::Host`] for the given outbound call.
    pub fn host(operation: &'static str, message: impl Into<String>) -> Self {
        Self::Host {
            operation,
            message: message.into(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl From<WorkerError> for wasm_bindgen::JsValue {
    fn from(err: WorkerError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
