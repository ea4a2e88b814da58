//! [`WorkerHost`] over the real service worker global scope.

use async_trait::async_trait;
use js_sys::{Array, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    ClientQueryOptions, ClientType, Notification, NotificationOptions, ServiceWorkerGlobalScope,
    WindowClient,
};

use crate::error::WorkerError;
use crate::host::{ShownNotification, WorkerHost};
use crate::notification::NotificationRequest;

/// The browser's `ServiceWorkerGlobalScope`.
#[derive(Debug, Clone)]
pub struct BrowserHost {
    scope: ServiceWorkerGlobalScope,
}

impl BrowserHost {
    /// Wrap the current global. Only valid inside a service worker.
    pub fn from_global() -> Self {
        Self {
            scope: js_sys::global().unchecked_into::<ServiceWorkerGlobalScope>(),
        }
    }
}

/// Render a rejection value for logs and errors.
fn describe(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{value:?}")
}

/// Await a promise-returning host call.
async fn settle(
    operation: &'static str,
    promise: Result<Promise, JsValue>,
) -> Result<JsValue, WorkerError> {
    let promise = promise.map_err(|e| WorkerError::host(operation, describe(&e)))?;
    JsFuture::from(promise)
        .await
        .map_err(|e| WorkerError::host(operation, describe(&e)))
}

#[async_trait(?Send)]
impl WorkerHost for BrowserHost {
    type Client = WindowClient;

    fn origin(&self) -> String {
        self.scope.location().origin()
    }

    async fn skip_waiting(&self) -> Result<(), WorkerError> {
        settle("skipWaiting", self.scope.skip_waiting()).await?;
        Ok(())
    }

    async fn claim_clients(&self) -> Result<(), WorkerError> {
        settle("clients.claim", Ok(self.scope.clients().claim())).await?;
        Ok(())
    }

    async fn show_notification(&self, request: &NotificationRequest) -> Result<(), WorkerError> {
        let options = serde_wasm_bindgen::to_value(&request.options)
            .map_err(|e| WorkerError::host("showNotification", e.to_string()))?
            .unchecked_into::<NotificationOptions>();

        settle(
            "showNotification",
            self.scope
                .registration()
                .show_notification_with_options(&request.title, &options),
        )
        .await?;
        Ok(())
    }

    async fn window_clients(&self) -> Result<Vec<WindowClient>, WorkerError> {
        let options = ClientQueryOptions::new();
        options.set_include_uncontrolled(true);
        options.set_type(ClientType::Window);

        let list = settle(
            "clients.matchAll",
            Ok(self.scope.clients().match_all_with_options(&options)),
        )
        .await?;

        Ok(list
            .unchecked_into::<Array>()
            .iter()
            .filter_map(|client| client.dyn_into::<WindowClient>().ok())
            .collect())
    }

    fn client_url(&self, client: &WindowClient) -> String {
        client.url()
    }

    async fn focus(&self, client: &WindowClient) -> Result<(), WorkerError> {
        settle("focus", client.focus()).await?;
        Ok(())
    }

    async fn open_window(&self, url: &str) -> Result<(), WorkerError> {
        settle("clients.openWindow", Ok(self.scope.clients().open_window(url))).await?;
        Ok(())
    }
}

/// Read `url` from a notification's `data`.
///
/// `data` is null when the push carried no url; `Reflect::get` throws then.
pub fn target_url_from_data(data: &JsValue) -> Option<String> {
    Reflect::get(data, &JsValue::from_str("url"))
        .ok()
        .and_then(|url| url.as_string())
}

impl ShownNotification for Notification {
    fn close(&self) {
        Notification::close(self);
    }

    fn target_url(&self) -> Option<String> {
        target_url_from_data(&self.data())
    }

    fn tag(&self) -> String {
        Notification::tag(self)
    }
}
