//! Browser binding: the exported `PushServiceWorker` class.
//!
//! Browsers only honour push and notification listeners that are added while
//! the worker script is first evaluated, and a wasm module is not ready by
//! then. The usual setup is therefore a small JS shim (see `static/sw.js`)
//! that adds the listeners itself and forwards each event to
//! [`PushServiceWorker::dispatch`], passing the returned promise to
//! `event.waitUntil`.

mod host;

pub use host::{target_url_from_data, BrowserHost};

use std::future::Future;
use std::rc::Rc;

use js_sys::{Array, Promise, JSON};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;
use web_sys::{Event, NotificationEvent, PushEvent};

use crate::config::WorkerConfig;
use crate::error::WorkerError;
use crate::events::EventKind;
use crate::worker::PushWorker;

/// The push worker bound to the browser global scope.
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct PushServiceWorker {
    worker: Rc<PushWorker<BrowserHost>>,
}

#[wasm_bindgen]
impl PushServiceWorker {
    /// Create the worker from an optional, possibly partial, config object.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<PushServiceWorker, JsValue> {
        let config = if config.is_undefined() || config.is_null() {
            WorkerConfig::default()
        } else {
            let json = JSON::stringify(&config)
                .map_err(|_| WorkerError::Config("config is not serializable".to_string()))?;
            WorkerConfig::from_json(&String::from(json))?
        };

        let worker = PushWorker::new(BrowserHost::from_global(), config)?;
        log::set_max_level(worker.config().level_filter()?);
        Ok(Self {
            worker: Rc::new(worker),
        })
    }

    /// Names of the events this worker handles.
    #[wasm_bindgen(js_name = "subscribedEvents")]
    pub fn subscribed_events() -> Array {
        EventKind::ALL
            .iter()
            .map(|kind| JsValue::from_str(kind.as_str()))
            .collect()
    }

    /// Handle one event and return the promise to pass to `waitUntil`.
    ///
    /// Rejects synchronously for event types outside the subscription table.
    pub fn dispatch(&self, event: Event) -> Result<Promise, JsValue> {
        let kind: EventKind = event.type_().parse()?;
        let worker = Rc::clone(&self.worker);

        let promise = match kind {
            EventKind::Install => {
                // Activation is requested, not waited for.
                wasm_bindgen_futures::spawn_local(async move {
                    if let Err(e) = worker.on_install().await {
                        log::warn!("[Worker] {e}");
                    }
                });
                resolved()
            }
            EventKind::Activate => settle(async move { worker.on_activate().await }),
            EventKind::Push => {
                let event = downcast::<PushEvent>(event)?;
                let data = event.data().map(|data| data.text());
                settle(async move { worker.on_push(data.as_deref()).await })
            }
            EventKind::NotificationClick => {
                let event = downcast::<NotificationEvent>(event)?;
                match worker.accept_click(&event.notification(), &event.action()) {
                    Some(click) => settle(async move { worker.navigate(&click).await }),
                    None => resolved(),
                }
            }
            EventKind::NotificationClose => {
                let event = downcast::<NotificationEvent>(event)?;
                worker.on_notification_close(&event.notification());
                resolved()
            }
        };
        Ok(promise)
    }
}

fn resolved() -> Promise {
    Promise::resolve(&JsValue::UNDEFINED)
}

/// Run a handler future as a promise, logging and rejecting on failure.
fn settle<F>(work: F) -> Promise
where
    F: Future<Output = Result<(), WorkerError>> + 'static,
{
    future_to_promise(async move {
        match work.await {
            Ok(()) => Ok(JsValue::UNDEFINED),
            Err(e) => {
                log::error!("[Worker] {e}");
                Err(e.into())
            }
        }
    })
}

fn downcast<T: JsCast>(event: Event) -> Result<T, WorkerError> {
    event
        .dyn_into::<T>()
        .map_err(|event| WorkerError::UnknownEvent(event.type_()))
}
