//! Browser implementation of the push setup capabilities.
//!
//! Capabilities are found by probing the global object with `Reflect`, the
//! same way feature detection works in page scripts:
//!
//! | Capability | Probed as |
//! |---|---|
//! | notifications | `globalThis.Notification` (a function) |
//! | service worker | `globalThis.navigator.serviceWorker` |
//! | push manager | `registration.pushManager` |
//!
//! Probing happens once, when the host or registration wrapper is built.

use std::fmt;

use async_trait::async_trait;
use js_sys::{Array, Function, Object, Promise, Reflect, TypeError, Uint8Array};
use push_setup::{
    ApplicationServerKey, NotificationCapability, PermissionStatus, PushHost,
    PushManagerCapability, ServiceWorkerCapability, SubscriptionOptions,
};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// A value thrown or rejected by the browser, kept exactly as received.
#[derive(Debug, Clone)]
pub struct JsCause(pub JsValue);

impl From<JsValue> for JsCause {
    fn from(value: JsValue) -> Self {
        Self(value)
    }
}

impl fmt::Display for JsCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = property(&self.0, "name").and_then(|v| v.as_string());
        let message = property(&self.0, "message").and_then(|v| v.as_string());

        match (name, message) {
            (Some(name), Some(message)) => write!(f, "{name}: {message}"),
            (None, Some(message)) => f.write_str(&message),
            _ => match self.0.as_string() {
                Some(text) => f.write_str(&text),
                None => write!(f, "{:?}", self.0),
            },
        }
    }
}

/// Browser environment with whatever capabilities it exposes.
#[derive(Debug)]
pub struct JsHost {
    notifications: Option<JsNotifications>,
    service_worker: Option<JsServiceWorker>,
}

impl JsHost {
    /// Probe the real global object (`window` or a worker global).
    pub fn detect() -> Self {
        Self::from_global(&js_sys::global())
    }

    /// Probe an arbitrary object standing in for `globalThis`.
    pub fn from_global(global: &JsValue) -> Self {
        let notifications = property(global, "Notification")
            .and_then(|value| value.dyn_into::<Function>().ok())
            .map(|constructor| JsNotifications { constructor });

        let service_worker = property(global, "navigator")
            .and_then(|navigator| property(&navigator, "serviceWorker"))
            .map(|container| JsServiceWorker { container });

        log::debug!(
            "[Push] Host capabilities: notifications={} service_worker={}",
            notifications.is_some(),
            service_worker.is_some()
        );

        Self {
            notifications,
            service_worker,
        }
    }
}

impl PushHost for JsHost {
    type Registration = JsRegistration;
    type Subscription = JsValue;
    type Error = JsCause;

    fn notifications(&self) -> Option<&dyn NotificationCapability<Error = JsCause>> {
        self.notifications
            .as_ref()
            .map(|n| n as &dyn NotificationCapability<Error = JsCause>)
    }

    fn service_worker(
        &self,
    ) -> Option<&dyn ServiceWorkerCapability<Registration = JsRegistration, Error = JsCause>> {
        self.service_worker.as_ref().map(|sw| {
            sw as &dyn ServiceWorkerCapability<Registration = JsRegistration, Error = JsCause>
        })
    }

    fn push_manager<'r>(
        &self,
        registration: &'r JsRegistration,
    ) -> Option<&'r dyn PushManagerCapability<Subscription = JsValue, Error = JsCause>> {
        registration
            .push_manager
            .as_ref()
            .map(|pm| pm as &dyn PushManagerCapability<Subscription = JsValue, Error = JsCause>)
    }
}

/// `Notification` constructor.
#[derive(Debug)]
struct JsNotifications {
    constructor: Function,
}

#[async_trait(?Send)]
impl NotificationCapability for JsNotifications {
    type Error = JsCause;

    fn permission(&self) -> PermissionStatus {
        parse_status(property(&self.constructor, "permission").and_then(|v| v.as_string()))
    }

    async fn request_permission(&self) -> Result<PermissionStatus, JsCause> {
        let request = method(&self.constructor, "requestPermission")?;
        let answer = call_and_await(&request, &self.constructor, &Array::new()).await?;
        Ok(parse_status(answer.as_string()))
    }
}

/// `navigator.serviceWorker` container.
#[derive(Debug)]
struct JsServiceWorker {
    container: JsValue,
}

#[async_trait(?Send)]
impl ServiceWorkerCapability for JsServiceWorker {
    type Registration = JsRegistration;
    type Error = JsCause;

    async fn register(&self, script_url: &str) -> Result<JsRegistration, JsCause> {
        let register = method(&self.container, "register")?;
        let args = Array::of1(&JsValue::from_str(script_url));
        let registration = call_and_await(&register, &self.container, &args).await?;
        Ok(JsRegistration::new(registration))
    }
}

/// A `ServiceWorkerRegistration` plus its probed push manager.
#[derive(Debug)]
pub struct JsRegistration {
    raw: JsValue,
    push_manager: Option<JsPushManager>,
}

impl JsRegistration {
    /// Wrap a registration object, probing it for `pushManager`.
    pub fn new(raw: JsValue) -> Self {
        let push_manager = property(&raw, "pushManager").map(|manager| JsPushManager { manager });
        Self { raw, push_manager }
    }

    /// The registration object as the browser returned it.
    pub fn into_inner(self) -> JsValue {
        self.raw
    }
}

/// `registration.pushManager`.
#[derive(Debug)]
struct JsPushManager {
    manager: JsValue,
}

#[async_trait(?Send)]
impl PushManagerCapability for JsPushManager {
    type Subscription = JsValue;
    type Error = JsCause;

    async fn subscribe(&self, options: &SubscriptionOptions) -> Result<JsValue, JsCause> {
        let subscribe = method(&self.manager, "subscribe")?;
        let args = Array::of1(&options_to_js(options)?);
        call_and_await(&subscribe, &self.manager, &args).await
    }
}

/// Build the `PushSubscriptionOptionsInit` dictionary.
pub fn options_to_js(options: &SubscriptionOptions) -> Result<JsValue, JsCause> {
    let init = Object::new();
    Reflect::set(
        &init,
        &"userVisibleOnly".into(),
        &JsValue::from_bool(options.user_visible_only),
    )?;

    if let Some(key) = &options.application_server_key {
        let key: JsValue = match key {
            ApplicationServerKey::Text(text) => JsValue::from_str(text),
            ApplicationServerKey::Bytes(bytes) => Uint8Array::from(bytes.as_slice()).into(),
        };
        Reflect::set(&init, &"applicationServerKey".into(), &key)?;
    }

    Ok(init.into())
}

/// Read `target[key]`, treating `undefined`, `null` and non-objects as absent.
pub(crate) fn property(target: &JsValue, key: &str) -> Option<JsValue> {
    Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
}

pub(crate) fn method(target: &JsValue, name: &str) -> Result<Function, JsCause> {
    Reflect::get(target, &JsValue::from_str(name))?
        .dyn_into::<Function>()
        .map_err(|other| {
            JsCause(TypeError::new(&format!("{name} is not a function (got {other:?})")).into())
        })
}

/// Call `function` and wait for its result, whether or not it returns a promise.
async fn call_and_await(
    function: &Function,
    this: &JsValue,
    args: &Array,
) -> Result<JsValue, JsCause> {
    let result = function.apply(this, args)?;
    Ok(JsFuture::from(Promise::resolve(&result)).await?)
}

fn parse_status(value: Option<String>) -> PermissionStatus {
    let Some(value) = value else {
        return PermissionStatus::Default;
    };
    value.parse().unwrap_or_else(|e| {
        log::warn!("[Push] Treating {e} as not granted");
        PermissionStatus::Default
    })
}
