//! WebAssembly bindings for browser push notification setup.
//!
//! Exposes the push setup operations to page scripts, backed by the browser's
//! own `Notification`, `navigator.serviceWorker` and `pushManager` objects.
//!
//! # Usage
//!
//! ```text
//! import init, { initializePushNotifications, subscriptionInfo } from "push_setup_wasm";
//!
//! await init();
//! const subscription = await initializePushNotifications("/sw.js", {
//!   userVisibleOnly: true,
//!   applicationServerKey: VAPID_PUBLIC_KEY,
//! });
//! await fetch("/push/subscriptions", {
//!   method: "POST",
//!   body: JSON.stringify(subscriptionInfo(subscription)),
//! });
//! ```
//!
//! Failures reported by the browser reject with the browser's own error
//! object. Failures detected here (missing capability, permission not
//! granted) reject with an `Error` whose message describes the problem.

pub mod error;
pub mod host;
pub mod logger;

use push_setup::{BrowserSubscription, PushSetup, SubscriptionInfo, SubscriptionOptions};
use wasm_bindgen::prelude::*;

use error::{into_js_value, invalid_argument};
use host::{method, JsHost, JsRegistration};

/// Initialize the WASM module.
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Warn);
}

/// Request notification permission. Resolves with `"granted"`.
#[wasm_bindgen(js_name = "requestPermission")]
pub async fn request_permission() -> Result<JsValue, JsValue> {
    let host = JsHost::detect();
    let status = push_setup::request_permission(&host)
        .await
        .map_err(into_js_value)?;
    Ok(JsValue::from_str(status.as_str()))
}

/// Register a service worker. Resolves with the `ServiceWorkerRegistration`.
#[wasm_bindgen(js_name = "registerServiceWorker")]
pub async fn register_service_worker(script_url: String) -> Result<JsValue, JsValue> {
    let host = JsHost::detect();
    let registration = push_setup::register_service_worker(&host, &script_url)
        .await
        .map_err(into_js_value)?;
    Ok(registration.into_inner())
}

/// Subscribe a registration to push. Resolves with the `PushSubscription`.
#[wasm_bindgen(js_name = "subscribeToPush")]
pub async fn subscribe_to_push(registration: JsValue, options: JsValue) -> Result<JsValue, JsValue> {
    let options = parse_options(options)?;
    let host = JsHost::detect();
    let registration = JsRegistration::new(registration);
    push_setup::subscribe_to_push(&host, &registration, &options)
        .await
        .map_err(into_js_value)
}

/// Register the worker, request permission, then subscribe.
#[wasm_bindgen(js_name = "initializePushNotifications")]
pub async fn initialize_push_notifications(
    script_url: String,
    options: JsValue,
) -> Result<JsValue, JsValue> {
    let options = parse_options(options)?;
    let host = JsHost::detect();
    push_setup::initialize_push_notifications(&host, &script_url, &options)
        .await
        .map_err(into_js_value)
}

/// Same as `initializePushNotifications`, reading the worker URL and options
/// from a JSON configuration document.
#[wasm_bindgen(js_name = "initializeFromConfig")]
pub async fn initialize_from_config(config_json: String) -> Result<JsValue, JsValue> {
    let setup = PushSetup::from_json(&config_json)
        .map_err(|e| invalid_argument(&format!("{e:#}")))?;
    let host = JsHost::detect();
    push_setup::initialize_from_setup(&host, &setup)
        .await
        .map_err(into_js_value)
}

/// Flatten a `PushSubscription` into `{ endpoint, p256dh, auth }` for a backend.
#[wasm_bindgen(js_name = "subscriptionInfo")]
pub fn subscription_info(subscription: JsValue) -> Result<JsValue, JsValue> {
    // Real subscriptions only expose their keys through toJSON().
    let json = match method(&subscription, "toJSON") {
        Ok(to_json) => to_json.call0(&subscription)?,
        Err(_) => subscription,
    };

    let browser: BrowserSubscription = serde_wasm_bindgen::from_value(json)
        .map_err(|e| invalid_argument(&format!("Invalid push subscription: {e}")))?;

    serde_wasm_bindgen::to_value(&SubscriptionInfo::from(browser))
        .map_err(|e| invalid_argument(&format!("Failed to serialize subscription: {e}")))
}

/// Read subscription options from a JS object; `undefined` means host defaults.
pub fn parse_options(options: JsValue) -> Result<SubscriptionOptions, JsValue> {
    if options.is_undefined() || options.is_null() {
        return Ok(SubscriptionOptions::default());
    }
    serde_wasm_bindgen::from_value(options)
        .map_err(|e| invalid_argument(&format!("Invalid subscription options: {e}")))
}
