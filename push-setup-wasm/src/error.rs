//! Error conversion at the JavaScript boundary.

use js_sys::{Error, TypeError};
use push_setup::PushError;
use wasm_bindgen::JsValue;

use crate::host::JsCause;

/// Convert a push setup failure into the value a promise rejects with.
///
/// Host failures reject with the browser's own error object, untouched.
/// Everything else becomes a JS `Error` carrying the failure message.
pub fn into_js_value(err: PushError<JsCause>) -> JsValue {
    let message = err.to_string();
    match err.into_cause() {
        Some(JsCause(cause)) => cause,
        None => Error::new(&message).into(),
    }
}

/// Reject with a `TypeError` for arguments that could not be read.
pub(crate) fn invalid_argument(message: &str) -> JsValue {
    TypeError::new(message).into()
}
