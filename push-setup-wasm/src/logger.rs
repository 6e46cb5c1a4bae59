//! `log` backend that writes to the browser console.

use std::str::FromStr;

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = error)]
    fn console_error(message: &str);
    #[wasm_bindgen(js_namespace = console, js_name = warn)]
    fn console_warn(message: &str);
    #[wasm_bindgen(js_namespace = console, js_name = info)]
    fn console_info(message: &str);
    #[wasm_bindgen(js_namespace = console, js_name = debug)]
    fn console_debug(message: &str);
}

struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let message = record.args().to_string();
        match record.level() {
            Level::Error => console_error(&message),
            Level::Warn => console_warn(&message),
            Level::Info => console_info(&message),
            Level::Debug | Level::Trace => console_debug(&message),
        }
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Install the console logger. Later calls only change the level.
pub fn init(level: LevelFilter) {
    // Fails only if a logger is already installed; keep that one.
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}

/// Change the console log level (`"off"`, `"error"`, ... `"trace"`).
#[wasm_bindgen(js_name = "setLogLevel")]
pub fn set_log_level(level: &str) -> Result<(), JsValue> {
    let filter = LevelFilter::from_str(level)
        .map_err(|e| crate::error::invalid_argument(&format!("Invalid log level {level:?}: {e}")))?;
    log::set_max_level(filter);
    Ok(())
}
