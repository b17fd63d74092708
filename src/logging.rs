//! Console Logger
//!
//! `log` backend writing to the browser console, one line per record:
//! `[LIST] added todo 3 (1 total)`.

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;
use web_sys::console;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format_line(record));
        match record.level() {
            Level::Error => console::error_1(&line),
            Level::Warn => console::warn_1(&line),
            Level::Info => console::info_1(&line),
            Level::Debug => console::log_1(&line),
            Level::Trace => console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger at `level`
pub fn init(level: LevelFilter) {
    match log::set_logger(&LOGGER) {
        Ok(()) => log::set_max_level(level),
        Err(_) => console::warn_1(&"[LOG] logger already installed".into()),
    }
}

/// `[TAG] message`, where TAG is the last segment of the record target
pub fn format_line(record: &Record) -> String {
    let tag = record.target().rsplit("::").next().unwrap_or_default();
    format!("[{}] {}", tag.to_uppercase(), record.args())
}
