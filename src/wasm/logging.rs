//! Console logging and panic reporting for the browser build.

use std::sync::Once;

use log::{Level, LevelFilter};

static INIT: Once = Once::new();

/// Installs the panic hook and the console logger once. Later calls only
/// adjust the level.
pub fn init_logging(level: LevelFilter) {
    INIT.call_once(|| {
        std::panic::set_hook(Box::new(console_error_panic_hook::hook));
        if console_log::init_with_level(Level::Trace).is_err() {
            // Another logger is already installed; keep using it.
            return;
        }
        log::debug!("logging initialized");
    });
    log::set_max_level(level);
}
