use log::Level;
use shared::AppConfig;

/// Component-tagged logging on top of the `log` facade.
///
/// Records go to the browser console via `console_log`; the component name
/// becomes the record target so console filtering by component works.
pub struct Logger;

impl Logger {
    /// Install the console logger and the panic hook. Safe to call twice.
    pub fn init(config: &AppConfig) {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(config.log_level()) {
            gloo::console::warn!("Logger already initialised:", e.to_string());
        }
    }

    pub fn debug_with_component(component: &str, message: &str) {
        Self::log(Level::Debug, component, message);
    }

    pub fn info_with_component(component: &str, message: &str) {
        Self::log(Level::Info, component, message);
    }

    pub fn warn_with_component(component: &str, message: &str) {
        Self::log(Level::Warn, component, message);
    }

    pub fn error_with_component(component: &str, message: &str) {
        Self::log(Level::Error, component, message);
    }

    fn log(level: Level, component: &str, message: &str) {
        log::log!(target: component, level, "[{}] {}", component, message);
    }
}
