/// Component-tagged console logging for the frontend
pub struct Logger;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Logger {
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
        let line = format_line(component, message);
        match level {
            Level::Debug => gloo::console::debug!(line),
            Level::Info => gloo::console::info!(line),
            Level::Warn => gloo::console::warn!(line),
            Level::Error => gloo::console::error!(line),
        }
    }
}

fn format_line(component: &str, message: &str) -> String {
    format!("[{}] {}", component, message)
}
