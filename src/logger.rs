/// Weight of a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// Sink for compile and link diagnostics.
///
/// `tag` identifies the origin of the message: a shader stage tag
/// ("vertex", "fragment") or "program" for link diagnostics.
pub trait Logger {
    fn log(&self, severity: Severity, tag: &str, message: &str);
}

/// Forwards diagnostics to the `log` facade.
pub struct LogAdapter;

impl Logger for LogAdapter {
    fn log(&self, severity: Severity, tag: &str, message: &str) {
        let level = match severity {
            Severity::Info => log::Level::Info,
            Severity::Warning => log::Level::Warn,
            Severity::Error => log::Level::Error,
        };

        log::log!(level, "{tag}: {message}");
    }
}
