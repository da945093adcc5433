//! The [`Log`] trait: the logger capability the link engine depends on.

/// Abstraction over logging backends.
///
/// [`Logger`](super::logger::Logger) forwards to `tracing`; tests substitute
/// `MockLog` (generated by `mockall`) or a recording double so that link
/// code can log without knowing where output goes.
#[cfg_attr(test, mockall::automock)]
pub trait Log: Send + Sync {
    /// Log an informational message.
    fn info(&self, msg: &str);
    /// Log a debug message (may be suppressed on console).
    fn debug(&self, msg: &str);
    /// Log a warning message.
    fn warn(&self, msg: &str);
    /// Log an error message.
    fn error(&self, msg: &str);
}
