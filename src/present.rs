//! Presenter and messenger seams.
//!
//! The library never draws anything itself: finished line sequences go to a
//! [`Presenter`] (a read-only preview surface) and failure notices go to a
//! [`Messenger`]. Both calls are fire-and-forget.

/// Options passed through to the preview surface.
///
/// The directives are opaque editor display commands; the surface receives
/// them verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewOptions {
    /// Output format tag (e.g. "txt")
    pub format: String,

    /// Display directives applied to the preview window
    pub directives: Vec<String>,
}

impl PreviewOptions {
    /// Create new preview options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the format tag.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    /// Append a display directive.
    pub fn with_directive(mut self, directive: impl Into<String>) -> Self {
        self.directives.push(directive.into());
        self
    }
}

impl Default for PreviewOptions {
    /// Plain-text mode with line numbers and line wrap off.
    fn default() -> Self {
        Self {
            format: "txt".to_string(),
            directives: vec!["setl nonumber".to_string(), "setl nowrap".to_string()],
        }
    }
}

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Informational notice
    Info,
    /// Warning
    Warning,
    /// Error
    Error,
}

impl std::fmt::Display for MessageLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            MessageLevel::Info => "info",
            MessageLevel::Warning => "warning",
            MessageLevel::Error => "error",
        };
        write!(f, "{}", label)
    }
}

/// A display surface that renders a finished line sequence.
pub trait Presenter {
    /// Show the lines in a read-only preview with the given options.
    fn preview(&self, lines: &[String], options: &PreviewOptions);
}

/// A surface for user-facing status and error notices.
pub trait Messenger {
    /// Show a one-line notice at the given severity.
    fn notify(&self, message: &str, level: MessageLevel);
}
