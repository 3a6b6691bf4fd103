//! The diagnostic sink interface the translation core reports through.
//!
//! The logging backend itself is an external concern; the core only appends
//! `(severity, message)` pairs to whatever sink the context carries.

/// Severity level of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fine-grained progress detail.
    Note,
    /// Something the run should surface: problem types, unhandled shapes.
    Warning,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Note => "note",
            Severity::Warning => "warning",
        }
    }
}

/// An append-only diagnostic log.
pub trait DiagnosticSink {
    fn report(&mut self, severity: Severity, message: &str);
}

/// Default sink: forwards to the `tracing` subscriber of the host process.
#[derive(Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&mut self, severity: Severity, message: &str) {
        match severity {
            Severity::Note => tracing::debug!(target: "janus::translate", "{message}"),
            Severity::Warning => tracing::warn!(target: "janus::translate", "{message}"),
        }
    }
}

/// Sink that keeps every report in memory, for tests and for embedders that
/// surface diagnostics themselves.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub entries: Vec<(Severity, String)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Messages reported at [`Severity::Warning`].
    pub fn warnings(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(severity, _)| *severity == Severity::Warning)
            .map(|(_, message)| message.as_str())
    }
}

impl DiagnosticSink for MemorySink {
    fn report(&mut self, severity: Severity, message: &str) {
        self.entries.push((severity, message.to_owned()));
    }
}
