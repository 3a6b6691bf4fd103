use crate::anon::AnonymousTypes;
use crate::diagnostics::{DiagnosticSink, TracingSink};

/// Mutable state for translating one compilation unit: the anonymous-type
/// registry and the diagnostic sink.
///
/// A context belongs to exactly one unit. Units translated in parallel must
/// each get their own context; sharing one would interleave anonymous-type
/// counters between unrelated units.
pub struct UnitContext {
    pub anon: AnonymousTypes,
    pub diagnostics: Box<dyn DiagnosticSink>,
}

impl UnitContext {
    /// A fresh context reporting through [`TracingSink`].
    pub fn new() -> Self {
        Self::with_sink(Box::new(TracingSink))
    }

    /// A fresh context reporting through the given sink.
    pub fn with_sink(diagnostics: Box<dyn DiagnosticSink>) -> Self {
        Self {
            anon: AnonymousTypes::new(),
            diagnostics,
        }
    }
}

impl Default for UnitContext {
    fn default() -> Self {
        Self::new()
    }
}
