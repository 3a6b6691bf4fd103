//! The translation core: classifies resolved C++ type descriptors and
//! renders them as Java type expressions.
//!
//! All mutable state lives in a [`UnitContext`], created when translation of
//! a compilation unit begins and discarded when it ends. Translating units
//! in parallel requires one context per unit; a context must never be shared
//! between units, or anonymous-type names leak across them.

pub mod anon;
pub mod classify;
pub mod context;
pub mod diagnostics;
pub mod error;
pub mod names;
pub mod primitives;
pub mod render;

pub use anon::AnonymousTypes;
pub use classify::{classify, decays_to_pointer, TypeCategory};
pub use context::UnitContext;
pub use diagnostics::{DiagnosticSink, MemorySink, Severity, TracingSink};
pub use error::TranslateError;
pub use names::{complete_name, qualifier_prefix, simple_name, simple_type_name};
pub use primitives::java_primitive;
pub use render::{RenderMode, TypeTranslator};
