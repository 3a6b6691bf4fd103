use janus_cpp::CppType;
use thiserror::Error;

use crate::diagnostics::{DiagnosticSink, Severity};

/// Fatal translation failures.
///
/// Problem types reported by the front end are recoverable and never appear
/// here; this error means the descriptor itself is outside the translation
/// tables, and continuing would propagate an invalid Java type expression.
/// Callers abort the run by propagating it.
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("unrecognized {shape} type: {type_text}")]
    UnrecognizedShape {
        shape: &'static str,
        type_text: String,
    },
}

/// Reports the shape and spelling of an unrecognized descriptor, then builds
/// the error the caller returns.
pub(crate) fn unrecognized_shape(
    ty: &CppType,
    diagnostics: &mut dyn DiagnosticSink,
) -> TranslateError {
    let shape = ty.shape_name();
    let type_text = ty.to_string();
    diagnostics.report(
        Severity::Warning,
        &format!("unrecognized {shape} type: {type_text}"),
    );
    TranslateError::UnrecognizedShape { shape, type_text }
}
