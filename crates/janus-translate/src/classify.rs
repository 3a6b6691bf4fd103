use janus_cpp::{BasicKind, CppType};

use crate::diagnostics::{DiagnosticSink, Severity};
use crate::error::{unrecognized_shape, TranslateError};

/// Semantic category of a C++ type, driving the translation policy.
///
/// The set is closed: every descriptor the front end can produce classifies
/// into exactly one of these, or the run aborts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeCategory {
    Number,
    Boolean,
    Char,
    Void,
    Object,
    Enumeration,
    Function,
    ObjectPointer,
    BasicPointer,
    FunctionPointer,
    VoidPointer,
    ObjectArray,
    BasicArray,
    FunctionArray,
    ObjectReference,
    BasicReference,
    FunctionReference,
    Unknown,
    Other,
}

impl TypeCategory {
    /// True for the leaf categories that box to a Java primitive.
    pub fn is_basic(self) -> bool {
        matches!(
            self,
            TypeCategory::Boolean | TypeCategory::Char | TypeCategory::Number
        )
    }

    /// True for the categories that translate to a pointer-like value.
    pub fn is_ptr_or_array_basic(self) -> bool {
        matches!(self, TypeCategory::BasicPointer | TypeCategory::BasicArray)
    }
}

/// Classifies a descriptor, canonicalizing alias/qualifier chains first.
///
/// Total over every shape the front end produces today. Problem types
/// classify as [`TypeCategory::Unknown`] after reporting; shapes outside the
/// dispatch tables are fatal, because guessing a category would send an
/// invalid Java type expression through the rest of the pipeline.
pub fn classify(
    ty: &CppType,
    diagnostics: &mut dyn DiagnosticSink,
) -> Result<TypeCategory, TranslateError> {
    let canonical = ty.canonical();
    match canonical {
        CppType::Basic(basic) => Ok(match basic.kind {
            BasicKind::Bool => TypeCategory::Boolean,
            BasicKind::Char16 | BasicKind::WChar => TypeCategory::Char,
            BasicKind::Void => TypeCategory::Void,
            // 8-bit char included: it translates as a number, not a Java char.
            _ => TypeCategory::Number,
        }),
        CppType::Function(_) => Ok(TypeCategory::Function),
        CppType::Pointer(_) => {
            let base = canonical.pointer_base();
            match classify(base, diagnostics)? {
                TypeCategory::Object => Ok(TypeCategory::ObjectPointer),
                category if category.is_basic() => Ok(TypeCategory::BasicPointer),
                TypeCategory::Function => Ok(TypeCategory::FunctionPointer),
                TypeCategory::Void => Ok(TypeCategory::VoidPointer),
                // A problem base stays recoverable; the sentinel propagates.
                TypeCategory::Unknown => Ok(TypeCategory::Unknown),
                _ => Err(unrecognized_shape(ty, diagnostics)),
            }
        }
        CppType::Array(_) => {
            // Arrays of void are a front-end error and never reach here.
            let base = canonical.array_base();
            match classify(base, diagnostics)? {
                TypeCategory::Object => Ok(TypeCategory::ObjectArray),
                category if category.is_basic() => Ok(TypeCategory::BasicArray),
                TypeCategory::Function => Ok(TypeCategory::FunctionArray),
                TypeCategory::Unknown => Ok(TypeCategory::Unknown),
                _ => Err(unrecognized_shape(ty, diagnostics)),
            }
        }
        CppType::Reference(_) => {
            let base = canonical.reference_base();
            match classify(base, diagnostics)? {
                TypeCategory::Object => Ok(TypeCategory::ObjectReference),
                category if category.is_basic() => Ok(TypeCategory::BasicReference),
                TypeCategory::Function => Ok(TypeCategory::FunctionReference),
                TypeCategory::Unknown => Ok(TypeCategory::Unknown),
                _ => Err(unrecognized_shape(ty, diagnostics)),
            }
        }
        CppType::Composite(_) => Ok(TypeCategory::Object),
        CppType::TemplateParam(_) => Ok(TypeCategory::Other),
        CppType::Enumeration(_) => Ok(TypeCategory::Enumeration),
        CppType::Problem(problem) => {
            diagnostics.report(
                Severity::Warning,
                &format!("problem type: {}", problem.describe()),
            );
            Ok(TypeCategory::Unknown)
        }
        // A variant added upstream after this crate was built. Guessing a
        // category is worse than stopping the run.
        other => Err(unrecognized_shape(other, diagnostics)),
    }
}

/// True when the type, after stripping reference layers, translates to a
/// pointer-like Java value (any pointer or array category).
pub fn decays_to_pointer(
    ty: &CppType,
    diagnostics: &mut dyn DiagnosticSink,
) -> Result<bool, TranslateError> {
    let base = ty.reference_base();
    Ok(matches!(
        classify(base, diagnostics)?,
        TypeCategory::ObjectPointer
            | TypeCategory::BasicPointer
            | TypeCategory::FunctionPointer
            | TypeCategory::VoidPointer
            | TypeCategory::BasicArray
            | TypeCategory::ObjectArray
            | TypeCategory::FunctionArray
    ))
}

#[cfg(test)]
mod tests {
    use janus_cpp::{BasicKind, BasicType, CppType, FunctionType};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::diagnostics::MemorySink;

    fn classify_ok(ty: &CppType) -> TypeCategory {
        let mut sink = MemorySink::new();
        classify(ty, &mut sink).expect("classification should succeed")
    }

    fn int() -> CppType {
        CppType::basic(BasicKind::Int)
    }

    fn function() -> CppType {
        CppType::Function(FunctionType {
            return_type: Box::new(CppType::basic(BasicKind::Void)),
            parameters: vec![int()],
        })
    }

    #[test]
    fn basic_kinds_split_into_four_categories() {
        assert_eq!(classify_ok(&CppType::basic(BasicKind::Bool)), TypeCategory::Boolean);
        assert_eq!(classify_ok(&CppType::basic(BasicKind::Char16)), TypeCategory::Char);
        assert_eq!(classify_ok(&CppType::basic(BasicKind::WChar)), TypeCategory::Char);
        assert_eq!(classify_ok(&CppType::basic(BasicKind::Void)), TypeCategory::Void);
        assert_eq!(classify_ok(&int()), TypeCategory::Number);
        // 8-bit char is a number at this layer, not a Java char.
        assert_eq!(classify_ok(&CppType::basic(BasicKind::Char)), TypeCategory::Number);
        assert_eq!(
            classify_ok(&CppType::Basic(BasicType::new(BasicKind::Unspecified).unsigned())),
            TypeCategory::Number
        );
    }

    #[test]
    fn pointer_categories_follow_the_base() {
        assert_eq!(
            classify_ok(&CppType::pointer_to(CppType::composite("Foo"))),
            TypeCategory::ObjectPointer
        );
        assert_eq!(
            classify_ok(&CppType::pointer_to(int())),
            TypeCategory::BasicPointer
        );
        assert_eq!(
            classify_ok(&CppType::pointer_to(function())),
            TypeCategory::FunctionPointer
        );
        assert_eq!(
            classify_ok(&CppType::pointer_to(CppType::basic(BasicKind::Void))),
            TypeCategory::VoidPointer
        );
        // Depth does not change the category.
        assert_eq!(
            classify_ok(&CppType::pointer_to(CppType::pointer_to(int()))),
            TypeCategory::BasicPointer
        );
    }

    #[test]
    fn array_and_reference_categories_follow_the_base() {
        assert_eq!(
            classify_ok(&CppType::array_of(CppType::composite("Foo"))),
            TypeCategory::ObjectArray
        );
        assert_eq!(classify_ok(&CppType::array_of(int())), TypeCategory::BasicArray);
        assert_eq!(
            classify_ok(&CppType::array_of(function())),
            TypeCategory::FunctionArray
        );
        assert_eq!(
            classify_ok(&CppType::reference_to(CppType::composite("Foo"))),
            TypeCategory::ObjectReference
        );
        assert_eq!(
            classify_ok(&CppType::reference_to(int())),
            TypeCategory::BasicReference
        );
        assert_eq!(
            classify_ok(&CppType::reference_to(function())),
            TypeCategory::FunctionReference
        );
    }

    #[test]
    fn leaf_shapes_classify_directly() {
        assert_eq!(classify_ok(&CppType::composite("Foo")), TypeCategory::Object);
        assert_eq!(classify_ok(&CppType::enumeration("Color")), TypeCategory::Enumeration);
        assert_eq!(classify_ok(&function()), TypeCategory::Function);
        assert_eq!(classify_ok(&CppType::template_param("T")), TypeCategory::Other);
    }

    #[test]
    fn classification_matches_the_canonical_form() {
        // Chains of length 0..=3 over the same canonical type agree.
        let mut ty = CppType::pointer_to(int());
        let expected = classify_ok(&ty);
        for depth in 0..3 {
            ty = CppType::alias(format!("alias{depth}"), CppType::constant(ty));
            assert_eq!(classify_ok(&ty), expected, "chain length {}", depth + 1);
        }
    }

    #[test]
    fn classification_is_deterministic() {
        let ty = CppType::pointer_to(CppType::constant(CppType::composite("Foo")));
        let equal_instance = CppType::pointer_to(CppType::constant(CppType::composite("Foo")));
        assert_eq!(classify_ok(&ty), classify_ok(&equal_instance));
    }

    #[test]
    fn problem_types_report_and_classify_unknown() {
        let mut sink = MemorySink::new();
        let ty = CppType::problem("template argument deduction failed");
        assert_eq!(classify(&ty, &mut sink).unwrap(), TypeCategory::Unknown);
        let warnings: Vec<_> = sink.warnings().collect();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("template argument deduction failed"));
    }

    #[test]
    fn pointer_to_problem_stays_recoverable() {
        let mut sink = MemorySink::new();
        let ty = CppType::pointer_to(CppType::problem("unresolved template argument"));
        assert_eq!(classify(&ty, &mut sink).unwrap(), TypeCategory::Unknown);
        assert_eq!(sink.warnings().count(), 1);
    }

    #[test]
    fn pointer_to_enumeration_is_fatal() {
        // No pointer category covers an enumeration base; guessing would
        // emit an invalid type expression downstream.
        let mut sink = MemorySink::new();
        let ty = CppType::pointer_to(CppType::enumeration("Color"));
        let err = classify(&ty, &mut sink).unwrap_err();
        assert!(matches!(err, TranslateError::UnrecognizedShape { .. }));
        assert_eq!(sink.warnings().count(), 1);
    }

    #[test]
    fn basic_pointer_and_array_categories_decay_to_pointers() {
        assert!(TypeCategory::BasicPointer.is_ptr_or_array_basic());
        assert!(TypeCategory::BasicArray.is_ptr_or_array_basic());
        assert!(!TypeCategory::ObjectPointer.is_ptr_or_array_basic());
        assert!(!TypeCategory::Number.is_ptr_or_array_basic());
    }

    #[test]
    fn decay_covers_pointers_and_arrays_behind_references() {
        let mut sink = MemorySink::new();
        let ptr_ref = CppType::reference_to(CppType::pointer_to(CppType::composite("Foo")));
        assert!(decays_to_pointer(&ptr_ref, &mut sink).unwrap());
        let array = CppType::array_of(int());
        assert!(decays_to_pointer(&array, &mut sink).unwrap());
        assert!(!decays_to_pointer(&int(), &mut sink).unwrap());
    }
}
