use janus_cpp::{BasicType, CppType};
use janus_java::{JavaType, WrapperFlavor};

use crate::classify::classify;
use crate::context::UnitContext;
use crate::diagnostics::Severity;
use crate::error::{unrecognized_shape, TranslateError};
use crate::names::simple_type_name;
use crate::primitives::java_primitive;

/// Naming/wrapping convention for one rendering. Modes are mutually
/// exclusive per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Boxed names with the interface prefix (`IInteger`, `IPtrObject<..>`).
    Interface,
    /// Boxed names with the concrete prefix (`MInteger`, `PtrObject<..>`).
    Implementation,
    /// Unboxed primitive names (`int`).
    Raw,
}

impl RenderMode {
    fn wrapper_flavor(self) -> WrapperFlavor {
        match self {
            RenderMode::Interface => WrapperFlavor::Interface,
            RenderMode::Implementation | RenderMode::Raw => WrapperFlavor::Concrete,
        }
    }
}

/// Renderer for type occurrences within one compilation unit.
///
/// Borrows the unit's context mutably for its lifetime: rendering may
/// consult the anonymous-type registry and report diagnostics.
pub struct TypeTranslator<'a> {
    context: &'a mut UnitContext,
}

impl<'a> TypeTranslator<'a> {
    pub fn new(context: &'a mut UnitContext) -> Self {
        Self { context }
    }

    /// Attempts to convert a C++ type descriptor to the appropriate Java
    /// type expression.
    ///
    /// Problem types render as the `PROBLEM` sentinel and let translation
    /// continue; a descriptor shape outside the tables aborts the run.
    pub fn java_type(
        &mut self,
        ty: &CppType,
        mode: RenderMode,
    ) -> Result<JavaType, TranslateError> {
        // Already-named anonymous types short-circuit everything else; once
        // named, a descriptor is never re-rendered structurally.
        if let Some(name) = self.context.anon.lookup(ty) {
            return Ok(JavaType::Named(name.to_owned()));
        }

        match ty {
            CppType::Basic(basic) => {
                let primitive = java_primitive(basic);
                Ok(match mode {
                    RenderMode::Raw => JavaType::Primitive(primitive),
                    RenderMode::Interface => {
                        JavaType::Boxed(primitive, WrapperFlavor::Interface)
                    }
                    RenderMode::Implementation => {
                        JavaType::Boxed(primitive, WrapperFlavor::Concrete)
                    }
                })
            }
            CppType::Array(element) => {
                let element = self.java_type(element, mode)?;
                Ok(match mode {
                    // Arrays are not separately wrapped at this layer.
                    RenderMode::Raw | RenderMode::Interface => element,
                    RenderMode::Implementation => JavaType::MultiArray(Box::new(element)),
                })
            }
            // Template instances render as their unparameterized base name.
            CppType::Composite(composite) => {
                Ok(JavaType::Named(simple_type_name(&composite.name)))
            }
            CppType::Pointer(_) => self.pointer_type(ty, mode),
            CppType::Reference(referent) => self.reference_type(referent, mode),
            CppType::Qualified(qualified) => self.java_type(&qualified.base, mode),
            CppType::Alias(alias) => self.java_type(&alias.aliased, mode),
            CppType::Enumeration(enumeration) => {
                Ok(JavaType::Named(simple_type_name(&enumeration.name)))
            }
            // Signatures are not rendered at this layer.
            CppType::Function(_) => Ok(JavaType::FunctionPointer),
            CppType::Problem(problem) => {
                self.context.diagnostics.report(
                    Severity::Warning,
                    &format!("problem type: {}", problem.describe()),
                );
                Ok(JavaType::Problem)
            }
            CppType::TemplateParam(param) => {
                self.context.diagnostics.report(
                    Severity::Note,
                    &format!("template type parameter: {}", param.name),
                );
                Ok(JavaType::Named(param.name.clone()))
            }
            other => Err(unrecognized_shape(other, self.context.diagnostics.as_mut())),
        }
    }

    /// Renders straight to the Java source spelling.
    pub fn java_type_string(
        &mut self,
        ty: &CppType,
        mode: RenderMode,
    ) -> Result<String, TranslateError> {
        Ok(self.java_type(ty, mode)?.expression())
    }

    fn pointer_type(
        &mut self,
        ty: &CppType,
        mode: RenderMode,
    ) -> Result<JavaType, TranslateError> {
        let base = ty.pointer_base();
        let mut depth = ty.pointer_depth();
        let basic_base = classify(base, self.context.diagnostics.as_mut())?.is_basic();

        // A single pointer to a basic type is held directly: the rest of the
        // pipeline translates it as a boxed primitive, not a wrapper.
        if basic_base && depth == 1 {
            return self.java_type(base, mode);
        }

        // One level of indirection becomes:
        //   IPtrObject<BASE_TYPE>
        // Two levels of indirection become:
        //   IPtrObject<IPtrObject<BASE_TYPE>>
        // and so on.
        let mut wrapped = self.java_type(base, mode)?;
        if basic_base {
            // The first indirection level is absorbed into the boxed form.
            depth -= 1;
        }
        let flavor = mode.wrapper_flavor();
        for _ in 0..depth {
            wrapped = JavaType::Ptr(Box::new(wrapped), flavor);
        }
        Ok(wrapped)
    }

    fn reference_type(
        &mut self,
        referent: &CppType,
        mode: RenderMode,
    ) -> Result<JavaType, TranslateError> {
        // References to class types and qualified types decay to plain value
        // rendering.
        if matches!(referent, CppType::Qualified(_) | CppType::Composite(_)) {
            return self.java_type(referent, mode);
        }

        // References to primitives always render boxed with the interface
        // prefix; there is no raw/implementation distinction for this shape.
        if let Some(basic) = referent_basic(referent) {
            return Ok(JavaType::Boxed(
                java_primitive(basic),
                WrapperFlavor::Interface,
            ));
        }

        // No rule covers the remaining referent shapes (pointer, array,
        // enumeration, ...). Surface the gap instead of inventing a wrapper
        // convention.
        self.context.diagnostics.report(
            Severity::Warning,
            &format!("no Java rendering for reference to {referent}"),
        );
        Ok(JavaType::Problem)
    }
}

/// A basic referent, directly or through exactly one alias layer.
fn referent_basic(referent: &CppType) -> Option<&BasicType> {
    match referent {
        CppType::Basic(basic) => Some(basic),
        CppType::Alias(alias) => match alias.aliased.as_ref() {
            CppType::Basic(basic) => Some(basic),
            _ => None,
        },
        _ => None,
    }
}
