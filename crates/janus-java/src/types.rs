use genco::{prelude::*, tokens::static_literal};

use crate::primitives::JavaPrimitive;

/// Naming convention for boxed primitives and indirection wrappers.
///
/// Interface-flavoured names (`IInteger`, `IPtrObject<..>`) appear in
/// interface renderings; concrete-flavoured names (`MInteger`,
/// `PtrObject<..>`) in implementation and raw renderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapperFlavor {
    Interface,
    Concrete,
}

impl WrapperFlavor {
    /// Prefix applied to a boxed primitive name.
    pub fn boxed_prefix(self) -> &'static str {
        match self {
            WrapperFlavor::Interface => "I",
            WrapperFlavor::Concrete => "M",
        }
    }

    /// Name of the generic indirection wrapper.
    pub fn ptr_wrapper(self) -> &'static str {
        match self {
            WrapperFlavor::Interface => "IPtrObject",
            WrapperFlavor::Concrete => "PtrObject",
        }
    }
}

/// Represents a Java type expression in the translation system.
///
/// This enum covers primitive and boxed forms as well as the wrapper types
/// used to model C++ indirection in Java.
#[derive(Debug, Clone, PartialEq)]
pub enum JavaType {
    /// Raw primitive (`int`, `boolean`, ...)
    Primitive(JavaPrimitive),
    /// Boxed primitive with a flavor prefix (`IInteger`, `MInteger`)
    Boxed(JavaPrimitive, WrapperFlavor),
    /// One level of indirection around another type (`IPtrObject<..>`)
    Ptr(Box<JavaType>, WrapperFlavor),
    /// Multi-dimensional array marker appended to the element type
    MultiArray(Box<JavaType>),
    /// User-defined type (classes, enums, anonymous and template names)
    Named(String),
    /// Placeholder for any function type; signatures are not rendered here
    FunctionPointer,
    /// Sentinel substituted for unresolved/problem types
    Problem,
}

impl JavaType {
    /// Renders this type to its Java source spelling.
    pub fn expression(&self) -> String {
        let mut tokens = Tokens::<Java>::new();
        self.format_into(&mut tokens);
        tokens.to_string().expect("to format correctly")
    }
}

impl FormatInto<Java> for &JavaType {
    fn format_into(self, tokens: &mut Tokens<Java>) {
        match self {
            JavaType::Primitive(primitive) => tokens.append(static_literal(primitive.raw())),
            JavaType::Boxed(primitive, flavor) => {
                tokens.append(static_literal(flavor.boxed_prefix()));
                tokens.append(static_literal(primitive.boxed()));
            }
            JavaType::Ptr(inner, flavor) => {
                tokens.append(static_literal(flavor.ptr_wrapper()));
                tokens.append(static_literal("<"));
                inner.as_ref().format_into(tokens);
                tokens.append(static_literal(">"));
            }
            JavaType::MultiArray(element) => {
                element.as_ref().format_into(tokens);
                tokens.append(static_literal("Multi"));
            }
            JavaType::Named(name) => tokens.append(name.as_str()),
            JavaType::FunctionPointer => tokens.append(static_literal("FunctionPointer")),
            JavaType::Problem => tokens.append(static_literal("PROBLEM")),
        }
    }
}

impl FormatInto<Java> for JavaType {
    fn format_into(self, tokens: &mut Tokens<Java>) {
        (&self).format_into(tokens)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::primitives::JavaPrimitive;
    use crate::types::{JavaType, WrapperFlavor};

    #[test]
    fn test_basic_types() {
        let cases = vec![
            (JavaType::Primitive(JavaPrimitive::Int), "int"),
            (JavaType::Primitive(JavaPrimitive::Boolean), "boolean"),
            (JavaType::Primitive(JavaPrimitive::Void), "void"),
            (
                JavaType::Boxed(JavaPrimitive::Int, WrapperFlavor::Interface),
                "IInteger",
            ),
            (
                JavaType::Boxed(JavaPrimitive::Int, WrapperFlavor::Concrete),
                "MInteger",
            ),
            (
                JavaType::Boxed(JavaPrimitive::Char, WrapperFlavor::Interface),
                "ICharacter",
            ),
            (JavaType::Named("RenderObject".to_string()), "RenderObject"),
            (JavaType::FunctionPointer, "FunctionPointer"),
            (JavaType::Problem, "PROBLEM"),
        ];

        for (typ, expected) in cases {
            assert_eq!(typ.expression(), expected, "Failed for type: {:?}", typ);
        }
    }

    #[test]
    fn test_ptr_wrapper() {
        let typ = JavaType::Ptr(
            Box::new(JavaType::Named("Foo".to_string())),
            WrapperFlavor::Interface,
        );
        assert_eq!(typ.expression(), "IPtrObject<Foo>");

        let typ = JavaType::Ptr(
            Box::new(JavaType::Boxed(JavaPrimitive::Int, WrapperFlavor::Concrete)),
            WrapperFlavor::Concrete,
        );
        assert_eq!(typ.expression(), "PtrObject<MInteger>");
    }

    #[test]
    fn test_nested_ptr_wrappers() {
        // Three levels of indirection nest outward one wrapper per level.
        let typ = JavaType::Ptr(
            Box::new(JavaType::Ptr(
                Box::new(JavaType::Named("Foo".to_string())),
                WrapperFlavor::Interface,
            )),
            WrapperFlavor::Interface,
        );
        assert_eq!(typ.expression(), "IPtrObject<IPtrObject<Foo>>");
    }

    #[test]
    fn test_multi_array_marker() {
        let typ = JavaType::MultiArray(Box::new(JavaType::Boxed(
            JavaPrimitive::Double,
            WrapperFlavor::Concrete,
        )));
        assert_eq!(typ.expression(), "MDoubleMulti");
    }
}
