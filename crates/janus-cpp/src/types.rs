use std::fmt;

/// Kind of a C++ basic type, before width/signedness modifiers are applied.
///
/// `Unspecified` covers declarations that carry a modifier with no base
/// keyword (`unsigned x;`), which the front end reports as a kind-less basic
/// type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BasicKind {
    Bool,
    /// 8-bit `char`.
    Char,
    /// 16-bit `char16_t`.
    Char16,
    /// `wchar_t`.
    WChar,
    Int,
    Float,
    Double,
    Void,
    Unspecified,
}

/// A basic type together with its `short`/`long long`/`unsigned` modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BasicType {
    pub kind: BasicKind,
    pub is_short: bool,
    pub is_long_long: bool,
    pub is_unsigned: bool,
}

impl BasicType {
    pub fn new(kind: BasicKind) -> Self {
        Self {
            kind,
            is_short: false,
            is_long_long: false,
            is_unsigned: false,
        }
    }

    pub fn short(mut self) -> Self {
        self.is_short = true;
        self
    }

    pub fn long_long(mut self) -> Self {
        self.is_long_long = true;
        self
    }

    pub fn unsigned(mut self) -> Self {
        self.is_unsigned = true;
        self
    }
}

/// A class, struct or union type. Template instances keep their unexpanded
/// base name; arguments are not modelled at this layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompositeType {
    /// Possibly scope-qualified name, e.g. `WebCore::RenderObject`. Empty
    /// for anonymous types (named through the anonymous-type registry).
    pub name: String,
    pub is_template_instance: bool,
}

impl CompositeType {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_template_instance: false,
        }
    }

    pub fn template_instance(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_template_instance: true,
        }
    }
}

/// An enumeration type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnumType {
    /// Possibly scope-qualified name.
    pub name: String,
}

/// A function type. The signature is carried for completeness but the
/// translation core never renders it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionType {
    pub return_type: Box<CppType>,
    pub parameters: Vec<CppType>,
}

/// A `const`/`volatile` qualification layer over a base type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedType {
    pub base: Box<CppType>,
    pub is_const: bool,
    pub is_volatile: bool,
}

/// A typedef layer: the alias name and the type it abbreviates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AliasType {
    pub name: String,
    pub aliased: Box<CppType>,
}

/// A template type parameter, e.g. the `T` of `template <typename T>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TemplateParam {
    pub name: String,
}

/// A type the front end could not resolve. Carries the front end's
/// diagnostic message and, when known, the origin of the problem.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProblemType {
    pub message: String,
    pub file: Option<String>,
    pub line: Option<u32>,
}

impl ProblemType {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            file: None,
            line: None,
        }
    }

    pub fn at(message: impl Into<String>, file: impl Into<String>, line: u32) -> Self {
        Self {
            message: message.into(),
            file: Some(file.into()),
            line: Some(line),
        }
    }

    /// Message plus origin, for diagnostics.
    pub fn describe(&self) -> String {
        match (&self.file, self.line) {
            (Some(file), Some(line)) => format!("{} ({file}:{line})", self.message),
            (Some(file), None) => format!("{} ({file})", self.message),
            _ => self.message.clone(),
        }
    }
}

/// A resolved C++ type descriptor, as produced by the front end.
///
/// The variant set is owned by the front end and may grow; consumers must
/// treat an unmatched variant as an unrecognized shape rather than guess.
/// Equality and hashing are structural and stand in for the front end's
/// "same type" relation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum CppType {
    Basic(BasicType),
    Pointer(Box<CppType>),
    Reference(Box<CppType>),
    Array(Box<CppType>),
    Composite(CompositeType),
    Enumeration(EnumType),
    Function(FunctionType),
    Qualified(QualifiedType),
    Alias(AliasType),
    TemplateParam(TemplateParam),
    Problem(ProblemType),
}

impl CppType {
    pub fn basic(kind: BasicKind) -> Self {
        CppType::Basic(BasicType::new(kind))
    }

    pub fn pointer_to(base: CppType) -> Self {
        CppType::Pointer(Box::new(base))
    }

    pub fn reference_to(referent: CppType) -> Self {
        CppType::Reference(Box::new(referent))
    }

    pub fn array_of(element: CppType) -> Self {
        CppType::Array(Box::new(element))
    }

    pub fn composite(name: impl Into<String>) -> Self {
        CppType::Composite(CompositeType::named(name))
    }

    pub fn enumeration(name: impl Into<String>) -> Self {
        CppType::Enumeration(EnumType { name: name.into() })
    }

    pub fn constant(base: CppType) -> Self {
        CppType::Qualified(QualifiedType {
            base: Box::new(base),
            is_const: true,
            is_volatile: false,
        })
    }

    pub fn alias(name: impl Into<String>, aliased: CppType) -> Self {
        CppType::Alias(AliasType {
            name: name.into(),
            aliased: Box::new(aliased),
        })
    }

    pub fn template_param(name: impl Into<String>) -> Self {
        CppType::TemplateParam(TemplateParam { name: name.into() })
    }

    pub fn problem(message: impl Into<String>) -> Self {
        CppType::Problem(ProblemType::new(message))
    }

    /// Short name of this descriptor's shape, for diagnostics.
    pub fn shape_name(&self) -> &'static str {
        match self {
            CppType::Basic(_) => "basic",
            CppType::Pointer(_) => "pointer",
            CppType::Reference(_) => "reference",
            CppType::Array(_) => "array",
            CppType::Composite(_) => "composite",
            CppType::Enumeration(_) => "enumeration",
            CppType::Function(_) => "function",
            CppType::Qualified(_) => "qualified",
            CppType::Alias(_) => "alias",
            CppType::TemplateParam(_) => "template parameter",
            CppType::Problem(_) => "problem",
        }
    }

    /// Strips alias and qualifier layers until neither applies.
    ///
    /// The front end guarantees alias chains are finite and acyclic, so this
    /// terminates.
    pub fn canonical(&self) -> &CppType {
        let mut ty = self;
        loop {
            match ty {
                CppType::Alias(alias) => ty = &alias.aliased,
                CppType::Qualified(qualified) => ty = &qualified.base,
                _ => return ty,
            }
        }
    }

    /// Strips every pointer layer, looking through alias and qualifier
    /// layers between levels. A trailing alias/qualifier on the final base
    /// is preserved.
    pub fn pointer_base(&self) -> &CppType {
        let mut ty = self;
        loop {
            match ty {
                CppType::Pointer(inner) => ty = inner,
                other => match other.canonical() {
                    CppType::Pointer(inner) => ty = inner,
                    _ => return ty,
                },
            }
        }
    }

    /// Number of pointer layers stripped by [`CppType::pointer_base`].
    pub fn pointer_depth(&self) -> usize {
        let mut ty = self;
        let mut depth = 0;
        loop {
            match ty.canonical() {
                CppType::Pointer(inner) => {
                    depth += 1;
                    ty = inner;
                }
                _ => return depth,
            }
        }
    }

    /// Strips every array layer, as [`CppType::pointer_base`] does for
    /// pointers.
    pub fn array_base(&self) -> &CppType {
        let mut ty = self;
        loop {
            match ty {
                CppType::Array(inner) => ty = inner,
                other => match other.canonical() {
                    CppType::Array(inner) => ty = inner,
                    _ => return ty,
                },
            }
        }
    }

    /// Strips every reference layer, as [`CppType::pointer_base`] does for
    /// pointers.
    pub fn reference_base(&self) -> &CppType {
        let mut ty = self;
        loop {
            match ty {
                CppType::Reference(inner) => ty = inner,
                other => match other.canonical() {
                    CppType::Reference(inner) => ty = inner,
                    _ => return ty,
                },
            }
        }
    }
}

impl fmt::Display for BasicType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut words = Vec::new();
        if self.is_unsigned {
            words.push("unsigned");
        }
        if self.is_short {
            words.push("short");
        }
        if self.is_long_long {
            words.push("long long");
        }
        match self.kind {
            BasicKind::Bool => words.push("bool"),
            BasicKind::Char => words.push("char"),
            BasicKind::Char16 => words.push("char16_t"),
            BasicKind::WChar => words.push("wchar_t"),
            BasicKind::Int => words.push("int"),
            BasicKind::Float => words.push("float"),
            BasicKind::Double => words.push("double"),
            BasicKind::Void => words.push("void"),
            BasicKind::Unspecified => {
                if words.is_empty() {
                    words.push("int");
                }
            }
        }
        write!(f, "{}", words.join(" "))
    }
}

/// C++-flavoured spelling of the descriptor, used when a shape is reported
/// in diagnostics.
impl fmt::Display for CppType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CppType::Basic(basic) => write!(f, "{basic}"),
            CppType::Pointer(inner) => write!(f, "{inner} *"),
            CppType::Reference(inner) => write!(f, "{inner} &"),
            CppType::Array(inner) => write!(f, "{inner} []"),
            CppType::Composite(composite) => write!(f, "{}", composite.name),
            CppType::Enumeration(enumeration) => write!(f, "{}", enumeration.name),
            CppType::Function(function) => {
                write!(f, "{} (", function.return_type)?;
                for (i, parameter) in function.parameters.iter().enumerate() {
                    if i != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{parameter}")?;
                }
                write!(f, ")")
            }
            CppType::Qualified(qualified) => {
                if qualified.is_const {
                    write!(f, "const ")?;
                }
                if qualified.is_volatile {
                    write!(f, "volatile ")?;
                }
                write!(f, "{}", qualified.base)
            }
            CppType::Alias(alias) => write!(f, "{}", alias.name),
            CppType::TemplateParam(param) => write!(f, "{}", param.name),
            CppType::Problem(problem) => write!(f, "<problem: {}>", problem.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn int() -> CppType {
        CppType::basic(BasicKind::Int)
    }

    fn pointer_chain(base: CppType, depth: usize) -> CppType {
        let mut ty = base;
        for _ in 0..depth {
            ty = CppType::pointer_to(ty);
        }
        ty
    }

    #[test]
    fn canonical_strips_alias_and_qualifier_layers() {
        let ty = CppType::constant(CppType::alias(
            "myint",
            CppType::alias("inner", CppType::constant(int())),
        ));
        assert_eq!(ty.canonical(), &int());
    }

    #[test]
    fn canonical_is_a_fixpoint() {
        let ty = CppType::alias("myint", CppType::constant(int()));
        let once = ty.canonical();
        assert_eq!(once.canonical(), once);
    }

    #[test]
    fn pointer_depth_counts_every_level() {
        for depth in [0usize, 1, 2, 3, 5] {
            let ty = pointer_chain(int(), depth);
            assert_eq!(ty.pointer_depth(), depth, "depth {depth}");
            assert_eq!(ty.pointer_base(), &int(), "depth {depth}");
        }
    }

    #[test]
    fn pointer_depth_looks_through_aliases() {
        // typedef int *intp; typedef intp *intpp;
        let intp = CppType::alias("intp", CppType::pointer_to(int()));
        let intpp = CppType::alias("intpp", CppType::pointer_to(intp));
        assert_eq!(intpp.pointer_depth(), 2);
        assert_eq!(intpp.pointer_base(), &int());
    }

    #[test]
    fn pointer_base_preserves_a_trailing_alias() {
        let myint = CppType::alias("myint", int());
        let ty = CppType::pointer_to(CppType::pointer_to(myint.clone()));
        assert_eq!(ty.pointer_base(), &myint);
    }

    #[test]
    fn reference_base_strips_interleaved_layers() {
        let ty = CppType::reference_to(CppType::constant(CppType::reference_to(int())));
        assert_eq!(ty.reference_base(), &int());
    }

    #[test]
    fn array_base_strips_every_dimension() {
        let ty = CppType::array_of(CppType::array_of(CppType::composite("Foo")));
        assert_eq!(ty.array_base(), &CppType::composite("Foo"));
    }

    #[test]
    fn structural_equality_ignores_instance_identity() {
        let a = CppType::pointer_to(CppType::constant(int()));
        let b = CppType::pointer_to(CppType::constant(int()));
        assert_eq!(a, b);
        assert_ne!(a, CppType::pointer_to(int()));
    }

    #[test]
    fn display_spells_basic_modifiers() {
        assert_eq!(int().to_string(), "int");
        assert_eq!(
            CppType::Basic(BasicType::new(BasicKind::Int).unsigned().short()).to_string(),
            "unsigned short int"
        );
        assert_eq!(
            CppType::Basic(BasicType::new(BasicKind::Unspecified).unsigned()).to_string(),
            "unsigned"
        );
        assert_eq!(CppType::basic(BasicKind::WChar).to_string(), "wchar_t");
    }

    #[test]
    fn display_spells_composite_shapes() {
        let ty = CppType::pointer_to(CppType::pointer_to(int()));
        assert_eq!(ty.to_string(), "int * *");
        assert_eq!(
            CppType::reference_to(CppType::constant(CppType::composite("Foo"))).to_string(),
            "const Foo &"
        );
        let function = CppType::Function(FunctionType {
            return_type: Box::new(CppType::basic(BasicKind::Void)),
            parameters: vec![int(), CppType::basic(BasicKind::Double)],
        });
        assert_eq!(function.to_string(), "void (int, double)");
    }
}
