//! Read-only facade of the C++ front end: the resolved type descriptors and
//! bound declarations handed to the translation core. The front end owns
//! these values for the lifetime of a translation unit; nothing here mutates
//! them.

pub mod decl;
pub mod types;

pub use decl::Declaration;
pub use types::{
    AliasType, BasicKind, BasicType, CompositeType, CppType, EnumType, FunctionType, ProblemType,
    QualifiedType, TemplateParam,
};
