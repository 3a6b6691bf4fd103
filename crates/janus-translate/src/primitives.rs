use janus_cpp::{BasicKind, BasicType};
use janus_java::JavaPrimitive;

/// Maps a C++ basic type to the Java primitive it translates to.
///
/// Total: `BasicKind` is closed over the kinds the front end produces, so
/// there is no unmapped case. Signedness never changes the chosen name —
/// unsigned integers render with their signed counterpart's name, a
/// deliberate simplification shared with the rest of the pipeline.
pub fn java_primitive(basic: &BasicType) -> JavaPrimitive {
    match basic.kind {
        BasicKind::Bool => JavaPrimitive::Boolean,
        BasicKind::Char => JavaPrimitive::Byte,
        BasicKind::Int => {
            if basic.is_short {
                JavaPrimitive::Short
            } else if basic.is_long_long {
                JavaPrimitive::Long
            } else {
                JavaPrimitive::Int
            }
        }
        BasicKind::Float => JavaPrimitive::Float,
        BasicKind::Double => JavaPrimitive::Double,
        // A bare modifier with no base keyword is a plain integer.
        BasicKind::Unspecified => JavaPrimitive::Int,
        BasicKind::Void => JavaPrimitive::Void,
        BasicKind::Char16 | BasicKind::WChar => JavaPrimitive::Char,
    }
}
