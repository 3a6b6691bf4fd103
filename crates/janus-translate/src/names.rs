//! Qualified-name handling over bound declarations.

use janus_cpp::Declaration;
use janus_java::identifier::{normalize, MISSING_IDENTIFIER};

/// Scope separator of the source language.
pub const SCOPE_SEPARATOR: &str = "::";

/// The complete scoped name, e.g. `WebCore::RenderObject::firstChild`.
/// Declarations without scope information yield the unqualified name.
pub fn complete_name(decl: &Declaration) -> String {
    if decl.scope.is_empty() {
        return decl.name.clone();
    }
    let mut segments = decl.scope.clone();
    segments.push(decl.name.clone());
    segments.join(SCOPE_SEPARATOR)
}

/// The qualifier part of a name: every segment but the last, or the empty
/// string for unscoped declarations.
pub fn qualifier_prefix(decl: &Declaration) -> String {
    decl.scope.join(SCOPE_SEPARATOR)
}

/// The declaration's own name, normalized to a legal Java identifier.
pub fn simple_name(decl: &Declaration) -> String {
    normalize(&decl.name)
}

/// The last scope segment of a possibly-qualified type name.
/// Eg. `WebCore::RenderObject` becomes `RenderObject`.
pub fn simple_type_name(qualified: &str) -> String {
    let simple = qualified.rsplit(SCOPE_SEPARATOR).next().unwrap_or(qualified);
    if simple.is_empty() {
        MISSING_IDENTIFIER.to_owned()
    } else {
        simple.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use janus_cpp::Declaration;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn complete_name_joins_every_segment() {
        let decl = Declaration::scoped("firstChild", ["WebCore", "RenderObject"]);
        assert_eq!(complete_name(&decl), "WebCore::RenderObject::firstChild");
        assert_eq!(qualifier_prefix(&decl), "WebCore::RenderObject");
    }

    #[test]
    fn unscoped_declarations_stay_unqualified() {
        let decl = Declaration::new("main");
        assert_eq!(complete_name(&decl), "main");
        assert_eq!(qualifier_prefix(&decl), "");
    }

    #[test]
    fn simple_name_goes_through_the_normalizer() {
        assert_eq!(simple_name(&Declaration::new("operator ==")), "equals");
        assert_eq!(simple_name(&Declaration::new("~Foo")), "destruct");
        assert_eq!(simple_name(&Declaration::new("render")), "render");
    }

    #[test]
    fn simple_type_name_takes_the_last_segment() {
        assert_eq!(simple_type_name("WebCore::RenderObject"), "RenderObject");
        assert_eq!(simple_type_name("RenderObject"), "RenderObject");
        assert_eq!(simple_type_name(""), "MISSING");
        assert_eq!(simple_type_name("WebCore::"), "MISSING");
    }
}
