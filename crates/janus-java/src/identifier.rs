//! Replaces C++ spellings with Java compatible identifiers.
//!
//! Operator overloads, destructors and reserved words get dedicated
//! mnemonic names; anything else is sanitized character by character.

/// Marker prefix of an overloaded-operator spelling.
const OPERATOR_MARKER: &str = "operator";

/// Substituted for an overloadable operator with no table entry.
pub const UNHANDLED_OPERATOR: &str = "__PROBLEM__";

/// Method name substituted for a destructor spelling.
pub const DESTRUCTOR_METHOD: &str = "destruct";

/// Substituted when normalization produces an empty identifier.
pub const MISSING_IDENTIFIER: &str = "MISSING";

/// Characters the sanitizer replaces. Cast-operator spellings embed the
/// punctuation of the cast target type, so all of these show up in practice.
const DISALLOWED: [char; 9] = [' ', ':', '&', '(', ')', '*', '<', '>', ','];

const PLACEHOLDER: char = '_';

/// A recognized overloadable operator.
///
/// The set is closed and its mapping to Java method names is total, so an
/// operator spelling either resolves here or is explicitly unhandled; there
/// is no silent default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CppOperator {
    Plus,
    Minus,
    Star,
    Slash,
    PlusAssign,
    MinusAssign,
    Assign,
    Equals,
    NotEquals,
    Not,
    Arrow,
    Or,
    OrAssign,
    AddressOf,
    Subscript,
    New,
    NewArray,
    Delete,
    DeleteArray,
}

impl CppOperator {
    /// Every table entry, for exhaustive checks.
    pub const ALL: [CppOperator; 19] = [
        CppOperator::Plus,
        CppOperator::Minus,
        CppOperator::Star,
        CppOperator::Slash,
        CppOperator::PlusAssign,
        CppOperator::MinusAssign,
        CppOperator::Assign,
        CppOperator::Equals,
        CppOperator::NotEquals,
        CppOperator::Not,
        CppOperator::Arrow,
        CppOperator::Or,
        CppOperator::OrAssign,
        CppOperator::AddressOf,
        CppOperator::Subscript,
        CppOperator::New,
        CppOperator::NewArray,
        CppOperator::Delete,
        CppOperator::DeleteArray,
    ];

    /// Parses the token following the `operator` marker. Whitespace within
    /// the spelling is insignificant (`operator ==` and `operator==` agree).
    pub fn parse(token: &str) -> Option<CppOperator> {
        let token: String = token.chars().filter(|c| !c.is_whitespace()).collect();
        match token.as_str() {
            "+" => Some(CppOperator::Plus),
            "-" => Some(CppOperator::Minus),
            "*" => Some(CppOperator::Star),
            "/" => Some(CppOperator::Slash),
            "+=" => Some(CppOperator::PlusAssign),
            "-=" => Some(CppOperator::MinusAssign),
            "=" => Some(CppOperator::Assign),
            "==" => Some(CppOperator::Equals),
            "!=" => Some(CppOperator::NotEquals),
            "!" => Some(CppOperator::Not),
            "->" => Some(CppOperator::Arrow),
            "|" => Some(CppOperator::Or),
            "|=" => Some(CppOperator::OrAssign),
            "&" => Some(CppOperator::AddressOf),
            "[]" => Some(CppOperator::Subscript),
            "new" => Some(CppOperator::New),
            "new[]" => Some(CppOperator::NewArray),
            "delete" => Some(CppOperator::Delete),
            "delete[]" => Some(CppOperator::DeleteArray),
            _ => None,
        }
    }

    /// The Java method name for this operator. Equality maps to `equals`
    /// because that is the name Java's equality convention expects.
    pub fn java_name(self) -> &'static str {
        match self {
            CppOperator::Plus => "opPlus",
            CppOperator::Minus => "opMinus",
            CppOperator::Star => "opStar",
            CppOperator::Slash => "opDivide",
            CppOperator::PlusAssign => "opPlusAssign",
            CppOperator::MinusAssign => "opMinusAssign",
            CppOperator::Assign => "opAssign",
            CppOperator::Equals => "equals",
            CppOperator::NotEquals => "opNotEquals",
            CppOperator::Not => "opNot",
            CppOperator::Arrow => "opAccess",
            CppOperator::Or => "opOr",
            CppOperator::OrAssign => "opOrAssign",
            CppOperator::AddressOf => "opAddressOf",
            CppOperator::Subscript => "opArrayAccess",
            CppOperator::New => "opNew",
            CppOperator::NewArray => "opNewArray",
            CppOperator::Delete => "opDelete",
            CppOperator::DeleteArray => "opDeleteArray",
        }
    }
}

fn sanitize(raw: &str) -> String {
    raw.chars()
        .map(|c| if DISALLOWED.contains(&c) { PLACEHOLDER } else { c })
        .collect()
}

/// Produces a legal Java identifier for a raw C++ spelling. Total: every
/// input yields some identifier.
pub fn normalize(raw: &str) -> String {
    if let Some(rest) = raw.strip_prefix(OPERATOR_MARKER) {
        return match CppOperator::parse(rest) {
            Some(operator) => operator.java_name().to_owned(),
            None => UNHANDLED_OPERATOR.to_owned(),
        };
    }

    if raw.starts_with('~') {
        return DESTRUCTOR_METHOD.to_owned();
    }

    // Primitive keywords used as identifiers collide with Java reserved
    // words; `String` collides with java.lang.String.
    let replace = match raw {
        "bool" => "Boolean",
        "byte" => "Byte",
        "char" => "Character",
        "short" => "Short",
        "int" => "Integer",
        "long" => "Long",
        "float" => "Float",
        "double" => "Double",
        "String" => "CppString",
        _ => {
            let sanitized = sanitize(raw);
            return if sanitized.is_empty() {
                MISSING_IDENTIFIER.to_owned()
            } else {
                sanitized
            };
        }
    };

    replace.to_owned()
}
