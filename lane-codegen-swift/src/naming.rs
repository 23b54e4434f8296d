//! Swift-specific naming conventions.

use lanebridge_core::to_camel_case;

/// Swift keywords that need back-tick escaping when used as identifiers.
const RESERVED_WORDS: &[&str] = &[
    "as",
    "associatedtype",
    "break",
    "case",
    "catch",
    "class",
    "continue",
    "default",
    "defer",
    "deinit",
    "do",
    "else",
    "enum",
    "extension",
    "fallthrough",
    "false",
    "fileprivate",
    "for",
    "func",
    "guard",
    "if",
    "import",
    "in",
    "init",
    "inout",
    "internal",
    "is",
    "let",
    "nil",
    "open",
    "operator",
    "private",
    "protocol",
    "public",
    "repeat",
    "rethrows",
    "return",
    "self",
    "Self",
    "static",
    "struct",
    "subscript",
    "super",
    "switch",
    "throw",
    "throws",
    "true",
    "try",
    "typealias",
    "var",
    "where",
    "while",
];

pub fn is_reserved(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}

/// Swift identifier for an option key or action name.
///
/// `output_directory` becomes `outputDirectory`; `default` becomes `` `default` ``.
pub fn identifier(name: &str) -> String {
    let ident = to_camel_case(name);
    if is_reserved(&ident) {
        format!("`{}`", ident)
    } else {
        ident
    }
}
