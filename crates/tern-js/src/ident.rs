// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! JavaScript identifier rules.

/// Reserved words that cannot name a binding.
const RESERVED: &[&str] = &[
    "await", "break", "case", "catch", "class", "const", "continue", "debugger", "default",
    "delete", "do", "else", "enum", "export", "extends", "false", "finally", "for", "function",
    "if", "import", "in", "instanceof", "let", "new", "null", "return", "static", "super",
    "switch", "this", "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

/// Module code is always strict: these are reserved there too, and `eval`
/// and `arguments` cannot be declared or assigned.
const STRICT_RESERVED: &[&str] = &[
    "arguments", "eval", "implements", "interface", "package", "private", "protected", "public",
];

/// Whether `name` is syntactically an IdentifierName (ASCII subset).
/// Reserved words count: they are fine after `.` and as object keys.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

pub fn is_reserved(name: &str) -> bool {
    RESERVED.contains(&name) || STRICT_RESERVED.contains(&name)
}

/// Whether `name` can be declared as a variable or parameter.
pub fn is_binding_name(name: &str) -> bool {
    is_identifier(name) && !is_reserved(name)
}
