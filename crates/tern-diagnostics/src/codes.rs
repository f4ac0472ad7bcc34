// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Error code registry.
//!
//! Maps error codes (E0100, E0301, etc.) to titles and categories.
//! Used by `tern explain <code>` and the JSON report.

use std::collections::HashMap;

/// Registry of all known error codes.
pub struct ErrorCodeRegistry {
    codes: HashMap<&'static str, ErrorCodeInfo>,
}

/// Information about a single error code.
pub struct ErrorCodeInfo {
    pub code: &'static str,
    pub title: &'static str,
    pub category: ErrorCategory,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The input tree could not be decoded.
    Decode,
    /// The tree decoded but cannot be lowered.
    Lowering,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Decode => write!(f, "Decode"),
            ErrorCategory::Lowering => write!(f, "Lowering"),
        }
    }
}

macro_rules! register_codes {
    ($($code:literal => ($title:literal, $cat:expr, $desc:literal)),* $(,)?) => {{
        let mut map = HashMap::new();
        $(
            map.insert($code, ErrorCodeInfo {
                code: $code,
                title: $title,
                category: $cat,
                description: $desc,
            });
        )*
        map
    }};
}

impl Default for ErrorCodeRegistry {
    fn default() -> Self {
        use ErrorCategory::*;

        Self {
            codes: register_codes! {
                // Decode errors (E01xx)
                "E0100" => ("malformed syntax tree", Decode,
                    "The input is not valid JSON, or ends early."),
                "E0101" => ("invalid syntax tree", Decode,
                    "The input is valid JSON but does not describe a Tern module:\n\
                     a node has an unknown kind or is missing a required field."),
                "E0102" => ("unknown operator", Decode,
                    "An operator token is not one Tern defines. Binary operators are\n\
                     == != < <= > >= + - * / % ** ++ >> << && ||; unary operators are - and !."),

                // Lowering errors (E03xx)
                "E0300" => ("yield outside generator", Lowering,
                    "`yield` may only appear in the body of a generator function."),
                "E0301" => ("await outside async function", Lowering,
                    "`await` may only appear at module level or in an async function.\n\
                     Nested plain functions do not inherit async-ness."),
                "E0302" => ("super outside class", Lowering,
                    "`super` refers to the parent class, so it needs an enclosing\n\
                     class member."),
                "E0303" => ("super call in constructor", Lowering,
                    "The parent constructor is called with the arguments of the\n\
                     `extends` clause. A bare `super(...)` in the constructor body\n\
                     has nothing to refer to."),
                "E0304" => ("duplicate class slot", Lowering,
                    "Class parameters, fields and the receiver name share one scope\n\
                     inside members, so each name may be declared once."),
                "E0305" => ("invalid accessor", Lowering,
                    "Getters and setters cannot be generators or async."),
                "E0306" => ("reserved class member", Lowering,
                    "JavaScript gives `constructor` a fixed meaning on instances and\n\
                     `prototype` on the class itself. Neither can name a member, and\n\
                     `constructor` cannot name a parameter or field."),
                "E0307" => ("duplicate pattern binding", Lowering,
                    "Each name may be bound once per match case. All of a case's\n\
                     bindings live in one scope."),
            },
        }
    }
}

impl ErrorCodeRegistry {
    pub fn get(&self, code: &str) -> Option<&ErrorCodeInfo> {
        self.codes.get(code)
    }

    pub fn all(&self) -> impl Iterator<Item = &ErrorCodeInfo> {
        self.codes.values()
    }
}
