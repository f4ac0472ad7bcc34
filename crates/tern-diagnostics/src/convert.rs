// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Conversions from compiler error types to `Diagnostic`.

use serde_json::error::Category;
use tern_ast::UnknownOperator;
use tern_lower::{LowerError, LowerErrorKind};

use crate::{Diagnostic, ToDiagnostic};

// ============================================================================
// Decode Errors
// ============================================================================

/// A syntax tree that failed to decode. Positions point into the JSON
/// input rather than the Tern source, so they go in a note.
impl ToDiagnostic for serde_json::Error {
    fn to_diagnostic(&self) -> Diagnostic {
        let location = format!(" at line {} column {}", self.line(), self.column());
        let text = self.to_string();
        let message = text.strip_suffix(&location).unwrap_or(&text);

        let code = match self.classify() {
            Category::Data if message.contains(" operator `") => "E0102",
            Category::Data => "E0101",
            Category::Syntax | Category::Eof | Category::Io => "E0100",
        };
        let mut diag = Diagnostic::error(message).with_code(code);
        if self.line() > 0 {
            diag = diag.with_note(format!(
                "in the syntax tree at line {}, column {}",
                self.line(),
                self.column()
            ));
        }
        if code == "E0100" {
            diag = diag.with_help("the input should be the JSON syntax tree produced by the Tern parser");
        }
        diag
    }
}

impl ToDiagnostic for UnknownOperator {
    fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.to_string()).with_code("E0102")
    }
}

// ============================================================================
// Lowering Errors
// ============================================================================

impl ToDiagnostic for LowerError {
    fn to_diagnostic(&self) -> Diagnostic {
        use LowerErrorKind::*;

        let message = self.kind.to_string();
        match &self.kind {
            YieldOutsideGenerator => Diagnostic::error(message)
                .with_code("E0300")
                .with_label(self.span, "not inside a generator")
                .with_help("declare the enclosing function as a generator"),

            AwaitOutsideAsync => Diagnostic::error(message)
                .with_code("E0301")
                .with_label(self.span, "not inside an async function")
                .with_help("mark the enclosing function `async`"),

            SuperOutsideClass => Diagnostic::error(message)
                .with_code("E0302")
                .with_label(self.span, "no enclosing class member"),

            SuperInConstructor { class } => Diagnostic::error(message)
                .with_code("E0303")
                .with_label(self.span, "bare `super` call")
                .with_note(format!(
                    "the parent constructor of `{class}` is called with the arguments of its `extends` clause"
                ))
                .with_help("to call a parent member, name it: `super.name(...)`"),

            DuplicateSlot { name, .. } => Diagnostic::error(message)
                .with_code("E0304")
                .with_label(self.span, format!("`{name}` declared again in this class"))
                .with_help("parameters, fields and the receiver need distinct names"),

            InvalidAccessor { kind, .. } => Diagnostic::error(message)
                .with_code("E0305")
                .with_label(self.span, format!("this {kind}"))
                .with_help("make it a plain method instead"),

            ReservedMember { name, .. } => Diagnostic::error(message)
                .with_code("E0306")
                .with_label(self.span, format!("`{name}` is reserved in a class"))
                .with_help("choose another name"),

            DuplicateBinding { name } => Diagnostic::error(message)
                .with_code("E0307")
                .with_label(self.span, format!("this match binds `{name}` twice in one case"))
                .with_help("give each bound value its own name"),
        }
    }
}
