// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Lowering errors.
//!
//! Every error is fatal for the compilation unit; no partial output is
//! produced.

use tern_ast::{MemberKind, Span};
use thiserror::Error;

/// A lowering error.
#[derive(Debug, Clone, PartialEq)]
pub struct LowerError {
    pub kind: LowerErrorKind,
    pub span: Span,
}

impl LowerError {
    pub fn new(kind: LowerErrorKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// The kind of lowering error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LowerErrorKind {
    #[error("`yield` outside of a generator function")]
    YieldOutsideGenerator,

    #[error("`await` outside of an async function")]
    AwaitOutsideAsync,

    #[error("`super` outside of a class member")]
    SuperOutsideClass,

    /// Bare `super(...)` in a constructor body; the parent constructor call
    /// comes from the `extends` clause.
    #[error("`super(...)` cannot be called from the constructor of `{class}`")]
    SuperInConstructor { class: String },

    #[error("`{name}` is declared more than once in class `{class}`")]
    DuplicateSlot { class: String, name: String },

    #[error("{kind} `{name}` cannot be a generator or async")]
    InvalidAccessor { name: String, kind: MemberKind },

    /// `constructor` on instances and `prototype` on the class itself are
    /// taken by the generated JavaScript class.
    #[error("`{name}` cannot name a member of class `{class}`")]
    ReservedMember { class: String, name: String },

    #[error("`{name}` is bound more than once in one pattern")]
    DuplicateBinding { name: String },
}

impl std::fmt::Display for LowerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl std::error::Error for LowerError {}
