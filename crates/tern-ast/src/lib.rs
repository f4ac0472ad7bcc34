// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Abstract syntax tree for the Tern language.
//!
//! The parser lives outside this workspace; it hands over a [`Module`],
//! usually serialized as JSON (enable the `serde` feature). Each node family
//! is a closed enum so every pass matches exhaustively.

pub mod span;
pub mod ops;
pub mod expr;
pub mod stmt;
pub mod pattern;
pub mod decl;

pub use span::{LineMap, Span};
pub use ops::{BinaryOp, Fixity, UnaryOp, UnknownOperator};
pub use expr::{Expr, ExprKind, FnKind, FunctionExpr, Literal, ObjectField};
pub use stmt::{Else, IfStmt, MatchCase, Stmt, StmtKind};
pub use pattern::{ArrayPattern, Pattern};
pub use decl::{
    ClassDecl, ClassKind, Decl, DeclKind, FieldDecl, FnDecl, ImportDecl, ImportName, MemberDecl,
    MemberKind, Module, Placement, Superclass,
};
