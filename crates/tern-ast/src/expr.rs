// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Expression AST nodes.

use crate::ops::{BinaryOp, UnaryOp};
use crate::stmt::Stmt;
use crate::Span;

/// An expression in the AST.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Expr {
    pub kind: ExprKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// The kind of expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ExprKind {
    /// `if c { ... } else { ... }` in value position
    If {
        condition: Box<Expr>,
        then_block: Vec<Stmt>,
        else_block: Option<Vec<Stmt>>,
    },
    /// `value |> func`
    Pipe {
        value: Box<Expr>,
        func: Box<Expr>,
    },
    Await(Box<Expr>),
    /// `yield value` or `yield* value` when `delegate` is set
    Yield {
        value: Option<Box<Expr>>,
        delegate: bool,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
    MethodCall {
        object: Box<Expr>,
        method: String,
        args: Vec<Expr>,
    },
    /// Indexed read `object[index]`
    At {
        object: Box<Expr>,
        index: Box<Expr>,
    },
    /// Indexed write `object[index] = value`
    AtPut {
        object: Box<Expr>,
        index: Box<Expr>,
        value: Box<Expr>,
    },
    /// Field read `object.field`
    Get {
        object: Box<Expr>,
        field: String,
    },
    /// Field write `object.field = value`
    Update {
        object: Box<Expr>,
        field: String,
        value: Box<Expr>,
    },
    New {
        class: Box<Expr>,
        args: Vec<Expr>,
    },
    /// `super(args)` calls the parent's member of the same name;
    /// `super.method(args)` names it explicitly.
    Super {
        method: Option<String>,
        args: Vec<Expr>,
    },
    Variable(String),
    Literal(Literal),
    Array(Vec<Expr>),
    /// Record literal, optionally delegating to a prototype object
    Object {
        prototype: Option<Box<Expr>>,
        fields: Vec<ObjectField>,
    },
    Function(FunctionExpr),
}

/// Scalar literals.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Literal {
    String(String),
    Integer(i64),
    Decimal(f64),
    Boolean(bool),
}

/// `name: value` inside an object literal.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectField {
    pub name: String,
    pub value: Expr,
}

/// How a function produces its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum FnKind {
    #[default]
    Plain,
    Generator,
    Async,
}

/// An anonymous function.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FunctionExpr {
    #[cfg_attr(feature = "serde", serde(default))]
    pub kind: FnKind,
    pub params: Vec<String>,
    pub body: Vec<Stmt>,
}
