// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Statement AST nodes.

use crate::expr::Expr;
use crate::pattern::Pattern;
use crate::Span;

/// A statement in the AST.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stmt {
    pub kind: StmtKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// The kind of statement.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum StmtKind {
    /// Expression statement; in tail position its value is the block's result
    Expr(Expr),
    Let {
        name: String,
        #[cfg_attr(feature = "serde", serde(default))]
        mutable: bool,
        init: Expr,
    },
    /// Rebinding of a mutable `let`
    Assign {
        name: String,
        value: Expr,
    },
    /// `assert cond`; `source` is the condition as written
    Assert {
        condition: Expr,
        source: String,
    },
    Foreach {
        binding: String,
        iterable: Expr,
        body: Vec<Stmt>,
    },
    While {
        condition: Expr,
        body: Vec<Stmt>,
    },
    Until {
        condition: Expr,
        body: Vec<Stmt>,
    },
    /// Counts `binding` from `from` up to, not including, `to`
    For {
        binding: String,
        from: Expr,
        to: Expr,
        body: Vec<Stmt>,
    },
    Repeat {
        count: Expr,
        body: Vec<Stmt>,
    },
    If(IfStmt),
    Match {
        value: Expr,
        cases: Vec<MatchCase>,
    },
    Return(Option<Expr>),
}

/// One link of an if / else-if / else chain.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IfStmt {
    pub condition: Expr,
    pub then_block: Vec<Stmt>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub alternate: Option<Box<Else>>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Else {
    Block(Vec<Stmt>),
    ElseIf(IfStmt),
}

/// A match case. `pattern: None` is the default case.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchCase {
    #[cfg_attr(feature = "serde", serde(default))]
    pub pattern: Option<Pattern>,
    pub body: Vec<Stmt>,
}
