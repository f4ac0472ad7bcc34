// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Top-level declarations.

use crate::expr::{Expr, FnKind};
use crate::stmt::Stmt;
use crate::Span;

/// A parsed Tern module.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Module {
    pub definitions: Vec<Decl>,
}

/// A top-level declaration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decl {
    pub kind: DeclKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub span: Span,
}

impl Decl {
    pub fn new(kind: DeclKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// The kind of declaration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum DeclKind {
    Import(ImportDecl),
    Function(FnDecl),
    Class(ClassDecl),
    /// Statement run when the module loads
    Stmt(Stmt),
}

/// `import { a, b as c } from "m"` or `import * as ns from "m"`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImportDecl {
    pub module: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub names: Vec<ImportName>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub namespace: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImportName {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub alias: Option<String>,
}

/// A named function declaration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FnDecl {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub kind: FnKind,
    pub params: Vec<String>,
    pub body: Vec<Stmt>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_export: bool,
}

/// A class declaration.
///
/// `params` are the constructor parameters. Each one, and each entry of
/// `fields`, becomes a private storage slot on the instance.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassDecl {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub kind: ClassKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub params: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub superclass: Option<Superclass>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub fields: Vec<FieldDecl>,
    /// Statements run at the end of the synthesized constructor
    #[cfg_attr(feature = "serde", serde(default))]
    pub constructor: Vec<Stmt>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub members: Vec<MemberDecl>,
    /// Name members use for the instance
    #[cfg_attr(feature = "serde", serde(default = "default_receiver"))]
    pub receiver: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_export: bool,
}

#[cfg(feature = "serde")]
fn default_receiver() -> String {
    "self".to_string()
}

/// Data classes get public getters for their parameters and an `unapply`
/// extractor; regular classes get neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ClassKind {
    Data,
    #[default]
    Regular,
}

/// `extends Parent(args)`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Superclass {
    pub class: Expr,
    #[cfg_attr(feature = "serde", serde(default))]
    pub args: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldDecl {
    pub name: String,
    pub init: Expr,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemberDecl {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub placement: Placement,
    #[cfg_attr(feature = "serde", serde(default))]
    pub kind: MemberKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub fn_kind: FnKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub params: Vec<String>,
    pub body: Vec<Stmt>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Placement {
    Static,
    #[default]
    Instance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum MemberKind {
    #[default]
    Method,
    Getter,
    Setter,
}

impl std::fmt::Display for MemberKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MemberKind::Method => write!(f, "method"),
            MemberKind::Getter => write!(f, "getter"),
            MemberKind::Setter => write!(f, "setter"),
        }
    }
}
