// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! Tern AST construction helpers shared by the integration tests.

#![allow(dead_code)]

use tern_ast::*;
use tern_lower::{compile, LowerOptions};

// ── Expressions ─────────────────────────────────────────────

pub fn e(kind: ExprKind) -> Expr {
    Expr::new(kind, Span::default())
}

pub fn var(name: &str) -> Expr {
    e(ExprKind::Variable(name.to_string()))
}

pub fn int(n: i64) -> Expr {
    e(ExprKind::Literal(Literal::Integer(n)))
}

pub fn string(s: &str) -> Expr {
    e(ExprKind::Literal(Literal::String(s.to_string())))
}

pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Expr {
    e(ExprKind::Binary {
        op,
        left: Box::new(left),
        right: Box::new(right),
    })
}

pub fn call(callee: Expr, args: Vec<Expr>) -> Expr {
    e(ExprKind::Call {
        callee: Box::new(callee),
        args,
    })
}

pub fn method(object: Expr, name: &str, args: Vec<Expr>) -> Expr {
    e(ExprKind::MethodCall {
        object: Box::new(object),
        method: name.to_string(),
        args,
    })
}

pub fn get(object: Expr, field: &str) -> Expr {
    e(ExprKind::Get {
        object: Box::new(object),
        field: field.to_string(),
    })
}

pub fn array(items: Vec<Expr>) -> Expr {
    e(ExprKind::Array(items))
}

pub fn object(fields: &[(&str, Expr)]) -> Expr {
    e(ExprKind::Object {
        prototype: None,
        fields: fields
            .iter()
            .map(|(name, value)| ObjectField {
                name: name.to_string(),
                value: value.clone(),
            })
            .collect(),
    })
}

pub fn new(class: &str, args: Vec<Expr>) -> Expr {
    e(ExprKind::New {
        class: Box::new(var(class)),
        args,
    })
}

pub fn lambda(kind: FnKind, params: &[&str], body: Vec<Stmt>) -> Expr {
    e(ExprKind::Function(FunctionExpr {
        kind,
        params: params.iter().map(|p| p.to_string()).collect(),
        body,
    }))
}

// ── Statements ──────────────────────────────────────────────

pub fn s(kind: StmtKind) -> Stmt {
    Stmt::new(kind, Span::default())
}

pub fn expr_stmt(expr: Expr) -> Stmt {
    s(StmtKind::Expr(expr))
}

pub fn let_(name: &str, init: Expr) -> Stmt {
    s(StmtKind::Let {
        name: name.to_string(),
        mutable: false,
        init,
    })
}

pub fn if_else(condition: Expr, then_block: Vec<Stmt>, else_block: Vec<Stmt>) -> Stmt {
    s(StmtKind::If(IfStmt {
        condition,
        then_block,
        alternate: Some(Box::new(Else::Block(else_block))),
    }))
}

pub fn match_(value: Expr, cases: Vec<(Option<Pattern>, Vec<Stmt>)>) -> Stmt {
    s(StmtKind::Match {
        value,
        cases: cases
            .into_iter()
            .map(|(pattern, body)| MatchCase { pattern, body })
            .collect(),
    })
}

// ── Patterns ────────────────────────────────────────────────

pub fn bind(name: &str) -> Pattern {
    Pattern::Bind(name.to_string())
}

pub fn lit(n: i64) -> Pattern {
    Pattern::Literal(Literal::Integer(n))
}

pub fn spread(items: Vec<Pattern>, rest: Pattern) -> Pattern {
    Pattern::Array(ArrayPattern::Spread {
        items,
        rest: Box::new(rest),
    })
}

pub fn extract(extractor: &str, patterns: Vec<Pattern>) -> Pattern {
    Pattern::Extractor {
        extractor: var(extractor),
        patterns,
    }
}

pub fn obj_pat(fields: &[(&str, Pattern)]) -> Pattern {
    Pattern::Object(
        fields
            .iter()
            .map(|(name, p)| (name.to_string(), p.clone()))
            .collect(),
    )
}

// ── Declarations ────────────────────────────────────────────

pub fn func(name: &str, params: &[&str], body: Vec<Stmt>) -> Decl {
    func_kind(name, FnKind::Plain, params, body)
}

pub fn func_kind(name: &str, kind: FnKind, params: &[&str], body: Vec<Stmt>) -> Decl {
    Decl::new(
        DeclKind::Function(FnDecl {
            name: name.to_string(),
            kind,
            params: params.iter().map(|p| p.to_string()).collect(),
            body,
            is_export: false,
        }),
        Span::default(),
    )
}

pub fn data_class(name: &str, params: &[&str]) -> Decl {
    Decl::new(
        DeclKind::Class(ClassDecl {
            name: name.to_string(),
            kind: ClassKind::Data,
            params: params.iter().map(|p| p.to_string()).collect(),
            superclass: None,
            fields: vec![],
            constructor: vec![],
            members: vec![],
            receiver: "self".to_string(),
            is_export: false,
        }),
        Span::default(),
    )
}

pub fn top(stmt: Stmt) -> Decl {
    Decl::new(DeclKind::Stmt(stmt), Span::default())
}

pub fn module(definitions: Vec<Decl>) -> Module {
    Module { definitions }
}

/// Lower and print with default options.
pub fn js(module: &Module) -> String {
    compile(module, &LowerOptions::default(), &Default::default()).unwrap()
}

/// Lower and print without the runtime import line.
pub fn js_bare(module: &Module) -> String {
    let options = LowerOptions {
        runtime_import: false,
        ..LowerOptions::default()
    };
    compile(module, &options, &Default::default()).unwrap()
}
