// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Statement lowering.

use tern_ast::{Else, IfStmt, Stmt, StmtKind};
use tern_js as js;

use super::Lowerer;
use crate::error::LowerError;
use crate::names::binding_name;

impl Lowerer<'_> {
    pub(crate) fn lower_block(&mut self, stmts: &[Stmt]) -> Result<Vec<js::Stmt>, LowerError> {
        stmts.iter().map(|s| self.lower_stmt(s)).collect()
    }

    pub(crate) fn lower_stmt(&mut self, stmt: &Stmt) -> Result<js::Stmt, LowerError> {
        match &stmt.kind {
            StmtKind::Expr(e) => Ok(js::Stmt::Expr(self.lower_expr(e)?)),
            StmtKind::Let { name, mutable, init } => Ok(js::Stmt::Var {
                kind: if *mutable { js::VarKind::Let } else { js::VarKind::Const },
                name: binding_name(name),
                init: Some(self.lower_expr(init)?),
            }),
            StmtKind::Assign { name, value } => Ok(js::Stmt::Expr(js::Expr::assign(
                js::Expr::ident(binding_name(name)),
                self.lower_expr(value)?,
            ))),
            StmtKind::Assert { condition, source } => {
                let message = format!("Assertion failed: {source}");
                Ok(js::Stmt::if_(
                    js::Expr::not(self.lower_expr(condition)?),
                    vec![js::Stmt::Throw(js::Expr::new_(
                        js::Expr::ident("Error"),
                        vec![js::Expr::str(message)],
                    ))],
                ))
            }
            StmtKind::Foreach { binding, iterable, body } => Ok(js::Stmt::ForOf {
                kind: js::VarKind::Const,
                binding: binding_name(binding),
                iterable: self.lower_expr(iterable)?,
                body: self.lower_block(body)?,
            }),
            StmtKind::While { condition, body } => Ok(js::Stmt::While {
                test: self.lower_expr(condition)?,
                body: self.lower_block(body)?,
            }),
            StmtKind::Until { condition, body } => Ok(js::Stmt::While {
                test: js::Expr::not(self.lower_expr(condition)?),
                body: self.lower_block(body)?,
            }),
            StmtKind::For { binding, from, to, body } => {
                // `from` is evaluated before `to`.
                let mut prelude = Vec::new();
                let start = match self.lower_expr(from)? {
                    lit @ js::Expr::Lit(_) => lit,
                    from => {
                        let start = self.fresh("start");
                        prelude.push(js::Stmt::const_(start.clone(), from));
                        js::Expr::ident(start)
                    }
                };
                let to = self.lower_expr(to)?;
                let end = self.fresh("end");
                let body = self.lower_block(body)?;
                Ok(counted_loop(prelude, binding_name(binding), start, end, to, body))
            }
            StmtKind::Repeat { count, body } => {
                let count = self.lower_expr(count)?;
                let limit = self.fresh("count");
                let counter = self.fresh("i");
                let body = self.lower_block(body)?;
                Ok(counted_loop(Vec::new(), counter, js::Expr::int(0), limit, count, body))
            }
            StmtKind::If(if_stmt) => self.lower_if_stmt(if_stmt),
            StmtKind::Match { value, cases } => self.lower_match(value, cases, stmt.span),
            StmtKind::Return(value) => Ok(js::Stmt::Return(
                value.as_ref().map(|v| self.lower_expr(v)).transpose()?,
            )),
        }
    }

    fn lower_if_stmt(&mut self, if_stmt: &IfStmt) -> Result<js::Stmt, LowerError> {
        let test = self.lower_expr(&if_stmt.condition)?;
        let consequent = self.lower_block(&if_stmt.then_block)?;
        let alternate = match if_stmt.alternate.as_deref() {
            None => None,
            Some(Else::Block(block)) => Some(self.lower_block(block)?),
            Some(Else::ElseIf(next)) => Some(vec![self.lower_if_stmt(next)?]),
        };
        Ok(js::Stmt::If { test, consequent, alternate })
    }
}

/// `{ prelude; const end = limit; for (let counter = start; counter < end; counter++) body }`
///
/// The limit is read once, before the first iteration.
fn counted_loop(
    mut prelude: Vec<js::Stmt>,
    counter: String,
    start: js::Expr,
    end: String,
    limit: js::Expr,
    body: Vec<js::Stmt>,
) -> js::Stmt {
    let cond = js::Expr::binary(
        js::BinaryOp::Lt,
        js::Expr::ident(counter.clone()),
        js::Expr::ident(end.clone()),
    );
    prelude.push(js::Stmt::const_(end, limit));
    prelude.push(js::Stmt::For {
        init: Some(Box::new(js::Stmt::Var {
            kind: js::VarKind::Let,
            name: counter.clone(),
            init: Some(start),
        })),
        test: Some(cond),
        update: Some(js::Expr::Increment(Box::new(js::Expr::ident(counter)))),
        body,
    });
    js::Stmt::Block(prelude)
}
