// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Tail-position normalization.
//!
//! A Tern block's value is its last expression statement. Before lowering,
//! function-like bodies are rewritten so that statement is an explicit
//! `return`, following conditionals and matches into every branch.

use tern_ast::{Else, IfStmt, Stmt, StmtKind};

/// Rewrite the tail of `stmts` so every terminal expression statement
/// returns its value. Idempotent.
pub fn fix_returns(mut stmts: Vec<Stmt>) -> Vec<Stmt> {
    fix_tail(&mut stmts);
    stmts
}

fn fix_tail(stmts: &mut [Stmt]) {
    let Some(last) = stmts.last_mut() else {
        return;
    };
    match &mut last.kind {
        StmtKind::Expr(expr) => {
            let expr = expr.clone();
            last.kind = StmtKind::Return(Some(expr));
        }
        StmtKind::If(if_stmt) => fix_if(if_stmt),
        StmtKind::Match { cases, .. } => {
            for case in cases {
                fix_tail(&mut case.body);
            }
        }
        // No value to produce.
        StmtKind::Let { .. }
        | StmtKind::Assign { .. }
        | StmtKind::Assert { .. }
        | StmtKind::Foreach { .. }
        | StmtKind::While { .. }
        | StmtKind::Until { .. }
        | StmtKind::For { .. }
        | StmtKind::Repeat { .. }
        | StmtKind::Return(_) => {}
    }
}

fn fix_if(if_stmt: &mut IfStmt) {
    fix_tail(&mut if_stmt.then_block);
    match if_stmt.alternate.as_deref_mut() {
        Some(Else::Block(block)) => fix_tail(block),
        Some(Else::ElseIf(next)) => fix_if(next),
        None => {}
    }
}
