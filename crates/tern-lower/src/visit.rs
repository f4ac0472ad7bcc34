// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Read-only searches over the Tern AST.

use tern_ast::{ArrayPattern, Else, Expr, ExprKind, IfStmt, Pattern, Stmt, StmtKind};

/// Whether any expression in `stmts` satisfies `pred`. Nested function
/// expressions are not entered: they are their own `await`/`yield` scope.
pub(crate) fn block_any(stmts: &[Stmt], pred: &dyn Fn(&ExprKind) -> bool) -> bool {
    stmts.iter().any(|s| stmt_any(s, pred))
}

pub(crate) fn contains_await(stmts: &[Stmt]) -> bool {
    block_any(stmts, &|kind| matches!(kind, ExprKind::Await(_)))
}

pub(crate) fn contains_yield(stmts: &[Stmt]) -> bool {
    block_any(stmts, &|kind| matches!(kind, ExprKind::Yield { .. }))
}

fn stmt_any(stmt: &Stmt, pred: &dyn Fn(&ExprKind) -> bool) -> bool {
    match &stmt.kind {
        StmtKind::Expr(e) => expr_any(e, pred),
        StmtKind::Let { init, .. } => expr_any(init, pred),
        StmtKind::Assign { value, .. } => expr_any(value, pred),
        StmtKind::Assert { condition, .. } => expr_any(condition, pred),
        StmtKind::Foreach { iterable, body, .. } => {
            expr_any(iterable, pred) || block_any(body, pred)
        }
        StmtKind::While { condition, body } | StmtKind::Until { condition, body } => {
            expr_any(condition, pred) || block_any(body, pred)
        }
        StmtKind::For { from, to, body, .. } => {
            expr_any(from, pred) || expr_any(to, pred) || block_any(body, pred)
        }
        StmtKind::Repeat { count, body } => expr_any(count, pred) || block_any(body, pred),
        StmtKind::If(if_stmt) => if_any(if_stmt, pred),
        StmtKind::Match { value, cases } => {
            expr_any(value, pred)
                || cases.iter().any(|case| {
                    case.pattern.as_ref().is_some_and(|p| pattern_any(p, pred))
                        || block_any(&case.body, pred)
                })
        }
        StmtKind::Return(value) => value.as_ref().is_some_and(|v| expr_any(v, pred)),
    }
}

fn if_any(if_stmt: &IfStmt, pred: &dyn Fn(&ExprKind) -> bool) -> bool {
    expr_any(&if_stmt.condition, pred)
        || block_any(&if_stmt.then_block, pred)
        || match if_stmt.alternate.as_deref() {
            Some(Else::Block(block)) => block_any(block, pred),
            Some(Else::ElseIf(next)) => if_any(next, pred),
            None => false,
        }
}

fn pattern_any(pattern: &Pattern, pred: &dyn Fn(&ExprKind) -> bool) -> bool {
    match pattern {
        Pattern::Literal(_) | Pattern::Bind(_) => false,
        Pattern::Array(ArrayPattern::Regular { items }) => {
            items.iter().any(|p| pattern_any(p, pred))
        }
        Pattern::Array(ArrayPattern::Spread { items, rest }) => {
            items.iter().any(|p| pattern_any(p, pred)) || pattern_any(rest, pred)
        }
        Pattern::Object(fields) => fields.iter().any(|(_, p)| pattern_any(p, pred)),
        Pattern::Extractor { extractor, patterns } => {
            expr_any(extractor, pred) || patterns.iter().any(|p| pattern_any(p, pred))
        }
    }
}

fn expr_any(expr: &Expr, pred: &dyn Fn(&ExprKind) -> bool) -> bool {
    if pred(&expr.kind) {
        return true;
    }
    let all = |exprs: &[Expr]| exprs.iter().any(|e| expr_any(e, pred));
    match &expr.kind {
        ExprKind::If {
            condition,
            then_block,
            else_block,
        } => {
            expr_any(condition, pred)
                || block_any(then_block, pred)
                || else_block.as_deref().is_some_and(|b| block_any(b, pred))
        }
        ExprKind::Pipe { value, func } => expr_any(value, pred) || expr_any(func, pred),
        ExprKind::Await(inner) => expr_any(inner, pred),
        ExprKind::Yield { value, .. } => value.as_deref().is_some_and(|v| expr_any(v, pred)),
        ExprKind::Binary { left, right, .. } => expr_any(left, pred) || expr_any(right, pred),
        ExprKind::Unary { operand, .. } => expr_any(operand, pred),
        ExprKind::Call { callee, args } => expr_any(callee, pred) || all(args),
        ExprKind::MethodCall { object, args, .. } => expr_any(object, pred) || all(args),
        ExprKind::At { object, index } => expr_any(object, pred) || expr_any(index, pred),
        ExprKind::AtPut {
            object,
            index,
            value,
        } => expr_any(object, pred) || expr_any(index, pred) || expr_any(value, pred),
        ExprKind::Get { object, .. } => expr_any(object, pred),
        ExprKind::Update { object, value, .. } => {
            expr_any(object, pred) || expr_any(value, pred)
        }
        ExprKind::New { class, args } => expr_any(class, pred) || all(args),
        ExprKind::Super { args, .. } => all(args),
        ExprKind::Array(items) => all(items),
        ExprKind::Object { prototype, fields } => {
            prototype.as_deref().is_some_and(|p| expr_any(p, pred))
                || fields.iter().any(|f| expr_any(&f.value, pred))
        }
        ExprKind::Variable(_) | ExprKind::Literal(_) | ExprKind::Function(_) => false,
    }
}
