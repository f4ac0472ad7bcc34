// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Operator mangling.
//!
//! Tern operators are never primitive in the output. Each one becomes a
//! call to a runtime function with a fixed name, so user code can redefine
//! an operator by shadowing that name:
//! - `a + b` → `plus(a, b)`
//! - `a ++ b` → `concat(a, b)`
//! - `-a` → `negate(a)`
//! - `xs[i]` → `at(xs, i)`, `xs[i] = v` → `atPut(xs, i, v)`

use tern_ast::{BinaryOp, Fixity, UnaryOp, UnknownOperator};

/// Runtime function for indexed reads.
pub const AT: &str = "at";
/// Runtime function for indexed writes.
pub const AT_PUT: &str = "atPut";

pub fn binary_name(op: BinaryOp) -> &'static str {
    match op {
        BinaryOp::Eq => "equals",
        BinaryOp::Ne => "notEquals",
        BinaryOp::Lt => "lessThan",
        BinaryOp::Le => "lessThanOrEqual",
        BinaryOp::Gt => "greaterThan",
        BinaryOp::Ge => "greaterThanOrEqual",
        BinaryOp::Add => "plus",
        BinaryOp::Sub => "minus",
        BinaryOp::Mul => "times",
        BinaryOp::Div => "divide",
        BinaryOp::Rem => "remainder",
        BinaryOp::Pow => "power",
        BinaryOp::Concat => "concat",
        BinaryOp::ComposeRight => "composeRight",
        BinaryOp::ComposeLeft => "composeLeft",
        BinaryOp::And => "and",
        BinaryOp::Or => "or",
    }
}

pub fn unary_name(op: UnaryOp) -> &'static str {
    match op {
        UnaryOp::Neg => "negate",
        UnaryOp::Not => "not",
    }
}

/// Resolve a raw surface token. `at` and `atPut` name the indexing
/// operators in either position.
pub fn runtime_name(token: &str, fixity: Fixity) -> Result<&'static str, UnknownOperator> {
    match (token, fixity) {
        ("at", _) => Ok(AT),
        ("atPut", _) => Ok(AT_PUT),
        (_, Fixity::Binary) => BinaryOp::from_token(token).map(binary_name),
        (_, Fixity::Unary) => UnaryOp::from_token(token).map(unary_name),
    }
}

/// Every name the runtime must export, sorted.
pub fn runtime_names() -> Vec<&'static str> {
    let mut names: Vec<_> = BinaryOp::ALL.into_iter().map(binary_name).collect();
    names.extend([unary_name(UnaryOp::Neg), unary_name(UnaryOp::Not), AT, AT_PUT]);
    names.sort_unstable();
    names
}
