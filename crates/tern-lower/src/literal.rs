// SPDX-License-Identifier: (MIT OR Apache-2.0)

use tern_ast::Literal;
use tern_js as js;

/// Scalar literal to JavaScript literal.
pub fn lower_literal(lit: &Literal) -> js::Expr {
    js::Expr::Lit(lower_lit(lit))
}

pub(crate) fn lower_lit(lit: &Literal) -> js::Lit {
    match lit {
        Literal::String(s) => js::Lit::Str(s.clone()),
        Literal::Integer(n) => js::Lit::Int(*n),
        Literal::Decimal(f) => js::Lit::Float(*f),
        Literal::Boolean(b) => js::Lit::Bool(*b),
    }
}
