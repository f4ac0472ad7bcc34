// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Pattern-match compilation.
//!
//! `match v { ... }` lowers to a labeled block:
//!
//! ```text
//! $match1: {
//!   const $subject2 = v;
//!   if (Array.isArray($subject2) && $subject2.length >= 1) {
//!     const x = $subject2[0];
//!     const rest = $subject2.slice(1);
//!     ...case body...
//!     break $match1;
//!   }
//!   ...next case...
//! }
//! ```
//!
//! Each case compiles to a [`Plan`]: a flat list of bind/guard steps in
//! evaluation order. A pattern's own guard comes before the bindings of its
//! children; siblings are planned left to right. The plan is rendered by
//! folding from the last step outwards around the case body, so a guard
//! wraps everything after it.
//!
//! Cases are independent guarded blocks. The first one whose guards all
//! pass runs and leaves the match with `break`. A case body that declares a
//! name its pattern binds is nested one block deeper, so the declaration
//! shadows the binding.

use std::collections::HashSet;

use log::trace;
use tern_ast::{ArrayPattern, Expr, MatchCase, Pattern, Span};
use tern_js as js;

use crate::error::{LowerError, LowerErrorKind};
use crate::literal::lower_literal;
use crate::lower::Lowerer;
use crate::names::binding_name;

/// One step of a compiled case.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Step {
    /// `const name = value;`
    Bind { name: String, value: js::Expr },
    /// Everything after this step runs only if `test` holds.
    Guard(js::Expr),
    /// Throws unless the `unapply` result bound to `name` is null or an
    /// array.
    CheckExtracted { name: String, extractor: String },
}

#[derive(Debug, Default)]
pub(crate) struct Plan {
    pub steps: Vec<Step>,
}

impl Plan {
    fn bind(&mut self, name: String, value: js::Expr) {
        self.steps.push(Step::Bind { name, value });
    }

    fn guard(&mut self, test: js::Expr) {
        self.steps.push(Step::Guard(test));
    }

    /// Render around `body`. Adjacent guards collapse into one `&&` test.
    pub(crate) fn render(self, body: Vec<js::Stmt>) -> Vec<js::Stmt> {
        let mut steps: Vec<Step> = Vec::with_capacity(self.steps.len());
        for step in self.steps {
            match step {
                Step::Guard(next) => match steps.last_mut() {
                    Some(Step::Guard(prev)) => {
                        let prev_test = std::mem::replace(prev, js::Expr::undefined());
                        *prev = js::Expr::binary(js::BinaryOp::And, prev_test, next);
                    }
                    _ => steps.push(Step::Guard(next)),
                },
                other => steps.push(other),
            }
        }

        steps.into_iter().rev().fold(body, |inner, step| match step {
            Step::Bind { name, value } => prepend(js::Stmt::const_(name, value), inner),
            Step::Guard(test) => vec![js::Stmt::if_(test, inner)],
            Step::CheckExtracted { name, extractor } => {
                prepend(extractor_check(&name, &extractor), inner)
            }
        })
    }
}

fn prepend(stmt: js::Stmt, rest: Vec<js::Stmt>) -> Vec<js::Stmt> {
    let mut out = Vec::with_capacity(rest.len() + 1);
    out.push(stmt);
    out.extend(rest);
    out
}

/// `if (!(r === null || Array.isArray(r))) throw new TypeError(...)`
fn extractor_check(name: &str, extractor: &str) -> js::Stmt {
    let ok = js::Expr::binary(
        js::BinaryOp::Or,
        js::Expr::binary(js::BinaryOp::StrictEq, js::Expr::ident(name), js::Expr::null()),
        is_array(js::Expr::ident(name)),
    );
    js::Stmt::if_(
        js::Expr::not(ok),
        vec![js::Stmt::Throw(js::Expr::new_(
            js::Expr::ident("TypeError"),
            vec![js::Expr::str(format!(
                "{extractor}.unapply must return null or an array"
            ))],
        ))],
    )
}

/// The JavaScript names `pattern` binds. A name bound twice is an error.
fn distinct_bindings(pattern: &Pattern, span: Span) -> Result<Vec<String>, LowerError> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for name in pattern.bound_names() {
        if !seen.insert(name) {
            return Err(LowerError::new(
                LowerErrorKind::DuplicateBinding {
                    name: name.to_string(),
                },
                span,
            ));
        }
        out.push(binding_name(name));
    }
    Ok(out)
}

fn declares_any(stmts: &[js::Stmt], names: &[String]) -> bool {
    stmts
        .iter()
        .any(|s| matches!(s, js::Stmt::Var { name, .. } if names.contains(name)))
}

fn is_array(value: js::Expr) -> js::Expr {
    js::Expr::call(
        js::Expr::member(js::Expr::ident("Array"), "isArray"),
        vec![value],
    )
}

fn length(value: js::Expr) -> js::Expr {
    js::Expr::member(value, "length")
}

fn strict_eq(left: js::Expr, right: js::Expr) -> js::Expr {
    js::Expr::binary(js::BinaryOp::StrictEq, left, right)
}

impl Lowerer<'_> {
    /// Lower `match value { cases }`. `value` is evaluated exactly once.
    pub(crate) fn lower_match(
        &mut self,
        value: &Expr,
        cases: &[MatchCase],
        span: Span,
    ) -> Result<js::Stmt, LowerError> {
        let value = self.lower_expr(value)?;
        let label = self.fresh("match");
        let subject = self.fresh("subject");

        let mut body = vec![js::Stmt::const_(subject.clone(), value)];
        let mut breaks = false;
        for (i, case) in cases.iter().enumerate() {
            let mut plan = Plan::default();
            let mut bound = Vec::new();
            if let Some(pattern) = &case.pattern {
                bound = distinct_bindings(pattern, span)?;
                self.plan_pattern(pattern, js::Expr::ident(subject.clone()), &mut plan)?;
            }

            let mut case_body = self.lower_block(&case.body)?;
            let is_last = i + 1 == cases.len();
            if !is_last && !js::ends_terminal(&case_body) {
                case_body.push(js::Stmt::Break(Some(label.clone())));
                breaks = true;
            }
            if declares_any(&case_body, &bound) {
                case_body = vec![js::Stmt::Block(case_body)];
            }

            // Declarations at the top of a case get their own block so they
            // stay out of sibling cases.
            let rendered = plan.render(case_body);
            if rendered.iter().any(|s| matches!(s, js::Stmt::Var { .. })) {
                body.push(js::Stmt::Block(rendered));
            } else {
                body.extend(rendered);
            }
        }

        trace!(
            "compiled match `{label}` with {} cases (subject `{subject}`)",
            cases.len()
        );
        Ok(if breaks {
            js::Stmt::Labeled { label, body }
        } else {
            js::Stmt::Block(body)
        })
    }

    /// Append the steps that test `value` against `pattern` and bind its
    /// names. `value` must be free of side effects; it may be read more
    /// than once.
    pub(crate) fn plan_pattern(
        &mut self,
        pattern: &Pattern,
        value: js::Expr,
        plan: &mut Plan,
    ) -> Result<(), LowerError> {
        match pattern {
            Pattern::Literal(lit) => plan.guard(strict_eq(value, lower_literal(lit))),
            Pattern::Bind(name) => plan.bind(binding_name(name), value),
            Pattern::Array(ArrayPattern::Regular { items }) => {
                plan.guard(is_array(value.clone()));
                plan.guard(strict_eq(length(value.clone()), js::Expr::int(items.len() as i64)));
                self.plan_items(items, &value, plan)?;
            }
            Pattern::Array(ArrayPattern::Spread { items, rest }) => {
                plan.guard(is_array(value.clone()));
                plan.guard(js::Expr::binary(
                    js::BinaryOp::Ge,
                    length(value.clone()),
                    js::Expr::int(items.len() as i64),
                ));
                self.plan_items(items, &value, plan)?;
                let tail = js::Expr::call(
                    js::Expr::member(value, "slice"),
                    vec![js::Expr::int(items.len() as i64)],
                );
                self.plan_projection(rest, tail, "rest", plan)?;
            }
            Pattern::Object(fields) => {
                plan.guard(strict_eq(
                    js::Expr::Unary {
                        op: js::UnaryOp::Typeof,
                        operand: Box::new(value.clone()),
                    },
                    js::Expr::str("object"),
                ));
                plan.guard(js::Expr::binary(
                    js::BinaryOp::StrictNe,
                    value.clone(),
                    js::Expr::null(),
                ));
                for (name, sub) in fields {
                    let field = js::Expr::member(value.clone(), name.clone());
                    self.plan_projection(sub, field, "field", plan)?;
                }
            }
            Pattern::Extractor {
                extractor,
                patterns,
            } => {
                let extractor = self.lower_expr(extractor)?;
                let extractor_text = js::print_expr(&extractor);
                let result = self.fresh("extracted");
                plan.bind(
                    result.clone(),
                    js::Expr::call(js::Expr::member(extractor, "unapply"), vec![value]),
                );
                plan.steps.push(Step::CheckExtracted {
                    name: result.clone(),
                    extractor: extractor_text,
                });
                plan.guard(js::Expr::binary(
                    js::BinaryOp::StrictNe,
                    js::Expr::ident(result.clone()),
                    js::Expr::null(),
                ));
                self.plan_items(patterns, &js::Expr::ident(result), plan)?;
            }
        }
        Ok(())
    }

    fn plan_items(
        &mut self,
        items: &[Pattern],
        array: &js::Expr,
        plan: &mut Plan,
    ) -> Result<(), LowerError> {
        for (i, item) in items.iter().enumerate() {
            let element = js::Expr::index(array.clone(), js::Expr::int(i as i64));
            self.plan_projection(item, element, "elem", plan)?;
        }
        Ok(())
    }

    /// Match a sub-pattern against a projection of the parent value. The
    /// projection is read into a fresh temporary unless the sub-pattern
    /// only binds it or compares it once.
    fn plan_projection(
        &mut self,
        pattern: &Pattern,
        projection: js::Expr,
        hint: &str,
        plan: &mut Plan,
    ) -> Result<(), LowerError> {
        match pattern {
            Pattern::Bind(name) => plan.bind(binding_name(name), projection),
            Pattern::Literal(lit) => plan.guard(strict_eq(projection, lower_literal(lit))),
            _ => {
                let temp = self.fresh(hint);
                plan.bind(temp.clone(), projection);
                self.plan_pattern(pattern, js::Expr::ident(temp), plan)?;
            }
        }
        Ok(())
    }
}
