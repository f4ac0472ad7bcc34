// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Expression lowering.

use tern_ast::{Expr, ExprKind, FnKind, FunctionExpr, MemberKind, Span, Stmt, StmtKind};
use tern_js as js;

use super::{Frame, Lowerer, SuperScope};
use crate::error::{LowerError, LowerErrorKind};
use crate::literal::lower_literal;
use crate::names::binding_name;
use crate::operators::{binary_name, unary_name, AT, AT_PUT};
use crate::visit::{contains_await, contains_yield};

impl Lowerer<'_> {
    pub(crate) fn lower_expr(&mut self, expr: &Expr) -> Result<js::Expr, LowerError> {
        match &expr.kind {
            ExprKind::If {
                condition,
                then_block,
                else_block,
            } => {
                let test = self.lower_expr(condition)?;
                let consequent = self.lower_branch(then_block)?;
                let alternate = match else_block {
                    Some(block) => self.lower_branch(block)?,
                    None => js::Expr::undefined(),
                };
                Ok(js::Expr::Conditional {
                    test: Box::new(test),
                    consequent: Box::new(consequent),
                    alternate: Box::new(alternate),
                })
            }
            ExprKind::Pipe { value, func } => self.lower_pipe(value, func),
            ExprKind::Await(inner) => {
                if !self.frame().can_await {
                    return Err(LowerError::new(LowerErrorKind::AwaitOutsideAsync, expr.span));
                }
                Ok(js::Expr::Await(Box::new(self.lower_expr(inner)?)))
            }
            ExprKind::Yield { value, delegate } => {
                if !self.frame().can_yield {
                    return Err(LowerError::new(
                        LowerErrorKind::YieldOutsideGenerator,
                        expr.span,
                    ));
                }
                let argument = match value {
                    Some(v) => Some(Box::new(self.lower_expr(v)?)),
                    None => None,
                };
                Ok(js::Expr::Yield {
                    argument,
                    delegate: *delegate,
                })
            }
            ExprKind::Binary { op, left, right } => {
                let left = self.lower_expr(left)?;
                let right = self.lower_expr(right)?;
                Ok(self.runtime_call(binary_name(*op), vec![left, right]))
            }
            ExprKind::Unary { op, operand } => {
                let operand = self.lower_expr(operand)?;
                Ok(self.runtime_call(unary_name(*op), vec![operand]))
            }
            ExprKind::Call { callee, args } => {
                let callee = self.lower_expr(callee)?;
                Ok(js::Expr::call(callee, self.lower_args(args)?))
            }
            ExprKind::MethodCall {
                object,
                method,
                args,
            } => {
                let object = self.lower_expr(object)?;
                Ok(js::Expr::call(
                    js::Expr::member(object, method.clone()),
                    self.lower_args(args)?,
                ))
            }
            ExprKind::At { object, index } => {
                let object = self.lower_expr(object)?;
                let index = self.lower_expr(index)?;
                Ok(self.runtime_call(AT, vec![object, index]))
            }
            ExprKind::AtPut {
                object,
                index,
                value,
            } => {
                let object = self.lower_expr(object)?;
                let index = self.lower_expr(index)?;
                let value = self.lower_expr(value)?;
                Ok(self.runtime_call(AT_PUT, vec![object, index, value]))
            }
            ExprKind::Get { object, field } => {
                Ok(js::Expr::member(self.lower_expr(object)?, field.clone()))
            }
            ExprKind::Update {
                object,
                field,
                value,
            } => {
                let target = js::Expr::member(self.lower_expr(object)?, field.clone());
                Ok(js::Expr::assign(target, self.lower_expr(value)?))
            }
            ExprKind::New { class, args } => {
                let class = self.lower_expr(class)?;
                Ok(js::Expr::new_(class, self.lower_args(args)?))
            }
            ExprKind::Super { method, args } => {
                self.lower_super(method.as_deref(), args, expr.span)
            }
            ExprKind::Variable(name) => Ok(js::Expr::ident(binding_name(name))),
            ExprKind::Literal(lit) => Ok(lower_literal(lit)),
            ExprKind::Array(items) => Ok(js::Expr::Array(self.lower_args(items)?)),
            ExprKind::Object { prototype, fields } => {
                let mut props = Vec::with_capacity(fields.len() + 1);
                if let Some(proto) = prototype {
                    props.push(js::Prop {
                        key: js::PropKey::Proto,
                        value: self.lower_expr(proto)?,
                    });
                }
                for field in fields {
                    props.push(js::Prop {
                        key: js::PropKey::Name(field.name.clone()),
                        value: self.lower_expr(&field.value)?,
                    });
                }
                Ok(js::Expr::Object(props))
            }
            ExprKind::Function(f) => self.lower_function_expr(f),
        }
    }

    pub(crate) fn lower_args(&mut self, args: &[Expr]) -> Result<Vec<js::Expr>, LowerError> {
        args.iter().map(|a| self.lower_expr(a)).collect()
    }

    /// `value |> f` is `f(value)`; `value |> f(a, b)` is `f(value, a, b)`.
    fn lower_pipe(&mut self, value: &Expr, func: &Expr) -> Result<js::Expr, LowerError> {
        let value = self.lower_expr(value)?;
        match &func.kind {
            ExprKind::Call { callee, args } => {
                let callee = self.lower_expr(callee)?;
                let mut all = vec![value];
                all.extend(self.lower_args(args)?);
                Ok(js::Expr::call(callee, all))
            }
            ExprKind::MethodCall {
                object,
                method,
                args,
            } => {
                let callee = js::Expr::member(self.lower_expr(object)?, method.clone());
                let mut all = vec![value];
                all.extend(self.lower_args(args)?);
                Ok(js::Expr::call(callee, all))
            }
            _ => {
                let callee = self.lower_expr(func)?;
                Ok(js::Expr::call(callee, vec![value]))
            }
        }
    }

    /// One branch of an `if` expression. A lone expression is used as is;
    /// anything else runs in an immediately invoked thunk.
    fn lower_branch(&mut self, block: &[Stmt]) -> Result<js::Expr, LowerError> {
        match block {
            [] => Ok(js::Expr::undefined()),
            [Stmt {
                kind: StmtKind::Expr(e),
                ..
            }] => self.lower_expr(e),
            _ => self.lower_thunk(block),
        }
    }

    /// `(() => { ... })()`, awaited when the block awaits and delegated to
    /// with `yield*` when it yields.
    fn lower_thunk(&mut self, block: &[Stmt]) -> Result<js::Expr, LowerError> {
        let outer = self.frame().clone();
        let is_async = outer.can_await && contains_await(block);
        let is_generator = outer.can_yield && contains_yield(block);
        let frame = Frame {
            // `super` is not visible inside `function*`.
            super_scope: if is_generator {
                SuperScope::None
            } else {
                outer.super_scope.clone()
            },
            ..outer
        };
        let body = self.with_frame(frame, |this| this.lower_fn_body(block))?;

        if is_generator {
            let func = js::Expr::Function(Box::new(js::Function {
                name: None,
                params: vec![],
                body,
                is_async,
                is_generator: true,
                is_export: false,
            }));
            return Ok(js::Expr::Yield {
                argument: Some(Box::new(js::Expr::call(func, vec![]))),
                delegate: true,
            });
        }
        let call = js::Expr::call(
            js::Expr::Arrow {
                params: vec![],
                body,
                is_async,
            },
            vec![],
        );
        Ok(if is_async {
            js::Expr::Await(Box::new(call))
        } else {
            call
        })
    }

    /// Plain and async functions become arrows, which keep the enclosing
    /// receiver and `super`. Generators need `function*`.
    fn lower_function_expr(&mut self, f: &FunctionExpr) -> Result<js::Expr, LowerError> {
        let params: Vec<String> = f.params.iter().map(|p| binding_name(p)).collect();
        match f.kind {
            FnKind::Plain | FnKind::Async => {
                let frame = Frame::function(f.kind, self.frame().super_scope.clone());
                let body = self.with_frame(frame, |this| this.lower_fn_body(&f.body))?;
                Ok(js::Expr::Arrow {
                    params,
                    body,
                    is_async: f.kind == FnKind::Async,
                })
            }
            FnKind::Generator => {
                let frame = Frame::function(f.kind, SuperScope::None);
                let body = self.with_frame(frame, |this| this.lower_fn_body(&f.body))?;
                Ok(js::Expr::Function(Box::new(js::Function {
                    name: None,
                    params,
                    body,
                    is_async: false,
                    is_generator: true,
                    is_export: false,
                })))
            }
        }
    }

    /// `super.m(args)` names the parent member; bare `super(args)` reaches
    /// the parent's version of the member being defined.
    fn lower_super(
        &mut self,
        method: Option<&str>,
        args: &[Expr],
        span: Span,
    ) -> Result<js::Expr, LowerError> {
        let scope = self.frame().super_scope.clone();
        let (name, kind) = match (&scope, method) {
            (SuperScope::None, _) => {
                return Err(LowerError::new(LowerErrorKind::SuperOutsideClass, span));
            }
            (SuperScope::Constructor { class }, None) => {
                return Err(LowerError::new(
                    LowerErrorKind::SuperInConstructor {
                        class: class.clone(),
                    },
                    span,
                ));
            }
            (_, Some(method)) => (method, MemberKind::Method),
            (SuperScope::Member { name, kind }, None) => (name.as_str(), *kind),
        };
        let mut args = self.lower_args(args)?;
        let target = js::Expr::SuperMember(name.to_string());
        Ok(match kind {
            MemberKind::Method => js::Expr::call(target, args),
            MemberKind::Getter => target,
            MemberKind::Setter => {
                let value = if args.is_empty() {
                    js::Expr::undefined()
                } else {
                    args.swap_remove(0)
                };
                js::Expr::assign(target, value)
            }
        })
    }
}
