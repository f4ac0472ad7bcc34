// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Tern AST → JavaScript AST.
//!
//! One [`Lowerer`] per compilation unit. It owns every piece of mutable
//! state the pass needs (fresh names, runtime functions used, the stack of
//! enclosing function frames), so units can be lowered independently.

mod expr;
mod stmt;

use std::collections::{BTreeSet, HashSet};

use log::debug;
use tern_ast::{Decl, DeclKind, FnDecl, FnKind, ImportDecl, MemberKind, Module, Stmt, StmtKind};
use tern_js as js;

use crate::error::LowerError;
use crate::names::{binding_name, NameGen};
use crate::options::LowerOptions;
use crate::returns::fix_returns;

/// What the enclosing function allows.
#[derive(Debug, Clone)]
pub(crate) struct Frame {
    pub can_await: bool,
    pub can_yield: bool,
    pub super_scope: SuperScope,
}

/// What a `super` expression refers to in the current frame.
#[derive(Debug, Clone)]
pub(crate) enum SuperScope {
    None,
    Constructor { class: String },
    Member { name: String, kind: MemberKind },
}

impl Frame {
    fn module() -> Self {
        // ES modules allow top-level await.
        Frame {
            can_await: true,
            can_yield: false,
            super_scope: SuperScope::None,
        }
    }

    pub(crate) fn function(kind: FnKind, super_scope: SuperScope) -> Self {
        Frame {
            can_await: kind == FnKind::Async,
            can_yield: kind == FnKind::Generator,
            super_scope,
        }
    }
}

pub struct Lowerer<'a> {
    options: &'a LowerOptions,
    names: NameGen,
    runtime: BTreeSet<&'static str>,
    frames: Vec<Frame>,
}

impl<'a> Lowerer<'a> {
    pub fn new(options: &'a LowerOptions) -> Self {
        Self {
            options,
            names: NameGen::new(),
            runtime: BTreeSet::new(),
            frames: vec![Frame::module()],
        }
    }

    pub fn lower_module(mut self, module: &Module) -> Result<js::Program, LowerError> {
        debug!("lowering module with {} definitions", module.definitions.len());
        let mut body = Vec::new();
        for decl in &module.definitions {
            body.push(self.lower_decl(decl)?);
        }

        if self.options.runtime_import {
            let declared = declared_names(module);
            let specifiers: Vec<_> = self
                .runtime
                .iter()
                .filter(|name| !declared.contains(**name))
                .map(|name| js::ImportSpecifier {
                    imported: name.to_string(),
                    local: None,
                })
                .collect();
            if !specifiers.is_empty() {
                debug!(
                    "importing {} runtime functions from `{}`",
                    specifiers.len(),
                    self.options.runtime_module
                );
                body.insert(
                    0,
                    js::Stmt::Import(js::Import {
                        specifiers,
                        namespace: None,
                        source: self.options.runtime_module.clone(),
                    }),
                );
            }
        }

        Ok(js::Program { body })
    }

    fn lower_decl(&mut self, decl: &Decl) -> Result<js::Stmt, LowerError> {
        match &decl.kind {
            DeclKind::Import(import) => Ok(js::Stmt::Import(lower_import(import))),
            DeclKind::Function(f) => self.lower_fn_decl(f).map(js::Stmt::Function),
            DeclKind::Class(class) => self.lower_class(class, decl.span).map(js::Stmt::Class),
            DeclKind::Stmt(stmt) => self.lower_stmt(stmt),
        }
    }

    fn lower_fn_decl(&mut self, f: &FnDecl) -> Result<js::Function, LowerError> {
        debug!("lowering function `{}`", f.name);
        let frame = Frame::function(f.kind, SuperScope::None);
        let body = self.with_frame(frame, |this| this.lower_fn_body(&f.body))?;
        Ok(js::Function {
            name: Some(binding_name(&f.name)),
            params: f.params.iter().map(|p| binding_name(p)).collect(),
            body,
            is_async: f.kind == FnKind::Async,
            is_generator: f.kind == FnKind::Generator,
            is_export: f.is_export,
        })
    }

    // --- Shared helpers ---

    /// Lower a body whose last expression is its result.
    pub(crate) fn lower_fn_body(&mut self, body: &[Stmt]) -> Result<Vec<js::Stmt>, LowerError> {
        let body = fix_returns(body.to_vec());
        self.lower_block(&body)
    }

    pub(crate) fn with_frame<T>(
        &mut self,
        frame: Frame,
        f: impl FnOnce(&mut Self) -> Result<T, LowerError>,
    ) -> Result<T, LowerError> {
        self.frames.push(frame);
        let result = f(self);
        self.frames.pop();
        result
    }

    pub(crate) fn frame(&self) -> &Frame {
        // The module frame is pushed in `new` and never popped.
        &self.frames[self.frames.len() - 1]
    }

    pub(crate) fn fresh(&mut self, hint: &str) -> String {
        self.names.fresh(hint)
    }

    /// `name(args)` against the operator runtime, recording the import.
    pub(crate) fn runtime_call(&mut self, name: &'static str, args: Vec<js::Expr>) -> js::Expr {
        self.runtime.insert(name);
        js::Expr::call(js::Expr::ident(name), args)
    }
}

fn lower_import(import: &ImportDecl) -> js::Import {
    let specifiers = import
        .names
        .iter()
        .map(|n| {
            let local = match &n.alias {
                Some(alias) => Some(binding_name(alias)),
                None if binding_name(&n.name) != n.name => Some(binding_name(&n.name)),
                None => None,
            };
            js::ImportSpecifier {
                imported: n.name.clone(),
                local,
            }
        })
        .collect();
    js::Import {
        specifiers,
        namespace: import.namespace.as_deref().map(binding_name),
        source: import.module.clone(),
    }
}

/// Module-scope names in their JavaScript spelling. A runtime function
/// with one of these names is not imported; the module's own definition
/// overrides it.
fn declared_names(module: &Module) -> HashSet<String> {
    let mut names = HashSet::new();
    for decl in &module.definitions {
        match &decl.kind {
            DeclKind::Import(import) => {
                names.extend(import.namespace.as_deref().map(binding_name));
                for n in &import.names {
                    names.insert(binding_name(n.alias.as_ref().unwrap_or(&n.name)));
                }
            }
            DeclKind::Function(f) => {
                names.insert(binding_name(&f.name));
            }
            DeclKind::Class(c) => {
                names.insert(binding_name(&c.name));
            }
            DeclKind::Stmt(Stmt {
                kind: StmtKind::Let { name, .. },
                ..
            }) => {
                names.insert(binding_name(name));
            }
            DeclKind::Stmt(_) => {}
        }
    }
    names
}
