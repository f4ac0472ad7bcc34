// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Class and data-type lowering.
//!
//! Constructor parameters and explicit fields live in private slots
//! (`#name`), so no two classes share storage even when slot names match.
//! Member bodies see the slots as plain names through a prelude:
//!
//! ```text
//! area() {
//!   const self = this;
//!   const w = this.#w;
//!   const h = this.#h;
//!   ...
//! }
//! ```
//!
//! Data classes also get a public getter per constructor parameter and a
//! static `unapply($value)` returning the parameters in declared order, or
//! `null` for anything that is not an instance.

use std::collections::HashSet;

use log::debug;
use tern_ast::{ClassDecl, ClassKind, FnKind, MemberDecl, MemberKind, Placement, Span};
use tern_js as js;

use crate::error::{LowerError, LowerErrorKind};
use crate::lower::{Frame, Lowerer, SuperScope};
use crate::names::binding_name;

impl Lowerer<'_> {
    pub(crate) fn lower_class(
        &mut self,
        class: &ClassDecl,
        span: Span,
    ) -> Result<js::Class, LowerError> {
        debug!(
            "lowering {} class `{}` ({} members)",
            match class.kind {
                ClassKind::Data => "data",
                ClassKind::Regular => "regular",
            },
            class.name,
            class.members.len()
        );
        let slots = storage_slots(class, span)?;
        let superclass = class
            .superclass
            .as_ref()
            .map(|s| self.lower_expr(&s.class))
            .transpose()?;

        let mut members: Vec<js::ClassMember> = slots
            .iter()
            .map(|slot| js::ClassMember::PrivateField(slot.to_string()))
            .collect();
        if let Some(ctor) = self.lower_constructor(class)? {
            members.push(ctor);
        }

        let user_defined: HashSet<(&str, bool)> = class
            .members
            .iter()
            .map(|m| (m.name.as_str(), m.placement == Placement::Static))
            .collect();

        if class.kind == ClassKind::Data {
            for param in &class.params {
                if !user_defined.contains(&(param.as_str(), false)) {
                    members.push(getter(param));
                }
            }
        }

        for member in &class.members {
            let method = self.lower_member(class, &slots, member)?;
            members.push(js::ClassMember::Method(method));
        }

        if class.kind == ClassKind::Data && !user_defined.contains(&("unapply", true)) {
            members.push(unapply(class));
        }

        Ok(js::Class {
            name: binding_name(&class.name),
            superclass,
            members,
            is_export: class.is_export,
        })
    }

    /// `super(args)`, then slot stores, then the receiver and the user's
    /// constructor statements. Omitted when it would be empty.
    fn lower_constructor(
        &mut self,
        class: &ClassDecl,
    ) -> Result<Option<js::ClassMember>, LowerError> {
        let frame = Frame::function(
            FnKind::Plain,
            SuperScope::Constructor {
                class: class.name.clone(),
            },
        );
        let body = self.with_frame(frame, |this| {
            let mut body = Vec::new();
            if let Some(superclass) = &class.superclass {
                let args = this.lower_args(&superclass.args)?;
                body.push(js::Stmt::Expr(js::Expr::SuperCall(args)));
            }
            for param in &class.params {
                body.push(store_slot(param, js::Expr::ident(binding_name(param))));
            }
            if !class.fields.is_empty() || !class.constructor.is_empty() {
                body.push(js::Stmt::const_(binding_name(&class.receiver), js::Expr::This));
            }
            // Later initializers can read earlier fields by name.
            for field in &class.fields {
                let local = binding_name(&field.name);
                body.push(js::Stmt::const_(local.clone(), this.lower_expr(&field.init)?));
                body.push(store_slot(&field.name, js::Expr::ident(local)));
            }
            body.extend(this.lower_block(&class.constructor)?);
            Ok(body)
        })?;

        if body.is_empty() && class.params.is_empty() {
            return Ok(None);
        }
        Ok(Some(js::ClassMember::Constructor {
            params: class.params.iter().map(|p| binding_name(p)).collect(),
            body,
        }))
    }

    fn lower_member(
        &mut self,
        class: &ClassDecl,
        slots: &[&str],
        member: &MemberDecl,
    ) -> Result<js::Method, LowerError> {
        let is_static = member.placement == Placement::Static;
        if is_reserved_member(&member.name, is_static) {
            return Err(LowerError::new(
                LowerErrorKind::ReservedMember {
                    class: class.name.clone(),
                    name: member.name.clone(),
                },
                member.span,
            ));
        }
        if member.kind != MemberKind::Method && member.fn_kind != FnKind::Plain {
            return Err(LowerError::new(
                LowerErrorKind::InvalidAccessor {
                    name: member.name.clone(),
                    kind: member.kind,
                },
                member.span,
            ));
        }
        let params: Vec<String> = member.params.iter().map(|p| binding_name(p)).collect();

        // Parameters shadow the receiver and slots.
        let mut body = Vec::new();
        let receiver = binding_name(&class.receiver);
        if !params.contains(&receiver) {
            body.push(js::Stmt::const_(receiver, js::Expr::This));
        }
        if !is_static {
            for slot in slots {
                let local = binding_name(slot);
                if !params.contains(&local) {
                    body.push(js::Stmt::const_(local, js::Expr::private(js::Expr::This, *slot)));
                }
            }
        }

        let frame = Frame::function(
            member.fn_kind,
            SuperScope::Member {
                name: member.name.clone(),
                kind: member.kind,
            },
        );
        let lowered = self.with_frame(frame, |this| match member.kind {
            MemberKind::Setter => this.lower_block(&member.body),
            MemberKind::Method | MemberKind::Getter => this.lower_fn_body(&member.body),
        })?;
        body.extend(lowered);

        Ok(js::Method {
            name: member.name.clone(),
            kind: match member.kind {
                MemberKind::Method => js::MethodKind::Method,
                MemberKind::Getter => js::MethodKind::Getter,
                MemberKind::Setter => js::MethodKind::Setter,
            },
            is_static,
            is_async: member.fn_kind == FnKind::Async,
            is_generator: member.fn_kind == FnKind::Generator,
            params,
            body,
        })
    }
}

fn is_reserved_member(name: &str, is_static: bool) -> bool {
    if is_static {
        name == "prototype"
    } else {
        name == "constructor"
    }
}

/// Slot names in declaration order: parameters, then fields. A name used
/// twice, or shared with the receiver, is an error. So is `constructor`,
/// which JavaScript refuses as a private name and as a getter.
fn storage_slots(class: &ClassDecl, span: Span) -> Result<Vec<&str>, LowerError> {
    let mut seen = HashSet::new();
    seen.insert(class.receiver.as_str());
    let mut slots = Vec::with_capacity(class.params.len() + class.fields.len());
    let names = class
        .params
        .iter()
        .map(String::as_str)
        .chain(class.fields.iter().map(|f| f.name.as_str()));
    for name in names {
        if is_reserved_member(name, false) {
            return Err(LowerError::new(
                LowerErrorKind::ReservedMember {
                    class: class.name.clone(),
                    name: name.to_string(),
                },
                span,
            ));
        }
        if !seen.insert(name) {
            return Err(LowerError::new(
                LowerErrorKind::DuplicateSlot {
                    class: class.name.clone(),
                    name: name.to_string(),
                },
                span,
            ));
        }
        slots.push(name);
    }
    Ok(slots)
}

/// `this.#slot = value;`
fn store_slot(slot: &str, value: js::Expr) -> js::Stmt {
    js::Stmt::Expr(js::Expr::assign(js::Expr::private(js::Expr::This, slot), value))
}

/// `get name() { return this.#name; }`
fn getter(name: &str) -> js::ClassMember {
    js::ClassMember::Method(js::Method {
        name: name.to_string(),
        kind: js::MethodKind::Getter,
        is_static: false,
        is_async: false,
        is_generator: false,
        params: vec![],
        body: vec![js::Stmt::Return(Some(js::Expr::private(js::Expr::This, name)))],
    })
}

/// `static unapply($value) { if ($value instanceof C) { return [...]; } return null; }`
///
/// The parameter is `$`-prefixed so it cannot capture the class name.
fn unapply(class: &ClassDecl) -> js::ClassMember {
    let value = || js::Expr::ident("$value");
    let fields = class
        .params
        .iter()
        .map(|p| js::Expr::private(value(), p.as_str()))
        .collect();
    let is_instance = js::Expr::binary(
        js::BinaryOp::InstanceOf,
        value(),
        js::Expr::ident(binding_name(&class.name)),
    );
    js::ClassMember::Method(js::Method {
        name: "unapply".to_string(),
        kind: js::MethodKind::Method,
        is_static: true,
        is_async: false,
        is_generator: false,
        params: vec!["$value".to_string()],
        body: vec![
            js::Stmt::if_(is_instance, vec![js::Stmt::Return(Some(js::Expr::Array(fields)))]),
            js::Stmt::Return(Some(js::Expr::null())),
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::LowerOptions;
    use tern_ast::{Expr, ExprKind, FieldDecl, Literal, Stmt, StmtKind, Superclass};

    fn var(name: &str) -> Expr {
        Expr::new(ExprKind::Variable(name.into()), Span::default())
    }

    fn class(kind: ClassKind, params: &[&str]) -> ClassDecl {
        ClassDecl {
            name: "Point".into(),
            kind,
            params: params.iter().map(|p| p.to_string()).collect(),
            superclass: None,
            fields: vec![],
            constructor: vec![],
            members: vec![],
            receiver: "self".into(),
            is_export: false,
        }
    }

    fn member(name: &str, kind: MemberKind, body: Vec<Stmt>) -> MemberDecl {
        MemberDecl {
            name: name.into(),
            placement: Placement::Instance,
            kind,
            fn_kind: FnKind::Plain,
            params: vec![],
            body,
            span: Span::new(40, 52),
        }
    }

    fn lower(class: &ClassDecl) -> Result<String, LowerError> {
        let options = LowerOptions::default();
        let mut lowerer = Lowerer::new(&options);
        let class = lowerer.lower_class(class, Span::new(0, 60))?;
        Ok(js::print_program(&js::Program {
            body: vec![js::Stmt::Class(class)],
        }))
    }

    #[test]
    fn data_class_gets_getters_and_unapply() {
        let mut point = class(ClassKind::Data, &["x", "y"]);
        point.fields.push(FieldDecl {
            name: "z".into(),
            init: Expr::new(ExprKind::Literal(Literal::Integer(0)), Span::default()),
        });
        let out = lower(&point).unwrap();
        assert_eq!(
            out,
            concat!(
                "class Point {\n",
                "  #x;\n",
                "  #y;\n",
                "  #z;\n",
                "  constructor(x, y) {\n",
                "    this.#x = x;\n",
                "    this.#y = y;\n",
                "    const self = this;\n",
                "    const z = 0;\n",
                "    this.#z = z;\n",
                "  }\n",
                "  get x() {\n",
                "    return this.#x;\n",
                "  }\n",
                "  get y() {\n",
                "    return this.#y;\n",
                "  }\n",
                "  static unapply($value) {\n",
                "    if ($value instanceof Point) {\n",
                "      return [$value.#x, $value.#y];\n",
                "    }\n",
                "    return null;\n",
                "  }\n",
                "}\n",
            )
        );
        assert!(!out.contains("get z()"));
    }

    #[test]
    fn regular_class_has_no_getters_or_unapply() {
        let out = lower(&class(ClassKind::Regular, &["x"])).unwrap();
        assert!(!out.contains("get x()"));
        assert!(!out.contains("unapply"));
        assert!(out.contains("#x;"));
    }

    #[test]
    fn members_unpack_slots_and_receiver() {
        let mut point = class(ClassKind::Regular, &["x", "y"]);
        point.members.push(member(
            "sum",
            MemberKind::Method,
            vec![Stmt::new(StmtKind::Expr(var("x")), Span::default())],
        ));
        let out = lower(&point).unwrap();
        assert!(out.contains(concat!(
            "  sum() {\n",
            "    const self = this;\n",
            "    const x = this.#x;\n",
            "    const y = this.#y;\n",
            "    return x;\n",
            "  }\n",
        )));
    }

    #[test]
    fn setters_are_not_tail_normalized_and_params_shadow_slots() {
        let mut point = class(ClassKind::Regular, &["x"]);
        let mut setter = member(
            "x",
            MemberKind::Setter,
            vec![Stmt::new(StmtKind::Expr(var("x")), Span::default())],
        );
        setter.params = vec!["x".into()];
        point.members.push(setter);
        let out = lower(&point).unwrap();
        assert!(out.contains("  set x(x) {\n    const self = this;\n    x;\n  }\n"));
    }

    #[test]
    fn static_members_only_bind_receiver() {
        let mut point = class(ClassKind::Regular, &["x"]);
        let mut origin = member("origin", MemberKind::Method, vec![]);
        origin.placement = Placement::Static;
        point.members.push(origin);
        let out = lower(&point).unwrap();
        assert!(out.contains("  static origin() {\n    const self = this;\n  }\n"));
    }

    #[test]
    fn superclass_call_comes_first() {
        let mut point = class(ClassKind::Data, &["x"]);
        point.superclass = Some(Superclass {
            class: var("Shape"),
            args: vec![var("x")],
        });
        let out = lower(&point).unwrap();
        assert!(out.starts_with("class Point extends Shape {\n"));
        assert!(out.contains("  constructor(x) {\n    super(x);\n    this.#x = x;\n  }\n"));
    }

    #[test]
    fn duplicate_slots_are_rejected() {
        let mut point = class(ClassKind::Data, &["x"]);
        point.fields.push(FieldDecl { name: "x".into(), init: var("y") });
        let err = lower(&point).unwrap_err();
        assert_eq!(
            err.kind,
            LowerErrorKind::DuplicateSlot { class: "Point".into(), name: "x".into() }
        );
        assert_eq!(err.span, Span::new(0, 60));
    }

    #[test]
    fn members_named_like_class_internals_are_rejected() {
        let mut point = class(ClassKind::Regular, &["x"]);
        point.members.push(member("constructor", MemberKind::Method, vec![]));
        let err = lower(&point).unwrap_err();
        assert_eq!(
            err.kind,
            LowerErrorKind::ReservedMember { class: "Point".into(), name: "constructor".into() }
        );
        assert_eq!(err.span, Span::new(40, 52));

        let mut point = class(ClassKind::Regular, &[]);
        let mut prototype = member("prototype", MemberKind::Method, vec![]);
        prototype.placement = Placement::Static;
        point.members.push(prototype);
        assert!(matches!(
            lower(&point).unwrap_err().kind,
            LowerErrorKind::ReservedMember { .. }
        ));

        // Static `constructor` and instance `prototype` are ordinary names.
        let mut point = class(ClassKind::Regular, &[]);
        let mut make = member("constructor", MemberKind::Method, vec![]);
        make.placement = Placement::Static;
        point.members.push(make);
        point.members.push(member("prototype", MemberKind::Getter, vec![]));
        assert!(lower(&point).is_ok());
    }

    #[test]
    fn constructor_parameter_is_rejected() {
        let point = class(ClassKind::Data, &["constructor"]);
        let err = lower(&point).unwrap_err();
        assert_eq!(
            err.kind,
            LowerErrorKind::ReservedMember { class: "Point".into(), name: "constructor".into() }
        );
        assert_eq!(err.span, Span::new(0, 60));
    }

    #[test]
    fn unapply_parameter_cannot_capture_class_name() {
        let mut object = class(ClassKind::Data, &["x"]);
        object.name = "object".into();
        let out = lower(&object).unwrap();
        assert!(out.contains("    if ($value instanceof object) {\n"), "{out}");
        assert!(out.contains("      return [$value.#x];\n"), "{out}");
    }

    #[test]
    fn async_getter_is_rejected() {
        let mut point = class(ClassKind::Regular, &[]);
        let mut g = member("size", MemberKind::Getter, vec![]);
        g.fn_kind = FnKind::Async;
        point.members.push(g);
        let err = lower(&point).unwrap_err();
        assert!(matches!(err.kind, LowerErrorKind::InvalidAccessor { .. }));
        assert_eq!(err.span, Span::new(40, 52));
    }

    #[test]
    fn bare_super_in_constructor_is_rejected() {
        let mut point = class(ClassKind::Regular, &[]);
        point.constructor.push(Stmt::new(
            StmtKind::Expr(Expr::new(
                ExprKind::Super { method: None, args: vec![] },
                Span::new(7, 14),
            )),
            Span::default(),
        ));
        let err = lower(&point).unwrap_err();
        assert_eq!(err.kind, LowerErrorKind::SuperInConstructor { class: "Point".into() });
        assert_eq!(err.span, Span::new(7, 14));
    }

    #[test]
    fn bare_super_in_method_calls_parent_member() {
        let mut point = class(ClassKind::Regular, &[]);
        point.members.push(member(
            "describe",
            MemberKind::Method,
            vec![Stmt::new(
                StmtKind::Expr(Expr::new(
                    ExprKind::Super { method: None, args: vec![var("self")] },
                    Span::default(),
                )),
                Span::default(),
            )],
        ));
        let out = lower(&point).unwrap();
        assert!(out.contains("return super.describe(self);"));
    }

    #[test]
    fn user_unapply_wins() {
        let mut point = class(ClassKind::Data, &["x"]);
        let mut custom = member("unapply", MemberKind::Method, vec![]);
        custom.placement = Placement::Static;
        custom.params = vec!["o".into()];
        point.members.push(custom);
        let out = lower(&point).unwrap();
        assert_eq!(out.matches("unapply").count(), 1);
        assert!(out.contains("static unapply(o)"));
    }
}
