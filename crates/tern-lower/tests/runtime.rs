// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! Execute lowered programs with `node` and check what they print.
//! Each test is skipped when `node` is not on PATH.

mod common;

use std::path::Path;
use std::process::Command;

use common::*;
use tern_ast::*;
use tern_lower::{compile, LowerOptions};

struct Run {
    stdout: String,
    stderr: String,
    success: bool,
}

fn node_available() -> bool {
    Command::new("node")
        .arg("--version")
        .output()
        .map(|out| out.status.success())
        .unwrap_or(false)
}

/// Lower `module`, write it next to the test runtime, and run it.
fn run(module: &Module) -> Option<Run> {
    if !node_available() {
        eprintln!("node not found; skipping");
        return None;
    }
    let dir = tempfile::tempdir().unwrap();
    let runtime = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("runtime.mjs");
    std::fs::copy(&runtime, dir.path().join("runtime.mjs")).unwrap();

    let options = LowerOptions {
        runtime_module: "./runtime.mjs".to_string(),
        ..LowerOptions::default()
    };
    let source = compile(module, &options, &Default::default()).unwrap();
    let main = dir.path().join("main.mjs");
    std::fs::write(&main, &source).unwrap();

    let out = Command::new("node").arg(&main).output().unwrap();
    let run = Run {
        stdout: String::from_utf8_lossy(&out.stdout).to_string(),
        stderr: String::from_utf8_lossy(&out.stderr).to_string(),
        success: out.status.success(),
    };
    assert!(
        run.success || !run.stderr.contains("SyntaxError"),
        "generated code does not parse:\n{source}\n{}",
        run.stderr
    );
    Some(run)
}

fn stdout_of(module: &Module) -> Option<String> {
    let run = run(module)?;
    assert!(run.success, "program failed:\n{}", run.stderr);
    Some(run.stdout)
}

fn log(args: Vec<Expr>) -> Stmt {
    expr_stmt(method(var("console"), "log", args))
}

fn json(value: Expr) -> Expr {
    method(var("JSON"), "stringify", vec![value])
}

fn boolean(b: bool) -> Expr {
    e(ExprKind::Literal(Literal::Boolean(b)))
}

fn class_decl(name: &str, kind: ClassKind, params: &[&str]) -> ClassDecl {
    ClassDecl {
        name: name.to_string(),
        kind,
        params: params.iter().map(|p| p.to_string()).collect(),
        superclass: None,
        fields: vec![],
        constructor: vec![],
        members: vec![],
        receiver: "self".to_string(),
        is_export: false,
    }
}

fn class(decl: ClassDecl) -> Decl {
    Decl::new(DeclKind::Class(decl), Span::default())
}

// ─── Patterns ───────────────────────────────────────────────

#[test]
fn object_pattern_ignores_extra_fields() {
    let m = module(vec![top(match_(
        object(&[("x", int(1)), ("y", int(2)), ("z", int(9))]),
        vec![
            (
                Some(obj_pat(&[("x", lit(1)), ("y", bind("y"))])),
                vec![log(vec![string("match"), var("y")])],
            ),
            (None, vec![log(vec![string("none")])]),
        ],
    ))]);
    if let Some(out) = stdout_of(&m) {
        assert_eq!(out, "match 2\n");
    }
}

#[test]
fn spread_pattern_binds_the_tail() {
    let m = module(vec![
        func(
            "check",
            &["v"],
            vec![match_(
                var("v"),
                vec![
                    (
                        Some(spread(vec![bind("a"), bind("b")], bind("rest"))),
                        vec![log(vec![json(array(vec![var("a"), var("b"), var("rest")]))])],
                    ),
                    (None, vec![log(vec![string("none")])]),
                ],
            )],
        ),
        top(expr_stmt(call(var("check"), vec![array(vec![int(1), int(2), int(3), int(4)])]))),
        top(expr_stmt(call(var("check"), vec![array(vec![int(1)])]))),
    ]);
    if let Some(out) = stdout_of(&m) {
        assert_eq!(out, "[1,2,[3,4]]\nnone\n");
    }
}

#[test]
fn literal_pattern() {
    let m = module(vec![
        func(
            "classify",
            &["v"],
            vec![match_(
                var("v"),
                vec![
                    (Some(lit(42)), vec![expr_stmt(string("yes"))]),
                    (None, vec![expr_stmt(string("no"))]),
                ],
            )],
        ),
        top(log(vec![
            call(var("classify"), vec![int(42)]),
            call(var("classify"), vec![int(43)]),
        ])),
    ]);
    if let Some(out) = stdout_of(&m) {
        assert_eq!(out, "yes no\n");
    }
}

#[test]
fn extractor_pattern_on_data_class() {
    let m = module(vec![
        data_class("Point2d", &["x", "y"]),
        func(
            "show",
            &["v"],
            vec![match_(
                var("v"),
                vec![
                    (
                        Some(extract("Point2d", vec![bind("x"), bind("y")])),
                        vec![log(vec![var("x"), var("y")])],
                    ),
                    (None, vec![log(vec![string("none")])]),
                ],
            )],
        ),
        top(expr_stmt(call(var("show"), vec![new("Point2d", vec![int(1), int(2)])]))),
        top(expr_stmt(call(var("show"), vec![object(&[("x", int(1)), ("y", int(2))])]))),
    ]);
    if let Some(out) = stdout_of(&m) {
        assert_eq!(out, "1 2\nnone\n");
    }
}

#[test]
fn extractor_returning_a_number_throws() {
    let mut bad = class_decl("Bad", ClassKind::Regular, &[]);
    bad.members.push(MemberDecl {
        name: "unapply".into(),
        placement: Placement::Static,
        kind: MemberKind::Method,
        fn_kind: FnKind::Plain,
        params: vec!["v".into()],
        body: vec![expr_stmt(int(5))],
        span: Span::default(),
    });
    let m = module(vec![
        class(bad),
        top(match_(
            int(1),
            vec![
                (Some(extract("Bad", vec![])), vec![log(vec![string("hit")])]),
                (None, vec![log(vec![string("miss")])]),
            ],
        )),
    ]);
    if let Some(run) = run(&m) {
        assert!(!run.success);
        assert!(run.stdout.is_empty());
        assert!(run.stderr.contains("TypeError"), "{}", run.stderr);
        assert!(
            run.stderr.contains("Bad.unapply must return null or an array"),
            "{}",
            run.stderr
        );
    }
}

#[test]
fn first_matching_case_wins() {
    let m = module(vec![top(match_(
        int(1),
        vec![
            (Some(bind("x")), vec![log(vec![string("first")])]),
            (Some(lit(1)), vec![log(vec![string("second")])]),
        ],
    ))]);
    if let Some(out) = stdout_of(&m) {
        assert_eq!(out, "first\n");
    }
}

#[test]
fn case_body_shadows_pattern_binding() {
    let m = module(vec![top(match_(
        int(5),
        vec![
            (Some(bind("x")), vec![let_("x", int(1)), log(vec![var("x")])]),
            (None, vec![log(vec![string("none")])]),
        ],
    ))]);
    if let Some(out) = stdout_of(&m) {
        assert_eq!(out, "1\n");
    }
}

// ─── Classes ────────────────────────────────────────────────

#[test]
fn data_class_getters_and_unapply() {
    let mut point = class_decl("Point", ClassKind::Data, &["x", "y"]);
    point.fields.push(FieldDecl {
        name: "z".into(),
        init: int(3),
    });
    let m = module(vec![
        class(point),
        top(let_("p", new("Point", vec![int(1), int(2)]))),
        top(log(vec![get(var("p"), "x"), get(var("p"), "y"), get(var("p"), "z")])),
        top(log(vec![json(method(var("Point"), "unapply", vec![var("p")]))])),
        top(log(vec![json(method(var("Point"), "unapply", vec![int(7)]))])),
    ]);
    if let Some(out) = stdout_of(&m) {
        assert_eq!(out, "1 2 undefined\n[1,2]\nnull\n");
    }
}

#[test]
fn methods_read_slots_and_receiver() {
    let mut counter = class_decl("Counter", ClassKind::Regular, &["start"]);
    counter.members.push(MemberDecl {
        name: "next".into(),
        placement: Placement::Instance,
        kind: MemberKind::Method,
        fn_kind: FnKind::Plain,
        params: vec!["step".into()],
        body: vec![expr_stmt(binary(BinaryOp::Add, var("start"), var("step")))],
        span: Span::default(),
    });
    let m = module(vec![
        class(counter),
        top(log(vec![method(new("Counter", vec![int(10)]), "next", vec![int(5)])])),
    ]);
    if let Some(out) = stdout_of(&m) {
        assert_eq!(out, "15\n");
    }
}

#[test]
fn data_class_may_be_named_object() {
    let m = module(vec![
        data_class("object", &["x"]),
        top(match_(
            new("object", vec![int(3)]),
            vec![
                (Some(extract("object", vec![bind("v")])), vec![log(vec![var("v")])]),
                (None, vec![log(vec![string("none")])]),
            ],
        )),
    ]);
    if let Some(out) = stdout_of(&m) {
        assert_eq!(out, "3\n");
    }
}

// ─── Functions and operators ────────────────────────────────

#[test]
fn tail_if_returns_from_both_branches() {
    let m = module(vec![
        func(
            "pick",
            &["p"],
            vec![if_else(var("p"), vec![expr_stmt(int(1))], vec![expr_stmt(int(2))])],
        ),
        top(log(vec![binary(
            BinaryOp::Add,
            call(var("pick"), vec![boolean(true)]),
            binary(BinaryOp::Mul, call(var("pick"), vec![boolean(false)]), int(10)),
        )])),
    ]);
    if let Some(out) = stdout_of(&m) {
        assert_eq!(out, "21\n");
    }
}

#[test]
fn if_expression_thunk_and_pipe() {
    let choose = e(ExprKind::If {
        condition: Box::new(var("p")),
        then_block: vec![let_("t", int(4)), expr_stmt(binary(BinaryOp::Mul, var("t"), var("t")))],
        else_block: Some(vec![expr_stmt(int(0))]),
    });
    let m = module(vec![
        func("square_or_zero", &["p"], vec![expr_stmt(choose)]),
        func("add", &["a", "b"], vec![expr_stmt(binary(BinaryOp::Add, var("a"), var("b")))]),
        top(log(vec![e(ExprKind::Pipe {
            value: Box::new(call(var("square_or_zero"), vec![boolean(true)])),
            func: Box::new(call(var("add"), vec![int(1)])),
        })])),
    ]);
    if let Some(out) = stdout_of(&m) {
        assert_eq!(out, "17\n");
    }
}

#[test]
fn counted_loop_reads_limit_once() {
    let m = module(vec![
        top(s(StmtKind::Let {
            name: "n".into(),
            mutable: true,
            init: int(3),
        })),
        top(s(StmtKind::For {
            binding: "i".into(),
            from: int(0),
            to: var("n"),
            body: vec![
                s(StmtKind::Assign {
                    name: "n".into(),
                    value: binary(BinaryOp::Add, var("n"), int(1)),
                }),
                log(vec![var("i")]),
            ],
        })),
    ]);
    if let Some(out) = stdout_of(&m) {
        assert_eq!(out, "0\n1\n2\n");
    }
}

#[test]
fn strict_mode_names_and_object_receivers_parse() {
    let m = module(vec![
        top(let_("public", int(1))),
        top(let_("eval", int(2))),
        top(expr_stmt(method(
            object(&[("first-name", int(1))]),
            "hasOwnProperty",
            vec![string("first-name")],
        ))),
        top(log(vec![var("public"), var("eval")])),
    ]);
    if let Some(out) = stdout_of(&m) {
        assert_eq!(out, "1 2\n");
    }
}

#[test]
fn failed_assert_reports_source() {
    let m = module(vec![top(s(StmtKind::Assert {
        condition: binary(BinaryOp::Lt, int(2), int(1)),
        source: "2 < 1".into(),
    }))]);
    if let Some(run) = run(&m) {
        assert!(!run.success);
        assert!(run.stderr.contains("Assertion failed: 2 < 1"), "{}", run.stderr);
    }
}
