// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! Integration tests for `tern compile` and `tern explain`.
//! Each test writes a syntax tree to a temp dir, runs the binary, and checks
//! exit status and output.

use std::path::Path;
use std::process::{Command, Output};

/// `fn three() 1 + 2`
const ADD: &str = r#"{"definitions": [{"kind": {"function": {
    "name": "three",
    "params": [],
    "body": [{"kind": {"expr": {"kind": {"binary": {
        "op": "+",
        "left": {"kind": {"literal": {"integer": 1}}},
        "right": {"kind": {"literal": {"integer": 2}}}
    }}}}}]
}}}]}"#;

/// `yield 1` inside a plain function, spanning `yield 1` in `YIELD_SOURCE`.
const YIELD: &str = r#"{"definitions": [{"kind": {"function": {
    "name": "numbers",
    "params": [],
    "body": [{"kind": {"expr": {
        "kind": {"yield": {"value": {"kind": {"literal": {"integer": 1}}}, "delegate": false}},
        "span": {"start": 15, "end": 22}
    }}}]
}}}]}"#;

const YIELD_SOURCE: &str = "fn numbers()\n  yield 1\n";

fn tern(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tern"))
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run tern")
}

fn write(dir: &Path, name: &str, text: &str) {
    std::fs::write(dir.join(name), text).unwrap();
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).to_string()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).to_string()
}

// ─── compile ────────────────────────────────────────────────

#[test]
fn compiles_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "add.json", ADD);

    let out = tern(dir.path(), &["compile", "add.json"]);
    assert!(out.status.success(), "{}", stderr(&out));
    assert_eq!(
        stdout(&out),
        "import { plus } from \"@tern/runtime\";\n\nfunction three() {\n  return plus(1, 2);\n}\n"
    );
}

#[test]
fn writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "add.json", ADD);

    let out = tern(dir.path(), &["compile", "add.json", "-o", "add.js"]);
    assert!(out.status.success(), "{}", stderr(&out));
    assert!(stdout(&out).is_empty());
    let js = std::fs::read_to_string(dir.path().join("add.js")).unwrap();
    assert!(js.contains("return plus(1, 2);"));
}

#[test]
fn output_options() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "add.json", ADD);

    let out = tern(
        dir.path(),
        &["compile", "add.json", "--no-runtime-import", "--indent", "4"],
    );
    assert!(out.status.success(), "{}", stderr(&out));
    assert_eq!(stdout(&out), "function three() {\n    return plus(1, 2);\n}\n");

    let out = tern(
        dir.path(),
        &["compile", "add.json", "--runtime-module", "./ops.js"],
    );
    assert!(stdout(&out).starts_with("import { plus } from \"./ops.js\";\n"));
}

#[test]
fn malformed_tree_fails() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "bad.json", "{\"definitions\": [");

    let out = tern(dir.path(), &["compile", "bad.json"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).is_empty());
    let err = stderr(&out);
    assert!(err.starts_with("error[E0100]: "), "{err}");
    assert!(err.contains("--> bad.json"), "{err}");
}

#[test]
fn unknown_operator_fails() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "op.json", &ADD.replace("\"+\"", "\"<>\""));

    let out = tern(dir.path(), &["compile", "op.json"]);
    assert_eq!(out.status.code(), Some(1));
    let err = stderr(&out);
    assert!(err.starts_with("error[E0102]: unknown binary operator `<>`"), "{err}");
}

#[test]
fn lowering_error_shows_source_context() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "numbers.json", YIELD);
    write(dir.path(), "numbers.tern", YIELD_SOURCE);

    let out = tern(
        dir.path(),
        &["compile", "numbers.json", "--source", "numbers.tern"],
    );
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).is_empty());
    assert_eq!(
        stderr(&out),
        concat!(
            "error[E0300]: `yield` outside of a generator function\n",
            "  --> numbers.tern:2:3\n",
            "    |\n",
            "  2 |   yield 1\n",
            "    |   ^^^^^^^ not inside a generator\n",
            "    |\n",
            "    = help: declare the enclosing function as a generator\n",
        )
    );
}

#[test]
fn json_error_format() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "numbers.json", YIELD);
    write(dir.path(), "numbers.tern", YIELD_SOURCE);

    let out = tern(
        dir.path(),
        &[
            "compile",
            "numbers.json",
            "--source",
            "numbers.tern",
            "--error-format",
            "json",
        ],
    );
    assert_eq!(out.status.code(), Some(1));
    let report: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(report["phase"], "lower");
    assert_eq!(report["error_count"], 1);
    let diag = &report["diagnostics"][0];
    assert_eq!(diag["code"], "E0300");
    assert_eq!(diag["category"], "Lowering");
    assert_eq!(diag["location"]["line"], 2);
    assert_eq!(diag["location"]["source_line"], "  yield 1");
}

#[test]
fn missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let out = tern(dir.path(), &["compile", "nowhere.json"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("reading nowhere.json"), "{}", stderr(&out));
}

#[test]
fn verbose_logs_to_stderr() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "add.json", ADD);

    let out = tern(dir.path(), &["-vv", "compile", "add.json", "-o", "add.js"]);
    assert!(out.status.success());
    let err = stderr(&out);
    assert!(err.contains("decoded 1 definitions from add.json"), "{err}");
    assert!(err.contains("lowering function `three`"), "{err}");
}

// ─── explain ────────────────────────────────────────────────

#[test]
fn explains_known_code() {
    let dir = tempfile::tempdir().unwrap();
    let out = tern(dir.path(), &["explain", "E0303"]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.starts_with("error[E0303]: super call in constructor\n"), "{text}");
    assert!(text.contains("Category: Lowering"));
}

#[test]
fn rejects_unknown_code() {
    let dir = tempfile::tempdir().unwrap();
    let out = tern(dir.path(), &["explain", "E9999"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("unknown error code `E9999`"));
}
