// SPDX-License-Identifier: (MIT OR Apache-2.0)

use crate::ast::*;
use crate::config::PrintConfig;
use crate::ident::is_identifier;

pub struct Printer<'a> {
    output: String,
    indent: usize,
    config: &'a PrintConfig,
}

// Binding strength, loosest first. A child printed where a tighter
// minimum is required gets parentheses.
const PREC_ASSIGN: u8 = 2;
const PREC_CONDITIONAL: u8 = 3;
const PREC_OR: u8 = 4;
const PREC_AND: u8 = 5;
const PREC_EQUALITY: u8 = 9;
const PREC_RELATIONAL: u8 = 10;
const PREC_UNARY: u8 = 15;
const PREC_POSTFIX: u8 = 16;
/// Function expressions sit just below call level so they are wrapped when
/// called or dereferenced, and left alone everywhere else.
const PREC_FUNCTION: u8 = 17;
const PREC_CALL: u8 = 18;
const PREC_MEMBER: u8 = 19;
const PREC_PRIMARY: u8 = 20;

impl<'a> Printer<'a> {
    pub fn new(config: &'a PrintConfig) -> Self {
        Self {
            output: String::new(),
            indent: 0,
            config,
        }
    }

    pub fn finish(mut self) -> String {
        if !self.output.is_empty() && !self.output.ends_with('\n') {
            self.output.push('\n');
        }
        self.output
    }

    // --- Helpers ---

    fn emit(&mut self, s: &str) {
        self.output.push_str(s);
    }

    fn emit_newline(&mut self) {
        self.output.push('\n');
    }

    fn emit_indent(&mut self) {
        let spaces = self.indent * self.config.indent_width;
        self.output.extend(std::iter::repeat(' ').take(spaces));
    }

    fn emit_list(&mut self, items: &[String]) {
        self.emit(&items.join(", "));
    }

    fn emit_args(&mut self, args: &[Expr]) {
        self.emit("(");
        for (i, arg) in args.iter().enumerate() {
            if i > 0 {
                self.emit(", ");
            }
            self.format_expr_inner(arg, PREC_ASSIGN);
        }
        self.emit(")");
    }

    /// `{`, the statements one level deeper, then `}` at the current
    /// indent. Empty blocks print as `{}`.
    fn format_block(&mut self, stmts: &[Stmt]) {
        if stmts.is_empty() {
            self.emit("{}");
            return;
        }
        self.emit("{");
        self.emit_newline();
        self.indent += 1;
        self.format_stmts(stmts);
        self.indent -= 1;
        self.emit_indent();
        self.emit("}");
    }

    // --- Program ---

    pub fn format_program(&mut self, program: &Program) {
        let mut prev_import = false;
        for (i, stmt) in program.body.iter().enumerate() {
            let is_import = matches!(stmt, Stmt::Import(_));
            let is_decl = matches!(stmt, Stmt::Function(_) | Stmt::Class(_));
            if i > 0 && (is_decl || (prev_import && !is_import)) {
                self.emit_newline();
            }
            self.emit_indent();
            self.format_stmt(stmt);
            self.emit_newline();
            prev_import = is_import;
        }
    }

    // --- Statements ---

    fn format_stmts(&mut self, stmts: &[Stmt]) {
        for stmt in stmts {
            self.emit_indent();
            self.format_stmt(stmt);
            self.emit_newline();
        }
    }

    pub fn format_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Import(import) => self.format_import(import),
            Stmt::Function(func) => self.format_function(func),
            Stmt::Class(class) => self.format_class(class),
            Stmt::Var { .. } => {
                self.format_var(stmt);
                self.emit(";");
            }
            Stmt::Expr(expr) => {
                // A statement may not start with `{` or `function`.
                let min = if starts_with_brace_or_function(expr) {
                    PREC_PRIMARY + 1
                } else {
                    0
                };
                self.format_expr_inner(expr, min);
                self.emit(";");
            }
            Stmt::Return(None) => self.emit("return;"),
            Stmt::Return(Some(expr)) => {
                self.emit("return ");
                self.format_expr(expr);
                self.emit(";");
            }
            Stmt::If {
                test,
                consequent,
                alternate,
            } => {
                self.emit("if (");
                self.format_expr(test);
                self.emit(") ");
                self.format_block(consequent);
                match alternate.as_deref() {
                    None => {}
                    Some([chained @ Stmt::If { .. }]) => {
                        self.emit(" else ");
                        self.format_stmt(chained);
                    }
                    Some(alternate) => {
                        self.emit(" else ");
                        self.format_block(alternate);
                    }
                }
            }
            Stmt::While { test, body } => {
                self.emit("while (");
                self.format_expr(test);
                self.emit(") ");
                self.format_block(body);
            }
            Stmt::ForOf {
                kind,
                binding,
                iterable,
                body,
            } => {
                self.emit("for (");
                self.emit(var_keyword(*kind));
                self.emit(" ");
                self.emit(binding);
                self.emit(" of ");
                self.format_expr_inner(iterable, PREC_ASSIGN);
                self.emit(") ");
                self.format_block(body);
            }
            Stmt::For {
                init,
                test,
                update,
                body,
            } => {
                self.emit("for (");
                match init.as_deref() {
                    Some(var @ Stmt::Var { .. }) => self.format_var(var),
                    Some(Stmt::Expr(expr)) => self.format_expr(expr),
                    Some(_) | None => {}
                }
                self.emit(";");
                if let Some(test) = test {
                    self.emit(" ");
                    self.format_expr(test);
                }
                self.emit(";");
                if let Some(update) = update {
                    self.emit(" ");
                    self.format_expr(update);
                }
                self.emit(") ");
                self.format_block(body);
            }
            Stmt::Block(body) => self.format_block(body),
            Stmt::Labeled { label, body } => {
                self.emit(label);
                self.emit(": ");
                self.format_block(body);
            }
            Stmt::Break(None) => self.emit("break;"),
            Stmt::Break(Some(label)) => {
                self.emit("break ");
                self.emit(label);
                self.emit(";");
            }
            Stmt::Throw(expr) => {
                self.emit("throw ");
                self.format_expr(expr);
                self.emit(";");
            }
        }
    }

    fn format_var(&mut self, stmt: &Stmt) {
        if let Stmt::Var { kind, name, init } = stmt {
            self.emit(var_keyword(*kind));
            self.emit(" ");
            self.emit(name);
            if let Some(init) = init {
                self.emit(" = ");
                self.format_expr_inner(init, PREC_ASSIGN);
            }
        }
    }

    fn format_import(&mut self, import: &Import) {
        self.emit("import ");
        if let Some(ns) = &import.namespace {
            self.emit("* as ");
            self.emit(ns);
            self.emit(" from ");
        } else if !import.specifiers.is_empty() {
            self.emit("{ ");
            for (i, spec) in import.specifiers.iter().enumerate() {
                if i > 0 {
                    self.emit(", ");
                }
                self.emit(&spec.imported);
                if let Some(local) = &spec.local {
                    self.emit(" as ");
                    self.emit(local);
                }
            }
            self.emit(" } from ");
        }
        self.emit(&string_literal(&import.source));
        self.emit(";");
    }

    fn format_function(&mut self, func: &Function) {
        if func.is_export {
            self.emit("export ");
        }
        if func.is_async {
            self.emit("async ");
        }
        self.emit("function");
        if func.is_generator {
            self.emit("*");
        }
        self.emit(" ");
        if let Some(name) = &func.name {
            self.emit(name);
        }
        self.emit("(");
        self.emit_list(&func.params);
        self.emit(") ");
        self.format_block(&func.body);
    }

    fn format_class(&mut self, class: &Class) {
        if class.is_export {
            self.emit("export ");
        }
        self.emit("class ");
        self.emit(&class.name);
        if let Some(superclass) = &class.superclass {
            self.emit(" extends ");
            self.format_expr_inner(superclass, PREC_CALL);
        }
        self.emit(" {");
        if class.members.is_empty() {
            self.emit("}");
            return;
        }
        self.emit_newline();
        self.indent += 1;
        for member in &class.members {
            self.emit_indent();
            match member {
                ClassMember::PrivateField(name) => {
                    self.emit("#");
                    self.emit(name);
                    self.emit(";");
                }
                ClassMember::Constructor { params, body } => {
                    self.emit("constructor(");
                    self.emit_list(params);
                    self.emit(") ");
                    self.format_block(body);
                }
                ClassMember::Method(method) => self.format_method(method),
            }
            self.emit_newline();
        }
        self.indent -= 1;
        self.emit_indent();
        self.emit("}");
    }

    fn format_method(&mut self, method: &Method) {
        if method.is_static {
            self.emit("static ");
        }
        match method.kind {
            MethodKind::Getter => self.emit("get "),
            MethodKind::Setter => self.emit("set "),
            MethodKind::Method => {
                if method.is_async {
                    self.emit("async ");
                }
                if method.is_generator {
                    self.emit("*");
                }
            }
        }
        self.format_property_key(&method.name);
        self.emit("(");
        self.emit_list(&method.params);
        self.emit(") ");
        self.format_block(&method.body);
    }

    fn format_property_key(&mut self, name: &str) {
        if is_identifier(name) {
            self.emit(name);
        } else {
            self.emit("[");
            self.emit(&string_literal(name));
            self.emit("]");
        }
    }

    // --- Expressions ---

    pub fn format_expr(&mut self, expr: &Expr) {
        self.format_expr_inner(expr, 0);
    }

    fn format_expr_inner(&mut self, expr: &Expr, min_prec: u8) {
        let need_parens = precedence(expr) < min_prec;
        if need_parens {
            self.emit("(");
        }
        match expr {
            Expr::Ident(name) => self.emit(name),
            Expr::This => self.emit("this"),
            Expr::Lit(lit) => self.format_lit(lit),
            Expr::Array(items) => {
                self.emit("[");
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        self.emit(", ");
                    }
                    self.format_expr_inner(item, PREC_ASSIGN);
                }
                self.emit("]");
            }
            Expr::Object(props) => {
                if props.is_empty() {
                    self.emit("{}");
                } else {
                    self.emit("{ ");
                    for (i, prop) in props.iter().enumerate() {
                        if i > 0 {
                            self.emit(", ");
                        }
                        match &prop.key {
                            PropKey::Proto => self.emit("__proto__"),
                            PropKey::Name(name) if is_identifier(name) => self.emit(name),
                            PropKey::Name(name) => self.emit(&string_literal(name)),
                        }
                        self.emit(": ");
                        self.format_expr_inner(&prop.value, PREC_ASSIGN);
                    }
                    self.emit(" }");
                }
            }
            Expr::Member { object, property } => {
                self.format_member_object(object);
                if is_identifier(property) {
                    self.emit(".");
                    self.emit(property);
                } else {
                    self.emit("[");
                    self.emit(&string_literal(property));
                    self.emit("]");
                }
            }
            Expr::PrivateMember { object, name } => {
                self.format_member_object(object);
                self.emit(".#");
                self.emit(name);
            }
            Expr::Index { object, index } => {
                self.format_member_object(object);
                self.emit("[");
                self.format_expr(index);
                self.emit("]");
            }
            Expr::Call { callee, args } => {
                self.format_expr_inner(callee, PREC_CALL);
                self.emit_args(args);
            }
            Expr::New { callee, args } => {
                self.emit("new ");
                self.format_expr_inner(callee, PREC_MEMBER);
                self.emit_args(args);
            }
            Expr::SuperCall(args) => {
                self.emit("super");
                self.emit_args(args);
            }
            Expr::SuperMember(name) => {
                self.emit("super");
                if is_identifier(name) {
                    self.emit(".");
                    self.emit(name);
                } else {
                    self.emit("[");
                    self.emit(&string_literal(name));
                    self.emit("]");
                }
            }
            Expr::Function(func) => self.format_function(func),
            Expr::Arrow {
                params,
                body,
                is_async,
            } => {
                if *is_async {
                    self.emit("async ");
                }
                self.emit("(");
                self.emit_list(params);
                self.emit(") => ");
                self.format_block(body);
            }
            Expr::Await(operand) => {
                self.emit("await ");
                self.format_expr_inner(operand, PREC_UNARY);
            }
            Expr::Yield { argument, delegate } => {
                self.emit("yield");
                if *delegate {
                    self.emit("*");
                }
                if let Some(argument) = argument {
                    self.emit(" ");
                    self.format_expr_inner(argument, PREC_ASSIGN);
                }
            }
            Expr::Unary { op, operand } => {
                self.emit(match op {
                    UnaryOp::Not => "!",
                    UnaryOp::Neg => "-",
                    UnaryOp::Typeof => "typeof ",
                });
                // `- -x` must not print as `--x`.
                let min = if *op == UnaryOp::Neg && starts_with_minus(operand) {
                    PREC_PRIMARY + 1
                } else {
                    PREC_UNARY
                };
                self.format_expr_inner(operand, min);
            }
            Expr::Binary { op, left, right } => {
                let prec = binary_precedence(*op);
                self.format_expr_inner(left, prec);
                self.emit(" ");
                self.emit(binary_str(*op));
                self.emit(" ");
                self.format_expr_inner(right, prec + 1);
            }
            Expr::Assign { target, value } => {
                self.format_expr_inner(target, PREC_CALL);
                self.emit(" = ");
                self.format_expr_inner(value, PREC_ASSIGN);
            }
            Expr::Conditional {
                test,
                consequent,
                alternate,
            } => {
                self.format_expr_inner(test, PREC_OR);
                self.emit(" ? ");
                self.format_expr_inner(consequent, PREC_ASSIGN);
                self.emit(" : ");
                self.format_expr_inner(alternate, PREC_ASSIGN);
            }
            Expr::Increment(target) => {
                self.format_expr_inner(target, PREC_CALL);
                self.emit("++");
            }
        }
        if need_parens {
            self.emit(")");
        }
    }

    fn format_member_object(&mut self, object: &Expr) {
        self.format_expr_inner(object, member_object_precedence(object));
    }

    fn format_lit(&mut self, lit: &Lit) {
        match lit {
            Lit::Int(n) => self.emit(&n.to_string()),
            Lit::Float(f) => self.emit(&float_literal(*f)),
            Lit::Str(s) => self.emit(&string_literal(s)),
            Lit::Bool(b) => self.emit(if *b { "true" } else { "false" }),
            Lit::Null => self.emit("null"),
            Lit::Undefined => self.emit("undefined"),
        }
    }
}

// --- Operator helpers ---

fn member_object_precedence(object: &Expr) -> u8 {
    // `1.x` would lex as a decimal point.
    match object {
        Expr::Lit(Lit::Int(_) | Lit::Float(_)) => PREC_PRIMARY + 1,
        _ => PREC_CALL,
    }
}

/// The operand printed first, with the minimum precedence it is printed at.
fn leftmost_operand(expr: &Expr) -> Option<(&Expr, u8)> {
    match expr {
        Expr::Member { object, .. }
        | Expr::PrivateMember { object, .. }
        | Expr::Index { object, .. } => Some((object, member_object_precedence(object))),
        Expr::Call { callee, .. } => Some((callee, PREC_CALL)),
        Expr::Binary { op, left, .. } => Some((left, binary_precedence(*op))),
        Expr::Assign { target, .. } => Some((target, PREC_CALL)),
        Expr::Conditional { test, .. } => Some((test, PREC_OR)),
        Expr::Increment(target) => Some((target, PREC_CALL)),
        _ => None,
    }
}

/// Whether `expr` printed bare would begin with `{` or `function`.
fn starts_with_brace_or_function(expr: &Expr) -> bool {
    match expr {
        Expr::Object(_) | Expr::Function(_) => true,
        _ => match leftmost_operand(expr) {
            Some((operand, min)) if precedence(operand) >= min => {
                starts_with_brace_or_function(operand)
            }
            _ => false,
        },
    }
}

fn precedence(expr: &Expr) -> u8 {
    match expr {
        Expr::Ident(_)
        | Expr::This
        | Expr::Array(_)
        | Expr::Object(_)
        | Expr::SuperMember(_) => PREC_PRIMARY,
        Expr::Lit(lit) => match lit {
            Lit::Int(n) if *n < 0 => PREC_UNARY,
            Lit::Float(f) if f.is_sign_negative() => PREC_UNARY,
            _ => PREC_PRIMARY,
        },
        Expr::Member { .. } | Expr::PrivateMember { .. } | Expr::Index { .. } => PREC_MEMBER,
        Expr::New { .. } => PREC_MEMBER,
        Expr::Call { .. } | Expr::SuperCall(_) => PREC_CALL,
        Expr::Function(_) => PREC_FUNCTION,
        Expr::Increment(_) => PREC_POSTFIX,
        Expr::Unary { .. } | Expr::Await(_) => PREC_UNARY,
        Expr::Binary { op, .. } => binary_precedence(*op),
        Expr::Conditional { .. } => PREC_CONDITIONAL,
        Expr::Arrow { .. } | Expr::Yield { .. } | Expr::Assign { .. } => PREC_ASSIGN,
    }
}

fn binary_precedence(op: BinaryOp) -> u8 {
    match op {
        BinaryOp::Or => PREC_OR,
        BinaryOp::And => PREC_AND,
        BinaryOp::StrictEq | BinaryOp::StrictNe => PREC_EQUALITY,
        BinaryOp::Lt | BinaryOp::Ge | BinaryOp::InstanceOf => PREC_RELATIONAL,
    }
}

fn binary_str(op: BinaryOp) -> &'static str {
    match op {
        BinaryOp::StrictEq => "===",
        BinaryOp::StrictNe => "!==",
        BinaryOp::Lt => "<",
        BinaryOp::Ge => ">=",
        BinaryOp::And => "&&",
        BinaryOp::Or => "||",
        BinaryOp::InstanceOf => "instanceof",
    }
}

fn var_keyword(kind: VarKind) -> &'static str {
    match kind {
        VarKind::Const => "const",
        VarKind::Let => "let",
    }
}

fn starts_with_minus(expr: &Expr) -> bool {
    match expr {
        Expr::Unary {
            op: UnaryOp::Neg, ..
        } => true,
        Expr::Lit(Lit::Int(n)) => *n < 0,
        Expr::Lit(Lit::Float(f)) => f.is_sign_negative(),
        _ => false,
    }
}

/// JSON string syntax is valid JavaScript string syntax.
pub(crate) fn string_literal(s: &str) -> String {
    serde_json::Value::String(s.to_string()).to_string()
}

fn float_literal(f: f64) -> String {
    if f.is_nan() {
        "NaN".to_string()
    } else if f.is_infinite() {
        let text = if f > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else if f.fract() == 0.0 && f.abs() < 1e16 {
        // Keep integral decimals visibly decimal.
        format!("{f:.1}")
    } else {
        format!("{f}")
    }
}
