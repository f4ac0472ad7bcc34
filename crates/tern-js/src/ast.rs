// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! JavaScript output tree.
//!
//! Only the node kinds the Tern lowering produces. Nodes carry no spans and
//! no parentheses; the printer derives grouping from precedence.

/// A JavaScript module.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Import(Import),
    Function(Function),
    Class(Class),
    Var {
        kind: VarKind,
        name: String,
        init: Option<Expr>,
    },
    Expr(Expr),
    Return(Option<Expr>),
    /// A one-statement `alternate` holding another `If` prints as `else if`.
    If {
        test: Expr,
        consequent: Vec<Stmt>,
        alternate: Option<Vec<Stmt>>,
    },
    While {
        test: Expr,
        body: Vec<Stmt>,
    },
    ForOf {
        kind: VarKind,
        binding: String,
        iterable: Expr,
        body: Vec<Stmt>,
    },
    /// C-style loop; `init` is a `Var` or `Expr` statement
    For {
        init: Option<Box<Stmt>>,
        test: Option<Expr>,
        update: Option<Expr>,
        body: Vec<Stmt>,
    },
    Block(Vec<Stmt>),
    /// `label: { ... }`
    Labeled {
        label: String,
        body: Vec<Stmt>,
    },
    Break(Option<String>),
    Throw(Expr),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarKind {
    Const,
    Let,
}

/// `import { a, b as c } from "m"`, `import * as ns from "m"`, or
/// `import "m"` when both are empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Import {
    pub specifiers: Vec<ImportSpecifier>,
    pub namespace: Option<String>,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportSpecifier {
    pub imported: String,
    pub local: Option<String>,
}

/// A `function` declaration or expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub name: Option<String>,
    pub params: Vec<String>,
    pub body: Vec<Stmt>,
    pub is_async: bool,
    pub is_generator: bool,
    pub is_export: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Class {
    pub name: String,
    pub superclass: Option<Expr>,
    pub members: Vec<ClassMember>,
    pub is_export: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClassMember {
    /// `#name;`
    PrivateField(String),
    Constructor {
        params: Vec<String>,
        body: Vec<Stmt>,
    },
    Method(Method),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Method {
    pub name: String,
    pub kind: MethodKind,
    pub is_static: bool,
    pub is_async: bool,
    pub is_generator: bool,
    pub params: Vec<String>,
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodKind {
    Method,
    Getter,
    Setter,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Ident(String),
    This,
    Lit(Lit),
    Array(Vec<Expr>),
    Object(Vec<Prop>),
    /// `object.property`, or `object["property"]` when not an identifier
    Member {
        object: Box<Expr>,
        property: String,
    },
    /// `object.#name`
    PrivateMember {
        object: Box<Expr>,
        name: String,
    },
    Index {
        object: Box<Expr>,
        index: Box<Expr>,
    },
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
    New {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
    /// `super(args)`
    SuperCall(Vec<Expr>),
    /// `super.name`
    SuperMember(String),
    Function(Box<Function>),
    Arrow {
        params: Vec<String>,
        body: Vec<Stmt>,
        is_async: bool,
    },
    Await(Box<Expr>),
    Yield {
        argument: Option<Box<Expr>>,
        delegate: bool,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Assign {
        target: Box<Expr>,
        value: Box<Expr>,
    },
    Conditional {
        test: Box<Expr>,
        consequent: Box<Expr>,
        alternate: Box<Expr>,
    },
    /// Postfix `target++`
    Increment(Box<Expr>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Lit {
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
    Null,
    Undefined,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Prop {
    pub key: PropKey,
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PropKey {
    Name(String),
    /// `__proto__: value`, which sets the new object's prototype
    Proto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Not,
    Neg,
    Typeof,
}

/// The handful of native operators lowering emits itself. Tern's own
/// operators never appear here; they become runtime calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    StrictEq,
    StrictNe,
    Lt,
    Ge,
    And,
    Or,
    InstanceOf,
}

// --- Constructors ---

impl Expr {
    pub fn ident(name: impl Into<String>) -> Expr {
        Expr::Ident(name.into())
    }

    pub fn str(value: impl Into<String>) -> Expr {
        Expr::Lit(Lit::Str(value.into()))
    }

    pub fn int(value: i64) -> Expr {
        Expr::Lit(Lit::Int(value))
    }

    pub fn null() -> Expr {
        Expr::Lit(Lit::Null)
    }

    pub fn undefined() -> Expr {
        Expr::Lit(Lit::Undefined)
    }

    pub fn member(object: Expr, property: impl Into<String>) -> Expr {
        Expr::Member {
            object: Box::new(object),
            property: property.into(),
        }
    }

    pub fn private(object: Expr, name: impl Into<String>) -> Expr {
        Expr::PrivateMember {
            object: Box::new(object),
            name: name.into(),
        }
    }

    pub fn index(object: Expr, index: Expr) -> Expr {
        Expr::Index {
            object: Box::new(object),
            index: Box::new(index),
        }
    }

    pub fn call(callee: Expr, args: Vec<Expr>) -> Expr {
        Expr::Call {
            callee: Box::new(callee),
            args,
        }
    }

    pub fn new_(callee: Expr, args: Vec<Expr>) -> Expr {
        Expr::New {
            callee: Box::new(callee),
            args,
        }
    }

    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Expr {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn not(operand: Expr) -> Expr {
        Expr::Unary {
            op: UnaryOp::Not,
            operand: Box::new(operand),
        }
    }

    pub fn assign(target: Expr, value: Expr) -> Expr {
        Expr::Assign {
            target: Box::new(target),
            value: Box::new(value),
        }
    }

    /// Left-nested `a && b && c`; `None` for an empty list.
    pub fn all(mut tests: Vec<Expr>) -> Option<Expr> {
        if tests.is_empty() {
            return None;
        }
        let first = tests.remove(0);
        Some(
            tests
                .into_iter()
                .fold(first, |acc, t| Expr::binary(BinaryOp::And, acc, t)),
        )
    }
}

impl Stmt {
    pub fn const_(name: impl Into<String>, init: Expr) -> Stmt {
        Stmt::Var {
            kind: VarKind::Const,
            name: name.into(),
            init: Some(init),
        }
    }

    pub fn if_(test: Expr, consequent: Vec<Stmt>) -> Stmt {
        Stmt::If {
            test,
            consequent,
            alternate: None,
        }
    }

    /// Whether control never falls out of this statement.
    pub fn is_terminal(&self) -> bool {
        match self {
            Stmt::Return(_) | Stmt::Throw(_) | Stmt::Break(_) => true,
            Stmt::If {
                consequent,
                alternate: Some(alternate),
                ..
            } => ends_terminal(consequent) && ends_terminal(alternate),
            Stmt::Block(body) => ends_terminal(body),
            _ => false,
        }
    }
}

/// Whether the last statement of `stmts` never falls through.
pub fn ends_terminal(stmts: &[Stmt]) -> bool {
    stmts.last().is_some_and(Stmt::is_terminal)
}
