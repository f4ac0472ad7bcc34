// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Surface operators.
//!
//! Each operator has exactly one surface token. In serialized ASTs an
//! operator is written as that token (`"=="`, `"++"`, ...).

use thiserror::Error;

/// A token that names no Tern operator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {fixity} operator `{token}`")]
pub struct UnknownOperator {
    pub token: String,
    pub fixity: Fixity,
}

/// Whether an operator token was read in binary or unary position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fixity {
    Binary,
    Unary,
}

impl std::fmt::Display for Fixity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Fixity::Binary => write!(f, "binary"),
            Fixity::Unary => write!(f, "unary"),
        }
    }
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum BinaryOp {
    // Comparison
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
    /// `++`
    Concat,
    /// `>>`, left then right
    ComposeRight,
    /// `<<`, right then left
    ComposeLeft,
    // Logical
    And,
    Or,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 17] = [
        BinaryOp::Eq,
        BinaryOp::Ne,
        BinaryOp::Lt,
        BinaryOp::Le,
        BinaryOp::Gt,
        BinaryOp::Ge,
        BinaryOp::Add,
        BinaryOp::Sub,
        BinaryOp::Mul,
        BinaryOp::Div,
        BinaryOp::Rem,
        BinaryOp::Pow,
        BinaryOp::Concat,
        BinaryOp::ComposeRight,
        BinaryOp::ComposeLeft,
        BinaryOp::And,
        BinaryOp::Or,
    ];

    pub fn token(self) -> &'static str {
        match self {
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Le => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::Ge => ">=",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Rem => "%",
            BinaryOp::Pow => "**",
            BinaryOp::Concat => "++",
            BinaryOp::ComposeRight => ">>",
            BinaryOp::ComposeLeft => "<<",
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
        }
    }

    pub fn from_token(token: &str) -> Result<Self, UnknownOperator> {
        BinaryOp::ALL
            .into_iter()
            .find(|op| op.token() == token)
            .ok_or_else(|| UnknownOperator {
                token: token.to_string(),
                fixity: Fixity::Binary,
            })
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum UnaryOp {
    /// `-`
    Neg,
    /// `!`
    Not,
}

impl UnaryOp {
    pub fn token(self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
            UnaryOp::Not => "!",
        }
    }

    pub fn from_token(token: &str) -> Result<Self, UnknownOperator> {
        match token {
            "-" => Ok(UnaryOp::Neg),
            "!" => Ok(UnaryOp::Not),
            _ => Err(UnknownOperator {
                token: token.to_string(),
                fixity: Fixity::Unary,
            }),
        }
    }
}

impl std::fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

impl std::fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

impl TryFrom<String> for BinaryOp {
    type Error = UnknownOperator;

    fn try_from(token: String) -> Result<Self, Self::Error> {
        BinaryOp::from_token(&token)
    }
}

impl From<BinaryOp> for String {
    fn from(op: BinaryOp) -> String {
        op.token().to_string()
    }
}

impl TryFrom<String> for UnaryOp {
    type Error = UnknownOperator;

    fn try_from(token: String) -> Result<Self, Self::Error> {
        UnaryOp::from_token(&token)
    }
}

impl From<UnaryOp> for String {
    fn from(op: UnaryOp) -> String {
        op.token().to_string()
    }
}
