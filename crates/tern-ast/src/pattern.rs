// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Match patterns.

use crate::expr::{Expr, Literal};

/// A pattern for matching.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Pattern {
    /// Exact equality with a scalar
    Literal(Literal),
    Array(ArrayPattern),
    /// `{ name: pattern, ... }`; keys not listed are ignored
    Object(Vec<(String, Pattern)>),
    /// `C(p1, p2)`, matched through `C.unapply(value)`
    Extractor {
        extractor: Expr,
        patterns: Vec<Pattern>,
    },
    /// Binds the value to a name; always matches
    Bind(String),
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ArrayPattern {
    /// `[p1, p2]`, exact length
    Regular { items: Vec<Pattern> },
    /// `[p1, p2, ...rest]`, at least `items.len()` elements
    Spread {
        items: Vec<Pattern>,
        rest: Box<Pattern>,
    },
}

impl Pattern {
    /// Names this pattern binds, left to right.
    pub fn bound_names(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_names(&mut out);
        out
    }

    fn collect_names<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Pattern::Literal(_) => {}
            Pattern::Bind(name) => out.push(name),
            Pattern::Array(ArrayPattern::Regular { items }) => {
                items.iter().for_each(|p| p.collect_names(out));
            }
            Pattern::Array(ArrayPattern::Spread { items, rest }) => {
                items.iter().for_each(|p| p.collect_names(out));
                rest.collect_names(out);
            }
            Pattern::Object(fields) => {
                fields.iter().for_each(|(_, p)| p.collect_names(out));
            }
            Pattern::Extractor { patterns, .. } => {
                patterns.iter().for_each(|p| p.collect_names(out));
            }
        }
    }
}
