// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Rich terminal formatter for diagnostics.
//!
//! ```text
//! error[E0301]: `await` outside of an async function
//!   --> main.tern:3:13
//!     |
//!   3 |     let v = await fetch(url)
//!     |             ^^^^^^^^^^^^^^^^ not inside an async function
//!     |
//!     = help: mark the enclosing function `async`
//! ```
//!
//! Without source text (or when a span lies outside it) only the header and
//! footer are printed.

use std::collections::BTreeMap;

use colored::Colorize;
use tern_ast::LineMap;

use crate::Diagnostic;

/// Formats diagnostics for terminal output.
pub struct DiagnosticFormatter<'a> {
    source: &'a str,
    file_name: Option<&'a str>,
    line_map: LineMap,
}

/// A source line with its labels.
struct AnnotatedLine {
    line_num: usize,
    text: String,
    annotations: Vec<Annotation>,
}

struct Annotation {
    col_start: usize,
    col_end: usize,
    message: String,
}

impl<'a> DiagnosticFormatter<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            file_name: None,
            line_map: LineMap::new(source),
        }
    }

    pub fn with_file_name(mut self, name: &'a str) -> Self {
        self.file_name = Some(name);
        self
    }

    pub fn format(&self, diagnostic: &Diagnostic) -> String {
        let mut out = String::new();
        self.format_header(&mut out, diagnostic);

        let annotated = self.collect_annotated_lines(diagnostic);
        let Some(first) = annotated.first() else {
            if let Some(file) = self.file_name {
                out.push_str(&format!("  {} {}\n", "-->".blue(), file));
            }
            self.format_footer(&mut out, diagnostic, 2);
            return out;
        };

        let file = self.file_name.unwrap_or("<source>");
        let first_col = first.annotations.first().map_or(1, |a| a.col_start);
        out.push_str(&format!(
            "  {} {}:{}:{}\n",
            "-->".blue(),
            file,
            first.line_num,
            first_col
        ));

        let max_line = annotated.last().map_or(1, |a| a.line_num);
        let gutter_width = max_line.to_string().len().max(2);
        let blank_gutter = " ".repeat(gutter_width + 1);

        out.push_str(&format!("{} {}\n", blank_gutter, "|".blue()));
        let mut prev_line_num: Option<usize> = None;
        for line in &annotated {
            if prev_line_num.is_some_and(|prev| line.line_num > prev + 1) {
                out.push_str(&format!("{} {}\n", " ".repeat(gutter_width), "...".blue()));
            }
            out.push_str(&format!(
                "{:>width$} {} {}\n",
                line.line_num.to_string().blue().bold(),
                "|".blue(),
                line.text,
                width = gutter_width + 1,
            ));
            self.format_annotations(&mut out, line, &blank_gutter);
            prev_line_num = Some(line.line_num);
        }

        if !diagnostic.notes.is_empty() || diagnostic.help.is_some() {
            out.push_str(&format!("{} {}\n", blank_gutter, "|".blue()));
        }
        self.format_footer(&mut out, diagnostic, gutter_width);
        out
    }

    fn format_header(&self, out: &mut String, diagnostic: &Diagnostic) {
        let level = "error".red().bold();

        match &diagnostic.code {
            Some(code) => out.push_str(&format!(
                "{}[{}]: {}\n",
                level,
                code.0.as_str().red().bold(),
                diagnostic.message.bold()
            )),
            None => out.push_str(&format!("{}: {}\n", level, diagnostic.message.bold())),
        }
    }

    fn format_footer(&self, out: &mut String, diagnostic: &Diagnostic, gutter_width: usize) {
        let pad = " ".repeat(gutter_width + 1);
        for note in &diagnostic.notes {
            out.push_str(&format!("{} {} {}: {}\n", pad, "=".cyan(), "note".cyan().bold(), note));
        }
        if let Some(help) = &diagnostic.help {
            out.push_str(&format!("{} {} {}: {}\n", pad, "=".cyan(), "help".cyan().bold(), help));
        }
    }

    fn collect_annotated_lines(&self, diagnostic: &Diagnostic) -> Vec<AnnotatedLine> {
        let mut lines: BTreeMap<usize, AnnotatedLine> = BTreeMap::new();

        for label in &diagnostic.labels {
            if self.source.is_empty() || label.span.start > self.source.len() {
                continue;
            }
            let (line_num, col_start) = self.line_map.offset_to_line_col(label.span.start);
            let (end_line, col_end) = self
                .line_map
                .offset_to_line_col(label.span.end.min(self.source.len()));
            let Some(text) = self.line_map.line_text(self.source, line_num) else {
                continue;
            };

            // Multi-line spans underline to the end of their first line.
            let col_end = if end_line == line_num {
                col_end
            } else {
                text.len() + 1
            };

            lines
                .entry(line_num)
                .or_insert_with(|| AnnotatedLine {
                    line_num,
                    text: text.to_string(),
                    annotations: Vec::new(),
                })
                .annotations
                .push(Annotation {
                    col_start,
                    col_end: col_end.max(col_start + 1),
                    message: label.message.clone(),
                });
        }

        lines.into_values().collect()
    }

    fn format_annotations(&self, out: &mut String, line: &AnnotatedLine, blank_gutter: &str) {
        let mut sorted: Vec<&Annotation> = line.annotations.iter().collect();
        sorted.sort_by_key(|a| a.col_start);

        for ann in sorted {
            let marks = "^".repeat(ann.col_end - ann.col_start).red().bold();
            let message = format!(" {}", ann.message.red().bold());
            out.push_str(&format!(
                "{} {} {}{}{}\n",
                blank_gutter,
                "|".blue(),
                " ".repeat(ann.col_start - 1),
                marks,
                message,
            ));
        }
    }
}
