//! Pretty-printer that renders a [`Value`] tree as indented text.
//!
//! Built on the [`Visitor`] protocol. Output for values produced by the
//! parser reads back into an equal tree.

use std::fmt::{self, Write as _};

use crate::value::{Dict, Value, Visitor};

/// Render a value with the default 4-space indentation.
#[must_use]
pub fn pretty(value: &Value) -> String {
    Printer::default().print(value)
}

/// Render a value with `indent` spaces per nesting level.
#[must_use]
pub fn pretty_with_indent(value: &Value, indent: usize) -> String {
    Printer::new(indent).print(value)
}

/// Visitor that writes each value into an owned buffer.
#[derive(Debug, Clone)]
pub struct Printer {
    indent: usize,
    depth: usize,
    out: String,
}

impl Printer {
    pub const DEFAULT_INDENT: usize = 4;

    #[must_use]
    pub const fn new(indent: usize) -> Self {
        Self {
            indent,
            depth: 0,
            out: String::new(),
        }
    }

    /// Render `value` and return the text.
    #[must_use]
    pub fn print(mut self, value: &Value) -> String {
        value.accept(&mut self);
        self.out
    }

    fn newline(&mut self) {
        self.out.push('\n');
        let width = self.depth * self.indent;
        self.out.extend(std::iter::repeat_n(' ', width));
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INDENT)
    }
}

impl Visitor for Printer {
    type Output = ();

    fn visit_undefined(&mut self) {
        self.out.push_str("undefined");
    }

    fn visit_null(&mut self) {
        self.out.push_str("null");
    }

    fn visit_bool(&mut self, value: bool) {
        self.out.push_str(if value { "true" } else { "false" });
    }

    fn visit_int(&mut self, value: i64) {
        let _ = write!(self.out, "{value}");
    }

    fn visit_float(&mut self, value: f64) {
        let _ = write!(self.out, "{value}");
    }

    fn visit_string(&mut self, value: &str) {
        self.out.push('"');
        for ch in value.chars() {
            match ch {
                '\n' => self.out.push_str("\\n"),
                '\t' => self.out.push_str("\\t"),
                '\\' => self.out.push_str("\\\\"),
                '"' => self.out.push_str("\\\""),
                _ => self.out.push(ch),
            }
        }
        self.out.push('"');
    }

    fn visit_array(&mut self, value: &[Value]) {
        if value.is_empty() {
            self.out.push_str("[]");
            return;
        }

        self.out.push('[');
        self.depth += 1;
        for (i, item) in value.iter().enumerate() {
            if i > 0 {
                self.out.push(',');
            }
            self.newline();
            item.accept(self);
        }
        self.depth -= 1;
        self.newline();
        self.out.push(']');
    }

    fn visit_dict(&mut self, value: &Dict) {
        if value.is_empty() {
            self.out.push_str("{}");
            return;
        }

        self.out.push('{');
        self.depth += 1;
        for (i, (key, item)) in value.iter().enumerate() {
            if i > 0 {
                self.out.push(',');
            }
            self.newline();
            self.out.push_str(key);
            self.out.push_str(": ");
            item.accept(self);
        }
        self.depth -= 1;
        self.newline();
        self.out.push('}');
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&pretty(self))
    }
}
