#![allow(dead_code)]

use gcl::{Dict, Error, Value, Visitor, parse, pretty};

pub fn parse_ok(input: &str) -> Value {
    parse(input).unwrap_or_else(|e| panic!("parse failed: {e}\n--- input ---\n{input}"))
}

pub fn parse_fail(input: &str) -> Error {
    match parse(input) {
        Ok(value) => panic!("expected an error, parsed {value:?}\n--- input ---\n{input}"),
        Err(e) => e,
    }
}

/// Build a dict value from key/value pairs.
pub fn dict<const N: usize>(entries: [(&str, Value); N]) -> Value {
    Value::Dict(
        entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect::<Dict>(),
    )
}

/// Print a value, parse it back, assert tree equality.
pub fn assert_reparse(original: &Value) {
    let printed = pretty(original);
    let parsed = parse(&printed).unwrap_or_else(|e| {
        panic!(
            "failed to re-parse printed output: {e}\n\
             --- printed ---\n{printed}"
        )
    });
    assert_eq!(
        &parsed, original,
        "tree mismatch\n--- printed ---\n{printed}"
    );
}

/// Flattens a value into the source tokens that spell it, without any
/// whitespace.
#[derive(Default)]
pub struct TokenCollector {
    pub tokens: Vec<String>,
}

impl TokenCollector {
    pub fn collect(value: &Value) -> Vec<String> {
        let mut collector = Self::default();
        value.accept(&mut collector);
        collector.tokens
    }

    fn scalar(&mut self, value: &Value) {
        self.tokens.push(pretty(value));
    }
}

impl Visitor for TokenCollector {
    type Output = ();

    fn visit_undefined(&mut self) {
        self.scalar(&Value::Undefined);
    }
    fn visit_null(&mut self) {
        self.scalar(&Value::Null);
    }
    fn visit_bool(&mut self, value: bool) {
        self.scalar(&Value::Bool(value));
    }
    fn visit_int(&mut self, value: i64) {
        self.scalar(&Value::Int(value));
    }
    fn visit_float(&mut self, value: f64) {
        self.scalar(&Value::Float(value));
    }
    fn visit_string(&mut self, value: &str) {
        self.scalar(&Value::String(value.to_string()));
    }
    fn visit_array(&mut self, value: &[Value]) {
        self.tokens.push("[".into());
        for (i, item) in value.iter().enumerate() {
            if i > 0 {
                self.tokens.push(",".into());
            }
            item.accept(self);
        }
        self.tokens.push("]".into());
    }
    fn visit_dict(&mut self, value: &Dict) {
        self.tokens.push("{".into());
        for (i, (key, item)) in value.iter().enumerate() {
            if i > 0 {
                self.tokens.push(",".into());
            }
            self.tokens.push(key.clone());
            self.tokens.push(":".into());
            item.accept(self);
        }
        self.tokens.push("}".into());
    }
}
