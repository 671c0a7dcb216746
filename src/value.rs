//! Dynamically typed value tree produced by the parser.
//!
//! Arrays and dicts own their children, so cloning a [`Value`] deep-copies
//! the whole subtree. Dict entries iterate in sorted key order.

use std::collections::BTreeMap;
use std::fmt;

/// Ordered sequence of values.
pub type Array = Vec<Value>;

/// Mapping from unique keys to values, iterated in sorted key order.
pub type Dict = BTreeMap<String, Value>;

/// Tag of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Undefined,
    Null,
    Bool,
    Int,
    Float,
    String,
    Array,
    Dict,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::String => "string",
            Self::Array => "array",
            Self::Dict => "dict",
        };
        f.write_str(name)
    }
}

/// A GCL value.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// Absence of a value. The default state.
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Array(Array),
    Dict(Dict),
}

/// Read-only traversal over a [`Value`], one callback per variant.
///
/// [`Value::accept`] dispatches once on the variant and never recurses;
/// a visitor that wants to walk arrays or dicts calls `accept` on each
/// child itself.
pub trait Visitor {
    type Output;

    fn visit_undefined(&mut self) -> Self::Output;
    fn visit_null(&mut self) -> Self::Output;
    fn visit_bool(&mut self, value: bool) -> Self::Output;
    fn visit_int(&mut self, value: i64) -> Self::Output;
    fn visit_float(&mut self, value: f64) -> Self::Output;
    fn visit_string(&mut self, value: &str) -> Self::Output;
    fn visit_array(&mut self, value: &[Value]) -> Self::Output;
    fn visit_dict(&mut self, value: &Dict) -> Self::Output;
}

impl Value {
    /// Dispatch to the visitor callback matching this variant.
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Self::Undefined => visitor.visit_undefined(),
            Self::Null => visitor.visit_null(),
            Self::Bool(b) => visitor.visit_bool(*b),
            Self::Int(n) => visitor.visit_int(*n),
            Self::Float(x) => visitor.visit_float(*x),
            Self::String(s) => visitor.visit_string(s),
            Self::Array(items) => visitor.visit_array(items),
            Self::Dict(entries) => visitor.visit_dict(entries),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Undefined => ValueKind::Undefined,
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Bool,
            Self::Int(_) => ValueKind::Int,
            Self::Float(_) => ValueKind::Float,
            Self::String(_) => ValueKind::String,
            Self::Array(_) => ValueKind::Array,
            Self::Dict(_) => ValueKind::Dict,
        }
    }

    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(x) => Some(*x),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_array(&self) -> Option<&[Self]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    pub const fn as_array_mut(&mut self) -> Option<&mut Array> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_dict(&self) -> Option<&Dict> {
        match self {
            Self::Dict(entries) => Some(entries),
            _ => None,
        }
    }

    pub const fn as_dict_mut(&mut self) -> Option<&mut Dict> {
        match self {
            Self::Dict(entries) => Some(entries),
            _ => None,
        }
    }

    /// Look up a key, if this is a dict.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Self> {
        self.as_dict()?.get(key)
    }

    /// Look up an element, if this is an array.
    #[must_use]
    pub fn at(&self, index: usize) -> Option<&Self> {
        self.as_array()?.get(index)
    }

    /// Move the payload out, leaving `Undefined` behind.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Drop the payload and return to `Undefined`.
    pub fn clear(&mut self) {
        *self = Self::Undefined;
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Null
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<Array> for Value {
    fn from(value: Array) -> Self {
        Self::Array(value)
    }
}

impl From<Dict> for Value {
    fn from(value: Dict) -> Self {
        Self::Dict(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts every node in a tree by recursing through `accept`.
    struct NodeCounter;

    impl Visitor for NodeCounter {
        type Output = usize;

        fn visit_undefined(&mut self) -> usize {
            1
        }
        fn visit_null(&mut self) -> usize {
            1
        }
        fn visit_bool(&mut self, _: bool) -> usize {
            1
        }
        fn visit_int(&mut self, _: i64) -> usize {
            1
        }
        fn visit_float(&mut self, _: f64) -> usize {
            1
        }
        fn visit_string(&mut self, _: &str) -> usize {
            1
        }
        fn visit_array(&mut self, value: &[Value]) -> usize {
            1 + value.iter().map(|v| v.accept(self)).sum::<usize>()
        }
        fn visit_dict(&mut self, value: &Dict) -> usize {
            1 + value.values().map(|v| v.accept(self)).sum::<usize>()
        }
    }

    #[test]
    fn default_is_undefined() {
        let value = Value::default();
        assert!(value.is_undefined());
        assert_eq!(value.kind(), ValueKind::Undefined);
    }

    #[test]
    fn accessors_reject_other_variants() {
        let value = Value::from(7_i64);
        assert_eq!(value.as_int(), Some(7));
        assert_eq!(value.as_bool(), None);
        assert_eq!(value.as_str(), None);
        assert!(value.as_dict().is_none());
    }

    #[test]
    fn take_leaves_undefined() {
        let mut value = Value::from("moved");
        let taken = value.take();
        assert_eq!(taken.as_str(), Some("moved"));
        assert!(value.is_undefined());
    }

    #[test]
    fn clone_is_deep() {
        let mut original = Value::Array(vec![Value::from(1_i64), Value::from("a")]);
        let copy = original.clone();
        if let Some(items) = original.as_array_mut() {
            items.push(Value::Null);
        }
        assert_eq!(copy.as_array().map(<[Value]>::len), Some(2));
        assert_eq!(original.as_array().map(<[Value]>::len), Some(3));
    }

    #[test]
    fn dict_iterates_in_key_order() {
        let mut dict = Dict::new();
        dict.insert("zeta".into(), Value::from(1_i64));
        dict.insert("alpha".into(), Value::from(2_i64));
        dict.insert("mid".into(), Value::from(3_i64));
        let keys: Vec<_> = dict.keys().map(String::as_str).collect();
        assert_eq!(keys, ["alpha", "mid", "zeta"]);
    }

    #[test]
    fn visitor_recurses_only_when_asked() {
        let mut dict = Dict::new();
        dict.insert("a".into(), Value::Array(vec![Value::from(1_i64), Value::Null]));
        dict.insert("b".into(), Value::from(true));
        let value = Value::Dict(dict);
        assert_eq!(value.accept(&mut NodeCounter), 5);
    }

    #[test]
    fn get_and_at() {
        let mut dict = Dict::new();
        dict.insert("list".into(), Value::Array(vec![Value::from(10_i64)]));
        let value = Value::Dict(dict);
        let list = value.get("list").expect("list");
        assert_eq!(list.at(0).and_then(Value::as_int), Some(10));
        assert!(value.get("missing").is_none());
        assert!(list.get("list").is_none());
    }

    #[test]
    fn clear_resets() {
        let mut value = Value::from(());
        assert!(value.is_null());
        value.clear();
        assert!(value.is_undefined());
    }
}
