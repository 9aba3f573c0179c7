// SPDX-License-Identifier: MPL-2.0
//! Keyword observations reported by the control system.

use std::fmt;
use std::ops::Range;

/// How alarming a keyword value is, as judged by the control system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Severity {
    #[default]
    Normal,
    Warning,
    Error,
    /// The system cannot proceed until an operator intervenes.
    Critical,
}

/// A single value carried by a keyword.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// The control system reported a value it could not parse or compute.
    Invalid,
}

impl Value {
    /// Truthiness used by overlay rules: non-zero numbers, non-empty strings.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            Value::Int(i) => *i != 0,
            Value::Float(f) => *f != 0.0 && !f.is_nan(),
            Value::Str(s) => !s.is_empty(),
            Value::Invalid => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", if *b { "T" } else { "F" }),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Str(s) => write!(f, "{}", s),
            Value::Invalid => write!(f, "?"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeywordValue {
    pub value: Value,
    pub severity: Severity,
}

impl KeywordValue {
    #[must_use]
    pub fn new(value: Value, severity: Severity) -> Self {
        Self { value, severity }
    }

    /// A value with [`Severity::Normal`].
    #[must_use]
    pub fn normal(value: Value) -> Self {
        Self::new(value, Severity::Normal)
    }
}

/// A named observation: zero or more values plus a freshness flag.
#[derive(Debug, Clone, PartialEq)]
pub struct Keyword {
    pub name: String,
    pub values: Vec<KeywordValue>,
    /// False when the values are stale (e.g. the source disconnected).
    pub is_current: bool,
}

impl Keyword {
    #[must_use]
    pub fn new(name: impl Into<String>, values: Vec<KeywordValue>) -> Self {
        Self {
            name: name.into(),
            values,
            is_current: true,
        }
    }

    /// A keyword whose values are no longer current.
    #[must_use]
    pub fn stale(name: impl Into<String>, values: Vec<KeywordValue>) -> Self {
        Self {
            is_current: false,
            ..Self::new(name, values)
        }
    }

    /// Values selected by `slice` (all values when `None`), with their indices.
    pub fn selected<'a>(
        &'a self,
        slice: Option<&ValueSlice>,
    ) -> impl Iterator<Item = (usize, &'a KeywordValue)> + 'a {
        let range = slice.map_or(0..self.values.len(), |s| s.bounds(self.values.len()));
        self.values
            .iter()
            .enumerate()
            .skip(range.start)
            .take(range.end.saturating_sub(range.start))
    }
}

/// Selects a range of value indices within a keyword.
///
/// An open `end` extends to the last value; bounds past the end are clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValueSlice {
    pub start: usize,
    pub end: Option<usize>,
}

impl ValueSlice {
    /// Selects exactly one value.
    ///
    /// `usize::MAX` has no successor, so its slice is left open-ended.
    #[must_use]
    pub fn index(index: usize) -> Self {
        Self {
            start: index,
            end: index.checked_add(1),
        }
    }

    /// Selects `start..end`.
    #[must_use]
    pub fn range(start: usize, end: usize) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }

    /// Selects every value from `start` on.
    #[must_use]
    pub fn starting_at(start: usize) -> Self {
        Self { start, end: None }
    }

    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && self.end.is_none_or(|end| index < end)
    }

    /// The concrete index range for a keyword holding `len` values.
    #[must_use]
    pub fn bounds(&self, len: usize) -> Range<usize> {
        let end = self.end.map_or(len, |end| end.min(len));
        let start = self.start.min(end);
        start..end
    }
}
