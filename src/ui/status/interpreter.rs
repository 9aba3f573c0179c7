// SPDX-License-Identifier: MPL-2.0
//! Telemetry interpretation: which health image a status icon should show.

use super::health::Health;
use crate::telemetry::{Keyword, Value, ValueSlice};
use std::collections::{HashMap, HashSet};

/// Reinterprets telemetry into a [`Health`].
pub trait Interpreter {
    /// Feeds an observation (or none) and reports whether [`Interpreter::health`]
    /// changed as a result.
    fn interpret(&mut self, keyword: Option<&Keyword>, slice: Option<&ValueSlice>) -> bool;

    fn health(&self) -> Health;
}

/// Health of a single keyword observation.
///
/// Stale keywords, empty selections and invalid values read as
/// [`Health::Unknown`] unless a selected value is worse.
#[must_use]
pub fn keyword_health(keyword: &Keyword, slice: Option<&ValueSlice>) -> Health {
    if !keyword.is_current {
        return Health::Unknown;
    }
    let mut selected = keyword.selected(slice).peekable();
    if selected.peek().is_none() {
        return Health::Unknown;
    }
    selected
        .map(|(_, kv)| match kv.value {
            Value::Invalid => Health::Unknown.max(kv.severity.into()),
            _ => kv.severity.into(),
        })
        .max()
        .unwrap_or(Health::Unknown)
}

/// Tracks the latest health of each keyword and shows the worst of them.
#[derive(Debug, Clone, Default)]
pub struct SeverityInterpreter {
    watched: HashSet<String>,
    latest: HashMap<String, Health>,
    health: Health,
}

impl SeverityInterpreter {
    /// Accepts every keyword.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts only the named keywords; others are ignored.
    #[must_use]
    pub fn watching<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            watched: names.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    fn accepts(&self, keyword: &Keyword) -> bool {
        self.watched.is_empty() || self.watched.contains(&keyword.name)
    }
}

impl Interpreter for SeverityInterpreter {
    fn interpret(&mut self, keyword: Option<&Keyword>, slice: Option<&ValueSlice>) -> bool {
        let Some(keyword) = keyword.filter(|kw| self.accepts(kw)) else {
            return false;
        };

        self.latest
            .insert(keyword.name.clone(), keyword_health(keyword, slice));
        let health = self
            .latest
            .values()
            .copied()
            .max()
            .unwrap_or(Health::Unknown);

        let changed = health != self.health;
        self.health = health;
        changed
    }

    fn health(&self) -> Health {
        self.health
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry::{KeywordValue, Severity};

    fn kw(name: &str, severities: &[Severity]) -> Keyword {
        Keyword::new(
            name,
            severities
                .iter()
                .map(|s| KeywordValue::new(Value::Int(1), *s))
                .collect(),
        )
    }

    #[test]
    fn starts_unknown() {
        assert_eq!(SeverityInterpreter::new().health(), Health::Unknown);
    }

    #[test]
    fn missing_keyword_reports_no_change() {
        let mut interp = SeverityInterpreter::new();
        assert!(!interp.interpret(None, None));
        assert_eq!(interp.health(), Health::Unknown);
    }

    #[test]
    fn worst_selected_value_wins() {
        let keyword = kw("temps", &[Severity::Normal, Severity::Error, Severity::Warning]);
        assert_eq!(keyword_health(&keyword, None), Health::Error);
        assert_eq!(
            keyword_health(&keyword, Some(&ValueSlice::index(2))),
            Health::Warning
        );
        assert_eq!(
            keyword_health(&keyword, Some(&ValueSlice::index(9))),
            Health::Unknown
        );
    }

    #[test]
    fn stale_and_invalid_values_read_unknown() {
        let stale = Keyword::stale("x", vec![KeywordValue::normal(Value::Int(0))]);
        assert_eq!(keyword_health(&stale, None), Health::Unknown);

        let invalid = Keyword::new("x", vec![KeywordValue::normal(Value::Invalid)]);
        assert_eq!(keyword_health(&invalid, None), Health::Unknown);

        let invalid_error = Keyword::new(
            "x",
            vec![KeywordValue::new(Value::Invalid, Severity::Error)],
        );
        assert_eq!(keyword_health(&invalid_error, None), Health::Error);
    }

    #[test]
    fn reports_change_only_when_overall_health_moves() {
        let mut interp = SeverityInterpreter::new();
        assert!(interp.interpret(Some(&kw("a", &[Severity::Normal])), None));
        assert_eq!(interp.health(), Health::Ok);

        assert!(!interp.interpret(Some(&kw("a", &[Severity::Normal])), None));

        assert!(interp.interpret(Some(&kw("b", &[Severity::Warning])), None));
        assert_eq!(interp.health(), Health::Warning);

        // a worsening below b's level does not move the overall state
        assert!(!interp.interpret(Some(&kw("a", &[Severity::Warning])), None));

        assert!(interp.interpret(Some(&kw("b", &[Severity::Critical])), None));
        assert_eq!(interp.health(), Health::CantProceed);
    }

    #[test]
    fn watching_ignores_other_keywords() {
        let mut interp = SeverityInterpreter::watching(["axisStatus"]);
        assert!(!interp.interpret(Some(&kw("other", &[Severity::Error])), None));
        assert_eq!(interp.health(), Health::Unknown);

        assert!(interp.interpret(Some(&kw("axisStatus", &[Severity::Normal])), None));
        assert_eq!(interp.health(), Health::Ok);
    }
}
